//! Tooltip readout under a scrub cursor.

use crate::chart::mapping::map_to_viewport;
use crate::curve::builder::build_smooth_path;
use crate::curve::interpolate::{closest_sample_index, interpolate_value};
use crate::curve::measure::PathMeasure;
use crate::foundation::core::{Point, Sample, Size};
use crate::foundation::math::clamp_progress;
use crate::foundation::settings::CurveSettings;

/// What a chart shows for a scrub position.
///
/// The marker `position` follows the drawn curve by arc length, while `value`
/// follows the data by sample index.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrubReadout {
    /// Clamped progress the readout was computed for.
    pub progress: f64,
    /// Marker position on the smooth path.
    pub position: Point,
    /// Interpolated data value.
    pub value: f64,
    /// Index of the nearest sample.
    pub index: usize,
    /// Label of the nearest sample; `None` when there are no samples.
    pub label: Option<String>,
}

/// Compute the readout for `progress` with default settings.
pub fn scrub(samples: &[Sample], viewport: Size, progress: f64) -> ScrubReadout {
    scrub_with_settings(samples, viewport, progress, CurveSettings::default())
}

/// Compute the readout for `progress`.
#[tracing::instrument(level = "trace", skip(samples), fields(samples = samples.len()))]
pub fn scrub_with_settings(
    samples: &[Sample],
    viewport: Size,
    progress: f64,
    settings: CurveSettings,
) -> ScrubReadout {
    let progress = clamp_progress(progress);
    let path = build_smooth_path(&map_to_viewport(samples, viewport));
    let measure = PathMeasure::with_settings(&path, settings);
    let index = closest_sample_index(progress, samples.len());

    ScrubReadout {
        progress,
        position: measure.position_at_progress(progress),
        value: interpolate_value(samples, progress),
        index,
        label: samples.get(index).map(|s| s.label.clone()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/scrub.rs"]
mod tests;
