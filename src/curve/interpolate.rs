//! Logical value interpolation across sample index.
//!
//! These work on the data, not on the drawn curve: a tooltip must show the
//! value between two samples, never the smoothed curve's y-coordinate.

use crate::foundation::core::Sample;
use crate::foundation::math::{clamp_progress, lerp, snap_to_integer};

/// Linearly interpolate the sample value at `progress` across sample index.
///
/// Empty input gives `0.0`; a single sample gives its value for any progress.
/// Progress landing on a knot (`i / (n - 1)`) returns `samples[i].value` exactly.
pub fn interpolate_value(samples: &[Sample], progress: f64) -> f64 {
    interpolate_at(samples.len(), progress, |i| samples[i].value)
}

/// [`interpolate_value`] over bare values.
pub fn interpolate_values(values: &[f64], progress: f64) -> f64 {
    interpolate_at(values.len(), progress, |i| values[i])
}

fn interpolate_at(n: usize, progress: f64, value: impl Fn(usize) -> f64) -> f64 {
    match n {
        0 => 0.0,
        1 => value(0),
        _ => {
            let exact = snap_to_integer(clamp_progress(progress) * (n - 1) as f64);
            let lower = (exact.floor() as usize).min(n - 2);
            let fraction = exact - lower as f64;
            if fraction == 0.0 {
                value(lower)
            } else if fraction == 1.0 {
                value(lower + 1)
            } else {
                lerp(value(lower), value(lower + 1), fraction)
            }
        }
    }
}

/// Index of the sample nearest to `progress`.
///
/// Labels are picked with this rather than interpolated.
pub fn closest_sample_index(progress: f64, sample_count: usize) -> usize {
    if sample_count <= 1 {
        return 0;
    }
    let last = sample_count - 1;
    let idx = (clamp_progress(progress) * last as f64).round() as usize;
    idx.min(last)
}

/// Label of the sample nearest to `progress`, if there are any samples.
pub fn closest_label(samples: &[Sample], progress: f64) -> Option<&str> {
    samples
        .get(closest_sample_index(progress, samples.len()))
        .map(|s| s.label.as_str())
}

#[cfg(test)]
#[path = "../../tests/unit/curve/interpolate.rs"]
mod tests;
