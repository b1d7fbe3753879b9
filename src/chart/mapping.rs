//! Sample to viewport mapping.

use crate::foundation::core::{Point, Sample, Size};

/// Value extent of a series, used to normalize values into `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValueRange {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl ValueRange {
    /// Extent of `samples`, or `None` when there are none.
    pub fn of(samples: &[Sample]) -> Option<Self> {
        let mut it = samples.iter().map(|s| s.value);
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    /// Position of `value` within the range; a flat range maps everything to `0.5`.
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            0.5
        } else {
            (value - self.min) / span
        }
    }
}

/// Map samples to screen points inside `viewport`.
///
/// x spreads the samples evenly from `0` to `width` by index (a lone sample sits
/// at `x = 0`); y is inverted so larger values are drawn higher.
pub fn map_to_viewport(samples: &[Sample], viewport: Size) -> Vec<Point> {
    let Some(range) = ValueRange::of(samples) else {
        return Vec::new();
    };
    let step = if samples.len() > 1 {
        viewport.width / (samples.len() - 1) as f64
    } else {
        0.0
    };
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Point::new(
                i as f64 * step,
                viewport.height * (1.0 - range.normalize(s.value)),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/chart/mapping.rs"]
mod tests;
