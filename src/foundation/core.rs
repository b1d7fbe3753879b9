use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{ChartPathError, ChartPathResult};

pub use kurbo::{BezPath, Point, Size, Vec2};

/// One logical data point: a value plus the label shown for it.
///
/// Sequence order is x-axis order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sample {
    /// Data value.
    pub value: f64,
    /// Display label (tooltips, axis ticks).
    #[serde(default)]
    pub label: String,
}

impl Sample {
    /// Build a labelled sample.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// Build a sample with an empty label.
    pub fn unlabeled(value: f64) -> Self {
        Self {
            value,
            label: String::new(),
        }
    }
}

/// An ordered series of samples, the JSON input shape of the CLI.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SampleSeries {
    /// Samples in x-axis order.
    pub samples: Vec<Sample>,
}

impl SampleSeries {
    /// Parse and validate a series from JSON text.
    pub fn from_json(text: &str) -> ChartPathResult<Self> {
        let series: Self = serde_json::from_str(text)?;
        series.validate()?;
        Ok(series)
    }

    /// Read, parse and validate a series from a JSON file.
    pub fn from_path(path: &Path) -> ChartPathResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read series '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Reject non-finite sample values.
    pub fn validate(&self) -> ChartPathResult<()> {
        if let Some((i, s)) = self
            .samples
            .iter()
            .enumerate()
            .find(|(_, s)| !s.value.is_finite())
        {
            return Err(ChartPathError::validation(format!(
                "sample {i} ('{}') has non-finite value {}",
                s.label, s.value
            )));
        }
        Ok(())
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<Sample>> for SampleSeries {
    fn from(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
