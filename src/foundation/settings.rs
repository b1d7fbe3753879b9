use crate::foundation::error::{ChartPathError, ChartPathResult};

/// Arc-length accuracy used when callers do not pass their own settings.
///
/// Expressed in the same units as the path coordinates (pixels/points).
pub const DEFAULT_ACCURACY: f64 = 1e-4;

/// Tunables for path measurement.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    /// Maximum arc-length error tolerated when measuring curve segments.
    pub accuracy: f64,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_ACCURACY,
        }
    }
}

impl CurveSettings {
    /// Settings with a specific measurement accuracy.
    pub fn with_accuracy(accuracy: f64) -> ChartPathResult<Self> {
        let s = Self { accuracy };
        s.validate()?;
        Ok(s)
    }

    /// Reject a non-finite or non-positive accuracy.
    pub fn validate(&self) -> ChartPathResult<()> {
        if !self.accuracy.is_finite() || self.accuracy <= 0.0 {
            return Err(ChartPathError::validation(format!(
                "accuracy must be finite and > 0, got {}",
                self.accuracy
            )));
        }
        Ok(())
    }
}
