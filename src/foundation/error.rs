/// Convenience result type used across chartpath.
pub type ChartPathResult<T> = Result<T, ChartPathError>;

/// Errors raised at the fallible edges of the crate.
///
/// Geometry and interpolation never fail; only settings validation, series
/// parsing and the reorder state machine report errors.
#[derive(thiserror::Error, Debug)]
pub enum ChartPathError {
    /// Invalid user-provided data or settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// An event that the reorder state machine cannot accept in its current state.
    #[error("reorder error: {0}")]
    Reorder(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartPathError {
    /// Build a [`ChartPathError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChartPathError::Reorder`] value.
    pub fn reorder(msg: impl Into<String>) -> Self {
        Self::Reorder(msg.into())
    }

    /// Build a [`ChartPathError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ChartPathError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
