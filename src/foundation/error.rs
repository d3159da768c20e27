/// Convenience result type used across curvecast.
pub type CurvecastResult<T> = Result<T, CurvecastError>;

/// Top-level error taxonomy used by the buffer, document and render APIs.
///
/// The polynomial and compositing core is total and never produces these.
#[derive(thiserror::Error, Debug)]
pub enum CurvecastError {
    /// Malformed scene buffers, scene documents or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while rendering a frame (thread pools, sinks).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem errors while loading documents.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CurvecastError {
    /// Build a [`CurvecastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CurvecastError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`CurvecastError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`CurvecastError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
