//! Error types for the gradient model

use thiserror::Error;

/// Errors produced when constructing or decoding gradient values
#[derive(Error, Debug)]
pub enum GradientError {
    /// Stop position outside the [0, 1] range
    #[error("stop position {value} is outside [0, 1]")]
    InvalidPosition { value: f32 },

    /// Structurally invalid serialized gradient
    #[error("malformed gradient payload: {reason}")]
    MalformedPayload { reason: String },
}

impl GradientError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        GradientError::MalformedPayload {
            reason: reason.into(),
        }
    }
}

/// Result type for gradient model operations
pub type Result<T> = std::result::Result<T, GradientError>;
