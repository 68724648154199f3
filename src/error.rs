//! Engine error types.

use thiserror::Error;

/// Errors surfaced to the caller of the analysis engine.
///
/// Everything else (a single indicator lacking history inside an otherwise
/// valid series) is downgraded locally and never reaches this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Malformed series at index {index}: {reason}")]
    MalformedSeries { index: usize, reason: String },

    #[error("Insufficient data: required {required} points, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Invalid regime input: {0} is outside [0, 100]")]
    InvalidRegimeInput(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedSeries {
            index,
            reason: reason.into(),
        }
    }

    /// Number of missing points for an `InsufficientData` error.
    pub fn shortfall(&self) -> Option<usize> {
        match self {
            Self::InsufficientData { required, got } => Some(required.saturating_sub(*got)),
            _ => None,
        }
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
