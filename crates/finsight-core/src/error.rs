//! Centralized error types for Finsight.

use thiserror::Error;

/// Main error type for Finsight domain operations.
#[derive(Error, Debug)]
pub enum FinsightError {
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Result type for Finsight domain operations.
pub type FinsightResult<T> = Result<T, FinsightError>;

impl FinsightError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
