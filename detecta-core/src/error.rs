//! Structured error types for the detecta workspace.

use thiserror::Error;

/// Unified error type for all detecta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectaError {
    /// Invalid input (a value breaks a structural contract: bad counts,
    /// mismatched sequence lengths, out-of-range parameters)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A query was made against a collection that holds nothing yet
    #[error("empty state: {0}")]
    EmptyState(String),
}

impl DetectaError {
    /// Whether this is an [`DetectaError::InvalidInput`] error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Whether this is an [`DetectaError::EmptyState`] error.
    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::EmptyState(_))
    }
}

/// Convenience alias used throughout the detecta workspace.
pub type Result<T> = std::result::Result<T, DetectaError>;
