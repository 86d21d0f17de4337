//! Error types for Monte Carlo generation.

use thiserror::Error;

/// Errors that can occur while configuring or generating a Monte Carlo batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum McError {
    /// A distribution or model parameter failed eager validation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A rejection sampling loop exhausted its attempt budget.
    #[error("sampling of {quantity} exceeded {max_attempts} rejection attempts")]
    SamplingTimeout {
        quantity: &'static str,
        max_attempts: usize,
    },
}

/// Convenience alias for results with an [`McError`].
pub type McResult<T> = Result<T, McError>;
