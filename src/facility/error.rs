//! Error types for facility records
//!
//! Only constructor input and configuration seeding raise errors. Lookups,
//! registrations, assignments and discharges report failure with `false`.

use thiserror::Error;

/// Errors raised while building facility records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A constructor received a malformed identity, name or capacity
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A configured seed record or action was rejected by the registry
    #[error("Seed rejected: {0}")]
    SeedRejected(String),
}

impl RegistryError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a seed rejection error
    pub fn seed_rejected(msg: impl Into<String>) -> Self {
        Self::SeedRejected(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            RegistryError::InvalidArgument(_) => "Invalid Argument",
            RegistryError::SeedRejected(_) => "Seed",
        }
    }
}

/// Result type for facility record construction
pub type RegistryResult<T> = Result<T, RegistryError>;
