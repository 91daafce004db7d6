//! Policy domain errors

use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Another expiration sweep already holds the lease on this store
    #[error("An expiration sweep is already running against this store")]
    SweepAlreadyRunning,

    /// Sweep or expiration settings are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl PolicyError {
    /// Creates an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        PolicyError::InvalidConfiguration(message.into())
    }
}
