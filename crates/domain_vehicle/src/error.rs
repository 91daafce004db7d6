//! Vehicle domain errors

use thiserror::Error;

use core_kernel::{CarId, PortError};
use domain_claims::ClaimError;

/// Errors raised by the vehicle services
#[derive(Debug, Error)]
pub enum VehicleError {
    /// The referenced car does not exist
    #[error("Car {0} not found")]
    CarNotFound(CarId),

    /// A claim was rejected by the validation policy
    #[error("Invalid claim: {0}")]
    InvalidClaim(#[from] ClaimError),

    /// The underlying store failed
    #[error("Store error: {0}")]
    Store(#[from] PortError),
}

impl VehicleError {
    /// Returns true if this error means the car does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, VehicleError::CarNotFound(_))
    }
}
