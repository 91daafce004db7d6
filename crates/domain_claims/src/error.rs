//! Claims domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Claim amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("Claim description must not be empty")]
    EmptyDescription,
}
