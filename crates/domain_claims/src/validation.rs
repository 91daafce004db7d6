//! Claim filing validation
//!
//! Two modes are offered. `Strict` rejects negative amounts and blank
//! descriptions; `Permissive` stores whatever the caller sends.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::claim::NewClaim;
use crate::error::ClaimError;

/// How strictly new claims are checked before they are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimValidation {
    /// Non-negative amount and non-blank description required
    #[default]
    Strict,
    /// No checks
    Permissive,
}

impl ClaimValidation {
    /// Checks `claim` against this mode
    ///
    /// # Errors
    ///
    /// In `Strict` mode, returns `ClaimError::NegativeAmount` or
    /// `ClaimError::EmptyDescription`
    pub fn validate(&self, claim: &NewClaim) -> Result<(), ClaimError> {
        match self {
            ClaimValidation::Permissive => Ok(()),
            ClaimValidation::Strict => {
                if claim.amount < Decimal::ZERO {
                    return Err(ClaimError::NegativeAmount(claim.amount));
                }
                if claim.description.trim().is_empty() {
                    return Err(ClaimError::EmptyDescription);
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ClaimValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimValidation::Strict => write!(f, "strict"),
            ClaimValidation::Permissive => write!(f, "permissive"),
        }
    }
}
