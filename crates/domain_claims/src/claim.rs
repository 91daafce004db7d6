//! Claim records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CarId, ClaimId};

/// A claim filed against a car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier, assigned by the store
    pub id: ClaimId,
    /// The car the claim was filed for
    pub car_id: CarId,
    /// Date of the incident
    pub claim_date: NaiveDate,
    /// Free-text description
    pub description: String,
    /// Claimed amount
    pub amount: Decimal,
}

/// A claim that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClaim {
    pub car_id: CarId,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl NewClaim {
    pub fn new(
        car_id: CarId,
        claim_date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            car_id,
            claim_date,
            description: description.into(),
            amount,
        }
    }

    /// Turns this into a stored claim under `id`
    pub fn into_claim(self, id: ClaimId) -> Claim {
        Claim {
            id,
            car_id: self.car_id,
            claim_date: self.claim_date,
            description: self.description,
            amount: self.amount,
        }
    }
}
