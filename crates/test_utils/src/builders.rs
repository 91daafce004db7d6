//! Test Data Builders
//!
//! Builder patterns for constructing test records with sensible defaults, so
//! a test only spells out the fields it cares about.

use chrono::NaiveDate;
use core_kernel::{CarId, ClaimId, PolicyId};
use domain_claims::{Claim, NewClaim};
use domain_policy::InsurancePolicy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::DateFixtures;

/// Builder for insurance policies
///
/// Defaults to the standard 2024 calendar-year policy on car 1.
pub struct PolicyBuilder {
    policy: InsurancePolicy,
}

impl PolicyBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            policy: InsurancePolicy {
                id: PolicyId::new(id),
                car_id: CarId::new(1),
                start_date: DateFixtures::policy_start(),
                end_date: Some(DateFixtures::policy_end()),
                provider: "Allianz".to_string(),
            },
        }
    }

    pub fn car(mut self, car_id: i64) -> Self {
        self.policy.car_id = CarId::new(car_id);
        self
    }

    pub fn starting(mut self, start: NaiveDate) -> Self {
        self.policy.start_date = start;
        self
    }

    pub fn ending(mut self, end: NaiveDate) -> Self {
        self.policy.end_date = Some(end);
        self
    }

    /// Removes the end date
    pub fn open_ended(mut self) -> Self {
        self.policy.end_date = None;
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.policy.provider = provider.into();
        self
    }

    pub fn build(self) -> InsurancePolicy {
        self.policy
    }
}

/// Builder for claims, stored or not yet stored
pub struct ClaimBuilder {
    car_id: CarId,
    claim_date: NaiveDate,
    description: String,
    amount: Decimal,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            car_id: CarId::new(1),
            claim_date: DateFixtures::claim_date(),
            description: "Minor collision".to_string(),
            amount: dec!(500.00),
        }
    }

    pub fn car(mut self, car_id: i64) -> Self {
        self.car_id = CarId::new(car_id);
        self
    }

    pub fn on(mut self, claim_date: NaiveDate) -> Self {
        self.claim_date = claim_date;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Builds an unsaved claim
    pub fn build_new(self) -> NewClaim {
        NewClaim::new(self.car_id, self.claim_date, self.description, self.amount)
    }

    /// Builds a stored claim with the given id
    pub fn build(self, id: i64) -> Claim {
        self.build_new().into_claim(ClaimId::new(id))
    }
}
