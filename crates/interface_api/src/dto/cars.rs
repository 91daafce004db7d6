//! Car DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_claims::Claim;
use domain_vehicle::{CarSummary, HistoryEvent};

#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: i64,
    pub vin: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: i32,
    pub owner_id: i64,
    pub owner_name: String,
    pub owner_email: Option<String>,
}

impl From<CarSummary> for CarResponse {
    fn from(summary: CarSummary) -> Self {
        Self {
            id: summary.car.id.value(),
            vin: summary.car.vin,
            make: summary.car.make,
            model: summary.car.model,
            year: summary.car.year_of_manufacture,
            owner_id: summary.car.owner_id.value(),
            owner_name: summary.owner_name,
            owner_email: summary.owner_email,
        }
    }
}

/// Query string of the validity check
#[derive(Debug, Deserialize)]
pub struct ValidityQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InsuranceValidityResponse {
    pub car_id: i64,
    /// The evaluated date, normalized to `YYYY-MM-DD`
    pub date: String,
    pub valid: bool,
}

/// Body of a claim filing
///
/// The date is kept as text so a malformed value gets the same 400 answer as
/// on the validity check.
#[derive(Debug, Deserialize)]
pub struct FileClaimRequest {
    pub claim_date: String,
    pub description: String,
    pub amount: Decimal,
}

/// A stored claim
///
/// Amounts go out as JSON numbers.
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: i64,
    pub car_id: i64,
    pub claim_date: NaiveDate,
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.value(),
            car_id: claim.car_id.value(),
            claim_date: claim.claim_date,
            description: claim.description,
            amount: claim.amount,
        }
    }
}

/// One entry of a car's history
#[derive(Debug, Serialize)]
#[serde(tag = "event_type")]
pub enum HistoryEventResponse {
    Policy {
        policy_id: i64,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        provider: String,
    },
    Claim {
        claim_id: i64,
        claim_date: NaiveDate,
        description: String,
        #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
        amount: Decimal,
    },
}

impl From<HistoryEvent> for HistoryEventResponse {
    fn from(event: HistoryEvent) -> Self {
        match event {
            HistoryEvent::Policy(policy) => HistoryEventResponse::Policy {
                policy_id: policy.policy_id.value(),
                start_date: policy.start_date,
                end_date: policy.end_date,
                provider: policy.provider,
            },
            HistoryEvent::Claim(claim) => HistoryEventResponse::Claim {
                claim_id: claim.claim_id.value(),
                claim_date: claim.claim_date,
                description: claim.description,
                amount: claim.amount,
            },
        }
    }
}
