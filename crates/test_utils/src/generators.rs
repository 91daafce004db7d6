//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::{CarId, ClaimId, CoverageWindow, PolicyId};
use domain_claims::Claim;
use domain_policy::InsurancePolicy;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for calendar dates between 2000 and roughly 2054
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Strategy for coverage windows, bounded or open-ended
pub fn window_strategy() -> impl Strategy<Value = CoverageWindow> {
    (date_strategy(), proptest::option::of(0i64..3_650)).prop_map(|(start, length)| match length {
        Some(days) => CoverageWindow::bounded(start, start + Duration::days(days)).unwrap(),
        None => CoverageWindow::open_ended(start),
    })
}

/// Strategy for claim amounts between -10,000.00 and 1,000,000.00
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for policies on `car_id` with ids drawn from 1..10_000
pub fn policy_strategy(car_id: CarId) -> impl Strategy<Value = InsurancePolicy> {
    (1i64..10_000, window_strategy(), "[A-Z][a-z]{2,10}").prop_map(move |(id, window, provider)| {
        InsurancePolicy {
            id: PolicyId::new(id),
            car_id,
            start_date: window.start,
            end_date: window.end,
            provider,
        }
    })
}

/// Strategy for stored claims on `car_id` with ids drawn from 1..10_000
pub fn claim_strategy(car_id: CarId) -> impl Strategy<Value = Claim> {
    (1i64..10_000, date_strategy(), "[a-z ]{1,40}", amount_strategy()).prop_map(
        move |(id, claim_date, description, amount)| Claim {
            id: ClaimId::new(id),
            car_id,
            claim_date,
            description,
            amount,
        },
    )
}
