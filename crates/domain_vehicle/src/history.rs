//! Car history aggregation
//!
//! Policies and claims are merged into a single time-ordered list of
//! [`HistoryEvent`]s. Policies sort by start date and claims by claim date.
//! Events on the same date are ordered by kind (policies first) and then by
//! record id, so the result is fully deterministic.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, PolicyId};
use domain_claims::Claim;
use domain_policy::InsurancePolicy;

/// Discriminant of a [`HistoryEvent`]
///
/// The declaration order is the tie-break order for events on the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HistoryEventKind {
    Policy,
    Claim,
}

/// A policy as it appears in a car's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEvent {
    pub policy_id: PolicyId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub provider: String,
}

/// A claim as it appears in a car's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEvent {
    pub claim_id: ClaimId,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

/// One entry of a car's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEvent {
    Policy(PolicyEvent),
    Claim(ClaimEvent),
}

impl HistoryEvent {
    pub fn kind(&self) -> HistoryEventKind {
        match self {
            HistoryEvent::Policy(_) => HistoryEventKind::Policy,
            HistoryEvent::Claim(_) => HistoryEventKind::Claim,
        }
    }

    /// The date this event is ordered by
    pub fn sort_date(&self) -> NaiveDate {
        match self {
            HistoryEvent::Policy(event) => event.start_date,
            HistoryEvent::Claim(event) => event.claim_date,
        }
    }

    /// Identifier of the underlying record
    pub fn record_id(&self) -> i64 {
        match self {
            HistoryEvent::Policy(event) => event.policy_id.value(),
            HistoryEvent::Claim(event) => event.claim_id.value(),
        }
    }

    fn sort_key(&self) -> (NaiveDate, HistoryEventKind, i64) {
        (self.sort_date(), self.kind(), self.record_id())
    }
}

impl From<InsurancePolicy> for HistoryEvent {
    fn from(policy: InsurancePolicy) -> Self {
        HistoryEvent::Policy(PolicyEvent {
            policy_id: policy.id,
            start_date: policy.start_date,
            end_date: policy.end_date,
            provider: policy.provider,
        })
    }
}

impl From<Claim> for HistoryEvent {
    fn from(claim: Claim) -> Self {
        HistoryEvent::Claim(ClaimEvent {
            claim_id: claim.id,
            claim_date: claim.claim_date,
            description: claim.description,
            amount: claim.amount,
        })
    }
}

/// Merges policies and claims into one ascending sequence
pub fn aggregate_history(policies: Vec<InsurancePolicy>, claims: Vec<Claim>) -> Vec<HistoryEvent> {
    let mut events: Vec<HistoryEvent> = policies
        .into_iter()
        .map(HistoryEvent::from)
        .chain(claims.into_iter().map(HistoryEvent::from))
        .collect();

    sort_history(&mut events);
    events
}

/// Sorts events by date, then kind, then record id
pub fn sort_history(events: &mut [HistoryEvent]) {
    events.sort_by_key(HistoryEvent::sort_key);
}
