//! Domain events for insurance policies
//!
//! Events are derived from policy records at observation time; they are
//! handed to a notification sink and never persisted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CarId, PolicyId};

use crate::expiration::ExpirationRules;
use crate::policy::InsurancePolicy;

/// Raised once when the sweep observes a policy inside its detection window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationNotice {
    pub policy_id: PolicyId,
    pub car_id: CarId,
    pub provider: String,
    /// Last covered date of the policy
    pub end_date: NaiveDate,
    /// Instant the policy counted as expired
    pub expired_at: DateTime<Utc>,
    /// Sweep time at which the expiration was observed
    pub detected_at: DateTime<Utc>,
}

impl ExpirationNotice {
    /// Builds a notice if `policy` is due for notification at `now`
    pub fn detect(
        policy: &InsurancePolicy,
        rules: &ExpirationRules,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        if !rules.should_notify(policy, now) {
            return None;
        }

        Some(Self {
            policy_id: policy.id,
            car_id: policy.car_id,
            provider: policy.provider.clone(),
            end_date: policy.end_date?,
            expired_at: rules.expiration_moment(policy)?,
            detected_at: now,
        })
    }

    /// Human-readable summary line
    pub fn message(&self) -> String {
        format!(
            "Policy {} for Car {} expired on {}",
            self.policy_id, self.car_id, self.end_date
        )
    }
}
