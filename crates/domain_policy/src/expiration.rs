//! Expiration detection rules
//!
//! A policy ending on date `E` is considered expired at midnight after a
//! configurable lag (one day by default, i.e. the first instant of `E + 1`).
//! A notification may be raised only while the sweep time is inside the
//! detection window that opens at that moment.

use chrono::{DateTime, Duration, Utc};

use core_kernel::start_of_day;

use crate::error::PolicyError;
use crate::policy::InsurancePolicy;

/// Timing rules for expiration notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationRules {
    /// Offset from midnight of the end date to the expiration moment
    notification_lag: Duration,
    /// How long after the expiration moment a notification is still raised
    detection_window: Duration,
}

impl Default for ExpirationRules {
    fn default() -> Self {
        Self {
            notification_lag: Duration::days(1),
            detection_window: Duration::hours(1),
        }
    }
}

impl ExpirationRules {
    /// Creates rules with a custom lag and detection window
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidConfiguration` if either duration is negative
    pub fn new(notification_lag: Duration, detection_window: Duration) -> Result<Self, PolicyError> {
        if notification_lag < Duration::zero() {
            return Err(PolicyError::invalid_configuration(
                "notification lag must not be negative",
            ));
        }
        if detection_window < Duration::zero() {
            return Err(PolicyError::invalid_configuration(
                "detection window must not be negative",
            ));
        }
        Ok(Self {
            notification_lag,
            detection_window,
        })
    }

    pub fn notification_lag(&self) -> Duration {
        self.notification_lag
    }

    pub fn detection_window(&self) -> Duration {
        self.detection_window
    }

    /// The instant at which the policy counts as expired
    ///
    /// None for open-ended policies, and for end dates so far out that the
    /// moment is not representable.
    pub fn expiration_moment(&self, policy: &InsurancePolicy) -> Option<DateTime<Utc>> {
        let end = policy.end_date?;
        start_of_day(end).checked_add_signed(self.notification_lag)
    }

    /// Returns true if a notification is due for `policy` at `now`
    ///
    /// Holds iff `moment <= now <= moment + detection_window`. Once the
    /// window has closed the policy is never due again.
    pub fn should_notify(&self, policy: &InsurancePolicy, now: DateTime<Utc>) -> bool {
        let Some(moment) = self.expiration_moment(policy) else {
            return false;
        };
        let Some(deadline) = moment.checked_add_signed(self.detection_window) else {
            return false;
        };

        moment <= now && now <= deadline
    }
}
