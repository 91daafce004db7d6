//! Policy Domain
//!
//! This crate holds the policy-side logic of the car insurance system:
//! - **Validity**: whether any of a car's policies covers a calendar date
//! - **Expiration rules**: when an ended policy counts as expired and how long
//!   a notification stays due
//! - **Expiration sweep**: the background task raising one notice per
//!   expired policy
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{validity::is_covered, InsurancePolicy};
//!
//! let policies = store.list_policies_for_car(car_id).await?;
//! let insured = is_covered(&policies, date);
//! ```

pub mod error;
pub mod events;
pub mod expiration;
pub mod policy;
pub mod ports;
pub mod sweep;
pub mod validity;

pub use error::PolicyError;
pub use events::ExpirationNotice;
pub use expiration::ExpirationRules;
pub use policy::InsurancePolicy;
pub use ports::PolicyPort;
pub use sweep::{
    CycleReport, ExpirationSweep, NotificationSink, SweepConfig, TracingNotificationSink,
    DEFAULT_SWEEP_INTERVAL,
};
pub use validity::is_covered;
