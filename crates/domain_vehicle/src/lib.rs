//! Vehicle Domain
//!
//! Cars, their owners, and the car-level operations built on top of the
//! policy and claims domains:
//!
//! - **Insurance validity**: is a car insured on a given date
//! - **Claim filing**: validated, durable append of a claim
//! - **History**: a car's policies and claims as one time-ordered sequence
//!
//! All three fail with [`VehicleError::CarNotFound`] for an unknown car.

pub mod car;
pub mod error;
pub mod history;
pub mod ports;
pub mod services;

pub use car::{Car, CarSummary, Owner};
pub use error::VehicleError;
pub use history::{aggregate_history, sort_history, ClaimEvent, HistoryEvent, HistoryEventKind, PolicyEvent};
pub use ports::CarPort;
pub use services::CarService;
