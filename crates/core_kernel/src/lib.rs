//! Core Kernel - Foundational types for the car insurance system
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Strongly-typed record identifiers
//! - Calendar coverage windows and boundary date parsing
//! - Port error and health-check types for the adapter layer

pub mod identifiers;
pub mod ports;
pub mod temporal;

pub use identifiers::{CarId, ClaimId, OwnerId, PolicyId};
pub use ports::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
pub use temporal::{parse_iso_date, start_of_day, CoverageWindow, TemporalError, ISO_DATE_FORMAT};
