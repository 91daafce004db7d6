//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! car insurance test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built dates, owners, cars and policies
//! - `builders`: Builder patterns for test data construction
//! - `fleet`: In-memory stores wired into a ready `CarService`
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod fleet;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use fleet::*;
pub use assertions::*;
pub use generators::*;
