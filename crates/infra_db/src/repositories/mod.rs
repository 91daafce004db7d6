//! Repository implementations
//!
//! Each repository owns the SQL for one table group and returns plain row
//! types. Queries are checked at runtime with `sqlx::query_as`, so the crate
//! builds without a live database.

pub mod cars;
pub mod claims;
pub mod policy;

pub use cars::CarRepository;
pub use claims::ClaimsRepository;
pub use policy::PolicyRepository;
