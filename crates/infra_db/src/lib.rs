//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for cars, owners, policies and claims using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: one repository per table group
//! speaks SQL and returns row types, and [`PostgresInsuranceAdapter`] turns
//! those rows into domain records behind the `CarPort`, `PolicyPort` and
//! `ClaimsPort` traits.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresInsuranceAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/car_insurance")).await?;
//! run_migrations(&pool).await?;
//! let store = Arc::new(PostgresInsuranceAdapter::new(pool));
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;

pub use adapters::PostgresInsuranceAdapter;
pub use error::DatabaseError;
pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
