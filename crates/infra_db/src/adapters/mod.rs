//! Domain Adapters
//!
//! Adapter implementations for the domain ports, connecting them to the
//! PostgreSQL repositories.
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresInsuranceAdapter;
//!
//! let store = Arc::new(PostgresInsuranceAdapter::new(pool));
//! let service = CarService::new(store.clone(), store.clone(), store);
//! ```

pub mod store;

pub use store::PostgresInsuranceAdapter;
