//! Policy Domain Ports
//!
//! The `PolicyPort` trait is what the validity evaluator and the expiration
//! sweep need from the policy store. `infra_db` provides the PostgreSQL
//! adapter; the `mock` module provides an in-memory one for tests.

use async_trait::async_trait;

use core_kernel::{CarId, DomainPort, PortError};

use crate::policy::InsurancePolicy;

/// Read access to stored insurance policies
#[async_trait]
pub trait PolicyPort: DomainPort {
    /// Lists every policy held by `car_id`
    ///
    /// Does not check that the car exists; an unknown car yields an empty list.
    async fn list_policies_for_car(&self, car_id: CarId) -> Result<Vec<InsurancePolicy>, PortError>;

    /// Lists every policy in the store
    async fn list_all_policies(&self) -> Result<Vec<InsurancePolicy>, PortError>;

    /// Identifies the backing store
    ///
    /// Two handles over the same data must return the same key. The
    /// expiration sweep uses it to allow one sweep per store.
    fn store_key(&self) -> String;
}

/// Mock implementation of PolicyPort for testing
///
/// Stores policies in memory and can be told to fail a number of upcoming
/// calls to exercise error paths.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of PolicyPort
    #[derive(Debug, Default)]
    pub struct MockPolicyPort {
        policies: Arc<RwLock<Vec<InsurancePolicy>>>,
        failures_remaining: AtomicUsize,
        calls: AtomicUsize,
    }

    impl MockPolicyPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with policies for testing
        pub async fn with_policies(policies: Vec<InsurancePolicy>) -> Self {
            let port = Self::new();
            port.policies.write().await.extend(policies);
            port
        }

        /// Adds a policy
        pub async fn insert(&self, policy: InsurancePolicy) {
            self.policies.write().await.push(policy);
        }

        /// Makes the next `count` calls fail with a connection error
        pub fn fail_next(&self, count: usize) {
            self.failures_remaining.store(count, Ordering::SeqCst);
        }

        /// Number of port calls made so far
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn check_failure(&self) -> Result<(), PortError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let injected = self
                .failures_remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if injected {
                return Err(PortError::connection("injected failure"));
            }
            Ok(())
        }
    }

    impl DomainPort for MockPolicyPort {}

    #[async_trait]
    impl PolicyPort for MockPolicyPort {
        async fn list_policies_for_car(&self, car_id: CarId) -> Result<Vec<InsurancePolicy>, PortError> {
            self.check_failure()?;
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .filter(|p| p.car_id == car_id)
                .cloned()
                .collect())
        }

        async fn list_all_policies(&self) -> Result<Vec<InsurancePolicy>, PortError> {
            self.check_failure()?;
            Ok(self.policies.read().await.clone())
        }

        fn store_key(&self) -> String {
            format!("memory:{:p}", Arc::as_ptr(&self.policies))
        }
    }
}
