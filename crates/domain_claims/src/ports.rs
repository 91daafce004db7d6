//! Claims Domain Ports
//!
//! The `ClaimsPort` trait covers reading a car's claims and appending new
//! ones. Appending is durable: it returns only once the store has committed
//! the record.

use async_trait::async_trait;

use core_kernel::{CarId, DomainPort, PortError};

use crate::claim::{Claim, NewClaim};

/// Access to stored claims
#[async_trait]
pub trait ClaimsPort: DomainPort {
    /// Lists every claim filed for `car_id`
    async fn list_claims_for_car(&self, car_id: CarId) -> Result<Vec<Claim>, PortError>;

    /// Stores a new claim and returns it with its assigned identifier
    async fn append_claim(&self, claim: NewClaim) -> Result<Claim, PortError>;
}

/// Mock implementation of ClaimsPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::ClaimId;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of ClaimsPort
    ///
    /// Identifiers are assigned sequentially from 1.
    #[derive(Debug, Default)]
    pub struct MockClaimsPort {
        claims: Arc<RwLock<Vec<Claim>>>,
    }

    impl MockClaimsPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with claims for testing
        pub async fn with_claims(claims: Vec<Claim>) -> Self {
            let port = Self::new();
            port.claims.write().await.extend(claims);
            port
        }

        /// Total number of stored claims
        pub async fn len(&self) -> usize {
            self.claims.read().await.len()
        }

        /// Returns true if no claims are stored
        pub async fn is_empty(&self) -> bool {
            self.claims.read().await.is_empty()
        }
    }

    impl DomainPort for MockClaimsPort {}

    #[async_trait]
    impl ClaimsPort for MockClaimsPort {
        async fn list_claims_for_car(&self, car_id: CarId) -> Result<Vec<Claim>, PortError> {
            Ok(self
                .claims
                .read()
                .await
                .iter()
                .filter(|c| c.car_id == car_id)
                .cloned()
                .collect())
        }

        async fn append_claim(&self, claim: NewClaim) -> Result<Claim, PortError> {
            let mut claims = self.claims.write().await;
            let next_id = claims.iter().map(|c| c.id.value()).max().unwrap_or(0) + 1;
            let stored = claim.into_claim(ClaimId::new(next_id));
            claims.push(stored.clone());
            Ok(stored)
        }
    }
}
