//! Vehicle Domain Ports
//!
//! The `CarPort` trait gives the vehicle services read access to cars and
//! their owners. Cars and owners are created outside this system, so the
//! port has no write operations.
//!
//! ```rust,ignore
//! pub struct CarService {
//!     cars: Arc<dyn CarPort>,
//!     policies: Arc<dyn PolicyPort>,
//!     claims: Arc<dyn ClaimsPort>,
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{CarId, DomainPort, PortError};

use crate::car::CarSummary;

/// Read access to cars and owners
#[async_trait]
pub trait CarPort: DomainPort {
    /// Returns true if a car with this id exists
    async fn car_exists(&self, id: CarId) -> Result<bool, PortError>;

    /// Lists all cars with their owners, ordered by car id
    async fn list_cars(&self) -> Result<Vec<CarSummary>, PortError>;
}

/// Mock implementation of CarPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use crate::car::{Car, Owner};
    use core_kernel::OwnerId;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of CarPort
    #[derive(Debug, Default)]
    pub struct MockCarPort {
        cars: Arc<RwLock<BTreeMap<CarId, Car>>>,
        owners: Arc<RwLock<BTreeMap<OwnerId, Owner>>>,
    }

    impl MockCarPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with owners and cars for testing
        pub async fn with_fleet(owners: Vec<Owner>, cars: Vec<Car>) -> Self {
            let port = Self::new();
            for owner in owners {
                port.insert_owner(owner).await;
            }
            for car in cars {
                port.insert_car(car).await;
            }
            port
        }

        pub async fn insert_owner(&self, owner: Owner) {
            self.owners.write().await.insert(owner.id, owner);
        }

        pub async fn insert_car(&self, car: Car) {
            self.cars.write().await.insert(car.id, car);
        }
    }

    impl DomainPort for MockCarPort {}

    #[async_trait]
    impl CarPort for MockCarPort {
        async fn car_exists(&self, id: CarId) -> Result<bool, PortError> {
            Ok(self.cars.read().await.contains_key(&id))
        }

        async fn list_cars(&self) -> Result<Vec<CarSummary>, PortError> {
            let cars = self.cars.read().await;
            let owners = self.owners.read().await;

            cars.values()
                .map(|car| {
                    let owner = owners
                        .get(&car.owner_id)
                        .ok_or_else(|| PortError::not_found("Owner", car.owner_id))?;
                    Ok(CarSummary::new(car.clone(), owner))
                })
                .collect()
        }
    }
}
