//! In-memory fleet
//!
//! Bundles the mock car, policy and claims stores so a test can seed data,
//! build a `CarService` on top, and inspect what the service wrote.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use domain_claims::ports::mock::MockClaimsPort;
use domain_policy::ports::mock::MockPolicyPort;
use domain_policy::{ExpirationNotice, InsurancePolicy, NotificationSink};
use domain_vehicle::ports::mock::MockCarPort;
use domain_vehicle::CarService;

use crate::fixtures::FleetFixtures;

/// The three stores behind a `CarService`
#[derive(Clone)]
pub struct TestFleet {
    pub cars: Arc<MockCarPort>,
    pub policies: Arc<MockPolicyPort>,
    pub claims: Arc<MockClaimsPort>,
}

impl Default for TestFleet {
    fn default() -> Self {
        Self::empty()
    }
}

impl TestFleet {
    /// A fleet with no cars, policies or claims
    pub fn empty() -> Self {
        Self {
            cars: Arc::new(MockCarPort::new()),
            policies: Arc::new(MockPolicyPort::new()),
            claims: Arc::new(MockClaimsPort::new()),
        }
    }

    /// The reference fleet from [`FleetFixtures`], without claims
    pub async fn reference() -> Self {
        Self {
            cars: Arc::new(MockCarPort::with_fleet(FleetFixtures::owners(), FleetFixtures::cars()).await),
            policies: Arc::new(MockPolicyPort::with_policies(FleetFixtures::policies()).await),
            claims: Arc::new(MockClaimsPort::new()),
        }
    }

    /// Adds policies to the fleet's policy store
    pub async fn with_policies(self, policies: Vec<InsurancePolicy>) -> Self {
        for policy in policies {
            self.policies.insert(policy).await;
        }
        self
    }

    /// Builds a service over this fleet with default claim validation
    pub fn service(&self) -> CarService {
        CarService::new(self.cars.clone(), self.policies.clone(), self.claims.clone())
    }
}

/// Notification sink that keeps every notice it receives
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    notices: Arc<Mutex<Vec<ExpirationNotice>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices received so far, in delivery order
    pub async fn notices(&self) -> Vec<ExpirationNotice> {
        self.notices.lock().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.notices.lock().await.len()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn emit(&self, notice: &ExpirationNotice) {
        self.notices.lock().await.push(notice.clone());
    }
}
