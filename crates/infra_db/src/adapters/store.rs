//! PostgreSQL Insurance Adapter
//!
//! A single adapter backs the car, policy and claims ports. The three share
//! one connection pool, and a single value lets the HTTP layer and the
//! expiration sweep point at the same store.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, CarId, ClaimId, DomainPort, HealthCheckResult, HealthCheckable, OwnerId,
    PolicyId, PortError,
};
use domain_claims::{Claim, ClaimsPort, NewClaim};
use domain_policy::{InsurancePolicy, PolicyPort};
use domain_vehicle::{Car, CarPort, CarSummary};

use crate::error::DatabaseError;
use crate::repositories::cars::CarWithOwnerRow;
use crate::repositories::claims::{ClaimRow, NewClaimRow};
use crate::repositories::policy::PolicyRow;
use crate::repositories::{CarRepository, ClaimsRepository, PolicyRepository};

const ADAPTER_ID: &str = "postgres-insurance-adapter";

/// PostgreSQL-backed implementation of `CarPort`, `PolicyPort` and `ClaimsPort`
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - constraint violations -> `PortError::Conflict`
/// - out-of-range or malformed values -> `PortError::InvalidData`
/// - connection failures -> `PortError::Connection`
/// - anything else -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PostgresInsuranceAdapter {
    cars: CarRepository,
    policies: PolicyRepository,
    claims: ClaimsRepository,
    pool: PgPool,
}

impl PostgresInsuranceAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            policies: PolicyRepository::new(pool.clone()),
            claims: ClaimsRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl DomainPort for PostgresInsuranceAdapter {}

#[async_trait]
impl HealthCheckable for PostgresInsuranceAdapter {
    /// Runs `SELECT 1` against the pool
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("Database error: {}", e)),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl CarPort for PostgresInsuranceAdapter {
    async fn car_exists(&self, id: CarId) -> Result<bool, PortError> {
        self.cars.exists(id.value()).await.map_err(db_to_port_error)
    }

    #[instrument(skip(self))]
    async fn list_cars(&self) -> Result<Vec<CarSummary>, PortError> {
        let rows = self.cars.list_with_owners().await.map_err(db_to_port_error)?;
        Ok(rows.into_iter().map(row_to_car_summary).collect())
    }
}

#[async_trait]
impl PolicyPort for PostgresInsuranceAdapter {
    #[instrument(skip(self), fields(car_id = %car_id))]
    async fn list_policies_for_car(&self, car_id: CarId) -> Result<Vec<InsurancePolicy>, PortError> {
        let rows = self
            .policies
            .find_by_car(car_id.value())
            .await
            .map_err(db_to_port_error)?;
        Ok(rows.into_iter().map(row_to_policy).collect())
    }

    async fn list_all_policies(&self) -> Result<Vec<InsurancePolicy>, PortError> {
        let rows = self.policies.find_all().await.map_err(db_to_port_error)?;
        debug!(count = rows.len(), "Loaded all policies");
        Ok(rows.into_iter().map(row_to_policy).collect())
    }

    /// Server and database the pool connects to, so clones and separately
    /// built adapters over one database share a key
    fn store_key(&self) -> String {
        store_key(&self.pool.connect_options())
    }
}

#[async_trait]
impl ClaimsPort for PostgresInsuranceAdapter {
    #[instrument(skip(self), fields(car_id = %car_id))]
    async fn list_claims_for_car(&self, car_id: CarId) -> Result<Vec<Claim>, PortError> {
        let rows = self
            .claims
            .find_by_car(car_id.value())
            .await
            .map_err(db_to_port_error)?;
        Ok(rows.into_iter().map(row_to_claim).collect())
    }

    #[instrument(skip(self, claim), fields(car_id = %claim.car_id))]
    async fn append_claim(&self, claim: NewClaim) -> Result<Claim, PortError> {
        let row = self
            .claims
            .insert(new_claim_to_row(claim))
            .await
            .map_err(db_to_port_error)?;
        Ok(row_to_claim(row))
    }
}

// ============================================================================
// Conversion functions
// ============================================================================

fn db_to_port_error(e: DatabaseError) -> PortError {
    PortError::from(e)
}

fn store_key(options: &PgConnectOptions) -> String {
    format!(
        "postgres://{}:{}/{}",
        options.get_host(),
        options.get_port(),
        options.get_database().unwrap_or_default()
    )
}

fn row_to_car_summary(row: CarWithOwnerRow) -> CarSummary {
    CarSummary {
        car: Car {
            id: CarId::new(row.id),
            vin: row.vin,
            make: row.make,
            model: row.model,
            year_of_manufacture: row.year_of_manufacture,
            owner_id: OwnerId::new(row.owner_id),
        },
        owner_name: row.owner_name,
        owner_email: row.owner_email,
    }
}

fn row_to_policy(row: PolicyRow) -> InsurancePolicy {
    InsurancePolicy {
        id: PolicyId::new(row.id),
        car_id: CarId::new(row.car_id),
        start_date: row.start_date,
        end_date: row.end_date,
        provider: row.provider,
    }
}

fn row_to_claim(row: ClaimRow) -> Claim {
    Claim {
        id: ClaimId::new(row.id),
        car_id: CarId::new(row.car_id),
        claim_date: row.claim_date,
        description: row.description,
        amount: row.amount,
    }
}

fn new_claim_to_row(claim: NewClaim) -> NewClaimRow {
    NewClaimRow {
        car_id: claim.car_id.value(),
        claim_date: claim.claim_date,
        description: claim.description,
        amount: claim.amount,
    }
}
