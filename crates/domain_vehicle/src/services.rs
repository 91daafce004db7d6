//! Vehicle domain services
//!
//! `CarService` answers the per-request questions about a car: whether it is
//! insured on a date, what its policy and claim history looks like, and
//! filing a new claim. Every operation first confirms the car exists, so an
//! unknown car is always reported as `VehicleError::CarNotFound` and never
//! as an empty or negative answer.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use core_kernel::CarId;
use domain_claims::{Claim, ClaimValidation, ClaimsPort, NewClaim};
use domain_policy::{validity, PolicyPort};

use crate::car::CarSummary;
use crate::error::VehicleError;
use crate::history::{aggregate_history, HistoryEvent};
use crate::ports::CarPort;

/// Service for car-level insurance queries and claim filing
///
/// # Example
///
/// ```rust,ignore
/// let service = CarService::new(cars, policies, claims)
///     .with_claim_validation(ClaimValidation::Permissive);
///
/// if service.is_insurance_valid(car_id, date).await? {
///     println!("Car {car_id} is insured on {date}");
/// }
/// ```
#[derive(Clone)]
pub struct CarService {
    cars: Arc<dyn CarPort>,
    policies: Arc<dyn PolicyPort>,
    claims: Arc<dyn ClaimsPort>,
    claim_validation: ClaimValidation,
}

impl CarService {
    /// Creates a service with strict claim validation
    pub fn new(
        cars: Arc<dyn CarPort>,
        policies: Arc<dyn PolicyPort>,
        claims: Arc<dyn ClaimsPort>,
    ) -> Self {
        Self {
            cars,
            policies,
            claims,
            claim_validation: ClaimValidation::default(),
        }
    }

    /// Sets the validation applied when filing claims
    pub fn with_claim_validation(mut self, validation: ClaimValidation) -> Self {
        self.claim_validation = validation;
        self
    }

    /// Lists all cars with their owners
    #[instrument(skip(self))]
    pub async fn list_cars(&self) -> Result<Vec<CarSummary>, VehicleError> {
        Ok(self.cars.list_cars().await?)
    }

    /// Returns true if any of the car's policies covers `date`
    ///
    /// A car without policies is simply not insured.
    ///
    /// # Errors
    ///
    /// Returns `VehicleError::CarNotFound` if the car does not exist
    #[instrument(skip(self), fields(car_id = %car_id, date = %date))]
    pub async fn is_insurance_valid(&self, car_id: CarId, date: NaiveDate) -> Result<bool, VehicleError> {
        self.ensure_car_exists(car_id).await?;

        let policies = self.policies.list_policies_for_car(car_id).await?;
        let valid = validity::is_covered(&policies, date);

        debug!(policies = policies.len(), valid, "Evaluated insurance validity");
        Ok(valid)
    }

    /// Files a new claim against a car
    ///
    /// The claim is validated according to the configured mode and returned
    /// once the store has committed it.
    ///
    /// # Errors
    ///
    /// - `VehicleError::CarNotFound` if the car does not exist; nothing is stored
    /// - `VehicleError::InvalidClaim` if validation rejects the claim
    #[instrument(skip(self, description), fields(car_id = %car_id, claim_date = %claim_date))]
    pub async fn file_claim(
        &self,
        car_id: CarId,
        claim_date: NaiveDate,
        description: impl Into<String> + Send,
        amount: Decimal,
    ) -> Result<Claim, VehicleError> {
        self.ensure_car_exists(car_id).await?;

        let new_claim = NewClaim::new(car_id, claim_date, description, amount);
        self.claim_validation.validate(&new_claim)?;

        let claim = self.claims.append_claim(new_claim).await?;

        info!(claim_id = %claim.id, amount = %claim.amount, "Claim filed");
        Ok(claim)
    }

    /// Returns the car's policies and claims as one ascending sequence
    ///
    /// # Errors
    ///
    /// Returns `VehicleError::CarNotFound` if the car does not exist
    #[instrument(skip(self), fields(car_id = %car_id))]
    pub async fn get_car_history(&self, car_id: CarId) -> Result<Vec<HistoryEvent>, VehicleError> {
        self.ensure_car_exists(car_id).await?;

        let (policies, claims) = tokio::try_join!(
            self.policies.list_policies_for_car(car_id),
            self.claims.list_claims_for_car(car_id),
        )?;

        debug!(policies = policies.len(), claims = claims.len(), "Aggregating car history");
        Ok(aggregate_history(policies, claims))
    }

    async fn ensure_car_exists(&self, car_id: CarId) -> Result<(), VehicleError> {
        if self.cars.car_exists(car_id).await? {
            Ok(())
        } else {
            Err(VehicleError::CarNotFound(car_id))
        }
    }
}
