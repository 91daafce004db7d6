//! Car handlers

use axum::{extract::State, http::StatusCode, Json};

use core_kernel::{parse_iso_date, CarId, ISO_DATE_FORMAT};

use crate::dto::cars::*;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::{error::ApiError, AppState};

/// Lists all cars with their owners
pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>, ApiError> {
    let cars = state.cars.list_cars().await?;
    Ok(Json(cars.into_iter().map(CarResponse::from).collect()))
}

/// Checks whether a car is insured on the queried date
pub async fn insurance_valid(
    State(state): State<AppState>,
    ApiPath(car_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<ValidityQuery>,
) -> Result<Json<InsuranceValidityResponse>, ApiError> {
    let date = query
        .date
        .as_deref()
        .and_then(|raw| parse_iso_date(raw).ok())
        .ok_or_else(ApiError::invalid_date)?;

    let valid = state.cars.is_insurance_valid(CarId::new(car_id), date).await?;

    Ok(Json(InsuranceValidityResponse {
        car_id,
        date: date.format(ISO_DATE_FORMAT).to_string(),
        valid,
    }))
}

/// Files a claim against a car
pub async fn file_claim(
    State(state): State<AppState>,
    ApiPath(car_id): ApiPath<i64>,
    ApiJson(request): ApiJson<FileClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let claim_date = parse_iso_date(&request.claim_date).map_err(|_| ApiError::invalid_date())?;

    let claim = state
        .cars
        .file_claim(CarId::new(car_id), claim_date, request.description, request.amount)
        .await?;

    Ok((StatusCode::CREATED, Json(ClaimResponse::from(claim))))
}

/// Returns a car's policies and claims in date order
pub async fn car_history(
    State(state): State<AppState>,
    ApiPath(car_id): ApiPath<i64>,
) -> Result<Json<Vec<HistoryEventResponse>>, ApiError> {
    let history = state.cars.get_car_history(CarId::new(car_id)).await?;
    Ok(Json(history.into_iter().map(HistoryEventResponse::from).collect()))
}
