//! HTTP API Layer
//!
//! This crate provides the REST API for the car insurance system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for cars and health
//! - **Middleware**: Request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent `{error, message}` responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(service, store, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::HealthCheckable;
use domain_vehicle::CarService;

use crate::config::ApiConfig;
use crate::handlers::{cars, health};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<CarService>,
    pub health: Arc<dyn HealthCheckable>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(cars: CarService, health: Arc<dyn HealthCheckable>, config: ApiConfig) -> Self {
        Self {
            cars: Arc::new(cars),
            health,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Car routes
    let car_routes = Router::new()
        .route("/", get(cars::list_cars))
        .route("/:car_id/insurance-valid", get(cars::insurance_valid))
        .route("/:car_id/claims", post(cars::file_claim))
        .route("/:car_id/history", get(cars::car_history));

    let api_routes = Router::new()
        .nest("/cars", car_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
