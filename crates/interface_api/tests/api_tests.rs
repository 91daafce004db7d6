//! HTTP tests for the car insurance API over in-memory stores

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use core_kernel::{AdapterHealth, HealthCheckResult, HealthCheckable};
use interface_api::{config::ApiConfig, create_router, AppState};
use test_utils::TestFleet;

/// Health probe returning a fixed status
struct StaticHealth(AdapterHealth);

#[async_trait]
impl HealthCheckable for StaticHealth {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "in-memory".to_string(),
            status: self.0,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

fn app_with(fleet: &TestFleet, health: AdapterHealth) -> Router {
    create_router(AppState::new(
        fleet.service(),
        Arc::new(StaticHealth(health)),
        ApiConfig::default(),
    ))
}

async fn reference_app() -> (Router, TestFleet) {
    let fleet = TestFleet::reference().await;
    (app_with(&fleet, AdapterHealth::Healthy), fleet)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

// ============================================================================
// Health
// ============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let (app, _) = reference_app().await;
        let (status, body) = get(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_store_status() {
        let fleet = TestFleet::empty();

        let (status, body) = get(app_with(&fleet, AdapterHealth::Healthy), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["store"]["status"], "healthy");

        let (status, body) = get(app_with(&fleet, AdapterHealth::Unhealthy), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
    }
}

// ============================================================================
// Cars and validity
// ============================================================================

mod validity {
    use super::*;

    #[tokio::test]
    async fn test_list_cars() {
        let (app, _) = reference_app().await;
        let (status, body) = get(app, "/api/cars").await;

        assert_eq!(status, StatusCode::OK);
        let cars = body.as_array().unwrap();
        assert_eq!(cars.len(), 3);
        assert_eq!(cars[0]["id"], 1);
        assert_eq!(cars[0]["vin"], "VIN12345");
        assert_eq!(cars[0]["year"], 2018);
        assert_eq!(cars[0]["owner_name"], "Ana Pop");
        assert_eq!(cars[2]["make"], Value::Null);
    }

    #[tokio::test]
    async fn test_valid_date() {
        let (app, _) = reference_app().await;
        let (status, body) = get(app, "/api/cars/1/insurance-valid?date=2024-06-01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "car_id": 1, "date": "2024-06-01", "valid": true }));
    }

    #[tokio::test]
    async fn test_uncovered_date() {
        let (app, _) = reference_app().await;
        let (status, body) = get(app, "/api/cars/2/insurance-valid?date=2024-10-01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);
    }

    #[tokio::test]
    async fn test_bad_dates_are_rejected() {
        let (app, _) = reference_app().await;

        for uri in [
            "/api/cars/1/insurance-valid?date=2024-13-01",
            "/api/cars/1/insurance-valid?date=2023-02-30",
            "/api/cars/1/insurance-valid?date=yesterday",
            "/api/cars/1/insurance-valid",
        ] {
            let (status, body) = get(app.clone(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], "bad_request");
            assert_eq!(
                body["message"],
                "Invalid date or date format. Use YYYY-MM-DD or a valid calendar date."
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_car() {
        let (app, _) = reference_app().await;
        let (status, body) = get(app, "/api/cars/999/insurance-valid?date=2024-06-01").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "Car 999 not found");
    }

    #[tokio::test]
    async fn test_store_outage_is_service_unavailable() {
        let (app, fleet) = reference_app().await;
        fleet.policies.fail_next(1);

        let (status, body) = get(app, "/api/cars/1/insurance-valid?date=2024-06-01").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "database_error");
    }
}

// ============================================================================
// Claims and history
// ============================================================================

mod claims {
    use super::*;

    #[tokio::test]
    async fn test_file_claim() {
        let (app, fleet) = reference_app().await;
        let (status, body) = send(
            app,
            Method::POST,
            "/api/cars/1/claims",
            Some(json!({ "claim_date": "2024-03-15", "description": "Rear bumper", "amount": 1250.5 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["car_id"], 1);
        assert_eq!(body["claim_date"], "2024-03-15");
        assert_eq!(body["description"], "Rear bumper");
        assert!(body["amount"].is_number());
        assert_eq!(body["amount"], json!(1250.5));
        assert_eq!(fleet.claims.len().await, 1);
    }

    #[tokio::test]
    async fn test_file_claim_unknown_car() {
        let (app, fleet) = reference_app().await;
        let (status, _) = send(
            app,
            Method::POST,
            "/api/cars/999/claims",
            Some(json!({ "claim_date": "2024-03-15", "description": "Ghost", "amount": 10 })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(fleet.claims.is_empty().await);
    }

    #[tokio::test]
    async fn test_file_claim_rejected_by_validation() {
        let (app, fleet) = reference_app().await;
        let (status, body) = send(
            app,
            Method::POST,
            "/api/cars/1/claims",
            Some(json!({ "claim_date": "2024-03-15", "description": "Refund", "amount": -10 })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
        assert!(fleet.claims.is_empty().await);
    }

    #[tokio::test]
    async fn test_file_claim_bad_date() {
        let (app, fleet) = reference_app().await;
        let (status, _) = send(
            app,
            Method::POST,
            "/api/cars/1/claims",
            Some(json!({ "claim_date": "15/03/2024", "description": "Dent", "amount": 10 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(fleet.claims.is_empty().await);
    }

    #[tokio::test]
    async fn test_history_after_filing() {
        let (app, _) = reference_app().await;
        let (status, _) = send(
            app.clone(),
            Method::POST,
            "/api/cars/1/claims",
            Some(json!({ "claim_date": "2024-03-15", "description": "Side mirror", "amount": 120 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = get(app, "/api/cars/1/history").await;
        assert_eq!(status, StatusCode::OK);

        let events = body.as_array().unwrap();
        let kinds: Vec<&str> = events.iter().map(|e| e["event_type"].as_str().unwrap()).collect();
        assert_eq!(kinds, vec!["Policy", "Claim", "Policy"]);

        assert_eq!(events[0]["provider"], "Allianz");
        assert_eq!(events[0]["end_date"], "2024-12-31");
        assert_eq!(events[1]["description"], "Side mirror");
        assert_eq!(events[1]["amount"], json!(120.0));
        assert_eq!(events[2]["end_date"], Value::Null);
    }

    #[tokio::test]
    async fn test_history_unknown_car() {
        let (app, _) = reference_app().await;
        let (status, body) = get(app, "/api/cars/404/history").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Car 404 not found");
    }
}

// ============================================================================
// Rejected requests
// ============================================================================

mod rejections {
    use super::*;

    async fn post_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_body_field_is_json_validation_error() {
        let (app, fleet) = reference_app().await;
        let (status, body) = post_raw(app, "/api/cars/1/claims", r#"{"claim_date":"2024-01-01"}"#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
        assert!(body["message"].as_str().unwrap().contains("description"));
        assert!(fleet.claims.is_empty().await);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_json_bad_request() {
        let (app, _) = reference_app().await;
        let (status, body) = post_raw(app, "/api/cars/1/claims", "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_non_numeric_car_id_is_json_bad_request() {
        let (app, _) = reference_app().await;

        let (status, body) = get(app.clone(), "/api/cars/abc/history").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].is_string());

        let (status, body) = get(app, "/api/cars/abc/insurance-valid?date=2024-06-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }
}
