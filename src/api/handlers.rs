//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{PayrollTotals, Worker};

use super::request::WorkerRequest;
use super::response::{ApiError, ApiErrorResponse, WorkerSubmissionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/workers", post(submit_worker_handler))
        .route("/totals", get(totals_handler))
        .with_state(state)
}

/// Handler for GET /totals endpoint.
async fn totals_handler(State(state): State<AppState>) -> Json<PayrollTotals> {
    Json(state.ledger().totals())
}

/// Handler for POST /workers endpoint.
///
/// Pays the submitted worker, records them in the shared ledger, and
/// returns the worker with the updated totals. Rejected submissions return
/// the error together with the unchanged totals.
async fn submit_worker_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkerRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing worker submission");

    let ledger = state.ledger();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries serde's description of the problem
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error.with_totals(ledger.totals()));
        }
    };

    let name = match request.full_name() {
        Ok(name) => name,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error.message, "Missing worker name");
            return json_response(StatusCode::BAD_REQUEST, error.with_totals(ledger.totals()));
        }
    };

    match Worker::new_with_totals(
        ledger,
        request.worker_type,
        name,
        &request.rate,
        &request.hours,
    ) {
        Ok((worker, totals)) => {
            info!(
                correlation_id = %correlation_id,
                worker_type = ?worker.kind(),
                pay = %worker.pay(),
                overtime_hours = %worker.overtime_hours(),
                total_workers = totals.total_workers,
                "Worker paid"
            );
            json_response(
                StatusCode::CREATED,
                WorkerSubmissionResponse {
                    submission_id: correlation_id,
                    processed_at: Utc::now(),
                    worker,
                    totals,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Worker submission rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error.with_totals(ledger.totals()))
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::PayrollLedger;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(PayrollLedger::new())
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_worker(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/workers")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get_totals() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/totals")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_hourly_worker_returns_201() {
        let router = create_router(create_test_state());
        let body = json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "worker_type": "hourly",
            "rate": "20",
            "hours": "45"
        });

        let (status, json) = send(router, post_worker(body.to_string())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["worker"]["name"], "Ada Lovelace");
        assert_eq!(dec(json["worker"]["pay"].as_str().unwrap()), dec("950"));
        assert_eq!(json["totals"]["total_workers"], 1);
        assert!(json["submission_id"].is_string());
    }

    #[tokio::test]
    async fn test_response_has_json_content_type() {
        let router = create_router(create_test_state());
        let response = router.oneshot(get_totals()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, json) = send(router, post_worker("{invalid json".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_hours_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "worker_type": "hourly",
            "rate": "20"
        });

        let (status, json) = send(router, post_worker(body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("missing field"));
    }

    #[tokio::test]
    async fn test_out_of_range_rate_keeps_totals() {
        let state = create_test_state();
        Worker::hourly(state.ledger(), "Seed", "20", "45").unwrap();
        let router = create_router(state.clone());
        let body = json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "worker_type": "hourly",
            "rate": "10",
            "hours": "45"
        });

        let (status, json) = send(router, post_worker(body.to_string())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "OUT_OF_RANGE");
        assert_eq!(json["totals"]["total_workers"], 1);
        assert_eq!(state.ledger().totals().total_workers, 1);
    }

    #[tokio::test]
    async fn test_totals_start_at_zero() {
        let router = create_router(create_test_state());

        let (status, json) = send(router, get_totals()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_workers"], 0);
        assert_eq!(json["average_pay"], "0");
    }
}
