//! Route definitions
//!
//! - POST /predict - classify a transaction payload
//! - GET /health - health check
//! - GET /error-codes - error code catalogue

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fraud_predict_core::{parse_payload, ErrorCode, PredictionResponse, ERROR_CODES};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use super::{ApiError, AppState, HealthResponse};
use crate::{SERVICE_NAME, SERVICE_VERSION};

/// Create the router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    let timeout = state.config.timeout();

    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health_check))
        .route("/error-codes", get(error_codes))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// POST /predict
///
/// The body is read raw so that a missing `Content-Type` header does not
/// reject an otherwise valid JSON payload.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                limit: state.config.max_body_bytes,
            }
        } else {
            ApiError::UnreadableBody(rejection.body_text())
        }
    })?;

    let record = parse_payload(&body).map_err(|e| {
        tracing::debug!(request_id = %request_id, error = %e, "Rejected prediction payload");
        ApiError::from(e)
    })?;

    let classification = state.rule.classify(&record);

    tracing::debug!(
        request_id = %request_id,
        error_value = record.error,
        prediction = classification.as_u8(),
        "Classified transaction"
    );

    Ok(Json(PredictionResponse::from(classification)))
}

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// GET /error-codes
pub async fn error_codes() -> Json<&'static [ErrorCode]> {
    Json(&ERROR_CODES[..])
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
