//! HTTP handlers for the prediction endpoint
//!
//! - `routes`: router construction and route handlers
//!
//! Every handler is stateless apart from the read-only [`AppState`]; the
//! same payload always yields the same response.

pub mod routes;

pub use routes::{create_router, error_codes, health_check, not_found, predict};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fraud_predict_core::{error::NO_INPUT_MESSAGE, DecisionRule, PredictError};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::ServerConfig;

/// Read-only state shared by all requests
#[derive(Debug, Clone)]
pub struct AppState {
    pub rule: DecisionRule,
    pub config: ServerConfig,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            rule: DecisionRule::default(),
            config,
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Error body: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// RFC 3339
    pub timestamp: String,
    pub uptime_seconds: u64,
}

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Payload missing, not JSON, or not a JSON object
    BadRequest(PredictError),
    /// Body could not be read off the connection
    UnreadableBody(String),
    PayloadTooLarge { limit: usize },
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::UnreadableBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message placed in the response body
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(e) => e.public_message().to_string(),
            ApiError::UnreadableBody(_) => NO_INPUT_MESSAGE.to_string(),
            ApiError::PayloadTooLarge { limit } => {
                format!("Request body exceeds limit of {} bytes", limit)
            }
            ApiError::NotFound => "Not found".to_string(),
        }
    }
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        ApiError::BadRequest(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.message(),
        };

        (status, Json(body)).into_response()
    }
}
