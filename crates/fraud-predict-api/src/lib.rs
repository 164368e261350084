//! Fraud Predict API
//!
//! axum server exposing the threshold classifier over HTTP.
//!
//! ## Routes
//!
//! - `POST /predict` - classify one transaction payload
//! - `GET /health` - liveness check
//! - `GET /error-codes` - transaction error code catalogue
//!
//! Cross-origin requests are accepted from any origin.

pub mod cli;
pub mod config;
pub mod handler;
pub mod telemetry;

pub use cli::{classify_payload, ClassifyOutcome, ExitCode};
pub use config::{ConfigError, LogFormat, ServerConfig};
pub use handler::{create_router, ApiError, AppState, ErrorBody, HealthResponse};
pub use telemetry::init_tracing;

/// Service identifier reported by the health check
pub const SERVICE_NAME: &str = "fraud-predict";

/// Service version (from Cargo.toml)
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
