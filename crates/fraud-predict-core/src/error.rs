//! Error types for payload handling
//!
//! Every variant collapses to the same caller-facing message; the variant
//! itself is kept for logging.

use thiserror::Error;

/// Message returned to callers for any unusable request body
pub const NO_INPUT_MESSAGE: &str = "No input data provided";

/// Reasons a request body cannot become a Feature Record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    /// Body missing, empty or whitespace only
    #[error("request body is empty")]
    EmptyBody,

    /// Body is not valid JSON
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    /// Body is valid JSON but not an object
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

impl PredictError {
    /// Message shown to the caller
    pub fn public_message(&self) -> &'static str {
        NO_INPUT_MESSAGE
    }
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        PredictError::InvalidJson(err.to_string())
    }
}

/// Result type alias for payload operations
pub type Result<T> = std::result::Result<T, PredictError>;
