//! Offline classification for the `classify` subcommand

use fraud_predict_core::{parse_payload, DecisionRule, PredictionResponse};

use crate::handler::ErrorBody;

/// Exit codes for the `classify` subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Payload classified
    Success = 0,
    /// Payload missing, not JSON, or not a JSON object
    InvalidInput = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Line to print and the code to exit with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyOutcome {
    pub output: String,
    pub exit_code: ExitCode,
}

/// Classify one raw payload the same way `POST /predict` does.
///
/// Success prints `{"prediction":n}`; a rejected payload prints the
/// `{"error":...}` object and exits with [`ExitCode::InvalidInput`].
pub fn classify_payload(body: &[u8]) -> Result<ClassifyOutcome, serde_json::Error> {
    match parse_payload(body) {
        Ok(record) => {
            let classification = DecisionRule::default().classify(&record);
            Ok(ClassifyOutcome {
                output: serde_json::to_string(&PredictionResponse::from(classification))?,
                exit_code: ExitCode::Success,
            })
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected payload");
            let body = ErrorBody {
                error: e.public_message().to_string(),
            };
            Ok(ClassifyOutcome {
                output: serde_json::to_string(&body)?,
                exit_code: ExitCode::InvalidInput,
            })
        }
    }
}
