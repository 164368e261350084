//! Fraud Predict Core
//!
//! Request-scoped feature records and the fixed threshold rule that turns
//! them into a fraud / not-fraud classification.
//!
//! ## Pipeline
//!
//! 1. **Payload** (`features::parse_payload`): raw request bytes must decode
//!    to a JSON object, anything else is rejected with [`PredictError`].
//! 2. **Feature Record** (`features`): every known field is filled with a
//!    parse-or-default value, so construction never fails.
//! 3. **Decision rule** (`classifier`): `error > 15` classifies as fraud.
//!
//! ## Example
//!
//! ```rust
//! use fraud_predict_core::{parse_payload, Classification, DecisionRule};
//!
//! let record = parse_payload(br#"{"error": "16.5"}"#).unwrap();
//! assert_eq!(DecisionRule::default().classify(&record), Classification::Fraud);
//! ```

pub mod classifier;
pub mod coerce;
pub mod error;
pub mod error_codes;
pub mod features;

pub use classifier::{Classification, DecisionRule, PredictionResponse, FRAUD_THRESHOLD};
pub use coerce::{coerce_integer, coerce_number, coerce_text};
pub use error::{PredictError, Result};
pub use error_codes::{lookup as lookup_error_code, ErrorCode, ERROR_CODES};
pub use features::{parse_payload, FeatureRecord};
