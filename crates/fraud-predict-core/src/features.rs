//! Feature Record construction from request payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::{coerce_integer, coerce_number, coerce_text};
use crate::error::{PredictError, Result};

/// Transaction features extracted from one request.
///
/// Lives only for the duration of the request. Only `error` is read by the
/// decision rule; the rest is carried for logging and future rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub month: i64,
    pub day: i64,
    pub time: String,
    pub amount: f64,
    pub use_chip: String,
    pub merchant_name: String,
    pub merchant_city: String,
    pub merchant_state: String,
    pub zip: String,
    pub mcc: String,
    pub error: f64,
}

impl FeatureRecord {
    /// Build a record from a JSON object, defaulting every missing or
    /// unusable field. Unknown keys are ignored.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            month: coerce_integer(object.get("month")),
            day: coerce_integer(object.get("day")),
            time: coerce_text(object.get("time")),
            amount: coerce_number(object.get("amount")),
            use_chip: coerce_text(object.get("useChip")),
            merchant_name: coerce_text(object.get("merchantName")),
            merchant_city: coerce_text(object.get("merchantCity")),
            merchant_state: coerce_text(object.get("merchantState")),
            zip: coerce_text(object.get("zip")),
            mcc: coerce_text(object.get("mcc")),
            error: coerce_number(object.get("error")),
        }
    }

    /// Build a record from any JSON value; only objects are accepted.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(object) => Ok(Self::from_object(object)),
            other => Err(PredictError::NotAnObject(json_kind(other))),
        }
    }
}

/// Parse a raw request body into a Feature Record.
///
/// Empty or whitespace-only bodies, invalid JSON and non-object JSON are
/// all rejected.
pub fn parse_payload(body: &[u8]) -> Result<FeatureRecord> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(PredictError::EmptyBody);
    }

    let value: Value = serde_json::from_slice(body)?;
    FeatureRecord::from_value(&value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
