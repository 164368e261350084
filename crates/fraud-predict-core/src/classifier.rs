//! Threshold decision rule.

use serde::{Deserialize, Serialize};

use crate::features::FeatureRecord;

/// Error values strictly above this classify as fraud
pub const FRAUD_THRESHOLD: f64 = 15.0;

/// Binary classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    NotFraud,
    Fraud,
}

impl Classification {
    /// Wire value: 0 = not fraud, 1 = fraud
    pub fn as_u8(self) -> u8 {
        match self {
            Classification::NotFraud => 0,
            Classification::Fraud => 1,
        }
    }

    pub fn is_fraud(self) -> bool {
        matches!(self, Classification::Fraud)
    }
}

impl From<Classification> for u8 {
    fn from(c: Classification) -> Self {
        c.as_u8()
    }
}

/// Body of a successful prediction: `{"prediction": 0|1}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: u8,
}

impl From<Classification> for PredictionResponse {
    fn from(c: Classification) -> Self {
        Self {
            prediction: c.as_u8(),
        }
    }
}

/// Fixed decision rule over the `error` feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRule {
    threshold: f64,
}

impl Default for DecisionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionRule {
    pub fn new() -> Self {
        Self {
            threshold: FRAUD_THRESHOLD,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classify a record. Equal to the threshold is not fraud; NaN is not fraud.
    pub fn classify(&self, record: &FeatureRecord) -> Classification {
        if record.error > self.threshold {
            Classification::Fraud
        } else {
            Classification::NotFraud
        }
    }
}
