//! Response payload types for API handlers.

use serde::Serialize;
use serde_json::{Map, Value};
use vitalcheck_core::vitals::EvaluationResult;

/// Body returned by `POST /check`.
///
/// ```json
/// { "alert": true, "reason": "Abnormal temperature", "input": { "temperature": 39 } }
/// ```
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub alert: bool,
    /// Triggered reasons joined with `", "`, or `""` when none.
    pub reason: String,
    /// The request body exactly as parsed.
    pub input: Map<String, Value>,
}

impl CheckResponse {
    pub fn new(result: &EvaluationResult, input: Map<String, Value>) -> Self {
        Self {
            alert: result.alert,
            reason: result.reason_summary(),
            input,
        }
    }
}
