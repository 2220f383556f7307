//! Handler for `POST /check`.
//!
//! The body is read as raw bytes so a missing `Content-Type`, an empty body
//! or malformed JSON all degrade to "no readings" instead of a rejection.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{Map, Value};
use vitalcheck_core::vitals::VitalsInput;

use crate::response::CheckResponse;
use crate::state::AppState;

/// POST /check
///
/// Screen one set of vital signs. Always responds `200 OK`.
pub async fn check_vitals(State(state): State<AppState>, body: Bytes) -> Json<CheckResponse> {
    let payload = parse_payload(&body);
    let input = vitals_input_from_payload(&payload);

    let result = state.evaluator.evaluate(input);
    if let Some(err) = &result.blood_pressure_error {
        tracing::debug!(error = %err, "Ignoring malformed blood pressure reading");
    }
    tracing::debug!(
        alert = result.alert,
        reasons = ?result.reasons,
        "Evaluated vitals"
    );

    Json(CheckResponse::new(&result, payload))
}

/// Parse a request body into a JSON object.
///
/// Anything other than a JSON object (empty body, invalid JSON, arrays,
/// scalars, `null`) yields an empty map.
pub fn parse_payload(body: &[u8]) -> Map<String, Value> {
    if body.is_empty() {
        return Map::new();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::debug!(kind = json_kind(&other), "Request body is not a JSON object");
            Map::new()
        }
        Err(err) => {
            tracing::debug!(error = %err, "Request body is not valid JSON");
            Map::new()
        }
    }
}

/// Extract typed readings from a request payload.
///
/// `temperature` and `pulse` are used only when they are JSON numbers and
/// `bp` only when it is a JSON string; any other value counts as absent.
pub fn vitals_input_from_payload(payload: &Map<String, Value>) -> VitalsInput {
    VitalsInput {
        temperature: number_field(payload, "temperature"),
        pulse: number_field(payload, "pulse"),
        blood_pressure: payload
            .get("bp")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

/// Read a JSON number as `f64`, saturating to `±inf` past `f64::MAX`.
///
/// Numbers keep their source text (`arbitrary_precision`), so `1e400`
/// survives parsing and becomes infinity here rather than being dropped.
fn number_field(payload: &Map<String, Value>, key: &str) -> Option<f64> {
    match payload.get(key)? {
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
