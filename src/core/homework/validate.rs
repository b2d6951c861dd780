use serde_json::Value;
use tracing::warn;

use crate::core::error::{SchemaError, json_kind};
use crate::core::homework::HomeworkRecord;

const EXPECTED_KEYS: [&str; 2] = ["homeworks", "current_date"];

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedResponse {
    /// First entry of `homeworks` (the API lists the most recent first).
    /// `None` when the list is empty.
    pub latest: Option<HomeworkRecord>,
    pub next_cursor: i64,
}

/// Check the shape of a status payload and pull out the latest homework and
/// the cursor for the next request.
///
/// Missing top-level keys are only logged. A wrong type under `homeworks` or
/// `current_date` fails the whole payload. Only the first record is decoded;
/// older entries are never looked at.
pub fn validate_response(payload: &Value, prior_cursor: i64) -> Result<ValidatedResponse, SchemaError> {
    let object = payload
        .as_object()
        .ok_or_else(|| SchemaError::NotAnObject(json_kind(payload)))?;

    for key in EXPECTED_KEYS {
        if !object.contains_key(key) {
            warn!("Status payload is missing expected key '{}'", key);
        }
    }

    let raw_homeworks = object
        .get("homeworks")
        .ok_or(SchemaError::MissingHomeworks)?;
    let items = raw_homeworks
        .as_array()
        .ok_or_else(|| SchemaError::HomeworksNotASequence(json_kind(raw_homeworks)))?;

    let latest = items.first().map(decode_record).transpose()?;

    let next_cursor = match object.get("current_date") {
        None => prior_cursor,
        Some(Value::Null) => {
            warn!("Status payload has null current_date, keeping cursor {}", prior_cursor);
            prior_cursor
        }
        Some(value) => value
            .as_i64()
            .ok_or_else(|| SchemaError::InvalidCursor(json_kind(value)))?,
    };

    Ok(ValidatedResponse {
        latest,
        next_cursor,
    })
}

fn decode_record(item: &Value) -> Result<HomeworkRecord, SchemaError> {
    if !item.is_object() {
        return Err(SchemaError::MalformedRecord(format!(
            "expected object, got {}",
            json_kind(item)
        )));
    }
    serde_json::from_value::<HomeworkRecord>(item.clone())
        .map_err(|e| SchemaError::MalformedRecord(e.to_string()))
}
