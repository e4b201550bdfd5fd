//! Record collection extraction from a parsed JSON document

use crate::error::{ConversionError, ConversionResult};
use serde_json::{Map, Value};

/// One academic record: field name to value, in source key order.
pub type Record = Map<String, Value>;

/// Field used as the sort key
pub const ROLL_NO: &str = "rollNo";
/// Nested per-semester grade mapping
pub const SGPA: &str = "SGPA";
/// Always emitted as the final column
pub const INSTITUTE_NAME: &str = "instituteName";

/// Unwrap a top-level JSON array whose elements are all objects.
pub fn extract_records(value: Value) -> ConversionResult<Vec<Record>> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(ConversionError::not_record_array(describe(&other))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(ConversionError::not_record_array(format!(
                "{} at index {}",
                describe(&other),
                index
            ))),
        })
        .collect()
}

/// Text form of a record's `rollNo`; absent is the empty string.
pub fn roll_no(record: &Record) -> String {
    record.get(ROLL_NO).map(value_text).unwrap_or_default()
}

/// Look up `SGPA.<semester>`; absent when either level is missing or `SGPA` is not an object.
pub fn semester_grade<'a>(record: &'a Record, semester: &str) -> Option<&'a Value> {
    record.get(SGPA)?.as_object()?.get(semester)
}

/// Plain text of a JSON value: strings verbatim, null empty, containers as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
