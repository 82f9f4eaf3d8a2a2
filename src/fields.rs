//! Conversion of raw backend values into typed quote fields.
//!
//! Both backends funnel their raw values through this module so that a
//! quote read from a JSON document and a quote read from a database row
//! cover identical value ranges: absent or empty text collapses to `None`,
//! and numeric date parts are clamped to their field's range rather than
//! wrapped.

use rusqlite::Row;
use rusqlite::types::ValueRef;
use serde_json::{Map, Value};
use tracing::debug;

/// Era token stored by the relational backend; the comparison against it is
/// exact and case-sensitive, so anything else decodes as BC.
pub const ERA_CE_TOKEN: &str = "true";

// ------------- Clamping -------------
pub fn clamp_day(raw: i64) -> u8 {
    raw.clamp(0, u8::MAX as i64) as u8
}
pub fn clamp_year(raw: i64) -> u16 {
    raw.clamp(0, u16::MAX as i64) as u16
}

// ------------- JSON object fields -------------

/// A non-empty JSON string under `key`, copied out of the document.
/// Absence, a non-string value and an empty string all collapse to `None`.
pub fn json_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) | None => None,
        Some(_) => {
            debug!(key, "field is not a string");
            None
        }
    }
}

/// The integer under `key`, 0 when absent or not a JSON integer.
pub fn json_int(obj: &Map<String, Value>, key: &str) -> i64 {
    match obj.get(key).and_then(Value::as_i64) {
        Some(raw) => raw,
        None => {
            debug!(key, "missing or non-integer field, defaulting to 0");
            0
        }
    }
}

/// The boolean under `key`, or `default` when absent or not a boolean.
/// A missing era is not an error and is not reported.
pub fn json_era(obj: &Map<String, Value>, key: &str, default: bool) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(default)
}

// ------------- Row columns -------------

/// A non-empty TEXT column, copied out of the row. NULL, another storage
/// class, an empty string and invalid UTF-8 all collapse to `None`; no
/// storage-class coercion is performed.
pub fn column_string(row: &Row, idx: usize) -> Option<String> {
    match row.get_ref(idx) {
        Ok(ValueRef::Text(t)) if !t.is_empty() => match std::str::from_utf8(t) {
            Ok(s) => Some(s.to_owned()),
            Err(_) => {
                debug!(column = idx, "text column is not valid UTF-8");
                None
            }
        },
        Ok(_) => None,
        Err(e) => {
            debug!(column = idx, error = %e, "unreadable column");
            None
        }
    }
}

/// An INTEGER column clamped to the day/month range, 0 when NULL or any
/// other storage class.
pub fn column_day(row: &Row, idx: usize) -> u8 {
    clamp_day(column_int(row, idx))
}

/// An INTEGER column clamped to the year range, 0 when NULL or any other
/// storage class.
pub fn column_year(row: &Row, idx: usize) -> u16 {
    clamp_year(column_int(row, idx))
}

fn column_int(row: &Row, idx: usize) -> i64 {
    match row.get_ref(idx) {
        Ok(ValueRef::Integer(raw)) => raw,
        Ok(_) => {
            debug!(column = idx, "missing or non-integer column, defaulting to 0");
            0
        }
        Err(e) => {
            debug!(column = idx, error = %e, "unreadable column");
            0
        }
    }
}

/// Era column decode: true iff the column holds TEXT exactly equal to
/// [`ERA_CE_TOKEN`]. Everything else, NULL and absence included, is BC.
pub fn column_era(row: &Row, idx: usize) -> bool {
    matches!(row.get_ref(idx), Ok(ValueRef::Text(t)) if t == ERA_CE_TOKEN.as_bytes())
}
