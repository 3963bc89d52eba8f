//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. Timestamps may be written by Rust (`to_rfc3339()`) or by `SQLite`
//! defaults (`datetime('now')`), so parsing goes through the core clock parser
//! which accepts both.

use chrono::{DateTime, SecondsFormat, Utc};
use tf_core::clock;

use crate::error::DatabaseError;

/// Format a timestamp for storage.
///
/// Fixed-width UTC (`2024-01-10T09:00:00.000Z`) so TEXT ordering matches
/// time ordering.
#[must_use]
pub fn fmt_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a required TEXT timestamp column.
///
/// # Errors
///
/// Returns `DatabaseError::Core` if the text is not a recognised timestamp.
pub fn parse_datetime(field: &str, s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    Ok(clock::parse_timestamp(field, s)?)
}

/// Parse a nullable TEXT timestamp column.
///
/// # Errors
///
/// Returns `DatabaseError::Core` if a non-empty value cannot be parsed.
pub fn parse_optional_datetime(
    field: &str,
    s: Option<&str>,
) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    Ok(clock::parse_optional_timestamp(field, s)?)
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with the tf-core enums, which all use `rename_all = "snake_case"`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Collect every row of a query through `map`.
///
/// # Errors
///
/// Returns the first row-read or mapping error.
pub async fn collect_rows<T>(
    mut rows: libsql::Rows,
    map: impl Fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Vec<T>, DatabaseError> {
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(map(&row)?);
    }
    Ok(out)
}
