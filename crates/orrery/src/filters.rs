//! Filters: `value | name(args...)` in templates.

use chrono::{DateTime, NaiveDate};
use orrery_kernel::registry::Units;
use orrery_kernel::unit::{self, Filter, UnitError, UnitErrorExt};
use serde_json::Value;

/// `March 1, 2024`
pub const DATE_DISPLAY_FORMAT: &str = "%B %-d, %Y";

#[must_use]
pub fn units() -> Units<Filter> {
    Units::new()
        .with("dateDisplay", unit::filter(date_display))
        .with("limit", unit::filter(limit))
        .with("jsonify", unit::filter(jsonify))
}

/// Formats an ISO date (`2024-03-01`) or RFC 3339 timestamp for display.
///
/// # Errors
/// [`UnitError::InvalidArgument`] when the value is not a string or not a date.
pub fn date_display(value: &Value, _args: &[Value]) -> Result<Value, UnitError> {
    let raw = value
        .as_str()
        .ok_or_else(|| invalid(format!("dateDisplay expects a string, got {value}")))?;

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|e| invalid(format!("'{raw}' is not a date: {e}")))?;

    Ok(Value::String(date.format(DATE_DISPLAY_FORMAT).to_string()))
}

/// First `n` items of an array.
///
/// # Errors
/// [`UnitError::InvalidArgument`] when the value is not an array or `n` is missing.
pub fn limit(value: &Value, args: &[Value]) -> Result<Value, UnitError> {
    let items = value.as_array().ok_or_else(|| invalid("limit expects an array"))?;
    let n = args
        .first()
        .and_then(Value::as_u64)
        .ok_or_else(|| invalid("limit expects a non-negative count"))?;
    let n = usize::try_from(n).unwrap_or(usize::MAX);

    Ok(Value::Array(items.iter().take(n).cloned().collect()))
}

/// Serializes the value to a JSON string.
///
/// # Errors
/// [`UnitError::Json`] if serialization fails.
pub fn jsonify(value: &Value, _args: &[Value]) -> Result<Value, UnitError> {
    let json = serde_json::to_string(value).context("jsonify")?;
    Ok(Value::String(json))
}

fn invalid(message: impl Into<String>) -> UnitError {
    let message: String = message.into();
    UnitError::InvalidArgument { message: message.into(), context: None }
}
