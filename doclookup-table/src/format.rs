//! Cell formatting for extended-JSON values.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Render a JSON value as the text of a table cell.
///
/// ObjectId and date wrappers are unwrapped, arrays are joined with `", "`,
/// `null` becomes empty text and any other object is shown as compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => format_object(map),
    }
}

fn format_object(map: &Map<String, Value>) -> String {
    if let Some(Value::String(oid)) = map.get("$oid") {
        return oid.clone();
    }
    if let Some(date) = map.get("$date") {
        return format_date(date);
    }

    serde_json::to_string(map).unwrap_or_default()
}

/// Render the payload of a `$date` wrapper as `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// Accepts an RFC 3339 string, epoch milliseconds, or a `$numberLong`
/// wrapper. Anything unparseable is shown as-is.
pub fn format_date(date: &Value) -> String {
    let parsed: Option<DateTime<Utc>> = match date {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|d| d.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::Object(inner) => inner
            .get("$numberLong")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<i64>().ok())
            .and_then(DateTime::from_timestamp_millis),
        _ => None,
    };

    match parsed {
        Some(d) => d.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => match date {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}
