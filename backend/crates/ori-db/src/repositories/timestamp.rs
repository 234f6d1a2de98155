use crate::{FieldValue, StoreTimestamp};

use chrono::{DateTime, Utc};

/// Normalize a stored temporal value to a canonical instant.
///
/// Profile documents have been written by several clients over time, so the
/// same field can come back as:
/// - a canonical instant
/// - the store's native timestamp
/// - a map with `seconds`/`nanoseconds` keys (a native timestamp that was
///   serialized as plain data)
/// - a raw epoch number in milliseconds
/// - a string holding RFC 3339 or epoch milliseconds
///
/// Anything else is `None`.
pub fn normalize_timestamp(value: &FieldValue) -> Option<DateTime<Utc>> {
    match value {
        FieldValue::Instant(instant) => Some(*instant),
        FieldValue::Timestamp(ts) => ts.to_instant(),
        FieldValue::Integer(millis) => DateTime::from_timestamp_millis(*millis),
        FieldValue::Double(millis) => from_fractional_millis(*millis),
        FieldValue::String(raw) => parse_timestamp_str(raw),
        FieldValue::Map(fields) => {
            let seconds = map_integer(fields, &["seconds", "_seconds"])?;
            let nanos = map_integer(fields, &["nanoseconds", "_nanoseconds", "nanos"]).unwrap_or(0);
            let nanos = u32::try_from(nanos).ok()?;
            StoreTimestamp::new(seconds, nanos).to_instant()
        }
        FieldValue::Null | FieldValue::Boolean(_) => None,
    }
}

fn parse_timestamp_str(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(millis) = raw.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis);
    }

    raw.parse::<f64>().ok().and_then(from_fractional_millis)
}

fn from_fractional_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}

fn map_integer(fields: &crate::Document, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|key| match fields.get(*key)? {
        FieldValue::Integer(value) => Some(*value),
        FieldValue::Double(value) if value.is_finite() => Some(value.trunc() as i64),
        _ => None,
    })
}
