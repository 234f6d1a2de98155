//! Typed-value JSON used by the hosted document store's REST API.
//!
//! Each value is an object with exactly one key naming its type, e.g.
//! `{"stringValue": "a"}` or `{"timestampValue": "2024-01-01T00:00:00Z"}`.
//! Integers travel as decimal strings.

use crate::{Document, FieldValue, StoreError, StoreResult, StoreTimestamp};

use chrono::{DateTime, SecondsFormat};
use log::debug;
use serde_json::{Map, Value, json};

pub fn encode_fields(fields: &Document) -> StoreResult<Value> {
    let mut encoded = Map::new();
    for (name, value) in fields {
        encoded.insert(name.clone(), encode_value(value)?);
    }
    Ok(Value::Object(encoded))
}

pub fn encode_value(value: &FieldValue) -> StoreResult<Value> {
    let encoded = match value {
        FieldValue::Null => json!({ "nullValue": null }),
        FieldValue::Boolean(b) => json!({ "booleanValue": b }),
        FieldValue::Integer(i) => json!({ "integerValue": i.to_string() }),
        FieldValue::Double(d) => json!({ "doubleValue": d }),
        FieldValue::String(s) => json!({ "stringValue": s }),
        FieldValue::Timestamp(ts) => {
            let instant = ts.to_instant().ok_or_else(|| {
                StoreError::encoding(format!("timestamp out of range: {}s", ts.seconds))
            })?;
            json!({ "timestampValue": instant.to_rfc3339_opts(SecondsFormat::AutoSi, true) })
        }
        FieldValue::Instant(instant) => {
            json!({ "timestampValue": instant.to_rfc3339_opts(SecondsFormat::AutoSi, true) })
        }
        FieldValue::Map(fields) => json!({ "mapValue": { "fields": encode_fields(fields)? } }),
    };
    Ok(encoded)
}

/// Decode the `fields` object of a document resource. A missing object is an
/// empty document.
pub fn decode_fields(fields: Option<&Value>) -> StoreResult<Document> {
    let Some(fields) = fields else {
        return Ok(Document::new());
    };
    let object = fields
        .as_object()
        .ok_or_else(|| StoreError::encoding("document fields is not an object"))?;

    let mut document = Document::new();
    for (name, value) in object {
        document.insert(name.clone(), decode_value(value)?);
    }
    Ok(document)
}

pub fn decode_value(value: &Value) -> StoreResult<FieldValue> {
    let object = value
        .as_object()
        .ok_or_else(|| StoreError::encoding(format!("value is not an object: {value}")))?;

    let Some((kind, inner)) = object.iter().next() else {
        return Err(StoreError::encoding("empty value object"));
    };

    let decoded = match kind.as_str() {
        "nullValue" => FieldValue::Null,
        "booleanValue" => FieldValue::Boolean(
            inner
                .as_bool()
                .ok_or_else(|| StoreError::encoding("booleanValue is not a bool"))?,
        ),
        "integerValue" => FieldValue::Integer(decode_integer(inner)?),
        "doubleValue" => FieldValue::Double(
            inner
                .as_f64()
                .ok_or_else(|| StoreError::encoding("doubleValue is not a number"))?,
        ),
        "stringValue" => FieldValue::String(
            inner
                .as_str()
                .ok_or_else(|| StoreError::encoding("stringValue is not a string"))?
                .to_string(),
        ),
        "timestampValue" => {
            let raw = inner
                .as_str()
                .ok_or_else(|| StoreError::encoding("timestampValue is not a string"))?;
            let instant = DateTime::parse_from_rfc3339(raw)
                .map_err(|e| StoreError::encoding(format!("timestampValue '{raw}': {e}")))?;
            FieldValue::Timestamp(StoreTimestamp::new(
                instant.timestamp(),
                instant.timestamp_subsec_nanos(),
            ))
        }
        "mapValue" => FieldValue::Map(decode_fields(inner.get("fields"))?),
        other => {
            debug!("Ignoring unsupported document value type {other}");
            FieldValue::Null
        }
    };
    Ok(decoded)
}

fn decode_integer(inner: &Value) -> StoreResult<i64> {
    match inner {
        Value::String(s) => s
            .parse()
            .map_err(|e| StoreError::encoding(format!("integerValue '{s}': {e}"))),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| StoreError::encoding(format!("integerValue {n} out of range"))),
        other => Err(StoreError::encoding(format!(
            "integerValue has unexpected type: {other}"
        ))),
    }
}
