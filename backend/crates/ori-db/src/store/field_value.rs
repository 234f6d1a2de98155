use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// A stored document: field name -> value.
pub type Document = BTreeMap<String, FieldValue>;

/// Value of one document field, in whichever representation the store hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    /// The store's native temporal type.
    Timestamp(StoreTimestamp),
    /// A value that is already a canonical instant.
    Instant(DateTime<Utc>),
    Map(Document),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Document> {
        match self {
            Self::Map(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<StoreTimestamp> for FieldValue {
    fn from(value: StoreTimestamp) -> Self {
        Self::Timestamp(value)
    }
}

/// Native timestamp: seconds since the Unix epoch plus a nanosecond fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StoreTimestamp {
    pub seconds: i64,
    pub nanos: u32,
}

impl StoreTimestamp {
    pub fn new(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self {
            seconds: instant.timestamp(),
            nanos: instant.timestamp_subsec_nanos(),
        }
    }

    /// Convert to a canonical instant. `None` when out of range.
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }
}
