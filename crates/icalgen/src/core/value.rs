//! Property value variants (RFC 5545 §3.3).

use super::{Date, DateTime, ParamMap};

/// A typed property value.
///
/// The `From` conversions let callers pass plain Rust and chrono values
/// straight to [`crate::IcalBuilder::emit`]; the wire form is decided by
/// the value formatter at emit time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// TEXT value, passed through without case changes. Embedded line
    /// breaks are rewritten to CRLF plus a two-space continuation prefix.
    Text(String),
    /// BOOLEAN value, rendered as `TRUE`/`FALSE`.
    Boolean(bool),
    /// DATE value, rendered as `YYYYMMDD`.
    Date(Date),
    /// DATE-TIME value, rendered as `YYYYMMDDTHHMMSS` with a `Z` suffix
    /// when the UTC flag is set.
    DateTime(DateTime),
    /// Multi-valued payload; elements are rendered recursively and
    /// comma-joined. A single-element list renders as its bare scalar.
    List(Vec<Value>),
    /// Named sub-fields (recurrence rules and similar), rendered as
    /// sorted `NAME=value` pairs joined with semicolons.
    Mapping(ParamMap),
    /// Unclassified payload carried by callers that bypassed the typed
    /// constructors. Rejected at format time rather than stringified, to
    /// keep the wire format byte-exact.
    Unknown(String),
}

impl Value {
    /// Returns the inner text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner boolean, if this is a boolean value.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Text(n.to_string())
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Self::Date(d)
    }
}

impl From<DateTime> for Value {
    fn from(dt: DateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<ParamMap> for Value {
    fn from(map: ParamMap) -> Self {
        Self::Mapping(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<chrono::NaiveDate> for Value {
    fn from(d: chrono::NaiveDate) -> Self {
        Self::Date(d.into())
    }
}

impl From<chrono::NaiveDateTime> for Value {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        Self::DateTime(dt.into())
    }
}

impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self::DateTime(dt.into())
    }
}
