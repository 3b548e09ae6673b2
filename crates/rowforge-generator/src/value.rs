//! Raw values produced by generators, before literal rendering.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Datetime layout used everywhere values cross the sink boundary.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A raw value produced by a single generator call.
///
/// Rendering into sink literal syntax (quoting, NULL markers) is the
/// Formatter's job; generators only decide the value itself.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    DateTime(DateTime<Utc>),
    Uuid(Uuid),
    /// Sink-side "current time" marker, passed through unquoted.
    Now,
    /// Pre-rendered literal text emitted verbatim (choice lists).
    Raw(String),
}

impl GeneratedValue {
    /// The value's text without any quoting, as substituted into an
    /// explicit format template.
    pub fn plain_text(&self) -> String {
        match self {
            GeneratedValue::Null => "NULL".to_string(),
            GeneratedValue::Int(v) => v.to_string(),
            GeneratedValue::Float(v) => v.to_string(),
            GeneratedValue::Bool(true) => "1".to_string(),
            GeneratedValue::Bool(false) => "0".to_string(),
            GeneratedValue::Str(s) => s.clone(),
            GeneratedValue::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
            GeneratedValue::Uuid(u) => u.to_string(),
            GeneratedValue::Now => "NOW()".to_string(),
            GeneratedValue::Raw(s) => s.clone(),
        }
    }

    /// Default literal rendering: quoted for strings, datetimes and
    /// UUIDs, unquoted for everything else.
    pub fn sql_literal(&self) -> String {
        match self {
            GeneratedValue::Str(s) => format!("'{}'", s.replace('\'', "''")),
            GeneratedValue::DateTime(_) | GeneratedValue::Uuid(_) => {
                format!("'{}'", self.plain_text())
            }
            _ => self.plain_text(),
        }
    }
}
