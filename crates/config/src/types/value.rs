//! Dynamically-typed values produced by a config file decoder.
//!
//! `Value` is a closed set of the kinds a structured config file can hold.
//! The binder matches on it exhaustively, so a decoder must map its own
//! representation onto these variants.

use std::collections::BTreeMap;
use std::fmt;

use time::OffsetDateTime;

/// A mapping of keys to decoded values.
pub type Table = BTreeMap<String, Value>;

/// A decoded config file value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Datetime(OffsetDateTime),
    Array(Vec<Value>),
    Table(Table),
}

/// The kind of a [`Value`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Boolean,
    Integer,
    Float,
    Datetime,
    Array,
    Table,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Datetime(_) => ValueKind::Datetime,
            Value::Array(_) => ValueKind::Array,
            Value::Table(_) => ValueKind::Table,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Datetime => "datetime",
            ValueKind::Array => "array",
            ValueKind::Table => "table",
        };
        f.write_str(name)
    }
}
