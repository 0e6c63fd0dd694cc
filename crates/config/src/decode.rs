//! Config file decoding.
//!
//! Responsibilities:
//! - Define the `Decoder` seam the loader reads files through.
//! - Provide `TomlDecoder`, which maps a TOML document onto `Value`.
//!
//! Does NOT handle:
//! - Selecting the environment section (see `loader::builder`).
//! - Converting values to field types (see `loader::file`).
//!
//! Invariants:
//! - A missing file is reported as `DecodeError::NotFound` and nothing else.
//! - Offset date-times keep their offset; local date-times and local dates
//!   are taken as UTC. A bare local time cannot be represented and is an error.

use std::path::{Path, PathBuf};

use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::types::{Table, Value};

/// Errors reported by a [`Decoder`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("config file not found at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },

    #[error("unsupported datetime {value} in config file at {path}")]
    Datetime { path: PathBuf, value: String },
}

impl DecodeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DecodeError::NotFound { .. })
    }
}

/// Turns a config file into a generic table of values.
pub trait Decoder {
    fn decode(&self, path: &Path) -> Result<Table, DecodeError>;
}

/// Decoder for TOML config files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlDecoder;

impl Decoder for TomlDecoder {
    fn decode(&self, path: &Path) -> Result<Table, DecodeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DecodeError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DecodeError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        decode_toml_str(&content, path)
    }
}

/// Decode TOML text; `path` is only used for error context.
pub fn decode_toml_str(content: &str, path: &Path) -> Result<Table, DecodeError> {
    let document: toml::Table = toml::from_str(content).map_err(|e| DecodeError::Parse {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    convert_table(document, path)
}

fn convert_table(table: toml::Table, path: &Path) -> Result<Table, DecodeError> {
    table
        .into_iter()
        .map(|(key, value)| Ok((key, convert_value(value, path)?)))
        .collect()
}

fn convert_value(value: toml::Value, path: &Path) -> Result<Value, DecodeError> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Integer(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Boolean(b),
        toml::Value::Datetime(dt) => Value::Datetime(convert_datetime(&dt, path)?),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| convert_value(item, path))
                .collect::<Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Value::Table(convert_table(table, path)?),
    })
}

fn convert_datetime(
    dt: &toml::value::Datetime,
    path: &Path,
) -> Result<OffsetDateTime, DecodeError> {
    let text = dt.to_string();
    let rfc3339 = match (dt.date.is_some(), dt.time.is_some(), dt.offset.is_some()) {
        (true, true, true) => text.clone(),
        (true, true, false) => format!("{text}Z"),
        (true, false, _) => format!("{text}T00:00:00Z"),
        (false, _, _) => {
            return Err(DecodeError::Datetime {
                path: path.to_path_buf(),
                value: text,
            });
        }
    };

    OffsetDateTime::parse(&rfc3339, &Rfc3339).map_err(|_| DecodeError::Datetime {
        path: path.to_path_buf(),
        value: text,
    })
}
