//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define `ValueError` for failures converting one value to a field type.
//! - Define `ConfigError`, the error returned from a load call.
//!
//! Does NOT handle:
//! - Decoder failures beyond wrapping them (see `decode.rs`).
//! - Duration grammar failures beyond wrapping them (see `duration.rs`).
//!
//! Invariants:
//! - Every value failure surfaces wrapped in `ConfigError::Field` with the
//!   resolved key of the offending field.
//! - Parse failures quote the raw text that failed. Values that bind
//!   successfully never appear in errors or logs.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::decode::DecodeError;
use crate::duration::DurationError;
use crate::environment::EnvError;
use crate::types::{FieldKind, ValueKind};

/// Failure converting a single value to a field's declared type.
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("invalid value for bool, must be \"true\" or \"false\": {value}")]
    InvalidBool { value: String },

    #[error("invalid integer {value:?}: {source}")]
    InvalidInt {
        value: String,
        source: ParseIntError,
    },

    #[error("invalid float {value:?}: {source}")]
    InvalidFloat {
        value: String,
        source: ParseFloatError,
    },

    #[error("invalid RFC 3339 timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        source: time::error::Parse,
    },

    #[error(transparent)]
    InvalidDuration(#[from] DurationError),

    #[error("integer {value} does not fit in {bits} bits")]
    Overflow { value: String, bits: u32 },

    #[error("unsupported field type {kind} for environment values")]
    Unsupported { kind: FieldKind },

    #[error("unsupported conversion {declared} -> {actual}")]
    Mismatch {
        declared: FieldKind,
        actual: ValueKind,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("environment section '{environment}' must be a table, found {actual}")]
    InvalidSection {
        environment: String,
        actual: ValueKind,
    },

    #[error("failed to assign key {key}: {source}")]
    Field {
        key: String,
        #[source]
        source: ValueError,
    },
}

impl ConfigError {
    /// The value failure behind this error, if it came from a field.
    pub fn value_error(&self) -> Option<&ValueError> {
        match self {
            ConfigError::Field { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The resolved key of the field that failed, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::Field { key, .. } => Some(key),
            _ => None,
        }
    }
}
