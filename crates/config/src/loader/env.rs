//! Environment variable value parsing.
//!
//! Responsibilities:
//! - Convert a raw environment string into a field's declared type.
//!
//! Does NOT handle:
//! - Deciding whether the environment has a value (see `bind.rs`).
//! - Values from the config file (see `file.rs`).
//!
//! Invariants:
//! - Booleans are exactly `"true"` or `"false"`; nothing else is accepted.
//! - Native-width integers are parsed at 64 bits and then narrowed.
//! - String lists cannot come from the environment.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::error::ValueError;
use crate::bounds::{to_isize, to_usize};
use crate::duration::parse_duration;
use crate::types::Slot;

/// Parse `raw` and write it into `slot`.
pub(crate) fn assign_from_env(raw: &str, slot: Slot<'_>) -> Result<(), ValueError> {
    match slot {
        Slot::Text(field) => *field = raw.to_string(),
        Slot::Bool(field) => *field = parse_bool(raw)?,
        Slot::Int(field) => *field = to_isize(parse_i64(raw)?)?,
        Slot::Int64(field) => *field = parse_i64(raw)?,
        Slot::Duration(field) => *field = parse_duration(raw)?,
        Slot::Uint(field) => *field = to_usize(parse_u64(raw)?)?,
        Slot::Uint64(field) => *field = parse_u64(raw)?,
        Slot::Float(field) => *field = parse_f64(raw)?,
        Slot::Timestamp(field) => *field = parse_timestamp(raw)?,
        slot @ Slot::TextList(_) => {
            return Err(ValueError::Unsupported { kind: slot.kind() });
        }
    }
    Ok(())
}

fn parse_bool(raw: &str) -> Result<bool, ValueError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValueError::InvalidBool {
            value: raw.to_string(),
        }),
    }
}

fn parse_i64(raw: &str) -> Result<i64, ValueError> {
    raw.parse().map_err(|source| ValueError::InvalidInt {
        value: raw.to_string(),
        source,
    })
}

fn parse_u64(raw: &str) -> Result<u64, ValueError> {
    raw.parse().map_err(|source| ValueError::InvalidInt {
        value: raw.to_string(),
        source,
    })
}

fn parse_f64(raw: &str) -> Result<f64, ValueError> {
    raw.parse().map_err(|source| ValueError::InvalidFloat {
        value: raw.to_string(),
        source,
    })
}

fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, ValueError> {
    OffsetDateTime::parse(raw, &Rfc3339).map_err(|source| ValueError::InvalidTimestamp {
        value: raw.to_string(),
        source,
    })
}
