//! Config file value conversion.
//!
//! Responsibilities:
//! - Convert a decoded `Value` into a field's declared type.
//!
//! Does NOT handle:
//! - Reading or decoding the file (see `decode.rs`).
//! - Environment values (see `env.rs`).
//!
//! Invariants:
//! - Every (field type, value kind) pair not listed below is a `Mismatch`.
//! - Durations are written as strings in the file and use the same grammar
//!   as the environment.
//! - String lists never fail: non-string elements become empty strings.

use super::error::ValueError;
use crate::bounds::{to_isize, to_usize};
use crate::duration::parse_duration;
use crate::types::{Slot, Value};

/// Convert `value` and write it into `slot`.
pub(crate) fn assign_from_file(value: &Value, slot: Slot<'_>) -> Result<(), ValueError> {
    match (slot, value) {
        (Slot::Text(field), Value::String(s)) => *field = s.clone(),
        (Slot::Bool(field), Value::Boolean(b)) => *field = *b,
        (Slot::Int(field), Value::Integer(i)) => *field = to_isize(*i)?,
        (Slot::Int64(field), Value::Integer(i)) => *field = *i,
        (Slot::Duration(field), Value::String(s)) => *field = parse_duration(s)?,
        // Negative integers are reinterpreted, not rejected. The environment
        // path parses unsigned text and does reject them.
        (Slot::Uint(field), Value::Integer(i)) => *field = to_usize(*i as u64)?,
        (Slot::Uint64(field), Value::Integer(i)) => *field = *i as u64,
        (Slot::Float(field), Value::Float(f)) => *field = *f,
        (Slot::Timestamp(field), Value::Datetime(dt)) => *field = *dt,
        (Slot::TextList(field), Value::Array(items)) => {
            *field = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    _ => String::new(),
                })
                .collect();
        }
        (slot, value) => {
            return Err(ValueError::Mismatch {
                declared: slot.kind(),
                actual: value.kind(),
            });
        }
    }
    Ok(())
}
