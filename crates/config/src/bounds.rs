//! Bounds-checked narrowing of 64-bit integers to the native width.
//!
//! The width is a parameter so the 32-bit rules can be exercised on a 64-bit
//! host; `to_isize` and `to_usize` pass the real native width.

use crate::loader::ValueError;

/// Check that `value` fits in a signed integer of `bits` bits.
pub fn narrow_signed(value: i64, bits: u32) -> Result<i64, ValueError> {
    if bits >= i64::BITS {
        return Ok(value);
    }

    let max = (1i64 << bits.saturating_sub(1)) - 1;
    let min = -max - 1;
    if bits == 0 || value > max || value < min {
        return Err(ValueError::Overflow {
            value: value.to_string(),
            bits,
        });
    }

    Ok(value)
}

/// Check that `value` fits in an unsigned integer of `bits` bits.
pub fn narrow_unsigned(value: u64, bits: u32) -> Result<u64, ValueError> {
    if bits >= u64::BITS {
        return Ok(value);
    }

    let max = (1u64 << bits) - 1;
    if value > max {
        return Err(ValueError::Overflow {
            value: value.to_string(),
            bits,
        });
    }

    Ok(value)
}

/// Narrow to `isize`, failing when the platform's `isize` is too small.
pub fn to_isize(value: i64) -> Result<isize, ValueError> {
    let checked = narrow_signed(value, isize::BITS)?;
    isize::try_from(checked).map_err(|_| ValueError::Overflow {
        value: value.to_string(),
        bits: isize::BITS,
    })
}

/// Narrow to `usize`, failing when the platform's `usize` is too small.
pub fn to_usize(value: u64) -> Result<usize, ValueError> {
    let checked = narrow_unsigned(value, usize::BITS)?;
    usize::try_from(checked).map_err(|_| ValueError::Overflow {
        value: value.to_string(),
        bits: usize::BITS,
    })
}
