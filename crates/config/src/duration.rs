//! Human-readable duration parsing.
//!
//! Grammar: an optional sign followed by one or more `<number><unit>` terms,
//! e.g. `"15s"`, `"1h30m"`, `"-1.5h"`, `"300ms"`. Numbers may carry a
//! fractional part. Units are `ns`, `us` (also `µs`/`μs`), `ms`, `s`, `m` and
//! `h`. The bare string `"0"` is accepted without a unit.
//!
//! The result is a signed nanosecond count, so the representable range is
//! that of an `i64` number of nanoseconds (roughly 292 years).

use thiserror::Error;
use time::Duration;

/// Errors that can occur while parsing a duration string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration {input:?}")]
    Invalid { input: String },

    #[error("missing unit in duration {input:?}")]
    MissingUnit { input: String },

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {input:?} is out of range")]
    OutOfRange { input: String },
}

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Parse a duration string such as `"15s"` or `"1h30m"`.
///
/// # Examples
///
/// ```
/// use shift_config::parse_duration;
/// use time::Duration;
///
/// assert_eq!(parse_duration("15s").unwrap(), Duration::seconds(15));
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
/// assert!(parse_duration("15").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid {
        input: input.to_string(),
    };
    let out_of_range = || DurationError::OutOfRange {
        input: input.to_string(),
    };

    let mut rest = input;
    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let int_len = leading_digits(rest);
        let (int_part, after_int) = rest.split_at(int_len);
        rest = after_int;

        let mut frac_part = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = leading_digits(after_dot);
            frac_part = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit {
                input: input.to_string(),
            });
        }
        let (unit, after_unit) = rest.split_at(unit_len);
        rest = after_unit;

        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| out_of_range())?
        };
        let mut term = whole.checked_mul(scale).ok_or_else(out_of_range)?;
        term = term
            .checked_add(fraction_nanos(frac_part, scale))
            .ok_or_else(out_of_range)?;
        total = total.checked_add(term).ok_or_else(out_of_range)?;
    }

    let signed = if negative {
        -i128::from(total)
    } else {
        i128::from(total)
    };
    let nanos = i64::try_from(signed).map_err(|_| out_of_range())?;
    Ok(Duration::nanoseconds(nanos))
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Scale a fractional digit string by `scale` nanoseconds, truncating.
///
/// Digits beyond what fits in the accumulator are dropped; they are far below
/// nanosecond precision.
fn fraction_nanos(digits: &str, scale: u64) -> u64 {
    let mut numerator: u64 = 0;
    let mut denominator: f64 = 1.0;
    for b in digits.bytes() {
        if numerator > (u64::MAX >> 1) / 10 {
            break;
        }
        numerator = numerator * 10 + u64::from(b - b'0');
        denominator *= 10.0;
    }
    (numerator as f64 * (scale as f64 / denominator)) as u64
}
