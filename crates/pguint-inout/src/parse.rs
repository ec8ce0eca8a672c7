//! Bounded decimal parsing.
//!
//! The unsigned parsers follow the host's `strtoul`-based contract: leading
//! whitespace and a `+` are tolerated, a `-` anywhere in the input is a syntax
//! error, the magnitude is range-checked against the target width before any
//! trailing content is looked at, and only whitespace may follow the digits.
//!
//! The signed parsers reproduce the host utilities that `int1in` delegates
//! to: the 64-bit parser used by current servers and the legacy sized parser
//! used before version 15.

// Narrowing casts below happen only after an explicit range check.
#![allow(clippy::cast_possible_truncation)]

use pguint_core::error::InternalErrorKind;
use pguint_core::{Error, IntType, Result};

const UNSIGNED_INTEGER: &str = "unsigned integer";
const TYPE_BIGINT: &str = "type bigint";
const TYPE_INTEGER: &str = "type integer";

/// `isspace` in the C locale.
pub(crate) const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// A decimal number as `strtoull(s, &end, 10)` sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scan<'a> {
    negative: bool,
    /// Saturates at `u64::MAX` once `overflow` is set
    magnitude: u64,
    overflow: bool,
    digits: usize,
    /// Everything after the last digit; the whole input when no digits were found
    rest: &'a [u8],
}

fn scan_decimal(input: &[u8]) -> Scan<'_> {
    let mut pos = input.iter().take_while(|&&b| is_space(b)).count();

    let mut negative = false;
    if let Some(&sign @ (b'+' | b'-')) = input.get(pos) {
        negative = sign == b'-';
        pos += 1;
    }

    let mut magnitude: u64 = 0;
    let mut overflow = false;
    let mut digits = 0;
    while let Some(&b) = input.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        if !overflow {
            match magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(u64::from(b - b'0')))
            {
                Some(m) => magnitude = m,
                None => {
                    overflow = true;
                    magnitude = u64::MAX;
                }
            }
        }
        digits += 1;
        pos += 1;
    }

    Scan {
        negative,
        magnitude,
        overflow,
        digits,
        rest: if digits == 0 { input } else { &input[pos..] },
    }
}

/// Only whitespace may follow the number.
fn only_trailing_space(rest: &[u8]) -> bool {
    rest.iter().all(|&b| is_space(b))
}

fn check_unsigned_syntax(input: &[u8]) -> Result<()> {
    if input.is_empty() || input.contains(&b'-') {
        return Err(Error::syntax(UNSIGNED_INTEGER, input));
    }
    Ok(())
}

/// Parse an unsigned integer of `size` bytes (1, 2 or 4).
///
/// Any other size is a defect in the caller and reported as an internal error.
/// Input made only of whitespace has no digits and nothing left over, so it
/// reads as zero.
pub fn parse_bounded(input: &[u8], size: usize) -> Result<u32> {
    check_unsigned_syntax(input)?;

    let scan = scan_decimal(input);

    let ty = match size {
        4 => IntType::Uint4,
        2 => IntType::Uint2,
        1 => IntType::Uint1,
        _ => {
            return Err(Error::internal(
                InternalErrorKind::UnsupportedSize,
                format!("unsupported result size: {size}"),
            ));
        }
    };

    if scan.overflow || scan.magnitude > ty.max_value() {
        return Err(Error::range(ty.range_target(), input));
    }

    if !only_trailing_space(scan.rest) {
        return Err(Error::syntax(UNSIGNED_INTEGER, input));
    }

    Ok(scan.magnitude as u32)
}

/// Parse a full-width unsigned 64-bit integer.
pub fn parse_u64(input: &[u8]) -> Result<u64> {
    check_unsigned_syntax(input)?;

    let scan = scan_decimal(input);
    if scan.overflow {
        return Err(Error::range(IntType::Uint8.range_target(), input));
    }

    if !only_trailing_space(scan.rest) {
        return Err(Error::syntax(UNSIGNED_INTEGER, input));
    }

    Ok(scan.magnitude)
}

/// Signed 64-bit magnitude check shared by the signed parsers.
fn signed_value(scan: &Scan<'_>) -> Option<i64> {
    if scan.overflow {
        return None;
    }
    if scan.negative {
        if scan.magnitude == 1 << 63 {
            Some(i64::MIN)
        } else {
            i64::try_from(scan.magnitude).ok().map(|m| -m)
        }
    } else {
        i64::try_from(scan.magnitude).ok()
    }
}

/// Parse a signed 64-bit integer the way the host's `bigint` input does.
///
/// Leading and trailing whitespace and a single sign are allowed; at least one
/// digit is required. Only decimal digits are accepted: the `0x`/`0o`/`0b`
/// prefixes and `_` separators that servers from version 16 also take are
/// rejected as invalid syntax.
pub fn parse_i64(input: &[u8]) -> Result<i64> {
    let scan = scan_decimal(input);
    if scan.digits == 0 {
        return Err(Error::syntax(TYPE_BIGINT, input));
    }

    let Some(value) = signed_value(&scan) else {
        return Err(Error::range(TYPE_BIGINT, input));
    };

    if !only_trailing_space(scan.rest) {
        return Err(Error::syntax(TYPE_BIGINT, input));
    }

    Ok(value)
}

/// Parse a signed integer of `size` bytes (1, 2 or 4) with the legacy
/// sized-integer rules.
pub fn parse_int_sized(input: &[u8], size: usize) -> Result<i32> {
    if input.is_empty() {
        return Err(Error::syntax(TYPE_INTEGER, input));
    }

    let scan = scan_decimal(input);
    if scan.digits == 0 {
        return Err(Error::syntax(TYPE_INTEGER, input));
    }

    let (min, max, target) = match size {
        4 => (i64::from(i32::MIN), i64::from(i32::MAX), "type integer"),
        2 => (i64::from(i16::MIN), i64::from(i16::MAX), "type smallint"),
        1 => (i64::from(i8::MIN), i64::from(i8::MAX), "8-bit integer"),
        _ => {
            return Err(Error::internal(
                InternalErrorKind::UnsupportedSize,
                format!("unsupported result size: {size}"),
            ));
        }
    };

    let value = match signed_value(&scan) {
        Some(v) if (min..=max).contains(&v) => v,
        _ => return Err(Error::range(target, input)),
    };

    if !only_trailing_space(scan.rest) {
        return Err(Error::syntax(TYPE_INTEGER, input));
    }

    Ok(value as i32)
}
