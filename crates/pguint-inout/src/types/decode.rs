//! Integer decoding (PostgreSQL → Rust).
//!
//! This module provides traits and implementations for decoding the text and
//! binary representations of the supported integer types.

// Narrowing casts below happen only after the parser's range check, except
// for the deliberate `int1` truncation.
#![allow(clippy::cast_possible_truncation)]

use pguint_core::{Error, IntType, Result, Value};

use super::encode::Format;
use crate::config::Int1Narrowing;
use crate::parse::{parse_bounded, parse_i64, parse_int_sized, parse_u64};

/// Decode a value from its text representation.
pub trait TextDecode: Sized {
    /// Decode from text; the bytes need not be valid UTF-8.
    fn decode_text(s: &[u8]) -> Result<Self>;
}

/// Decode a value from its binary representation.
pub trait BinaryDecode: Sized {
    /// Decode from exactly one type width of big-endian bytes.
    fn decode_binary(data: &[u8]) -> Result<Self>;
}

/// Combined decoding trait that supports both formats.
pub trait Decode: TextDecode + BinaryDecode {
    /// Decode from the specified format.
    fn decode(data: &[u8], format: Format) -> Result<Self> {
        match format {
            Format::Text => Self::decode_text(data),
            Format::Binary => Self::decode_binary(data),
        }
    }
}

/// Copy exactly `N` bytes out of `data`.
fn fixed_width<const N: usize>(data: &[u8]) -> Result<[u8; N]> {
    data.try_into()
        .map_err(|_| Error::binary_length(N, data.len()))
}

// ==================== Signed ====================

/// Decode `int1` text with the given narrowing rule.
pub fn decode_int1(s: &[u8], narrowing: Int1Narrowing) -> Result<i8> {
    match narrowing {
        Int1Narrowing::Truncate => {
            let wide = parse_i64(s)?;
            let narrow = wide as i8;
            if i64::from(narrow) != wide {
                tracing::warn!(
                    value = wide,
                    truncated_to = narrow,
                    "int1 input exceeds 8 bits; keeping low-order bits"
                );
            }
            Ok(narrow)
        }
        Int1Narrowing::Checked => Ok(parse_int_sized(s, 1)? as i8),
    }
}

impl TextDecode for i8 {
    fn decode_text(s: &[u8]) -> Result<Self> {
        decode_int1(s, Int1Narrowing::default())
    }
}

impl BinaryDecode for i8 {
    fn decode_binary(data: &[u8]) -> Result<Self> {
        Ok(i8::from_be_bytes(fixed_width(data)?))
    }
}

impl Decode for i8 {}

// ==================== Unsigned ====================

impl TextDecode for u8 {
    fn decode_text(s: &[u8]) -> Result<Self> {
        Ok(parse_bounded(s, size_of::<u8>())? as u8)
    }
}

impl BinaryDecode for u8 {
    fn decode_binary(data: &[u8]) -> Result<Self> {
        Ok(u8::from_be_bytes(fixed_width(data)?))
    }
}

impl Decode for u8 {}

impl TextDecode for u16 {
    fn decode_text(s: &[u8]) -> Result<Self> {
        Ok(parse_bounded(s, size_of::<u16>())? as u16)
    }
}

impl BinaryDecode for u16 {
    fn decode_binary(data: &[u8]) -> Result<Self> {
        Ok(u16::from_be_bytes(fixed_width(data)?))
    }
}

impl Decode for u16 {}

impl TextDecode for u32 {
    fn decode_text(s: &[u8]) -> Result<Self> {
        parse_bounded(s, size_of::<u32>())
    }
}

impl BinaryDecode for u32 {
    fn decode_binary(data: &[u8]) -> Result<Self> {
        Ok(u32::from_be_bytes(fixed_width(data)?))
    }
}

impl Decode for u32 {}

impl TextDecode for u64 {
    fn decode_text(s: &[u8]) -> Result<Self> {
        parse_u64(s)
    }
}

impl BinaryDecode for u64 {
    fn decode_binary(data: &[u8]) -> Result<Self> {
        Ok(u64::from_be_bytes(fixed_width(data)?))
    }
}

impl Decode for u64 {}

// ==================== Value Decoding ====================

/// Decode a value of type `ty` to a dynamic Value.
///
/// `int1` text is narrowed the way current servers do it
/// ([`Int1Narrowing::Truncate`]); use [`decode_value_for`] to follow a
/// configured host instead.
///
/// # Arguments
/// * `ty` - The integer type of the value
/// * `data` - The raw data bytes (None for NULL)
/// * `format` - Wire format (text or binary)
pub fn decode_value(ty: IntType, data: Option<&[u8]>, format: Format) -> Result<Value> {
    decode_value_for(ty, data, format, Int1Narrowing::default())
}

/// Like [`decode_value`], with an explicit `int1` narrowing rule.
pub fn decode_value_for(
    ty: IntType,
    data: Option<&[u8]>,
    format: Format,
    narrowing: Int1Narrowing,
) -> Result<Value> {
    let Some(data) = data else {
        return Ok(Value::Null);
    };

    Ok(match ty {
        IntType::Int1 => Value::Int1(match format {
            Format::Text => decode_int1(data, narrowing)?,
            Format::Binary => i8::decode_binary(data)?,
        }),
        IntType::Uint1 => Value::Uint1(u8::decode(data, format)?),
        IntType::Uint2 => Value::Uint2(u16::decode(data, format)?),
        IntType::Uint4 => Value::Uint4(u32::decode(data, format)?),
        IntType::Uint8 => Value::Uint8(u64::decode(data, format)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_text_decoding() {
        assert_eq!(u8::decode_text(b"255").unwrap(), 255);
        assert_eq!(u16::decode_text(b"65535").unwrap(), 65535);
        assert_eq!(u32::decode_text(b"42  ").unwrap(), 42);
        assert_eq!(u64::decode_text(b"18446744073709551615").unwrap(), u64::MAX);

        assert!(u8::decode_text(b"256").unwrap_err().is_out_of_range());
        assert!(u16::decode_text(b"-1").unwrap_err().is_invalid_syntax());
    }

    #[test]
    fn test_int1_truncates_like_bigint_input() {
        assert_eq!(decode_int1(b"-128", Int1Narrowing::Truncate).unwrap(), -128);
        assert_eq!(decode_int1(b"200", Int1Narrowing::Truncate).unwrap(), -56);
        assert_eq!(decode_int1(b"256", Int1Narrowing::Truncate).unwrap(), 0);

        let err = decode_int1(b"abc", Int1Narrowing::Truncate).unwrap_err();
        assert_eq!(err.to_string(), "invalid input syntax for type bigint: \"abc\"");
    }

    #[test]
    fn test_int1_checked_rejects_overflow() {
        assert_eq!(decode_int1(b" -5 ", Int1Narrowing::Checked).unwrap(), -5);
        let err = decode_int1(b"200", Int1Narrowing::Checked).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(
            err.to_string(),
            "value \"200\" is out of range for 8-bit integer"
        );
    }

    #[test]
    fn test_binary_decoding() {
        assert_eq!(u8::decode_binary(&[7]).unwrap(), 7);
        assert_eq!(i8::decode_binary(&[0x80]).unwrap(), -128);
        assert_eq!(u16::decode_binary(&[1, 0]).unwrap(), 256);
        assert_eq!(u32::decode_binary(&[0, 0, 1, 0]).unwrap(), 256);
        assert_eq!(u64::decode_binary(&[0xFF; 8]).unwrap(), u64::MAX);
    }

    #[test]
    fn test_binary_length_mismatch() {
        let err = u32::decode_binary(&[0, 1]).unwrap_err();
        assert_eq!(err.sqlstate().code(), "08P01");
        assert_eq!(err.to_string(), "insufficient data left in message");

        let err = u8::decode_binary(&[0, 1]).unwrap_err();
        assert_eq!(err.to_string(), "invalid message format");
    }

    #[test]
    fn test_decode_value_null() {
        let value = decode_value(IntType::Uint4, None, Format::Binary).unwrap();
        assert!(matches!(value, Value::Null));
    }

    #[test]
    fn test_decode_value_int1_narrowing() {
        let value = decode_value(IntType::Int1, Some(b"200"), Format::Text).unwrap();
        assert_eq!(value, Value::Int1(-56));

        let checked = Int1Narrowing::Checked;
        let err = decode_value_for(IntType::Int1, Some(b"200"), Format::Text, checked).unwrap_err();
        assert!(err.is_out_of_range());

        let value = decode_value_for(IntType::Int1, Some(&[0xC8]), Format::Binary, checked).unwrap();
        assert_eq!(value, Value::Int1(-56));
    }

    #[test]
    fn test_decode_value_by_format() {
        let value = decode_value(IntType::Uint2, Some(b"513"), Format::Text).unwrap();
        assert_eq!(value, Value::Uint2(513));

        let value = decode_value(IntType::Uint2, Some(&[2, 1]), Format::Binary).unwrap();
        assert_eq!(value, Value::Uint2(513));

        let err = decode_value(IntType::Uint1, Some(b"300"), Format::Text).unwrap_err();
        assert!(err.is_out_of_range());
    }
}
