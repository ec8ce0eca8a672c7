//! Integer encoding (Rust → PostgreSQL).
//!
//! Text output is plain decimal with no locale-dependent grouping. Binary
//! output is the big-endian register value, exactly one type width long.

use std::fmt::{Display, Write};

use pguint_core::error::InternalErrorKind;
use pguint_core::{Error, IntType, Result, Value};

/// Wire format for values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Text format (human-readable strings)
    #[default]
    Text,
    /// Binary format (big-endian register value)
    Binary,
}

impl Format {
    /// Get the format code for the wire protocol (0 = text, 1 = binary).
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Format::Text => 0,
            Format::Binary => 1,
        }
    }

    /// Create format from wire protocol code.
    #[must_use]
    pub const fn from_code(code: i16) -> Self {
        match code {
            1 => Format::Binary,
            _ => Format::Text,
        }
    }
}

/// Encode a value to its text representation.
pub trait TextEncode {
    /// Encode self as decimal text.
    fn encode_text(&self) -> String;
}

/// Encode a value to its binary representation.
pub trait BinaryEncode {
    /// Append the big-endian bytes of self to `buf`.
    fn encode_binary(&self, buf: &mut Vec<u8>);
}

/// Combined encoding trait that supports both formats.
pub trait Encode: TextEncode + BinaryEncode {
    /// The SQL type this Rust type encodes as.
    fn int_type() -> IntType;

    /// Encode to the specified format.
    fn encode(&self, format: Format, buf: &mut Vec<u8>) {
        match format {
            Format::Text => buf.extend(self.encode_text().as_bytes()),
            Format::Binary => self.encode_binary(buf),
        }
    }
}

/// Format into a buffer sized for the widest value of `ty`.
fn format_decimal(value: impl Display, ty: IntType) -> String {
    let mut out = String::with_capacity(ty.output_len());
    // Writing into a String cannot fail.
    let _ = write!(out, "{value}");
    out
}

macro_rules! impl_encode {
    ($($rust:ty => $ty:expr),* $(,)?) => {
        $(
            impl TextEncode for $rust {
                fn encode_text(&self) -> String {
                    format_decimal(self, $ty)
                }
            }

            impl BinaryEncode for $rust {
                fn encode_binary(&self, buf: &mut Vec<u8>) {
                    buf.extend_from_slice(&self.to_be_bytes());
                }
            }

            impl Encode for $rust {
                fn int_type() -> IntType {
                    $ty
                }
            }
        )*
    };
}

impl_encode! {
    i8 => IntType::Int1,
    u8 => IntType::Uint1,
    u16 => IntType::Uint2,
    u32 => IntType::Uint4,
    u64 => IntType::Uint8,
}

/// Encode a dynamic value in the given format.
///
/// SQL NULL has no representation of its own; callers signal it out of band,
/// so handing one in is an internal error.
pub fn encode_value(value: &Value, format: Format, buf: &mut Vec<u8>) -> Result<()> {
    match *value {
        Value::Null => {
            return Err(Error::internal(
                InternalErrorKind::NullValue,
                "cannot encode a null value",
            ));
        }
        Value::Int1(v) => v.encode(format, buf),
        Value::Uint1(v) => v.encode(format, buf),
        Value::Uint2(v) => v.encode(format, buf),
        Value::Uint4(v) => v.encode(format, buf),
        Value::Uint8(v) => v.encode(format, buf),
    }
    Ok(())
}
