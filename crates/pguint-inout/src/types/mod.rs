//! Integer type conversion.
//!
//! This module provides:
//! - Text and binary decoding of `int1`, `uint1`, `uint2`, `uint4`, `uint8`
//! - The symmetric encoders
//! - Format-driven dispatch over dynamic `Value`s
//!
//! # Example
//!
//! ```rust
//! use pguint_core::{IntType, Value};
//! use pguint_inout::types::{Format, decode_value};
//!
//! let value = decode_value(IntType::Uint2, Some(b"65535"), Format::Text)?;
//! assert_eq!(value, Value::Uint2(65535));
//! # Ok::<(), pguint_core::Error>(())
//! ```

pub mod decode;
pub mod encode;

pub use decode::{BinaryDecode, Decode, TextDecode, decode_int1, decode_value, decode_value_for};
pub use encode::{BinaryEncode, Encode, Format, TextEncode, encode_value};
