//! Core types for pguint.
//!
//! This crate provides the foundations shared by the conversion routines:
//!
//! - `Error` with SQLSTATE classification and host diagnostics
//! - `IntType` descriptors for `int1`, `uint1`, `uint2`, `uint4` and `uint8`
//! - `Value` for format-driven decoding and encoding

pub mod error;
pub mod types;
pub mod value;

pub use error::{Diagnostic, Error, InternalErrorKind, Result, SqlState};
pub use types::IntType;
pub use value::Value;
