//! Unsigned integer types for PostgreSQL.
//!
//! This crate re-exports the conversion routines for `uint1`, `uint2`,
//! `uint4`, `uint8` and `int1`:
//!
//! - [`TypeIo`] with the host-shaped `*in`/`*out`/`*recv`/`*send` functions
//! - [`Decode`]/[`Encode`] for working with Rust integers directly
//! - [`Error`] and [`Diagnostic`] for reporting failures to the host
//!
//! # Example
//!
//! ```rust
//! use pguint::prelude::*;
//!
//! let io = TypeIo::default();
//! let value = io.uint4in(Some(c"4294967295"))?;
//! assert_eq!(io.uint4out(value)?.as_bytes(), b"4294967295");
//!
//! let err = io.uint4in(Some(c"-1")).unwrap_err();
//! assert_eq!(err.sqlstate(), SqlState::InvalidTextRepresentation);
//! # Ok::<(), pguint::Error>(())
//! ```

pub use pguint_core::{Diagnostic, Error, IntType, Result, SqlState, Value, error};
pub use pguint_inout::{
    Decode, Encode, Format, Int1Narrowing, IoConfig, TypeIo, config, decode_value,
    decode_value_for, encode_value, parse, parse_bounded, parse_i64, parse_int_sized, parse_u64, types,
};

/// Commonly used items.
pub mod prelude {
    pub use crate::{
        Decode, Diagnostic, Encode, Error, Format, IntType, IoConfig, Result, SqlState, TypeIo,
        Value,
    };
}
