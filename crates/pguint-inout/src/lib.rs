//! Input/output routines for PostgreSQL unsigned integer types.
//!
//! `pguint-inout` converts between the text and binary representations of
//! `uint1`, `uint2`, `uint4`, `uint8` and the signed `int1`:
//!
//! - Bounded decimal parsing with sign rejection, range checks and trailing
//!   whitespace tolerance
//! - Decimal formatting into buffers sized for each type
//! - Big-endian send/receive
//! - Host-shaped entry points (`uint4in`, `uint4out`, ...) on [`TypeIo`]
//!
//! Every failure is reported as a [`pguint_core::Error`] carrying the SQLSTATE
//! the host raises, so callers can turn it straight into an `ERROR` report.
//!
//! # Example
//!
//! ```rust
//! use pguint_inout::{IoConfig, TypeIo};
//!
//! let io = TypeIo::new(IoConfig::new());
//! assert_eq!(io.uint2in(Some(c"65535"))?, 65535);
//! assert!(io.uint2in(Some(c"65536")).unwrap_err().is_out_of_range());
//! assert_eq!(io.uint2out(7)?.as_bytes(), b"7");
//! # Ok::<(), pguint_core::Error>(())
//! ```

pub mod config;
pub mod fmgr;
pub mod parse;
pub mod types;

pub use config::{Int1Narrowing, IoConfig};
pub use fmgr::TypeIo;
pub use parse::{parse_bounded, parse_i64, parse_int_sized, parse_u64};
pub use types::{Decode, Encode, Format, decode_value, decode_value_for, encode_value};
