//! Host-facing input/output functions.
//!
//! `TypeIo` exposes one method per host function symbol (`uint4in`,
//! `uint4out`, `uint4recv`, `uint4send`, ...). Input functions receive the
//! argument the host passes, which may be a null pointer; output functions
//! hand back a freshly allocated C string owned by the caller.

use std::ffi::{CStr, CString};

use pguint_core::error::InternalErrorKind;
use pguint_core::{Error, IntType, Result};

use crate::config::IoConfig;
use crate::types::{BinaryDecode, Encode, TextDecode, TextEncode, decode_int1};

/// The input/output functions for all supported types.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeIo {
    config: IoConfig,
}

fn require_arg(input: Option<&CStr>) -> Result<&[u8]> {
    input
        .map(CStr::to_bytes)
        .ok_or_else(|| Error::internal(InternalErrorKind::NullPointer, "NULL pointer"))
}

fn log_rejection<T>(ty: IntType, input: &[u8], result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        tracing::debug!(
            int_type = %ty,
            input = %String::from_utf8_lossy(input),
            sqlstate = %e.sqlstate(),
            error = %e,
            "Rejected input"
        );
    }
    result
}

fn text_in<T: TextDecode>(ty: IntType, input: Option<&CStr>) -> Result<T> {
    let s = require_arg(input)?;
    log_rejection(ty, s, T::decode_text(s))
}

fn text_out<T: TextEncode>(value: &T) -> Result<CString> {
    CString::new(value.encode_text())
        .map_err(|e| Error::internal(InternalErrorKind::Output, e.to_string()))
}

fn binary_recv<T: BinaryDecode>(ty: IntType, buf: &[u8]) -> Result<T> {
    log_rejection(ty, buf, T::decode_binary(buf))
}

fn binary_send<T: Encode>(value: &T) -> Vec<u8> {
    let mut buf = Vec::with_capacity(T::int_type().size());
    value.encode_binary(&mut buf);
    buf
}

impl TypeIo {
    /// Create the function set for the given host configuration.
    pub fn new(config: IoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IoConfig {
        &self.config
    }

    // ==================== int1 ====================

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn int1in(&self, input: Option<&CStr>) -> Result<i8> {
        let s = require_arg(input)?;
        log_rejection(
            IntType::Int1,
            s,
            decode_int1(s, self.config.int1_narrowing()),
        )
    }

    pub fn int1out(&self, value: i8) -> Result<CString> {
        text_out(&value)
    }

    pub fn int1recv(&self, buf: &[u8]) -> Result<i8> {
        binary_recv(IntType::Int1, buf)
    }

    pub fn int1send(&self, value: i8) -> Vec<u8> {
        binary_send(&value)
    }

    // ==================== uint1 ====================

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn uint1in(&self, input: Option<&CStr>) -> Result<u8> {
        text_in(IntType::Uint1, input)
    }

    pub fn uint1out(&self, value: u8) -> Result<CString> {
        text_out(&value)
    }

    pub fn uint1recv(&self, buf: &[u8]) -> Result<u8> {
        binary_recv(IntType::Uint1, buf)
    }

    pub fn uint1send(&self, value: u8) -> Vec<u8> {
        binary_send(&value)
    }

    // ==================== uint2 ====================

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn uint2in(&self, input: Option<&CStr>) -> Result<u16> {
        text_in(IntType::Uint2, input)
    }

    pub fn uint2out(&self, value: u16) -> Result<CString> {
        text_out(&value)
    }

    pub fn uint2recv(&self, buf: &[u8]) -> Result<u16> {
        binary_recv(IntType::Uint2, buf)
    }

    pub fn uint2send(&self, value: u16) -> Vec<u8> {
        binary_send(&value)
    }

    // ==================== uint4 ====================

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn uint4in(&self, input: Option<&CStr>) -> Result<u32> {
        text_in(IntType::Uint4, input)
    }

    pub fn uint4out(&self, value: u32) -> Result<CString> {
        text_out(&value)
    }

    pub fn uint4recv(&self, buf: &[u8]) -> Result<u32> {
        binary_recv(IntType::Uint4, buf)
    }

    pub fn uint4send(&self, value: u32) -> Vec<u8> {
        binary_send(&value)
    }

    // ==================== uint8 ====================

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn uint8in(&self, input: Option<&CStr>) -> Result<u64> {
        text_in(IntType::Uint8, input)
    }

    pub fn uint8out(&self, value: u64) -> Result<CString> {
        text_out(&value)
    }

    pub fn uint8recv(&self, buf: &[u8]) -> Result<u64> {
        binary_recv(IntType::Uint8, buf)
    }

    pub fn uint8send(&self, value: u64) -> Vec<u8> {
        binary_send(&value)
    }
}
