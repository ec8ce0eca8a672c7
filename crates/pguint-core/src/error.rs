//! Error types for integer input/output conversions.
//!
//! Every failure aborts the current conversion and carries the SQLSTATE the
//! host reports to its client, together with a message embedding the
//! offending text.

use std::fmt;

use serde::Serialize;

/// The primary error type for all conversion operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input text is not a well-formed integer literal
    Syntax(SyntaxError),
    /// Parsed magnitude does not fit the target type
    Range(RangeError),
    /// Binary representation has the wrong length
    Protocol(ProtocolError),
    /// Misuse by the calling code (null pointer, unsupported width)
    Internal(InternalError),
    /// Configuration errors
    Config(ConfigError),
}

/// SQLSTATE classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlState {
    /// `22P02`
    InvalidTextRepresentation,
    /// `22003`
    NumericValueOutOfRange,
    /// `08P01`
    ProtocolViolation,
    /// `22023`
    InvalidParameterValue,
    /// `XX000`
    InternalError,
}

impl SqlState {
    /// The five-character code reported to the client.
    pub const fn code(self) -> &'static str {
        match self {
            SqlState::InvalidTextRepresentation => "22P02",
            SqlState::NumericValueOutOfRange => "22003",
            SqlState::ProtocolViolation => "08P01",
            SqlState::InvalidParameterValue => "22023",
            SqlState::InternalError => "XX000",
        }
    }
}

impl fmt::Display for SqlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// What the input was expected to be, e.g. `"unsigned integer"` or `"type bigint"`
    pub expected: &'static str,
    /// The rejected input, lossily decoded
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeError {
    /// The target the value did not fit, e.g. `"type uint2"` or `"8-bit integer"`
    pub target: &'static str,
    /// The rejected input, lossily decoded
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolError {
    pub message: String,
    /// Number of bytes the type requires
    pub expected_len: usize,
    /// Number of bytes received
    pub actual_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalError {
    pub kind: InternalErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalErrorKind {
    /// An input function was handed a null pointer
    NullPointer,
    /// The bounded parser was asked for a width it does not support
    UnsupportedSize,
    /// An encoder was handed a SQL NULL
    NullValue,
    /// Output could not be turned into a C string
    Output,
}

impl SyntaxError {
    pub fn new(expected: &'static str, input: &[u8]) -> Self {
        Self {
            expected,
            input: String::from_utf8_lossy(input).into_owned(),
        }
    }
}

impl RangeError {
    pub fn new(target: &'static str, input: &[u8]) -> Self {
        Self {
            target,
            input: String::from_utf8_lossy(input).into_owned(),
        }
    }
}

impl Error {
    /// Invalid text representation of `expected`.
    pub fn syntax(expected: &'static str, input: &[u8]) -> Self {
        Error::Syntax(SyntaxError::new(expected, input))
    }

    /// Value out of range for `target`.
    pub fn range(target: &'static str, input: &[u8]) -> Self {
        Error::Range(RangeError::new(target, input))
    }

    /// Binary payload shorter or longer than the type's width.
    pub fn binary_length(expected_len: usize, actual_len: usize) -> Self {
        let message = if actual_len < expected_len {
            "insufficient data left in message"
        } else {
            "invalid message format"
        };
        Error::Protocol(ProtocolError {
            message: message.to_string(),
            expected_len,
            actual_len,
        })
    }

    /// Internal-usage failure.
    pub fn internal(kind: InternalErrorKind, message: impl Into<String>) -> Self {
        Error::Internal(InternalError {
            kind,
            message: message.into(),
        })
    }

    /// Invalid configuration value.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(ConfigError {
            message: message.into(),
        })
    }

    /// The SQLSTATE the host reports for this error.
    pub fn sqlstate(&self) -> SqlState {
        match self {
            Error::Syntax(_) => SqlState::InvalidTextRepresentation,
            Error::Range(_) => SqlState::NumericValueOutOfRange,
            Error::Protocol(_) => SqlState::ProtocolViolation,
            Error::Internal(_) => SqlState::InternalError,
            Error::Config(_) => SqlState::InvalidParameterValue,
        }
    }

    pub fn is_invalid_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::Range(_))
    }

    /// Is this a defect in the calling code rather than bad user input?
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }

    /// Build the record handed to the host's error-reporting channel.
    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: "ERROR",
            sqlstate: self.sqlstate().code(),
            message: self.to_string(),
        }
    }
}

/// A host-level diagnostic: what `ereport(ERROR, ...)` would carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: &'static str,
    pub sqlstate: &'static str,
    pub message: String,
}

impl Diagnostic {
    /// Render as a single-line JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                "{{\"severity\":\"{}\",\"sqlstate\":\"{}\"}}",
                self.severity, self.sqlstate
            )
        })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "{}", e),
            Error::Range(e) => write!(f, "{}", e),
            Error::Protocol(e) => write!(f, "{}", e),
            Error::Internal(e) => write!(f, "{}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e.message),
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input syntax for {}: \"{}\"", self.expected, self.input)
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value \"{}\" is out of range for {}", self.input, self.target)
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err)
    }
}

impl From<RangeError> for Error {
    fn from(err: RangeError) -> Self {
        Error::Range(err)
    }
}

impl From<ProtocolError> for Error {
    fn from(err: ProtocolError) -> Self {
        Error::Protocol(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        Error::Internal(err)
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_embed_input_and_target() {
        let err = Error::syntax("unsigned integer", b"42x");
        assert_eq!(
            err.to_string(),
            "invalid input syntax for unsigned integer: \"42x\""
        );

        let err = Error::range("type uint1", b"256");
        assert_eq!(err.to_string(), "value \"256\" is out of range for type uint1");
    }

    #[test]
    fn sqlstate_classification() {
        assert_eq!(Error::syntax("unsigned integer", b"").sqlstate().code(), "22P02");
        assert_eq!(Error::range("type uint8", b"1").sqlstate().code(), "22003");
        assert_eq!(Error::binary_length(4, 2).sqlstate().code(), "08P01");

        let internal = Error::internal(InternalErrorKind::NullPointer, "NULL pointer");
        assert_eq!(internal.sqlstate(), SqlState::InternalError);
        assert!(internal.is_internal());
        assert!(!internal.is_invalid_syntax());
        assert!(!internal.is_out_of_range());
    }

    #[test]
    fn binary_length_message_depends_on_direction() {
        assert_eq!(
            Error::binary_length(8, 3).to_string(),
            "insufficient data left in message"
        );
        assert_eq!(
            Error::binary_length(1, 2).to_string(),
            "invalid message format"
        );
    }

    #[test]
    fn non_utf8_input_is_rendered_lossily() {
        let err = Error::syntax("unsigned integer", &[b'4', 0xFF]);
        assert_eq!(
            err.to_string(),
            "invalid input syntax for unsigned integer: \"4\u{FFFD}\""
        );
    }

    #[test]
    fn diagnostic_serializes_to_json() {
        let diag = Error::range("type uint2", b"65536").diagnostic();
        assert_eq!(diag.sqlstate, "22003");

        let json: serde_json::Value = serde_json::from_str(&diag.to_json()).unwrap();
        assert_eq!(json["severity"], "ERROR");
        assert_eq!(json["sqlstate"], "22003");
        assert_eq!(
            json["message"],
            "value \"65536\" is out of range for type uint2"
        );
    }
}
