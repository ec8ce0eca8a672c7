//! Conversion configuration.
//!
//! The only behaviour that depends on the host is how `int1in` narrows its
//! parsed value, which changed with server version 15.

use serde::{Deserialize, Serialize};

use pguint_core::{Error, Result};

/// First server version whose `int1in` delegates to the 64-bit parser.
pub const INT64_PARSER_VERSION_NUM: u32 = 150_000;

/// How `int1in` turns parsed text into an 8-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Int1Narrowing {
    /// Parse as `bigint`, then keep the low 8 bits
    #[default]
    Truncate,
    /// Parse with the sized-integer rules and reject values outside `-128..=127`
    Checked,
}

/// Configuration for the input/output routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Host server version in `server_version_num` form (e.g. 170002)
    pub server_version_num: u32,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            server_version_num: 170_000,
        }
    }
}

impl IoConfig {
    /// Create a configuration for the current server generation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server version number.
    pub fn server_version_num(mut self, version_num: u32) -> Self {
        self.server_version_num = version_num;
        self
    }

    /// Set the server version from its display form (`"16.4"`, `"9.6.24"`, `"17"`).
    pub fn server_version(self, version: &str) -> Result<Self> {
        Ok(self.server_version_num(parse_version_num(version)?))
    }

    /// The narrowing rule `int1in` follows on this host.
    pub fn int1_narrowing(&self) -> Int1Narrowing {
        if self.server_version_num >= INT64_PARSER_VERSION_NUM {
            Int1Narrowing::Truncate
        } else {
            Int1Narrowing::Checked
        }
    }
}

/// Convert a display version into `server_version_num` form.
///
/// Since version 10 the number is `major * 10000 + minor`; before that it is
/// `major * 10000 + minor * 100 + patch`. Suffixes such as `beta1` or
/// ` (Debian 16.4-1)` after the numeric part are ignored.
fn parse_version_num(version: &str) -> Result<u32> {
    let numeric: &str = version
        .trim()
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .next()
        .unwrap_or_default();

    let invalid = || Error::config(format!("invalid server version: \"{version}\""));

    let parts: Vec<u32> = numeric
        .split('.')
        .filter(|p| !p.is_empty())
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| invalid())?;

    let version_num = match parts.as_slice() {
        [major, ..] if *major >= 10 => {
            let minor = parts.get(1).copied().unwrap_or(0);
            major.checked_mul(10_000).and_then(|n| n.checked_add(minor))
        }
        [major, minor, rest @ ..] if *major > 0 => {
            let patch = rest.first().copied().unwrap_or(0);
            major
                .checked_mul(10_000)
                .zip(minor.checked_mul(100))
                .and_then(|(m, n)| m.checked_add(n))
                .and_then(|n| n.checked_add(patch))
        }
        _ => None,
    };

    version_num.ok_or_else(invalid)
}
