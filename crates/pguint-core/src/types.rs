//! SQL integer type descriptors.

use std::fmt;

/// The fixed-width integer types handled by this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntType {
    /// Signed 8-bit integer
    Int1,
    /// Unsigned 8-bit integer
    Uint1,
    /// Unsigned 16-bit integer
    Uint2,
    /// Unsigned 32-bit integer
    Uint4,
    /// Unsigned 64-bit integer
    Uint8,
}

impl IntType {
    pub const ALL: [IntType; 5] = [
        IntType::Int1,
        IntType::Uint1,
        IntType::Uint2,
        IntType::Uint4,
        IntType::Uint8,
    ];

    /// Get the SQL type name for this type.
    pub const fn sql_name(self) -> &'static str {
        match self {
            IntType::Int1 => "int1",
            IntType::Uint1 => "uint1",
            IntType::Uint2 => "uint2",
            IntType::Uint4 => "uint4",
            IntType::Uint8 => "uint8",
        }
    }

    /// Look a type up by its SQL name.
    pub fn from_sql_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.sql_name() == name)
    }

    /// Width of the binary representation in bytes.
    pub const fn size(self) -> usize {
        match self {
            IntType::Int1 | IntType::Uint1 => 1,
            IntType::Uint2 => 2,
            IntType::Uint4 => 4,
            IntType::Uint8 => 8,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, IntType::Int1)
    }

    /// Largest representable value.
    #[allow(clippy::cast_lossless)]
    pub const fn max_value(self) -> u64 {
        match self {
            IntType::Int1 => i8::MAX as u64,
            IntType::Uint1 => u8::MAX as u64,
            IntType::Uint2 => u16::MAX as u64,
            IntType::Uint4 => u32::MAX as u64,
            IntType::Uint8 => u64::MAX,
        }
    }

    /// Bytes needed for the text form: digits, sign and the terminating NUL.
    pub const fn output_len(self) -> usize {
        match self {
            IntType::Int1 => 5,
            IntType::Uint1 => 4,
            IntType::Uint2 => 6,
            IntType::Uint4 => 11,
            IntType::Uint8 => 21,
        }
    }

    /// The phrase used in out-of-range messages, e.g. `type uint2`.
    pub const fn range_target(self) -> &'static str {
        match self {
            IntType::Int1 => "type int1",
            IntType::Uint1 => "type uint1",
            IntType::Uint2 => "type uint2",
            IntType::Uint4 => "type uint4",
            IntType::Uint8 => "type uint8",
        }
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_len_fits_widest_value() {
        for ty in IntType::ALL {
            let widest = if ty.is_signed() {
                i8::MIN.to_string()
            } else {
                ty.max_value().to_string()
            };
            assert_eq!(widest.len() + 1, ty.output_len(), "{ty}");
        }
    }

    #[test]
    fn lookup_by_sql_name() {
        assert_eq!(IntType::from_sql_name("uint4"), Some(IntType::Uint4));
        assert_eq!(IntType::from_sql_name("int1"), Some(IntType::Int1));
        assert_eq!(IntType::from_sql_name("int4"), None);
    }

    #[test]
    fn range_target_names_byte_width() {
        for ty in IntType::ALL.into_iter().filter(|ty| !ty.is_signed()) {
            assert_eq!(ty.range_target(), format!("type uint{}", ty.size()));
        }
    }
}
