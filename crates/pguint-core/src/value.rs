//! Dynamic integer values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::IntType;

/// A decoded value of one of the supported integer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// SQL NULL
    Null,
    Int1(i8),
    Uint1(u8),
    Uint2(u16),
    Uint4(u32),
    Uint8(u64),
}

impl Value {
    /// The integer type of this value, or `None` for NULL.
    pub const fn int_type(&self) -> Option<IntType> {
        match self {
            Value::Null => None,
            Value::Int1(_) => Some(IntType::Int1),
            Value::Uint1(_) => Some(IntType::Uint1),
            Value::Uint2(_) => Some(IntType::Uint2),
            Value::Uint4(_) => Some(IntType::Uint4),
            Value::Uint8(_) => Some(IntType::Uint8),
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Widen an unsigned value to `u64`. Returns `None` for NULL and `int1`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Uint1(v) => Some(u64::from(v)),
            Value::Uint2(v) => Some(u64::from(v)),
            Value::Uint4(v) => Some(u64::from(v)),
            Value::Uint8(v) => Some(v),
            Value::Null | Value::Int1(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Int1(v) => write!(f, "{v}"),
            Value::Uint1(v) => write!(f, "{v}"),
            Value::Uint2(v) => write!(f, "{v}"),
            Value::Uint4(v) => write!(f, "{v}"),
            Value::Uint8(v) => write!(f, "{v}"),
        }
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int1(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Uint1(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Uint2(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint4(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint8(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_type_matches_variant() {
        assert_eq!(Value::from(7u16).int_type(), Some(IntType::Uint2));
        assert_eq!(Value::from(-3i8).int_type(), Some(IntType::Int1));
        assert_eq!(Value::Null.int_type(), None);
    }

    #[test]
    fn option_none_is_null() {
        assert!(Value::from(None::<u32>).is_null());
        assert_eq!(Value::from(Some(9u64)), Value::Uint8(9));
    }

    #[test]
    fn as_u64_widens_unsigned_only() {
        assert_eq!(Value::Uint4(u32::MAX).as_u64(), Some(4_294_967_295));
        assert_eq!(Value::Int1(1).as_u64(), None);
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Value::Uint2(65535)).unwrap();
        assert_eq!(json, r#"{"type":"uint2","value":65535}"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Uint2(65535));
    }
}
