//! Scalar values at the engine boundary
//!
//! `Value` is the boxed, type-tagged form of a single lane. It exists for
//! vector construction, accessors and tests; the vectorized inner loops
//! never allocate or match on `Value`.

use crate::types::LogicalType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar value of any logical type, or NULL
///
/// Different variants are never equal, and `Double` follows IEEE-754
/// equality (`NaN != NaN`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// SQL NULL (typeless)
    Null,
    /// Boolean value
    Boolean(bool),
    /// 8-bit signed integer
    TinyInt(i8),
    /// 16-bit signed integer
    SmallInt(i16),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    BigInt(i64),
    /// Decimal value (64-bit float representation)
    Decimal(f64),
    /// Date as days since epoch
    Date(i32),
    /// Timestamp as microseconds since epoch
    Timestamp(i64),
    /// Opaque pointer/hash word
    Pointer(u64),
    /// UTF-8 string
    Varchar(String),
}

impl Value {
    /// Whether this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The logical type of this value, or `None` for NULL
    pub fn logical_type(&self) -> Option<LogicalType> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(LogicalType::Boolean),
            Value::TinyInt(_) => Some(LogicalType::TinyInt),
            Value::SmallInt(_) => Some(LogicalType::SmallInt),
            Value::Integer(_) => Some(LogicalType::Integer),
            Value::BigInt(_) => Some(LogicalType::BigInt),
            Value::Decimal(_) => Some(LogicalType::Decimal),
            Value::Date(_) => Some(LogicalType::Date),
            Value::Timestamp(_) => Some(LogicalType::Timestamp),
            Value::Pointer(_) => Some(LogicalType::Pointer),
            Value::Varchar(_) => Some(LogicalType::Varchar),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::TinyInt(v) => write!(f, "{}", v),
            Value::SmallInt(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::BigInt(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Date(v) => write!(f, "date({})", v),
            Value::Timestamp(v) => write!(f, "timestamp({})", v),
            Value::Pointer(v) => write!(f, "0x{:x}", v),
            Value::Varchar(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_has_no_type() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Null.logical_type(), None);
    }

    #[test]
    fn test_different_variants_never_equal() {
        assert_ne!(Value::Integer(1), Value::BigInt(1));
        assert_ne!(Value::Decimal(1.0), Value::Integer(1));
    }

    #[test]
    fn test_logical_type_roundtrip() {
        assert_eq!(Value::Date(10).logical_type(), Some(LogicalType::Date));
        assert_eq!(
            Value::Varchar("x".into()).logical_type(),
            Some(LogicalType::Varchar)
        );
    }
}
