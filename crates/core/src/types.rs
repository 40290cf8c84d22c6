//! Physical and logical types for the vectorized engine
//!
//! This module defines the closed type vocabulary:
//! - PhysicalType: the storage representation of a vector's lanes
//! - LogicalType: the SQL-facing type, mapped onto a physical representation
//!
//! Several logical types share a physical representation with a different
//! interpretation (Date is stored as Int32, Timestamp as Int64). All copy
//! and materialization primitives dispatch on the physical type only.

use crate::error::{TypeError, TypeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical storage representation of a vector's lanes
///
/// This is a closed set: every vectorized primitive must handle every
/// variant (or reject it explicitly), and exhaustive matching is relied on
/// to keep the dispatch tables complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalType {
    /// Single-byte boolean lane
    Bool,
    /// 8-bit signed integer lane
    Int8,
    /// 16-bit signed integer lane
    Int16,
    /// 32-bit signed integer lane
    Int32,
    /// 64-bit signed integer lane
    Int64,
    /// 64-bit IEEE-754 lane (also the decimal representation)
    Double,
    /// Pointer/hash lane (opaque 64-bit word)
    Pointer,
    /// Variable-length string; lanes hold fixed-width heap handles
    Varchar,
}

impl PhysicalType {
    /// Whether every lane of this type occupies a fixed number of bytes
    ///
    /// The single-buffer copy path is only legal for constant-size types;
    /// `Varchar` is the one variable-size member of the set.
    pub fn is_constant_size(&self) -> bool {
        !matches!(self, PhysicalType::Varchar)
    }

    /// Byte width of one lane of this type
    ///
    /// # Errors
    /// Returns [`TypeError::VariableSize`] for variable-size types, which
    /// have no single lane width.
    pub fn width(&self) -> TypeResult<usize> {
        match self {
            PhysicalType::Bool | PhysicalType::Int8 => Ok(1),
            PhysicalType::Int16 => Ok(2),
            PhysicalType::Int32 => Ok(4),
            PhysicalType::Int64 | PhysicalType::Double | PhysicalType::Pointer => Ok(8),
            PhysicalType::Varchar => Err(TypeError::VariableSize { ty: *self }),
        }
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// SQL-facing type of a vector or expression
///
/// Logical types carry interpretation; the engine's inner loops never
/// branch on them. `Date` and `Timestamp` are aliases over integer storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    /// Boolean
    Boolean,
    /// 8-bit signed integer
    TinyInt,
    /// 16-bit signed integer
    SmallInt,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    BigInt,
    /// Fixed-point decimal, stored as a 64-bit float
    Decimal,
    /// Calendar date, stored as days in an Int32
    Date,
    /// Timestamp, stored as microseconds in an Int64
    Timestamp,
    /// Opaque pointer/hash word
    Pointer,
    /// Variable-length string
    Varchar,
}

impl LogicalType {
    /// The physical representation backing this logical type
    pub fn physical(&self) -> PhysicalType {
        match self {
            LogicalType::Boolean => PhysicalType::Bool,
            LogicalType::TinyInt => PhysicalType::Int8,
            LogicalType::SmallInt => PhysicalType::Int16,
            LogicalType::Integer | LogicalType::Date => PhysicalType::Int32,
            LogicalType::BigInt | LogicalType::Timestamp => PhysicalType::Int64,
            LogicalType::Decimal => PhysicalType::Double,
            LogicalType::Pointer => PhysicalType::Pointer,
            LogicalType::Varchar => PhysicalType::Varchar,
        }
    }

    /// Whether this type participates in numeric function matching
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            LogicalType::TinyInt
                | LogicalType::SmallInt
                | LogicalType::Integer
                | LogicalType::BigInt
                | LogicalType::Decimal
        )
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
