//! Error types for the core type system
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. Every error here signals a caller contract violation:
//! the core performs deterministic transformations over already-validated
//! in-memory data and never retries or recovers.

use crate::types::PhysicalType;
use thiserror::Error;

/// Result type alias for type-system operations
pub type TypeResult<T> = std::result::Result<T, TypeError>;

/// Errors raised by the type system and type-dispatched primitives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Two vectors with differing physical types were combined
    #[error("type mismatch: left is {left}, right is {right}")]
    Mismatch {
        /// Physical type observed on the left/source side
        left: PhysicalType,
        /// Physical type observed on the right/target side
        right: PhysicalType,
    },

    /// An operation was invoked on a type it does not support
    #[error("invalid type {ty}: {reason}")]
    InvalidType {
        /// The offending physical type
        ty: PhysicalType,
        /// Why the type is rejected
        reason: String,
    },

    /// A variable-size type was asked for a fixed lane width
    #[error("type {ty} is variable-size and has no fixed width")]
    VariableSize {
        /// The variable-size type
        ty: PhysicalType,
    },

    /// The physical type has no registered dispatch case
    #[error("unimplemented type for {operation}: {ty}")]
    NotImplemented {
        /// The operation that was attempted
        operation: &'static str,
        /// The unhandled physical type
        ty: PhysicalType,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_reports_both_types() {
        let err = TypeError::Mismatch {
            left: PhysicalType::Int32,
            right: PhysicalType::Int64,
        };
        let msg = err.to_string();
        assert!(msg.contains("Int32"));
        assert!(msg.contains("Int64"));
    }

    #[test]
    fn test_invalid_type_display() {
        let err = TypeError::InvalidType {
            ty: PhysicalType::Varchar,
            reason: "cannot copy non-constant size types using this method".to_string(),
        };
        assert!(err.to_string().contains("Varchar"));
        assert!(err.to_string().contains("non-constant size"));
    }
}
