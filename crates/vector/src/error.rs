//! Error types for the Vector data model and its primitives

use lamina_core::{LogicalType, TypeError};
use thiserror::Error;

/// Result type alias for vector operations
pub type VectorResult<T> = std::result::Result<T, VectorError>;

/// Errors raised while constructing or materializing vectors
///
/// All of these are caller contract violations; the policy is fail-fast
/// with a descriptive error, never best-effort recovery.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// Type-system violation (mismatch, variable-size, unimplemented)
    #[error(transparent)]
    Type(#[from] TypeError),

    /// A copy range reached past the end of the source vector
    #[error("copy out of bounds: offset {offset} + element count {element_count} exceeds source count {count}")]
    OutOfBounds {
        /// Requested source offset
        offset: usize,
        /// Requested number of elements
        element_count: usize,
        /// Source vector's logical count
        count: usize,
    },

    /// The destination buffer has fewer lanes than the copy writes
    #[error("target buffer too small: need {needed} lanes, have {actual}")]
    TargetTooSmall {
        /// Lanes the copy would write
        needed: usize,
        /// Lanes the destination offers
        actual: usize,
    },

    /// More values than one vector batch can hold
    #[error("vector capacity {capacity} exceeded: {requested} values")]
    CapacityExceeded {
        /// Number of values requested
        requested: usize,
        /// Fixed batch capacity
        capacity: usize,
    },

    /// A value's type does not match the vector it is written into
    #[error("value of type {value_type:?} cannot be stored in a {vector_type} vector")]
    ValueTypeMismatch {
        /// Logical type of the offending value, `None` for untyped cases
        value_type: Option<LogicalType>,
        /// Logical type of the vector
        vector_type: LogicalType,
    },
}
