//! Error types for the scalar function framework

use lamina_core::{LogicalType, TypeError};
use lamina_vector::VectorError;
use thiserror::Error;

/// Result type alias for function framework operations
pub type FunctionResult<T> = std::result::Result<T, FunctionError>;

/// Errors raised while registering, binding or executing scalar functions
#[derive(Debug, Error)]
pub enum FunctionError {
    /// No function with this name exists in the catalog
    #[error("scalar function not found: {name}")]
    FunctionNotFound {
        /// Requested function name
        name: String,
    },

    /// The function exists but rejects the offered argument types
    #[error("no overload of {name} accepts arguments {arguments:?}")]
    NoMatchingOverload {
        /// Function name
        name: String,
        /// Argument types that failed the matcher
        arguments: Vec<LogicalType>,
    },

    /// A function with this name is already registered
    #[error("scalar function already registered: {name}")]
    AlreadyRegistered {
        /// Conflicting function name
        name: String,
    },

    /// An executor received the wrong number of input vectors
    #[error("{name} expects {expected} argument vector(s), got {got}")]
    InvalidArgumentCount {
        /// Function name
        name: &'static str,
        /// Arity the executor requires
        expected: usize,
        /// Arity it received
        got: usize,
    },

    /// Type-system violation inside an executor
    #[error(transparent)]
    Type(#[from] TypeError),

    /// Vector-layer violation inside an executor
    #[error(transparent)]
    Vector(#[from] VectorError),
}
