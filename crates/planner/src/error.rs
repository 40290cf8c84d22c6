//! Error types for logical plan construction

use thiserror::Error;

/// Result type alias for planning operations
pub type PlanResult<T> = std::result::Result<T, PlanError>;

/// Errors raised while building logical operator trees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A set-operation side produces a different number of columns than
    /// the declared output
    #[error("set operation sides must match: expected {expected} columns, got {actual}")]
    ColumnCountMismatch {
        /// Declared output column count
        expected: usize,
        /// Column count the side actually produces
        actual: usize,
    },
}
