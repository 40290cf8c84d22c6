//! Bound expressions emitted by the set-operation planner
//!
//! The planner only needs two shapes: column references into a child
//! operator and type coercions over them. Expression evaluation itself
//! happens in the vectorized executor, outside this crate.

use lamina_core::LogicalType;

/// A bound expression with a resolved return type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundExpression {
    /// Column `index` of the child operator
    ColumnRef {
        /// Column position in the child's output
        index: usize,
        /// The column's type
        ty: LogicalType,
    },
    /// Coercion of a child expression to `target`
    Cast {
        /// The expression being cast
        child: Box<BoundExpression>,
        /// Type the child produces
        source: LogicalType,
        /// Type the cast produces
        target: LogicalType,
    },
}

impl BoundExpression {
    /// The type this expression evaluates to
    pub fn return_type(&self) -> LogicalType {
        match self {
            BoundExpression::ColumnRef { ty, .. } => *ty,
            BoundExpression::Cast { target, .. } => *target,
        }
    }
}
