//! Logical operator trees
//!
//! The single-rooted tree the planner hands to the optimizer. Only the
//! operators involved in set-operation planning live here; scans and
//! bound query bodies appear as typed leaves.

use crate::expression::BoundExpression;
use lamina_core::LogicalType;

/// A node in the logical operator tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Expression projection over a child
    Projection {
        /// One expression per output column
        expressions: Vec<BoundExpression>,
        /// The operator being projected
        child: Box<LogicalOperator>,
    },
    /// Plain set union of two children
    Union {
        /// Binder-assigned index the union's output columns bind against
        table_index: usize,
        /// Number of output columns
        column_count: usize,
        /// Left input
        left: Box<LogicalOperator>,
        /// Right input
        right: Box<LogicalOperator>,
    },
    /// Fixed-point union: left seeds the accumulator, right is iterated
    /// until no new rows appear
    RecursiveCte {
        /// Accumulator index; CTE scans inside `right` read it
        table_index: usize,
        /// Number of output columns
        column_count: usize,
        /// Keep duplicate rows (UNION ALL) instead of distinct union
        union_all: bool,
        /// Non-recursive seed side
        left: Box<LogicalOperator>,
        /// Recursive side, re-evaluated each iteration
        right: Box<LogicalOperator>,
    },
    /// Leaf: a planned query body or base-table scan with known types
    Get {
        /// Binder-assigned table index
        table_index: usize,
        /// Output column types
        types: Vec<LogicalType>,
    },
    /// Leaf: scan of a recursive CTE's accumulator
    CteScan {
        /// Accumulator index being read
        table_index: usize,
        /// Output column types
        types: Vec<LogicalType>,
    },
}

impl LogicalOperator {
    /// Output column types of this operator
    pub fn types(&self) -> Vec<LogicalType> {
        match self {
            LogicalOperator::Projection { expressions, .. } => {
                expressions.iter().map(|e| e.return_type()).collect()
            }
            // both sides are coerced to the declared types before the
            // operator is built, so the left side is authoritative
            LogicalOperator::Union { left, .. } => left.types(),
            LogicalOperator::RecursiveCte { left, .. } => left.types(),
            LogicalOperator::Get { types, .. } => types.clone(),
            LogicalOperator::CteScan { types, .. } => types.clone(),
        }
    }
}
