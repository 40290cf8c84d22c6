//! Logical plan construction for set operations
//!
//! This crate covers the planner boundary of the vectorized core: bound
//! two-sided set-operation nodes (UNION / recursive CTE) are turned into
//! single-rooted logical operator trees, with type-coercion projections
//! inserted over each side and the unresolved-subquery flag propagated
//! upward. Expression evaluation over the resulting plans happens in the
//! vectorized executor, not here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bound;
pub mod error;
pub mod expression;
pub mod operator;
pub mod plan_setop;

pub use bound::{
    BinderContext, BoundCteRefNode, BoundQueryNode, BoundRecursiveCteNode, BoundSelectNode,
};
pub use error::{PlanError, PlanResult};
pub use expression::BoundExpression;
pub use operator::LogicalOperator;
pub use plan_setop::{cast_operator_to_types, LogicalPlanGenerator};
