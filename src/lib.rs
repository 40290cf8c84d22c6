//! LaminaDB — embedded analytical database engine core
//!
//! Lamina is the vectorized, columnar execution core of an embedded
//! analytical engine: the data representation and primitive operations
//! every query operator builds on.
//!
//! # Quick Start
//!
//! ```
//! use laminadb::{ops, LogicalType, Value, Vector};
//!
//! // A batch with a NULL, materialized into a fresh dense vector.
//! let source = Vector::from_values(
//!     LogicalType::Integer,
//!     &[Value::Integer(10), Value::Null, Value::Integer(30)],
//! )?;
//! let mut target = Vector::with_capacity(LogicalType::Integer);
//! ops::copy_to_vector(&source, &mut target, 1)?;
//! assert_eq!(target.count(), 2);
//! assert_eq!(target.value(0)?, Value::Null);
//! assert_eq!(target.value(1)?, Value::Integer(30));
//! # Ok::<(), laminadb::VectorError>(())
//! ```
//!
//! # Architecture
//!
//! - [`lamina_core`]: the closed type system, boxed values, capacity limits
//! - [`lamina_vector`]: nullmask, selection vectors, the `Vector` batch
//!   abstraction and the Copy family of primitives
//! - [`lamina_function`]: scalar function descriptors, catalog and the
//!   built-in math functions
//! - [`lamina_planner`]: logical plan construction for set operations

// Re-export the public API of the member crates
pub use lamina_core::{LogicalType, PhysicalType, TypeError, Value, VECTOR_CAPACITY};
pub use lamina_function::{
    BoundScalarFunction, FunctionCatalog, FunctionData, FunctionError, ScalarFunction,
};
pub use lamina_planner::{
    BinderContext, BoundCteRefNode, BoundExpression, BoundQueryNode, BoundRecursiveCteNode,
    BoundSelectNode, LogicalOperator, LogicalPlanGenerator, PlanError,
};
pub use lamina_vector::{
    ops, DataChunk, NullMask, SelectionVector, StrHandle, StringHeap, Vector, VectorData,
    VectorError,
};
