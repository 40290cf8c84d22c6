//! Scalar function framework for the Lamina engine
//!
//! This crate provides:
//! - **ScalarFunction**: the descriptor every scalar function implements
//!   (name, argument matcher, return-type resolver, executor, optional
//!   bind/dependency hooks, side-effect flag)
//! - **FunctionCatalog**: name-keyed registry with matcher-driven binding
//! - **math**: the built-in math functions (`abs`, `ln`, `sqrt`, `pi`,
//!   `random`, `sign`, ...)
//!
//! Executors receive vectors that may carry arbitrary selection vectors
//! and nullmasks; they produce dense results with nulls propagated.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod math;

pub use catalog::{BoundScalarFunction, FunctionCatalog};
pub use descriptor::{
    decimal_return_type, no_arguments, same_return_type, single_numeric_argument,
    tinyint_return_type, BindFn, DependencyFn, FunctionData, MatchesArgumentFn, ReturnTypeFn,
    ScalarExecutor, ScalarFunction,
};
pub use error::{FunctionError, FunctionResult};
pub use math::{random_bind, RandomBindData, BUILTIN_MATH_FUNCTIONS};
