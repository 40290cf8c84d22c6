//! Scalar function descriptors
//!
//! A scalar function is described by a name, an argument-matcher predicate,
//! a return-type resolver, a vectorized executor and optional bind /
//! dependency hooks. The descriptor is the template every built-in and
//! every extension function implements; the catalog stores descriptors and
//! the binder turns them into executable [`BoundScalarFunction`]s.
//!
//! Matchers and resolvers are plain function pointers passed by value, not
//! process-wide singletons. Side effects are an explicit capability flag on
//! the descriptor so planners can forbid constant-folding and reordering
//! without inferring anything from the name.

use crate::error::FunctionResult;
use lamina_core::LogicalType;
use lamina_vector::Vector;
use std::any::Any;
use std::fmt;

/// Function-specific bound state
///
/// Produced by a descriptor's bind hook at binding time and handed back to
/// the executor on every invocation (e.g. the seeded RNG behind `random`).
pub trait FunctionData: Send + fmt::Debug {
    /// Downcasting access for the owning executor
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Predicate deciding whether a sequence of argument types is accepted
pub type MatchesArgumentFn = fn(&[LogicalType]) -> bool;

/// Resolver computing the return type from matched argument types
pub type ReturnTypeFn = fn(&[LogicalType]) -> LogicalType;

/// Vectorized executor: input vectors in, result vector out
///
/// Executors must operate correctly on inputs carrying arbitrary selection
/// vectors and nullmasks; results are always dense.
pub type ScalarExecutor =
    fn(&[Vector], Option<&mut (dyn FunctionData + 'static)>, &mut Vector) -> FunctionResult<()>;

/// Bind hook producing function-specific state from the argument types
pub type BindFn = fn(&[LogicalType]) -> FunctionResult<Box<dyn FunctionData>>;

/// Dependency extractor: appends names of catalog entries the function
/// reads at execution time
pub type DependencyFn = fn(&mut Vec<String>);

/// Descriptor for one scalar function
#[derive(Clone, Copy)]
pub struct ScalarFunction {
    /// Function name as registered in the catalog
    pub name: &'static str,
    /// Argument-matcher predicate
    pub matches: MatchesArgumentFn,
    /// Return-type resolver
    pub return_type: ReturnTypeFn,
    /// Vectorized executor
    pub function: ScalarExecutor,
    /// Optional bind hook
    pub bind: Option<BindFn>,
    /// Optional dependency extractor
    pub dependencies: Option<DependencyFn>,
    /// Whether executions are observable beyond the result vector
    pub has_side_effects: bool,
}

impl fmt::Debug for ScalarFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarFunction")
            .field("name", &self.name)
            .field("has_side_effects", &self.has_side_effects)
            .finish()
    }
}

/// Matcher: exactly one numeric argument
pub fn single_numeric_argument(arguments: &[LogicalType]) -> bool {
    arguments.len() == 1 && arguments[0].is_numeric()
}

/// Matcher: no arguments at all
pub fn no_arguments(arguments: &[LogicalType]) -> bool {
    arguments.is_empty()
}

/// Resolver: result has the type of the single argument
pub fn same_return_type(arguments: &[LogicalType]) -> LogicalType {
    debug_assert_eq!(arguments.len(), 1);
    arguments[0]
}

/// Resolver: result is always decimal
pub fn decimal_return_type(_arguments: &[LogicalType]) -> LogicalType {
    LogicalType::Decimal
}

/// Resolver: result is always a tiny integer
pub fn tinyint_return_type(_arguments: &[LogicalType]) -> LogicalType {
    LogicalType::TinyInt
}
