//! Function catalog and binding
//!
//! The catalog maps names to [`ScalarFunction`] descriptors. Binding
//! resolves a call site: the matcher predicate accepts or rejects the
//! argument types, the resolver fixes the return type, and the optional
//! bind hook produces function-specific state. The result is a
//! [`BoundScalarFunction`] ready to execute per batch.

use crate::descriptor::{FunctionData, ScalarFunction};
use crate::error::{FunctionError, FunctionResult};
use crate::math::BUILTIN_MATH_FUNCTIONS;
use lamina_core::LogicalType;
use lamina_vector::Vector;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Registry of scalar functions, keyed by name
#[derive(Debug, Default)]
pub struct FunctionCatalog {
    functions: RwLock<HashMap<&'static str, ScalarFunction>>,
}

impl FunctionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        FunctionCatalog {
            functions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a catalog pre-loaded with the built-in math functions
    pub fn with_builtins() -> Self {
        let catalog = FunctionCatalog::new();
        for function in BUILTIN_MATH_FUNCTIONS.iter() {
            // built-in names are unique by construction
            catalog
                .register(*function)
                .expect("duplicate built-in function name");
        }
        catalog
    }

    /// Register a scalar function
    ///
    /// # Errors
    /// `AlreadyRegistered` when the name is taken.
    pub fn register(&self, function: ScalarFunction) -> FunctionResult<()> {
        let mut functions = self.functions.write();
        if functions.contains_key(function.name) {
            return Err(FunctionError::AlreadyRegistered {
                name: function.name.to_string(),
            });
        }
        debug!(name = function.name, "registering scalar function");
        functions.insert(function.name, function);
        Ok(())
    }

    /// Look up a descriptor by name
    pub fn get(&self, name: &str) -> Option<ScalarFunction> {
        self.functions.read().get(name).copied()
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.functions.read().len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.functions.read().is_empty()
    }

    /// Resolve a call site into an executable bound function
    ///
    /// # Errors
    /// `FunctionNotFound` for unknown names; `NoMatchingOverload` when the
    /// matcher rejects the argument types; any error of the bind hook.
    pub fn bind(
        &self,
        name: &str,
        argument_types: &[LogicalType],
    ) -> FunctionResult<BoundScalarFunction> {
        let function = self
            .get(name)
            .ok_or_else(|| FunctionError::FunctionNotFound {
                name: name.to_string(),
            })?;
        if !(function.matches)(argument_types) {
            return Err(FunctionError::NoMatchingOverload {
                name: name.to_string(),
                arguments: argument_types.to_vec(),
            });
        }
        let return_type = (function.return_type)(argument_types);
        let bind_data = match function.bind {
            Some(bind) => Some(bind(argument_types)?),
            None => None,
        };
        debug!(name, ?return_type, "bound scalar function");
        Ok(BoundScalarFunction {
            function,
            argument_types: argument_types.to_vec(),
            return_type,
            bind_data,
        })
    }
}

/// A scalar function resolved against concrete argument types
#[derive(Debug)]
pub struct BoundScalarFunction {
    /// The underlying descriptor
    pub function: ScalarFunction,
    /// The matched argument types
    pub argument_types: Vec<LogicalType>,
    /// The resolved return type
    pub return_type: LogicalType,
    /// Function-specific bound state, if the descriptor has a bind hook
    pub bind_data: Option<Box<dyn FunctionData>>,
}

impl BoundScalarFunction {
    /// Execute over one batch of inputs
    pub fn execute(&mut self, inputs: &[Vector], result: &mut Vector) -> FunctionResult<()> {
        (self.function.function)(inputs, self.bind_data.as_deref_mut(), result)
    }

    /// Whether the planner must treat executions as observable
    pub fn has_side_effects(&self) -> bool {
        self.function.has_side_effects
    }

    /// Collect names of catalog entries this binding depends on
    pub fn dependencies(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(extract) = self.function.dependencies {
            extract(&mut out);
        }
        out
    }
}
