//! Built-in formula functions

pub mod logical;
pub mod math;

use crate::context::Context;
use crate::error::FormulaResult;
use crate::value::{Model, Value};
use ahash::AHashMap;

/// Function implementation signature
///
/// Arguments arrive evaluated, left to right. Range arguments stay ranges;
/// implementations iterate them through `ctx.ranges`.
pub type FunctionImpl<M> = fn(&[Value<M>], &Context<'_, M>) -> FormulaResult<Value<M>>;

/// Function definition
pub struct FunctionDef<M: Model> {
    /// Function name (lowercase)
    pub name: &'static str,
    /// Minimum arguments
    pub min_args: usize,
    /// Maximum arguments (None = unlimited)
    pub max_args: Option<usize>,
    /// Implementation
    pub implementation: FunctionImpl<M>,
}

/// Function registry
pub struct FunctionRegistry<M: Model> {
    functions: AHashMap<String, FunctionDef<M>>,
}

impl<M: Model> FunctionRegistry<M> {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register_math_functions();
        registry.register_logical_functions();

        registry
    }

    /// Create a registry with no functions
    pub fn empty() -> Self {
        Self {
            functions: AHashMap::new(),
        }
    }

    /// Look up a function by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&FunctionDef<M>> {
        self.functions.get(&name.to_lowercase())
    }

    /// Register a function, replacing any function of the same name
    pub fn register(&mut self, def: FunctionDef<M>) {
        self.functions.insert(def.name.to_lowercase(), def);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn register_math_functions(&mut self) {
        // SUM
        self.register(FunctionDef {
            name: "sum",
            min_args: 1,
            max_args: None,
            implementation: math::fn_sum,
        });

        // COUNT
        self.register(FunctionDef {
            name: "count",
            min_args: 1,
            max_args: None,
            implementation: math::fn_count,
        });

        // AVERAGE
        self.register(FunctionDef {
            name: "average",
            min_args: 1,
            max_args: None,
            implementation: math::fn_average,
        });

        // MIN
        self.register(FunctionDef {
            name: "min",
            min_args: 1,
            max_args: None,
            implementation: math::fn_min,
        });

        // MAX
        self.register(FunctionDef {
            name: "max",
            min_args: 1,
            max_args: None,
            implementation: math::fn_max,
        });
    }

    fn register_logical_functions(&mut self) {
        // IF
        self.register(FunctionDef {
            name: "if",
            min_args: 2,
            max_args: Some(3),
            implementation: logical::fn_if,
        });

        // AND
        self.register(FunctionDef {
            name: "and",
            min_args: 1,
            max_args: None,
            implementation: logical::fn_and,
        });

        // OR
        self.register(FunctionDef {
            name: "or",
            min_args: 1,
            max_args: None,
            implementation: logical::fn_or,
        });

        // NOT
        self.register(FunctionDef {
            name: "not",
            min_args: 1,
            max_args: Some(1),
            implementation: logical::fn_not,
        });
    }
}

impl<M: Model> Default for FunctionRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}
