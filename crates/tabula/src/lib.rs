//! # tabula
//!
//! A small spreadsheet formula engine.
//!
//! Tabula turns cell text such as `=SUM(A1:A10) + 2.0` into an expression
//! tree and evaluates it. Numbers and ranges are supplied by the host through
//! two capability traits, so the same engine runs over exact decimals, plain
//! `f64`, or whatever cell store the host already has.
//!
//! ## Features
//!
//! - Tokenizer over `&str` or any UTF-8 byte stream
//! - Shunting-yard parser with positional diagnostics
//! - Implicit intersection (`=A:A 3:3`, and anchoring to the formula's own cell)
//! - Range algebra over possibly unbounded rectangular selections
//! - Built-in aggregate and logical functions, plus host-registered ones
//!
//! ## Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let mut grid: GridRanges<DecimalGrid> = GridRanges::new();
//! for row in 1..=10 {
//!     grid.set(1, row, Value::Number(Decimal::from(row)));
//! }
//!
//! let functions = FunctionRegistry::new();
//! let ctx: Context<'_, DecimalGrid> = Context::new(&DecimalNumbers, &grid, &functions);
//!
//! let calculation = calculate("=SUM(A1:A10)", &ctx, &CalculationOptions::default()).unwrap();
//! assert_eq!(calculation.value, Value::Number(Decimal::from(55)));
//! ```

pub mod calculation;
pub mod prelude;

// Re-export calculation types
pub use calculation::{calculate, Calculation, CalculationOptions};

// Re-export core types
pub use tabula_core::{
    intersect_dimension, CellAddress, CellError, Error, RangeSpec, Result, MAX_COLS, MAX_ROWS,
};

// Re-export formula types
pub use tabula_formula::{
    evaluate, parse, parse_reader, parse_tokens, tokenize, tokenize_reader, CellValues, Context,
    DecimalGrid, DecimalNumbers, Expr, FloatGrid, FloatNumbers, FormulaError, FormulaResult,
    FunctionDef, FunctionImpl, FunctionRegistry, GridRanges, ImplicitIntersection,
    LiteralFallback, Model, NumberError, NumberProvider, Operator, ParseError, ParseOptions,
    Parsed, RangeProvider, RangeShape, Token, TokenKind, Tokens, Value,
};

/// Exact decimal numbers used by [`DecimalNumbers`]
pub use rust_decimal::Decimal;

/// Direct access to the formula crate
pub mod formula {
    pub use tabula_formula::*;
}
