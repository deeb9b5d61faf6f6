//! # tabula-formula
//!
//! Formula tokenizer, parser and evaluator for tabula.
//!
//! This crate provides:
//! - Tokenizing (text or byte stream → classified tokens)
//! - Parsing (tokens → expression tree, with per-fault diagnostics)
//! - Evaluation (expression tree → value)
//! - Pluggable number and range models behind [`NumberProvider`] and [`RangeProvider`]
//! - A small set of built-in functions (SUM, COUNT, AVERAGE, MIN, MAX, IF, AND, OR, NOT)
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use tabula_formula::{
//!     evaluate, parse, Context, DecimalGrid, DecimalNumbers, FunctionRegistry, GridRanges, Value,
//! };
//!
//! let mut grid: GridRanges<DecimalGrid> = GridRanges::new();
//! grid.set_a1("A1", Value::Number(Decimal::from(2))).unwrap();
//! let functions = FunctionRegistry::new();
//! let ctx: Context<'_, DecimalGrid> = Context::new(&DecimalNumbers, &grid, &functions);
//!
//! let parsed = parse("=A1*3+1", &ctx).unwrap();
//! assert!(parsed.errors.is_empty());
//! assert_eq!(evaluate(&parsed.expr, &ctx).unwrap(), Value::Number(Decimal::from(7)));
//! ```

pub mod ast;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;
pub mod providers;
pub mod token;
pub mod tokenizer;
pub mod value;

pub use ast::{Associativity, Expr, Operator};
pub use context::{Context, LiteralFallback, ParseOptions};
pub use error::{FormulaError, FormulaResult, NumberError, ParseError};
pub use evaluator::evaluate;
pub use functions::{FunctionDef, FunctionImpl, FunctionRegistry};
pub use parser::{parse, parse_reader, parse_tokens, Parsed, MAX_NESTING};
pub use providers::{
    CellValues, DecimalGrid, DecimalNumbers, FloatGrid, FloatNumbers, GridRanges,
    ImplicitIntersection, NumberProvider, RangeProvider,
};
pub use token::{Token, TokenKind, Tokens};
pub use tokenizer::{tokenize, tokenize_reader, Tokenizer, Utf8Chars};
pub use value::{Model, RangeShape, Value};
