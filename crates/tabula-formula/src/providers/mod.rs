//! Number and range capabilities consumed by the parser and evaluator
//!
//! The engine never touches a concrete number or range type. Hosts implement
//! [`NumberProvider`] and [`RangeProvider`] for their [`Model`]; this module
//! also ships reference implementations over `rust_decimal`, `f64` and an
//! in-memory cell grid.

mod decimal;
mod float;
mod grid;
mod implicit;

pub use decimal::DecimalNumbers;
pub use float::FloatNumbers;
pub use grid::GridRanges;
pub use implicit::ImplicitIntersection;

use crate::error::{FormulaResult, NumberError};
use crate::value::{Model, Value};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use tabula_core::RangeSpec;

/// Lazy, finite sequence of cell values; stops at the first error
pub type CellValues<'a, M> = Box<dyn Iterator<Item = FormulaResult<Value<M>>> + 'a>;

/// Number parsing and arithmetic
pub trait NumberProvider<M: Model> {
    /// Parse number text (literal tokens and text coerced to numbers)
    fn parse_number(&self, text: &str) -> Result<M::Number, NumberError>;

    /// Exact conversion of a small integer
    fn integer(&self, value: i64) -> M::Number;

    fn add(&self, a: &M::Number, b: &M::Number) -> Result<M::Number, NumberError>;

    fn sub(&self, a: &M::Number, b: &M::Number) -> Result<M::Number, NumberError>;

    fn mul(&self, a: &M::Number, b: &M::Number) -> Result<M::Number, NumberError>;

    fn div(&self, a: &M::Number, b: &M::Number) -> Result<M::Number, NumberError>;

    fn pow(&self, base: &M::Number, exponent: &M::Number) -> Result<M::Number, NumberError>;

    fn compare(&self, a: &M::Number, b: &M::Number) -> Ordering;

    fn neg(&self, a: &M::Number) -> Result<M::Number, NumberError> {
        self.sub(&self.integer(0), a)
    }

    /// `a%`
    fn percent(&self, a: &M::Number) -> Result<M::Number, NumberError> {
        self.div(a, &self.integer(100))
    }
}

/// Range parsing, algebra and cell access
pub trait RangeProvider<M: Model> {
    /// Parse reference text such as `A1`, `B2:C9`, `A:A` or `3:5`
    fn parse_range(&self, text: &str) -> FormulaResult<M::Range>;

    /// Explicit intersection (the space operator)
    fn intersect(&self, a: &M::Range, b: &M::Range) -> M::Range;

    /// Reduce `range` to the part aligned with `anchor`
    fn implicit_intersect(&self, anchor: &M::Range, range: &M::Range) -> M::Range;

    /// The value a range stands for in a scalar context
    fn single(&self, range: &M::Range) -> Value<M>;

    /// The values of the cells in `range`
    fn values<'a>(&'a self, range: &M::Range) -> CellValues<'a, M>;
}

/// Exact decimal numbers over A1 ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalGrid;

impl Model for DecimalGrid {
    type Number = Decimal;
    type Range = RangeSpec;
}

/// Binary floating point numbers over A1 ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatGrid;

impl Model for FloatGrid {
    type Number = f64;
    type Range = RangeSpec;
}
