//! Formula values and the numeric/range model they are built over

use crate::context::Context;
use std::cmp::Ordering;
use std::fmt;
use tabula_core::{CellError, RangeSpec};

/// Shape queries the engine needs from an opaque range handle
pub trait RangeShape {
    /// True when the range denotes exactly one cell
    fn is_single_value(&self) -> bool;
}

impl RangeShape for RangeSpec {
    fn is_single_value(&self) -> bool {
        RangeSpec::is_single_value(self)
    }
}

/// The concrete number and range types a host evaluates formulas with
///
/// Models are zero-sized marker types; the providers in [`Context`] supply
/// the behavior.
pub trait Model: fmt::Debug + Clone + PartialEq + 'static {
    type Number: fmt::Debug + fmt::Display + Clone + PartialEq;
    type Range: RangeShape + fmt::Debug + Clone + PartialEq;
}

/// A literal or computed formula value
#[derive(Debug, Clone, PartialEq)]
pub enum Value<M: Model> {
    Number(M::Number),
    Text(String),
    Logical(bool),
    Range(M::Range),
    Error(CellError),
}

impl<M: Model> Value<M> {
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_error(&self) -> Option<CellError> {
        match self {
            Value::Error(e) => Some(*e),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&M::Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&M::Range> {
        match self {
            Value::Range(r) => Some(r),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Logical(_) => "logical",
            Value::Range(_) => "range",
            Value::Error(_) => "error",
        }
    }

    /// Reduce a range to the single value it stands for in a scalar context
    pub fn to_scalar(&self, ctx: &Context<'_, M>) -> Value<M> {
        match self {
            Value::Range(range) => ctx.ranges.single(range),
            other => other.clone(),
        }
    }

    /// Coerce to a number: logicals become 1/0, text goes through the number
    /// provider's parser.
    pub fn to_number(&self, ctx: &Context<'_, M>) -> Result<M::Number, CellError> {
        match self.to_scalar(ctx) {
            Value::Number(n) => Ok(n),
            Value::Logical(b) => Ok(ctx.numbers.integer(i64::from(b))),
            Value::Text(text) => ctx
                .numbers
                .parse_number(text.trim())
                .map_err(|_| CellError::Value),
            Value::Error(e) => Err(e),
            Value::Range(_) => Err(CellError::Value),
        }
    }

    /// Coerce to text
    pub fn to_text(&self, ctx: &Context<'_, M>) -> Result<String, CellError> {
        match self.to_scalar(ctx) {
            Value::Number(n) => Ok(n.to_string()),
            Value::Text(text) => Ok(text),
            Value::Logical(b) => Ok(logical_text(b).to_string()),
            Value::Error(e) => Err(e),
            Value::Range(_) => Err(CellError::Value),
        }
    }

    /// Coerce to a logical: non-zero numbers are TRUE, text must spell
    /// TRUE or FALSE.
    pub fn to_logical(&self, ctx: &Context<'_, M>) -> Result<bool, CellError> {
        match self.to_scalar(ctx) {
            Value::Logical(b) => Ok(b),
            Value::Number(n) => {
                Ok(ctx.numbers.compare(&n, &ctx.numbers.integer(0)) != Ordering::Equal)
            }
            Value::Text(text) => parse_logical(text.trim()).ok_or(CellError::Value),
            Value::Error(e) => Err(e),
            Value::Range(_) => Err(CellError::Value),
        }
    }
}

impl<M: Model> fmt::Display for Value<M>
where
    M::Range: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Logical(b) => f.write_str(logical_text(*b)),
            Value::Range(r) => write!(f, "{}", r),
            Value::Error(e) => write!(f, "{}", e),
        }
    }
}

impl<M: Model> From<bool> for Value<M> {
    fn from(b: bool) -> Self {
        Value::Logical(b)
    }
}

impl<M: Model> From<CellError> for Value<M> {
    fn from(e: CellError) -> Self {
        Value::Error(e)
    }
}

impl<M: Model> From<&str> for Value<M> {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl<M: Model> From<String> for Value<M> {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

pub(crate) fn logical_text(b: bool) -> &'static str {
    if b {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Parse `TRUE` / `FALSE` in any case
pub(crate) fn parse_logical(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("TRUE") {
        Some(true)
    } else if text.eq_ignore_ascii_case("FALSE") {
        Some(false)
    } else {
        None
    }
}
