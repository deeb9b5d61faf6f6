//! Formula error types

use std::fmt;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// A positional diagnostic produced while tokenizing or parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at {position})")]
pub struct ParseError {
    /// Character offset into the cell text, counting the leading `=`
    pub position: usize,
    pub message: String,
}

impl ParseError {
    pub fn new<S: Into<String>>(position: usize, message: S) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// Failures reported by a number provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// Text is not a number
    #[error("invalid number format: '{0}'")]
    Format(String),

    #[error("division by zero")]
    DivisionByZero,

    /// Result does not fit the numeric representation
    #[error("numeric overflow")]
    Overflow,

    /// Operation undefined for its operands (e.g. a fractional power of a negative)
    #[error("domain error: {0}")]
    Domain(String),
}

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Structural parse fault; carries every diagnostic gathered up to the fault
    #[error("Parse error: {}", DisplayErrors(.0))]
    Parse(Vec<ParseError>),

    /// Unknown function
    #[error("Unknown function: '{0}'")]
    UnknownFunction(String),

    /// Wrong number of arguments
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Arithmetic fault surfaced from the number provider
    #[error("Arithmetic error: {0}")]
    Number(#[from] NumberError),

    /// Invalid range reference
    #[error("Invalid reference: {0}")]
    Reference(#[from] tabula_core::Error),

    /// Formula evaluation error
    #[error("Evaluation error: {0}")]
    Evaluation(String),
}

impl FormulaError {
    /// The diagnostics of a parse failure, empty for any other error
    pub fn parse_errors(&self) -> &[ParseError] {
        match self {
            FormulaError::Parse(errors) => errors,
            _ => &[],
        }
    }
}

struct DisplayErrors<'a>(&'a [ParseError]);

impl fmt::Display for DisplayErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}
