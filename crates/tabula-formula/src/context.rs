//! Parse and evaluation context

use crate::functions::FunctionRegistry;
use crate::providers::{NumberProvider, RangeProvider};
use crate::value::Model;
use tabula_core::CellError;

/// What a Number or Range token becomes when its provider rejects the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralFallback {
    /// Keep the token text as a Text literal
    #[default]
    Text,
    /// Use an error literal: `#VALUE!` for numbers, `#REF!` for ranges
    Error,
}

impl LiteralFallback {
    /// The error kind used for a rejected Number token
    pub fn number_error() -> CellError {
        CellError::Value
    }

    /// The error kind used for a rejected Range token
    pub fn range_error() -> CellError {
        CellError::Ref
    }
}

/// Options that affect how formula text is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub literal_fallback: LiteralFallback,
}

impl ParseOptions {
    pub fn with_literal_fallback(mut self, fallback: LiteralFallback) -> Self {
        self.literal_fallback = fallback;
        self
    }
}

/// Capabilities shared by parsing and evaluation
///
/// The context only borrows its providers; the host owns them and may reuse
/// them across any number of formulas.
pub struct Context<'a, M: Model> {
    /// Parses number literals and does arithmetic
    pub numbers: &'a dyn NumberProvider<M>,
    /// Parses range literals, intersects and iterates ranges
    pub ranges: &'a dyn RangeProvider<M>,
    /// Functions callable from formulas
    pub functions: &'a FunctionRegistry<M>,
    pub options: ParseOptions,
}

impl<'a, M: Model> Context<'a, M> {
    /// Create a context with default parse options
    pub fn new(
        numbers: &'a dyn NumberProvider<M>,
        ranges: &'a dyn RangeProvider<M>,
        functions: &'a FunctionRegistry<M>,
    ) -> Self {
        Self {
            numbers,
            ranges,
            functions,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// The same capabilities over a different range provider
    pub fn with_ranges<'b>(&self, ranges: &'b dyn RangeProvider<M>) -> Context<'b, M>
    where
        'a: 'b,
    {
        Context {
            numbers: self.numbers,
            ranges,
            functions: self.functions,
            options: self.options,
        }
    }
}

impl<M: Model> Clone for Context<'_, M> {
    fn clone(&self) -> Self {
        Self {
            numbers: self.numbers,
            ranges: self.ranges,
            functions: self.functions,
            options: self.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fallback_error_kinds() {
        assert_eq!(LiteralFallback::number_error(), CellError::Value);
        assert_eq!(LiteralFallback::range_error(), CellError::Ref);
        assert_eq!(ParseOptions::default().literal_fallback, LiteralFallback::Text);
    }
}
