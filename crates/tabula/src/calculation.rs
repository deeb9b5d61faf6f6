//! One-shot formula calculation
//!
//! Parses and evaluates a single piece of cell text against a [`Context`].
//!
//! # Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let mut grid: GridRanges<DecimalGrid> = GridRanges::new();
//! grid.set_a1("A1", Value::Number(Decimal::from(10))).unwrap();
//! grid.set_a1("A2", Value::Number(Decimal::from(20))).unwrap();
//!
//! let functions = FunctionRegistry::new();
//! let ctx: Context<'_, DecimalGrid> = Context::new(&DecimalNumbers, &grid, &functions);
//!
//! let calculation = calculate("=A1+A2", &ctx, &CalculationOptions::default()).unwrap();
//! assert_eq!(calculation.value, Value::Number(Decimal::from(30)));
//! assert!(calculation.diagnostics.is_empty());
//! ```

use crate::{
    evaluate, parse, Context, FormulaError, FormulaResult, Model, ParseError, ParseOptions, Value,
};

/// Options for a calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculationOptions {
    /// Parse options to use instead of the ones carried by the context
    pub parse: Option<ParseOptions>,
    /// Fail on any parse diagnostic instead of evaluating the degraded tree
    pub strict: bool,
}

impl CalculationOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = Some(parse);
        self
    }
}

/// Result of a calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation<M: Model> {
    pub value: Value<M>,
    /// Non-fatal parse diagnostics (rejected literals, unknown names, stream faults)
    pub diagnostics: Vec<ParseError>,
}

impl<M: Model> Calculation<M> {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse and evaluate `text`
///
/// `options.parse`, when set, replaces the parse options carried by `ctx`.
/// Structural parse faults and evaluation faults are returned as errors; in
/// strict mode so are the diagnostics that would otherwise ride along with the
/// value.
pub fn calculate<M: Model>(
    text: &str,
    ctx: &Context<'_, M>,
    options: &CalculationOptions,
) -> FormulaResult<Calculation<M>> {
    let ctx = match options.parse {
        Some(parse_options) => ctx.clone().with_options(parse_options),
        None => ctx.clone(),
    };
    let parsed = parse(text, &ctx)?;

    if options.strict && !parsed.errors.is_empty() {
        tracing::debug!(diagnostics = parsed.errors.len(), "strict calculation rejected");
        return Err(FormulaError::Parse(parsed.errors));
    }

    let value = evaluate(&parsed.expr, &ctx)?;
    tracing::trace!(value = value.kind_name(), "formula calculated");

    Ok(Calculation {
        value,
        diagnostics: parsed.errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CellError, DecimalGrid, DecimalNumbers, FunctionRegistry, GridRanges, LiteralFallback,
    };
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn run(text: &str, options: CalculationOptions) -> FormulaResult<Calculation<DecimalGrid>> {
        run_with(text, ParseOptions::default(), options)
    }

    fn run_with(
        text: &str,
        context_options: ParseOptions,
        options: CalculationOptions,
    ) -> FormulaResult<Calculation<DecimalGrid>> {
        let mut grid = GridRanges::new();
        grid.set(1, 1, Value::Number(Decimal::from(4)));
        let functions = FunctionRegistry::new();
        let ctx: Context<'_, DecimalGrid> =
            Context::new(&DecimalNumbers, &grid, &functions).with_options(context_options);
        calculate(text, &ctx, &options)
    }

    #[test]
    fn test_calculate_clean() {
        let calculation = run("=A1*2", CalculationOptions::default()).unwrap();
        assert_eq!(calculation.value, Value::Number(Decimal::from(8)));
        assert!(calculation.is_clean());
    }

    #[test]
    fn test_calculate_plain_text() {
        let calculation = run("hello", CalculationOptions::default()).unwrap();
        assert_eq!(calculation.value, Value::Text("hello".into()));
    }

    #[test]
    fn test_diagnostics_ride_along() {
        let calculation = run("=foo", CalculationOptions::default()).unwrap();
        assert_eq!(calculation.value, Value::Error(CellError::Name));
        assert_eq!(calculation.diagnostics.len(), 1);
    }

    #[test]
    fn test_strict_rejects_diagnostics() {
        let err = run("=foo", CalculationOptions::strict()).unwrap_err();
        assert_eq!(err.parse_errors().len(), 1);
    }

    #[test]
    fn test_parse_options_override_context() {
        let parse_options = ParseOptions::default().with_literal_fallback(LiteralFallback::Error);
        let options = CalculationOptions::default().with_parse_options(parse_options);
        let calculation = run("=1e99", options).unwrap();
        assert_eq!(calculation.value, Value::Error(CellError::Value));
        assert!(!calculation.is_clean());
    }

    #[test]
    fn test_context_parse_options_kept_by_default() {
        let errors = ParseOptions::default().with_literal_fallback(LiteralFallback::Error);
        let calculation = run_with("=1e99", errors, CalculationOptions::default()).unwrap();
        assert_eq!(calculation.value, Value::Error(CellError::Value));

        let text = CalculationOptions::default().with_parse_options(ParseOptions::default());
        let calculation = run_with("=1e99", errors, text).unwrap();
        assert_eq!(calculation.value, Value::Text("1e99".into()));
    }

    #[test]
    fn test_structural_fault_is_an_error() {
        assert!(matches!(
            run("=(1", CalculationOptions::default()),
            Err(FormulaError::Parse(_))
        ));
    }
}
