//! Logical functions

use crate::context::Context;
use crate::error::FormulaResult;
use crate::value::{Model, Value};
use std::cmp::Ordering;
use tabula_core::CellError;

/// Collect the truth values of the arguments
///
/// Scalars are coerced; in ranges only logical and number cells count. The
/// first error met is returned instead.
fn truth_values<M: Model>(
    args: &[Value<M>],
    ctx: &Context<'_, M>,
) -> FormulaResult<Result<Vec<bool>, CellError>> {
    let zero = ctx.numbers.integer(0);
    let mut values = Vec::new();

    for arg in args {
        match arg {
            Value::Range(range) => {
                for cell in ctx.ranges.values(range) {
                    match cell? {
                        Value::Logical(b) => values.push(b),
                        Value::Number(n) => {
                            values.push(ctx.numbers.compare(&n, &zero) != Ordering::Equal)
                        }
                        Value::Error(e) => return Ok(Err(e)),
                        _ => {}
                    }
                }
            }
            scalar => match scalar.to_logical(ctx) {
                Ok(b) => values.push(b),
                Err(e) => return Ok(Err(e)),
            },
        }
    }

    Ok(Ok(values))
}

fn fold<M: Model>(
    args: &[Value<M>],
    ctx: &Context<'_, M>,
    combine: fn(&[bool]) -> bool,
) -> FormulaResult<Value<M>> {
    Ok(match truth_values(args, ctx)? {
        Ok(values) if values.is_empty() => Value::Error(CellError::Value),
        Ok(values) => Value::Logical(combine(&values)),
        Err(e) => Value::Error(e),
    })
}

/// IF function
///
/// Both branches are evaluated before the call; the missing else branch is
/// FALSE.
pub fn fn_if<M: Model>(args: &[Value<M>], ctx: &Context<'_, M>) -> FormulaResult<Value<M>> {
    let Some(condition) = args.first() else {
        return Ok(Value::Error(CellError::Value));
    };

    match condition.to_logical(ctx) {
        Ok(true) => Ok(args.get(1).cloned().unwrap_or(Value::Logical(true))),
        Ok(false) => Ok(args.get(2).cloned().unwrap_or(Value::Logical(false))),
        Err(e) => Ok(Value::Error(e)),
    }
}

/// AND function
pub fn fn_and<M: Model>(args: &[Value<M>], ctx: &Context<'_, M>) -> FormulaResult<Value<M>> {
    fold(args, ctx, |values| values.iter().all(|b| *b))
}

/// OR function
pub fn fn_or<M: Model>(args: &[Value<M>], ctx: &Context<'_, M>) -> FormulaResult<Value<M>> {
    fold(args, ctx, |values| values.iter().any(|b| *b))
}

/// NOT function
pub fn fn_not<M: Model>(args: &[Value<M>], ctx: &Context<'_, M>) -> FormulaResult<Value<M>> {
    Ok(match args.first().map(|arg| arg.to_logical(ctx)) {
        Some(Ok(b)) => Value::Logical(!b),
        Some(Err(e)) => Value::Error(e),
        None => Value::Error(CellError::Value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::FunctionRegistry;
    use crate::providers::{DecimalGrid, DecimalNumbers, GridRanges};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use tabula_core::RangeSpec;

    type V = Value<DecimalGrid>;

    fn sheet() -> GridRanges<DecimalGrid> {
        let mut grid = GridRanges::new();
        grid.set(1, 1, Value::Logical(true));
        grid.set(1, 2, Value::Number(Decimal::from(2)));
        grid.set(1, 3, Value::Text("ignored".into()));
        grid.set(2, 1, Value::Number(Decimal::ZERO));
        grid.set(3, 1, Value::Error(CellError::Div0));
        grid
    }

    fn call(f: fn(&[V], &Context<'_, DecimalGrid>) -> FormulaResult<V>, args: &[V]) -> V {
        let grid = sheet();
        let functions = FunctionRegistry::new();
        let ctx: Context<'_, DecimalGrid> = Context::new(&DecimalNumbers, &grid, &functions);
        f(args, &ctx).unwrap()
    }

    fn column(col: u32) -> V {
        Value::Range(RangeSpec::columns(col, col))
    }

    #[test]
    fn test_if() {
        let yes = Value::Text("yes".into());
        let no = Value::Text("no".into());
        assert_eq!(call(fn_if, &[Value::Logical(true), yes.clone(), no.clone()]), yes);
        assert_eq!(
            call(fn_if, &[Value::Number(Decimal::ZERO), yes.clone(), no.clone()]),
            no
        );
        assert_eq!(
            call(fn_if, &[Value::Logical(false), yes.clone()]),
            Value::Logical(false)
        );
        assert_eq!(
            call(fn_if, &[Value::Error(CellError::Na), yes.clone(), no.clone()]),
            Value::Error(CellError::Na)
        );
        assert_eq!(
            call(fn_if, &[Value::Text("maybe".into()), yes, no]),
            Value::Error(CellError::Value)
        );
    }

    #[test]
    fn test_and_or() {
        assert_eq!(call(fn_and, &[column(1)]), Value::Logical(true));
        assert_eq!(
            call(fn_and, &[column(1), column(2)]),
            Value::Logical(false)
        );
        assert_eq!(call(fn_or, &[column(2)]), Value::Logical(false));
        assert_eq!(
            call(fn_or, &[column(2), Value::Logical(true)]),
            Value::Logical(true)
        );
        assert_eq!(
            call(fn_or, &[column(3)]),
            Value::Error(CellError::Div0)
        );
        // a range with nothing to test
        assert_eq!(
            call(fn_and, &[column(9)]),
            Value::Error(CellError::Value)
        );
        assert_eq!(
            call(fn_and, &[Value::Text("TRUE".into())]),
            Value::Logical(true)
        );
    }

    #[test]
    fn test_not() {
        assert_eq!(call(fn_not, &[Value::Logical(true)]), Value::Logical(false));
        assert_eq!(
            call(fn_not, &[Value::Number(Decimal::ZERO)]),
            Value::Logical(true)
        );
        assert_eq!(
            call(fn_not, &[Value::Error(CellError::Ref)]),
            Value::Error(CellError::Ref)
        );
    }
}
