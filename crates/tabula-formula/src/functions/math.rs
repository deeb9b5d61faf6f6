//! Math and aggregation functions

use crate::context::Context;
use crate::error::FormulaResult;
use crate::value::{Model, Value};
use std::cmp::Ordering;
use tabula_core::CellError;

/// Feed every number in `args` to `visit`: direct number arguments and the
/// number cells of range arguments. Text, logicals and non-number cells are
/// skipped. A direct error argument stops the walk and is returned.
fn for_each_number<M: Model>(
    args: &[Value<M>],
    ctx: &Context<'_, M>,
    mut visit: impl FnMut(M::Number) -> FormulaResult<()>,
) -> FormulaResult<Option<CellError>> {
    for arg in args {
        match arg {
            Value::Number(n) => visit(n.clone())?,
            Value::Range(range) => {
                for cell in ctx.ranges.values(range) {
                    if let Value::Number(n) = cell? {
                        visit(n)?;
                    }
                }
            }
            Value::Error(e) => return Ok(Some(*e)),
            _ => {} // Ignore non-numeric
        }
    }
    Ok(None)
}

/// SUM function
pub fn fn_sum<M: Model>(args: &[Value<M>], ctx: &Context<'_, M>) -> FormulaResult<Value<M>> {
    let mut sum = ctx.numbers.integer(0);

    let error = for_each_number(args, ctx, |n| {
        sum = ctx.numbers.add(&sum, &n)?;
        Ok(())
    })?;

    Ok(match error {
        Some(e) => Value::Error(e),
        None => Value::Number(sum),
    })
}

/// COUNT function
///
/// Counts numbers; unlike the other aggregates it ignores error arguments.
pub fn fn_count<M: Model>(args: &[Value<M>], ctx: &Context<'_, M>) -> FormulaResult<Value<M>> {
    let mut count: i64 = 0;

    for arg in args {
        match arg {
            Value::Number(_) => count += 1,
            Value::Range(range) => {
                for cell in ctx.ranges.values(range) {
                    if let Value::Number(_) = cell? {
                        count += 1;
                    }
                }
            }
            _ => {}
        }
    }

    Ok(Value::Number(ctx.numbers.integer(count)))
}

/// AVERAGE function
pub fn fn_average<M: Model>(args: &[Value<M>], ctx: &Context<'_, M>) -> FormulaResult<Value<M>> {
    let mut sum = ctx.numbers.integer(0);
    let mut count: i64 = 0;

    let error = for_each_number(args, ctx, |n| {
        sum = ctx.numbers.add(&sum, &n)?;
        count += 1;
        Ok(())
    })?;

    if let Some(e) = error {
        return Ok(Value::Error(e));
    }
    if count == 0 {
        return Ok(Value::Error(CellError::Div0));
    }
    Ok(Value::Number(ctx.numbers.div(&sum, &ctx.numbers.integer(count))?))
}

/// Smallest or largest number, zero when there are none
fn extreme<M: Model>(
    args: &[Value<M>],
    ctx: &Context<'_, M>,
    keep: Ordering,
) -> FormulaResult<Value<M>> {
    let mut best: Option<M::Number> = None;

    let error = for_each_number(args, ctx, |n| {
        let replace = match &best {
            Some(b) => ctx.numbers.compare(&n, b) == keep,
            None => true,
        };
        if replace {
            best = Some(n);
        }
        Ok(())
    })?;

    Ok(match error {
        Some(e) => Value::Error(e),
        None => Value::Number(best.unwrap_or_else(|| ctx.numbers.integer(0))),
    })
}

/// MIN function
pub fn fn_min<M: Model>(args: &[Value<M>], ctx: &Context<'_, M>) -> FormulaResult<Value<M>> {
    extreme(args, ctx, Ordering::Less)
}

/// MAX function
pub fn fn_max<M: Model>(args: &[Value<M>], ctx: &Context<'_, M>) -> FormulaResult<Value<M>> {
    extreme(args, ctx, Ordering::Greater)
}
