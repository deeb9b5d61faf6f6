//! Formula evaluator

use crate::ast::{Expr, Operator};
use crate::context::Context;
use crate::error::{FormulaError, FormulaResult, NumberError};
use crate::value::{Model, Value};
use std::cmp::Ordering;
use tabula_core::CellError;

/// Evaluate a formula expression
///
/// Spreadsheet errors (`#VALUE!`, `#DIV/0!`, ...) are ordinary values and
/// flow through operators. `Err` is reserved for faults that abort the whole
/// evaluation: unknown functions, wrong argument counts, provider arithmetic
/// or iteration failures.
pub fn evaluate<M: Model>(expr: &Expr<M>, ctx: &Context<'_, M>) -> FormulaResult<Value<M>> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Function { name, args } => evaluate_function(name, args, ctx),
        Expr::Operator { op, operands } => evaluate_operator(*op, operands, ctx),
    }
}

/// Evaluate a function call
fn evaluate_function<M: Model>(
    name: &str,
    args: &[Expr<M>],
    ctx: &Context<'_, M>,
) -> FormulaResult<Value<M>> {
    let func = ctx
        .functions
        .get(name)
        .ok_or_else(|| FormulaError::UnknownFunction(name.to_lowercase()))?;

    // Check argument count
    if args.len() < func.min_args {
        return Err(FormulaError::ArgumentCount {
            function: func.name.to_string(),
            expected: format!("at least {}", func.min_args),
            actual: args.len(),
        });
    }

    if let Some(max) = func.max_args {
        if args.len() > max {
            return Err(FormulaError::ArgumentCount {
                function: func.name.to_string(),
                expected: format!("at most {}", max),
                actual: args.len(),
            });
        }
    }

    // Evaluate arguments left to right
    let mut evaluated_args = Vec::with_capacity(args.len());
    for arg in args {
        evaluated_args.push(evaluate(arg, ctx)?);
    }

    tracing::trace!(function = func.name, args = evaluated_args.len(), "calling function");
    (func.implementation)(&evaluated_args, ctx)
}

/// Evaluate an operator node
fn evaluate_operator<M: Model>(
    op: Operator,
    operands: &[Expr<M>],
    ctx: &Context<'_, M>,
) -> FormulaResult<Value<M>> {
    if operands.len() != op.arity() {
        return Err(FormulaError::Evaluation(format!(
            "operator '{}' expects {} operands, got {}",
            op,
            op.arity(),
            operands.len()
        )));
    }

    let mut values = Vec::with_capacity(operands.len());
    for operand in operands {
        values.push(evaluate(operand, ctx)?);
    }

    match (op, values.as_slice()) {
        (Operator::UnaryNegation, [value]) => unary(value, ctx, |n| ctx.numbers.neg(n)),
        (Operator::Percent, [value]) => unary(value, ctx, |n| ctx.numbers.percent(n)),
        (Operator::Intersection, [left, right]) => Ok(intersect(left, right, ctx)),
        (Operator::Concatenation, [left, right]) => {
            let text = left
                .to_text(ctx)
                .and_then(|l| right.to_text(ctx).map(|r| l + &r));
            Ok(match text {
                Ok(text) => Value::Text(text),
                Err(e) => Value::Error(e),
            })
        }
        (op, [left, right]) if op.is_comparison() => Ok(compare(op, left, right, ctx)),
        (op, [left, right]) => {
            let numbers = ctx.numbers;
            binary(left, right, ctx, |a, b| match op {
                Operator::Addition => numbers.add(a, b),
                Operator::Subtraction => numbers.sub(a, b),
                Operator::Multiplication => numbers.mul(a, b),
                Operator::Division => numbers.div(a, b),
                _ => numbers.pow(a, b),
            })
        }
        _ => Err(FormulaError::Evaluation(format!(
            "operator '{}' applied to {} operands",
            op,
            values.len()
        ))),
    }
}

/// Map a provider result to a value
///
/// Division by zero and domain errors are spreadsheet errors; anything else
/// aborts evaluation.
fn arithmetic<M: Model>(result: Result<M::Number, NumberError>) -> FormulaResult<Value<M>> {
    match result {
        Ok(n) => Ok(Value::Number(n)),
        Err(NumberError::DivisionByZero) => Ok(Value::Error(CellError::Div0)),
        Err(NumberError::Domain(_)) => Ok(Value::Error(CellError::Num)),
        Err(err) => Err(err.into()),
    }
}

fn unary<M: Model>(
    value: &Value<M>,
    ctx: &Context<'_, M>,
    apply: impl FnOnce(&M::Number) -> Result<M::Number, NumberError>,
) -> FormulaResult<Value<M>> {
    match value.to_number(ctx) {
        Ok(n) => arithmetic(apply(&n)),
        Err(e) => Ok(Value::Error(e)),
    }
}

fn binary<M: Model>(
    left: &Value<M>,
    right: &Value<M>,
    ctx: &Context<'_, M>,
    apply: impl FnOnce(&M::Number, &M::Number) -> Result<M::Number, NumberError>,
) -> FormulaResult<Value<M>> {
    let l = match left.to_number(ctx) {
        Ok(n) => n,
        Err(e) => return Ok(Value::Error(e)),
    };
    let r = match right.to_number(ctx) {
        Ok(n) => n,
        Err(e) => return Ok(Value::Error(e)),
    };
    arithmetic(apply(&l, &r))
}

fn intersect<M: Model>(left: &Value<M>, right: &Value<M>, ctx: &Context<'_, M>) -> Value<M> {
    match (left, right) {
        (Value::Range(a), Value::Range(b)) => Value::Range(ctx.ranges.intersect(a, b)),
        (Value::Error(e), _) | (_, Value::Error(e)) => Value::Error(*e),
        _ => Value::Error(CellError::Value),
    }
}

/// Comparison with spreadsheet ordering: numbers < text < logicals
fn compare<M: Model>(
    op: Operator,
    left: &Value<M>,
    right: &Value<M>,
    ctx: &Context<'_, M>,
) -> Value<M> {
    let left = left.to_scalar(ctx);
    let right = right.to_scalar(ctx);
    if let Some(e) = left.as_error().or_else(|| right.as_error()) {
        return Value::Error(e);
    }

    let ordering = compare_values(&left, &right, ctx);
    let result = match op {
        Operator::Equality => ordering == Ordering::Equal,
        Operator::Inequality => ordering != Ordering::Equal,
        Operator::LessThan => ordering == Ordering::Less,
        Operator::LessOrEqual => ordering != Ordering::Greater,
        Operator::GreaterThan => ordering == Ordering::Greater,
        _ => ordering != Ordering::Less,
    };
    Value::Logical(result)
}

fn type_rank<M: Model>(value: &Value<M>) -> u8 {
    match value {
        Value::Number(_) => 0,
        Value::Text(_) => 1,
        Value::Logical(_) => 2,
        Value::Range(_) => 3,
        Value::Error(_) => 4,
    }
}

fn compare_values<M: Model>(left: &Value<M>, right: &Value<M>, ctx: &Context<'_, M>) -> Ordering {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => ctx.numbers.compare(l, r),
        (Value::Text(l), Value::Text(r)) => l.to_lowercase().cmp(&r.to_lowercase()),
        (Value::Logical(l), Value::Logical(r)) => l.cmp(r),
        (l, r) => type_rank(l).cmp(&type_rank(r)),
    }
}
