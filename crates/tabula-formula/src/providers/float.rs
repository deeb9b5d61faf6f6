//! Binary floating point arithmetic

use super::NumberProvider;
use crate::error::NumberError;
use crate::value::Model;
use std::cmp::Ordering;

/// Number provider over `f64`
///
/// Non-finite results never escape: infinities become
/// [`NumberError::Overflow`] and NaN becomes [`NumberError::Domain`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatNumbers;

fn finite(value: f64) -> Result<f64, NumberError> {
    if value.is_nan() {
        Err(NumberError::Domain("result is not a number".into()))
    } else if value.is_infinite() {
        Err(NumberError::Overflow)
    } else {
        Ok(value)
    }
}

impl<M: Model<Number = f64>> NumberProvider<M> for FloatNumbers {
    fn parse_number(&self, text: &str) -> Result<f64, NumberError> {
        let text = text.trim();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(NumberError::Format(text.to_string())),
        }
    }

    fn integer(&self, value: i64) -> f64 {
        value as f64
    }

    fn add(&self, a: &f64, b: &f64) -> Result<f64, NumberError> {
        finite(a + b)
    }

    fn sub(&self, a: &f64, b: &f64) -> Result<f64, NumberError> {
        finite(a - b)
    }

    fn mul(&self, a: &f64, b: &f64) -> Result<f64, NumberError> {
        finite(a * b)
    }

    fn div(&self, a: &f64, b: &f64) -> Result<f64, NumberError> {
        if *b == 0.0 {
            return Err(NumberError::DivisionByZero);
        }
        finite(a / b)
    }

    fn pow(&self, base: &f64, exponent: &f64) -> Result<f64, NumberError> {
        if *base == 0.0 && *exponent < 0.0 {
            return Err(NumberError::DivisionByZero);
        }
        finite(base.powf(*exponent))
    }

    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }

    fn neg(&self, a: &f64) -> Result<f64, NumberError> {
        Ok(-a)
    }
}
