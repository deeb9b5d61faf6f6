//! Exact decimal arithmetic

use super::NumberProvider;
use crate::error::NumberError;
use crate::value::Model;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use std::cmp::Ordering;
use std::str::FromStr;

/// Number provider over [`rust_decimal::Decimal`]
///
/// `0.1 + 0.2` is exactly `0.3`. Results that exceed the 96-bit mantissa are
/// reported as [`NumberError::Overflow`] rather than rounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalNumbers;

impl<M: Model<Number = Decimal>> NumberProvider<M> for DecimalNumbers {
    fn parse_number(&self, text: &str) -> Result<Decimal, NumberError> {
        let text = text.trim();
        let parsed = if text.contains(|c: char| c == 'e' || c == 'E') {
            Decimal::from_scientific(text)
        } else {
            Decimal::from_str(text)
        };
        parsed.map_err(|_| NumberError::Format(text.to_string()))
    }

    fn integer(&self, value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn add(&self, a: &Decimal, b: &Decimal) -> Result<Decimal, NumberError> {
        a.checked_add(*b).ok_or(NumberError::Overflow)
    }

    fn sub(&self, a: &Decimal, b: &Decimal) -> Result<Decimal, NumberError> {
        a.checked_sub(*b).ok_or(NumberError::Overflow)
    }

    fn mul(&self, a: &Decimal, b: &Decimal) -> Result<Decimal, NumberError> {
        a.checked_mul(*b).ok_or(NumberError::Overflow)
    }

    fn div(&self, a: &Decimal, b: &Decimal) -> Result<Decimal, NumberError> {
        if b.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        a.checked_div(*b).ok_or(NumberError::Overflow)
    }

    fn pow(&self, base: &Decimal, exponent: &Decimal) -> Result<Decimal, NumberError> {
        if base.is_zero() && exponent.is_sign_negative() && !exponent.is_zero() {
            return Err(NumberError::DivisionByZero);
        }

        if exponent.fract().is_zero() {
            let power = exponent.to_i64().ok_or(NumberError::Overflow)?;
            return base.checked_powi(power).ok_or(NumberError::Overflow);
        }

        if base.is_sign_negative() && !base.is_zero() {
            return Err(NumberError::Domain(format!(
                "{} raised to fractional power {}",
                base, exponent
            )));
        }
        base.checked_powd(*exponent).ok_or(NumberError::Overflow)
    }

    fn compare(&self, a: &Decimal, b: &Decimal) -> Ordering {
        a.cmp(b)
    }

    fn neg(&self, a: &Decimal) -> Result<Decimal, NumberError> {
        Ok(-*a)
    }

    fn percent(&self, a: &Decimal) -> Result<Decimal, NumberError> {
        a.checked_div(Decimal::ONE_HUNDRED)
            .ok_or(NumberError::Overflow)
    }
}
