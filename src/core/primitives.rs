use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{LensError, LensResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> LensResult<f64> {
    value.to_f64().ok_or_else(|| {
        LensError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Converts through the shortest round-trip text of `value`, so `0.1_f64`
/// becomes exactly `0.1` instead of its binary expansion.
pub fn f64_to_decimal(value: f64, field_name: &str) -> LensResult<Decimal> {
    if !value.is_finite() {
        return Err(LensError::InvalidData(format!(
            "{field_name} must be finite"
        )));
    }
    Decimal::from_str(&value.to_string()).map_err(|err| {
        LensError::InvalidData(format!(
            "{field_name} cannot be represented as a decimal: {err}"
        ))
    })
}

/// Significant digits kept when snapping axis values before the GCD.
pub const DECIMAL_SIGNIFICANT_DIGITS: u32 = 12;

/// Rounds `value` to [`DECIMAL_SIGNIFICANT_DIGITS`], dropping float noise
/// such as the tail of `0.1 + 0.2 = 0.30000000000000004`.
#[must_use]
pub fn snap_decimal(value: Decimal) -> Decimal {
    value
        .round_sf(DECIMAL_SIGNIFICANT_DIGITS)
        .unwrap_or(value)
        .normalize()
}

/// Euclidean greatest common divisor over exact decimals.
///
/// Both inputs are taken by absolute value. `gcd(a, 0) == |a|`.
#[must_use]
pub fn decimal_gcd(a: Decimal, b: Decimal) -> Decimal {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a.normalize()
}

/// GCD of two finite reals, computed on their snapped decimal forms.
pub fn gcd_f64(a: f64, b: f64) -> LensResult<f64> {
    let a = snap_decimal(f64_to_decimal(a, "gcd operand")?);
    let b = snap_decimal(f64_to_decimal(b, "gcd operand")?);
    decimal_to_f64(decimal_gcd(a, b), "gcd")
}

/// `|b - a|` evaluated on decimal forms when both fit, so `0.3 - 0.1`
/// yields `0.2` rather than `0.19999999999999998`.
#[must_use]
pub fn exact_abs_difference(a: f64, b: f64) -> f64 {
    let exact = match (f64_to_decimal(a, "operand"), f64_to_decimal(b, "operand")) {
        (Ok(a), Ok(b)) => b.checked_sub(a).and_then(|diff| diff.abs().to_f64()),
        _ => None,
    };
    exact.unwrap_or_else(|| (b - a).abs())
}
