// ============================================================================
// Fixed Literals
// Rendering numbers as fixed-point decimal strings before masking
// ============================================================================

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::LazyLock;

/// Leading decimal literal of an unmasked string (`parseFloat` prefix rules).
static LEADING_LITERAL: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(-?)(?:(\d+)(?:\.(\d*))?|\.(\d+))").expect("static pattern compiles")
});

/// Render `value` with exactly `precision` fractional digits.
///
/// Rounds half away from zero. Non-finite values render as zero. Values
/// outside the range of [`Decimal`] fall back to `f64` formatting.
///
/// ```
/// use currency_mask::numeric::fixed_literal;
///
/// assert_eq!(fixed_literal(1234567.89999, 2), "1234567.90");
/// assert_eq!(fixed_literal(2.5, 0), "3");
/// assert_eq!(fixed_literal(-0.125, 2), "-0.13");
/// ```
pub fn fixed_literal(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return fixed_zero(precision);
    }
    match Decimal::from_f64(value) {
        Some(d) => decimal_literal(d, precision),
        None => format!("{:.*}", precision, value),
    }
}

/// Render a decimal with exactly `precision` fractional digits.
pub fn decimal_literal(value: Decimal, precision: usize) -> String {
    let dp = precision as u32;
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    if rounded.scale() == dp {
        rounded.to_string()
    } else {
        // the mantissa could not hold the requested scale
        format!("{:.*}", precision, rounded)
    }
}

/// Parse the leading decimal literal of `text` and render it with exactly
/// `precision` fractional digits.
///
/// Only an optional `-`, digits, and one `.` are considered; parsing stops
/// at the first character that cannot continue the literal. Text with no
/// leading literal renders as zero.
///
/// ```
/// use currency_mask::numeric::parse_fixed_literal;
///
/// assert_eq!(parse_fixed_literal("1234.5abc", 2), "1234.50");
/// assert_eq!(parse_fixed_literal("-.5", 1), "-0.5");
/// assert_eq!(parse_fixed_literal("--5", 2), "0.00");
/// ```
pub fn parse_fixed_literal(text: &str, precision: usize) -> String {
    let Some(caps) = LEADING_LITERAL.captures(text) else {
        return fixed_zero(precision);
    };

    let sign = caps.get(1).map_or("", |m| m.as_str());
    let (integer, fraction) = match caps.get(2) {
        Some(int) => (int.as_str(), caps.get(3).map_or("", |m| m.as_str())),
        None => ("0", caps.get(4).map_or("", |m| m.as_str())),
    };
    let literal = if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    };

    match Decimal::from_str(&literal) {
        Ok(d) => decimal_literal(d, precision),
        Err(_) => fixed_literal(literal.parse().unwrap_or(0.0), precision),
    }
}

fn fixed_zero(precision: usize) -> String {
    format!("{:.*}", precision, 0.0)
}
