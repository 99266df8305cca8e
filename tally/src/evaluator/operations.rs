//! Arithmetic on operand pairs

use crate::{Operator, TallyError, TallyResult};

/// Apply `left <op> right` with IEEE 754 double semantics.
///
/// Division by an exact zero (either sign) is an error rather than an
/// infinity.
pub fn apply(left: f64, op: Operator, right: f64) -> TallyResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Subtract => Ok(left - right),
        Operator::Multiply => Ok(left * right),
        Operator::Divide => {
            if right == 0.0 {
                return Err(TallyError::DivisionByZero);
            }
            Ok(left / right)
        }
    }
}

/// Read number text as produced by the scanner: ASCII digits and `.` only.
///
/// Anything else, including text the scanner would accept but that has more
/// than one decimal point, is not a number. Neither is text too large for an
/// `f64`.
pub fn parse_number(text: &str) -> Option<f64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
