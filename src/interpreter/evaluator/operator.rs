use crate::interpreter::token::Operator;

/// Applies an operator to its operands.
///
/// Unary minus ignores `left` and negates `right`. `%` is the IEEE 754
/// remainder, see [`remainder`].
///
/// # Example
/// ```
/// use stepcalc::interpreter::{evaluator::operator::apply_operator, token::Operator};
///
/// assert_eq!(apply_operator(Operator::Exponent, 2.0, 10.0), 1024.0);
/// assert_eq!(apply_operator(Operator::UnaryMinus, 0.0, 3.0), -3.0);
/// ```
#[must_use]
pub fn apply_operator(op: Operator, left: f64, right: f64) -> f64 {
    match op {
        Operator::Plus => left + right,
        Operator::BinaryMinus => left - right,
        Operator::UnaryMinus => -right,
        Operator::Multiply => left * right,
        Operator::Divide => left / right,
        Operator::Exponent => left.powf(right),
        Operator::Modulo => remainder(left, right),
    }
}

/// The IEEE 754 remainder of `x / y`.
///
/// The quotient is rounded to the nearest integer, ties to even, so the
/// result lies in `[-|y| / 2, |y| / 2]` and may be negative for positive
/// operands.
///
/// # Example
/// ```
/// use stepcalc::interpreter::evaluator::operator::remainder;
///
/// assert_eq!(remainder(7.0, 3.0), 1.0);
/// assert_eq!(remainder(7.0, 4.0), -1.0);
/// assert!(remainder(1.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn remainder(x: f64, y: f64) -> f64 {
    if y == 0.0 || x.is_infinite() {
        return f64::NAN;
    }
    if y.is_infinite() {
        return x;
    }

    (-(x / y).round_ties_even()).mul_add(y, x)
}
