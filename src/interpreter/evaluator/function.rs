use crate::interpreter::token::Function;

/// Applies a built-in function.
///
/// Unary functions (`sin`, `cos`, `tan`, `sqrt`, `abs`, `ln`) read only
/// `right`; `max` and `min` read both operands. Angles are in radians.
///
/// # Example
/// ```
/// use stepcalc::interpreter::{evaluator::function::apply_function, token::Function};
///
/// assert_eq!(apply_function(Function::Sqrt, 0.0, 16.0), 4.0);
/// assert_eq!(apply_function(Function::Min, 3.0, 5.0), 3.0);
/// ```
#[must_use]
pub fn apply_function(function: Function, left: f64, right: f64) -> f64 {
    match function {
        Function::Sin => right.sin(),
        Function::Cos => right.cos(),
        Function::Tan => right.tan(),
        Function::Sqrt => right.sqrt(),
        Function::Abs => right.abs(),
        Function::Ln => right.ln(),
        Function::Max => left.max(right),
        Function::Min => left.min(right),
    }
}
