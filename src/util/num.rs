use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Values whose fractional part is below this threshold are treated as
/// integers when formatted.
pub const INTEGRAL_EPSILON: f64 = f64::EPSILON;
/// Decimal places used for values that are not integral.
pub const FRACTION_DIGITS: usize = f64::DIGITS as usize;

/// Formats a computed value as the text of a literal leaf.
///
/// A value is considered integral when `value - floor(value)` is smaller than
/// [`INTEGRAL_EPSILON`]; it is then printed without decimals. Every other
/// value is printed with [`FRACTION_DIGITS`] decimal places. Negative zero
/// prints as `0`.
///
/// ## Parameters
/// - `value`: The value to format.
///
/// ## Returns
/// The literal text.
///
/// ## Example
/// ```
/// use stepcalc::util::num::format_number;
///
/// assert_eq!(format_number(2.0), "2");
/// assert_eq!(format_number(-7.0), "-7");
/// assert_eq!(format_number(3.5), "3.500000000000000");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    // adding positive zero turns -0.0 into 0.0
    let value = value + 0.0;

    if value - value.floor() < INTEGRAL_EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.prec$}", prec = FRACTION_DIGITS)
    }
}

/// Reads the numeric value of a literal leaf.
///
/// Accepts everything the lexer produces for numbers (`12`, `12.`, `.5`,
/// `6e-3`) as well as the text written by [`format_number`], including `inf`
/// and `NaN` for results that left the finite range.
///
/// ## Errors
/// Returns `RuntimeError::InvalidLiteral` if the text is not a number.
///
/// ## Example
/// ```
/// use stepcalc::util::num::parse_literal;
///
/// assert_eq!(parse_literal("1.5e2").unwrap(), 150.0);
/// assert!(parse_literal("sin").is_err());
/// ```
pub fn parse_literal(text: &str) -> EvalResult<f64> {
    text.parse::<f64>()
        .map_err(|_| RuntimeError::InvalidLiteral { literal: text.to_string() })
}
