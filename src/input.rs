use std::io::BufRead;

use crate::error::InputError;

/// The longest expression accepted, in characters.
pub const MAX_EXPRESSION_LEN: usize = 255;

/// Reads one expression from a line-oriented reader.
///
/// The line terminator is stripped.
///
/// # Errors
/// - `Unreadable` if reading fails or the reader is already at end of file.
/// - `TooLong` if the line exceeds [`MAX_EXPRESSION_LEN`].
///
/// # Example
/// ```
/// use stepcalc::input::read_expression;
///
/// let expression = read_expression("1 + 2\n".as_bytes()).unwrap();
/// assert_eq!(expression, "1 + 2");
///
/// assert!(read_expression("".as_bytes()).is_err());
/// ```
pub fn read_expression<R: BufRead>(mut reader: R) -> Result<String, InputError> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)
                     .map_err(|e| InputError::Unreadable { details: e.to_string() })?;

    if read == 0 {
        return Err(InputError::Unreadable { details: "no expression was entered".to_string() });
    }

    let expression = line.trim_end_matches(['\r', '\n']);
    check_length(expression)?;

    Ok(expression.to_string())
}

/// Rejects expressions longer than [`MAX_EXPRESSION_LEN`] characters.
///
/// # Errors
/// Returns `TooLong` with the offending length.
pub fn check_length(expression: &str) -> Result<(), InputError> {
    let length = expression.chars().count();
    if length > MAX_EXPRESSION_LEN {
        return Err(InputError::TooLong { length,
                                         max: MAX_EXPRESSION_LEN });
    }

    Ok(())
}
