/// Input acquisition errors.
///
/// Raised by the collaborator that reads the expression from a terminal or a
/// file before any lexing happens.
pub mod input_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: unexpected characters, unknown function names, unbalanced
/// parentheses and operators missing their operands.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while reducing an expression tree.
/// A tree produced by the parser never triggers them; they guard trees built
/// by hand.
pub mod runtime_error;

pub use input_error::InputError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
