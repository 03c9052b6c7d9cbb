/// Core parsing logic.
///
/// Contains the parser entry point, the result type shared by the lexer and
/// the parser, and the token-by-token rules of the shunting-yard algorithm.
pub mod core;

/// Reductions.
///
/// Pops an operator or function off the operator stack, attaches its
/// operands from the operand stack and pushes the resulting subtree back.
pub mod reduce;

pub use self::core::parse;
