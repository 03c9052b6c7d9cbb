/// Tokenization driver.
///
/// Runs the DFA once per token, applies the maximal-munch pushback rule and
/// turns every lexeme into a [`Token`](crate::interpreter::token::Token),
/// deciding on the way whether a `-` is unary or binary.
pub mod core;
/// In-memory character cursor with single-character pushback.
pub mod cursor;
/// The deterministic finite automaton: character classes, the transition
/// table and the table of final states.
pub mod dfa;
/// The ordered token sequence handed from the lexer to the parser.
pub mod sequence;

pub use self::{core::tokenize, sequence::TokenSequence};
