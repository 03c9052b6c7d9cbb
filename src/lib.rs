//! # stepcalc
//!
//! stepcalc evaluates a single arithmetic expression and shows its work.
//! The text is split into tokens by a table-driven finite automaton, the
//! tokens are assembled into an expression tree by a shunting-yard parser,
//! and the tree is reduced one operator at a time, each intermediate tree
//! being recorded.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse};

/// Defines the expression tree.
///
/// This module declares the `Node` and `ExpressionTree` types built by the
/// parser and rewritten by the evaluator, together with the fully
/// parenthesised rendering used to show every step.
///
/// # Responsibilities
/// - Enforces exclusive ownership of subtrees by their parents.
/// - Provides in-place subtree replacement for the evaluator.
/// - Renders trees as text.
pub mod ast;
/// Provides unified error types for input, parsing and evaluation.
///
/// Every failure is fatal for the expression at hand; errors carry enough
/// context (the column, the offending text) to be reported to the user.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (input, lexer and parser,
///   evaluator).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Acquires the expression text from a reader.
///
/// The library core works on plain strings; this module is the thin layer
/// that reads a line and enforces the accepted expression length.
pub mod input;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together tokens, the lexer, the parser and the
/// evaluator.
///
/// # Responsibilities
/// - Coordinates the three stages.
/// - Provides entry points for each stage.
pub mod interpreter;
/// General utilities: number formatting and the stack container.
pub mod util;

/// The recorded evaluation of one expression.
///
/// `steps[0]` renders the parsed expression, every following entry the tree
/// after one reduction; the last entry is the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<String>,
}

impl Trace {
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// The final value, as formatted text.
    #[must_use]
    pub fn result(&self) -> &str {
        self.steps.last().map_or("", String::as_str)
    }
}

/// Evaluates an expression and returns the trace of the calculation.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use stepcalc::get_result;
///
/// let trace = get_result("2 ^ 3 ^ 2").unwrap();
/// assert_eq!(trace.steps(), ["(2 ^ (3 ^ 2))", "(2 ^ 9)", "512"]);
/// assert_eq!(trace.result(), "512");
///
/// // unmatched parenthesis
/// assert!(get_result("(1 + 2").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Trace, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let tree = parse(tokens)?;

    let mut steps = vec![tree.to_string()];
    evaluate(tree, |tree| steps.push(tree.to_string()))?;

    log::debug!("'{source}' took {} steps", steps.len() - 1);

    Ok(Trace { steps })
}
