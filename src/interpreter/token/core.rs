use std::fmt;

use crate::interpreter::token::{Arity, Function, Operator};

/// Represents a lexical token of an arithmetic expression.
///
/// The payload of each variant is fixed by its kind: literals carry their
/// source text, operators and functions carry their identity, punctuation
/// carries nothing. Tokens are moved, never shared, from the token sequence
/// onto the parser stacks and finally into tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A numeric literal, kept as written (`3.14`, `.5`, `2e-3`) or as
    /// formatted by the evaluator.
    Literal(String),
    /// An arithmetic operator.
    Operator(Operator),
    /// A function name.
    Function(Function),
    /// `,`
    ArgSeparator,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// The kind of a [`Token`], with minus already split into its unary and
/// binary forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Literal,
    Function,
    ArgSeparator,
    LParen,
    RParen,
    Exponent,
    Multiply,
    Divide,
    Plus,
    UnaryMinus,
    BinaryMinus,
    Modulo,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use stepcalc::interpreter::token::{Operator, Token, TokenKind};
    ///
    /// assert_eq!(Token::Operator(Operator::UnaryMinus).kind(), TokenKind::UnaryMinus);
    /// assert_eq!(Token::Literal("2".into()).kind(), TokenKind::Literal);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Literal(_) => TokenKind::Literal,
            Self::Function(_) => TokenKind::Function,
            Self::ArgSeparator => TokenKind::ArgSeparator,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Operator(op) => match op {
                Operator::Exponent => TokenKind::Exponent,
                Operator::Multiply => TokenKind::Multiply,
                Operator::Divide => TokenKind::Divide,
                Operator::Modulo => TokenKind::Modulo,
                Operator::Plus => TokenKind::Plus,
                Operator::UnaryMinus => TokenKind::UnaryMinus,
                Operator::BinaryMinus => TokenKind::BinaryMinus,
            },
        }
    }

    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// `true` for unary operators and unary functions, whose nodes only have
    /// a right child.
    #[must_use]
    pub const fn is_unary(&self) -> bool {
        match self {
            Self::Operator(op) => op.is_unary(),
            Self::Function(function) => matches!(function.arity(), Arity::Unary),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::ArgSeparator => f.write_str(","),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}
