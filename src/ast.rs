use std::fmt;

use crate::interpreter::token::Token;

/// Selects a child of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A node of an expression tree.
///
/// The shape of a node follows from its token:
/// - a literal has no children,
/// - a unary operator or unary function has only a right child,
/// - a binary operator or binary function has both children.
///
/// Parents own their children, so dropping a node releases its whole
/// subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    token: Token,
    left:  Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl Node {
    /// Creates a childless node, normally holding a literal.
    #[must_use]
    pub const fn leaf(token: Token) -> Self {
        Self { token,
               left: None,
               right: None }
    }

    /// Creates a node applying a unary operator or function to `right`.
    #[must_use]
    pub fn unary(token: Token, right: Self) -> Self {
        Self { token,
               left: None,
               right: Some(Box::new(right)) }
    }

    /// Creates a node applying a binary operator or function to `left` and
    /// `right`.
    #[must_use]
    pub fn binary(token: Token, left: Self, right: Self) -> Self {
        Self { token,
               left: Some(Box::new(left)),
               right: Some(Box::new(right)) }
    }

    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub fn child_mut(&mut self, side: Side) -> Option<&mut Self> {
        match side {
            Side::Left => self.left.as_deref_mut(),
            Side::Right => self.right.as_deref_mut(),
        }
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Counts the operator and function nodes of this subtree.
    ///
    /// Every evaluation step lowers this count by exactly one.
    #[must_use]
    pub fn internal_count(&self) -> usize {
        if self.is_leaf() {
            return 0;
        }

        1 + self.left().map_or(0, Self::internal_count) + self.right().map_or(0, Self::internal_count)
    }
}

/// Renders the subtree fully parenthesised.
///
/// Operators are wrapped in parentheses with spaces around binary symbols,
/// functions print as calls. A negative literal under an operator is
/// parenthesised as well:
///
/// ```text
/// 3 * (5 - 2)      ->  (3 * (5 - 2))
/// -max(1, 2)^2     ->  (-(max(1,2) ^ 2))
/// (0 - 8) ^ 2     ->  ((-8) ^ 2)   after one step
/// ```
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Token::Literal(text) => f.write_str(text),
            Token::Function(function) => {
                write!(f, "{function}(")?;
                if let Some(left) = self.left() {
                    write!(f, "{left},")?;
                }
                if let Some(right) = self.right() {
                    write!(f, "{right}")?;
                }
                f.write_str(")")
            },
            token => {
                f.write_str("(")?;
                match self.left() {
                    Some(left) => {
                        write_operand(f, left)?;
                        write!(f, " {token} ")?;
                    },
                    None => write!(f, "{token}")?,
                }
                if let Some(right) = self.right() {
                    write_operand(f, right)?;
                }
                f.write_str(")")
            },
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Node) -> fmt::Result {
    match &operand.token {
        Token::Literal(text) if text.starts_with('-') => write!(f, "({text})"),
        _ => write!(f, "{operand}"),
    }
}

/// An expression tree, produced by the parser and reduced by the evaluator.
///
/// # Example
/// ```
/// use stepcalc::{
///     ast::{ExpressionTree, Node},
///     interpreter::token::{Operator, Token},
/// };
///
/// let tree = ExpressionTree::new(Node::binary(Token::Operator(Operator::Plus),
///                                             Node::leaf(Token::Literal("1".into())),
///                                             Node::leaf(Token::Literal("2".into()))));
///
/// assert_eq!(tree.to_string(), "(1 + 2)");
/// assert!(!tree.is_finished());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionTree {
    root: Node,
}

impl ExpressionTree {
    #[must_use]
    pub const fn new(root: Node) -> Self {
        Self { root }
    }

    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// `true` once the tree is reduced to a single literal.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.root.is_leaf()
    }

    /// Follows `path` from the root; an empty path selects the root itself.
    pub fn node_at_mut(&mut self, path: &[Side]) -> Option<&mut Node> {
        path.iter()
            .try_fold(&mut self.root, |node, &side| node.child_mut(side))
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
