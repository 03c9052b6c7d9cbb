#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing an expression tree.
pub enum RuntimeError {
    /// The tree breaks a shape invariant, e.g. an operator without a right
    /// operand or a literal with children.
    MalformedTree {
        /// Details describing the broken invariant.
        details: String,
    },
    /// A literal leaf holds text that is not a number.
    InvalidLiteral {
        /// The literal text.
        literal: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedTree { details } => write!(f, "Error: Malformed expression tree: {details}."),
            Self::InvalidLiteral { literal } => write!(f, "Error: '{literal}' is not a number."),
        }
    }
}

impl std::error::Error for RuntimeError {}
