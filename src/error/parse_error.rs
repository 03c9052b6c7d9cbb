#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer met a character that cannot start or continue a token.
    UnexpectedCharacter {
        /// The offending character, or `end of input`.
        character: String,
        /// The 1-based column where the error occurred.
        column:    usize,
    },
    /// An identifier was lexed that is not a known function name.
    UnknownFunction {
        /// The identifier as written.
        name:   String,
        /// The 1-based column where the identifier starts.
        column: usize,
    },
    /// A parenthesis has no matching counterpart.
    UnmatchedParenthesis {
        /// The 1-based column of the parenthesis.
        column: usize,
    },
    /// An operator or function is missing an operand, or operands are left
    /// over without an operator joining them.
    InvalidExpression {
        /// What exactly went wrong.
        details: String,
        /// The 1-based column where the problem was detected.
        column:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, column } => {
                write!(f, "Error at column {column}: Unexpected character: {character}.")
            },

            Self::UnknownFunction { name, column } => {
                write!(f, "Error at column {column}: '{name}' is not a function.")
            },

            Self::UnmatchedParenthesis { column } => {
                write!(f, "Error at column {column}: Unmatched parenthesis.")
            },

            Self::InvalidExpression { details, column } => {
                write!(f, "Error at column {column}: Invalid expression: {details}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
