#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the errors raised while acquiring the expression text.
pub enum InputError {
    /// Nothing could be read: an I/O failure or end of file before any input.
    Unreadable {
        /// Details about the failure.
        details: String,
    },
    /// The expression exceeds the accepted length.
    TooLong {
        /// Length of the rejected expression, in characters.
        length: usize,
        /// The largest accepted length.
        max:    usize,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable { details } => write!(f, "Can't read your input: {details}."),
            Self::TooLong { length, max } => write!(f,
                                                    "Your expression is {length} characters long; at most {max} are accepted."),
        }
    }
}

impl std::error::Error for InputError {}
