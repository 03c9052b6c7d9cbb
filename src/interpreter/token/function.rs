use std::fmt;

/// Number of operands a function takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One argument, stored as the right child of the call node.
    Unary,
    /// Two comma-separated arguments.
    Binary,
}

/// A built-in mathematical function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Abs,
    Ln,
    Max,
    Min,
}

/// Every function the lexer accepts, keyed by its canonical name.
pub const FUNCTION_TABLE: &[(&str, Function)] = &[("sin", Function::Sin),
                                                    ("cos", Function::Cos),
                                                    ("tan", Function::Tan),
                                                    ("sqrt", Function::Sqrt),
                                                    ("abs", Function::Abs),
                                                    ("ln", Function::Ln),
                                                    ("max", Function::Max),
                                                    ("min", Function::Min)];

impl Function {
    /// Looks up a function by name, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// use stepcalc::interpreter::token::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("MAX"), Some(Function::Max));
    /// assert_eq!(Function::from_name("exp"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTION_TABLE.iter()
                      .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
                      .map(|&(_, function)| function)
    }

    /// The canonical, lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Ln => "ln",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// The arity is derived from the identity alone.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Sin | Self::Cos | Self::Tan | Self::Sqrt | Self::Abs | Self::Ln => Arity::Unary,
            Self::Max | Self::Min => Arity::Binary,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
