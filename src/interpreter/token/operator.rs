use std::fmt;

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// An arithmetic operator.
///
/// Every property of an operator follows from its variant through the table
/// below, so precedence and associativity can never disagree with the symbol:
///
/// | Operator      | Symbol | Precedence | Associativity |
/// |---------------|--------|------------|---------------|
/// | `Exponent`    | `^`    | 4          | Right         |
/// | `UnaryMinus`  | `-`    | 4          | Left          |
/// | `Multiply`    | `*`    | 3          | Left          |
/// | `Divide`      | `/`    | 3          | Left          |
/// | `Modulo`      | `%`    | 3          | Left          |
/// | `Plus`        | `+`    | 2          | Left          |
/// | `BinaryMinus` | `-`    | 2          | Left          |
///
/// Minus is not reachable through [`Operator::from_symbol`]: the same symbol
/// maps to two operators and only the lexer knows which one is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `^`
    Exponent,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `+`
    Plus,
    /// Prefix `-`, as in `-3`.
    UnaryMinus,
    /// Infix `-`, as in `5 - 3`.
    BinaryMinus,
}

impl Operator {
    /// Looks up the operator written as `symbol`.
    ///
    /// Returns `None` for `-` (see [`Operator::minus`]) and for characters
    /// that are not operators.
    ///
    /// # Example
    /// ```
    /// use stepcalc::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Exponent));
    /// assert_eq!(Operator::from_symbol('-'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '^' => Some(Self::Exponent),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            '+' => Some(Self::Plus),
            _ => None,
        }
    }

    /// Returns the unary or the binary minus.
    #[must_use]
    pub const fn minus(unary: bool) -> Self {
        if unary { Self::UnaryMinus } else { Self::BinaryMinus }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exponent => '^',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
            Self::Plus => '+',
            Self::UnaryMinus | Self::BinaryMinus => '-',
        }
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Exponent | Self::UnaryMinus => 4,
            Self::Multiply | Self::Divide | Self::Modulo => 3,
            Self::Plus | Self::BinaryMinus => 2,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Exponent => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// `true` for operators taking a single, right-hand operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::UnaryMinus)
    }

    /// Decides whether `top`, waiting on the operator stack, must be reduced
    /// before `self` is pushed.
    ///
    /// A left-associative operator yields to operators of equal or higher
    /// precedence, a right-associative one only to strictly higher
    /// precedence.
    ///
    /// # Example
    /// ```
    /// use stepcalc::interpreter::token::Operator;
    ///
    /// // 8 / 4 / 2: the first division is reduced first
    /// assert!(Operator::Divide.yields_to(Operator::Divide));
    /// // 2 ^ 3 ^ 2: the first exponent keeps waiting
    /// assert!(!Operator::Exponent.yields_to(Operator::Exponent));
    /// ```
    #[must_use]
    pub const fn yields_to(self, top: Self) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence() <= top.precedence(),
            Associativity::Right => self.precedence() < top.precedence(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
