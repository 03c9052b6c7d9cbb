use crate::interpreter::token::{Token, TokenKind};

/// The tokens of one expression, in the order they appear in the text.
///
/// Every token is paired with the 1-based column where its lexeme starts.
/// The sequence only grows while the lexer runs and is consumed once, by
/// value, by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<(Token, usize)>,
}

impl TokenSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends `token`, found at `column`.
    pub fn push(&mut self, token: Token, column: usize) {
        self.tokens.push((token, column));
    }

    /// The most recently appended token.
    #[must_use]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last().map(|(token, _)| token)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Token, usize)> {
        self.tokens.iter()
    }

    /// The kinds of all tokens, in order.
    ///
    /// # Example
    /// ```
    /// use stepcalc::interpreter::{lexer::tokenize, token::TokenKind};
    ///
    /// let tokens = tokenize("-1-2").unwrap();
    /// assert_eq!(tokens.kinds(),
    ///            [TokenKind::UnaryMinus,
    ///             TokenKind::Literal,
    ///             TokenKind::BinaryMinus,
    ///             TokenKind::Literal]);
    /// ```
    #[must_use]
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|(token, _)| token.kind()).collect()
    }
}

impl IntoIterator for TokenSequence {
    type IntoIter = std::vec::IntoIter<(Token, usize)>;
    type Item = (Token, usize);

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
