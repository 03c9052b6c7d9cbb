/// A forward cursor over the expression text.
///
/// The lexer pulls one character at a time and may give back the character
/// it just read when the DFA overshoots the end of a lexeme.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source:   &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source,
               position: 0 }
    }

    /// Consumes and returns the next character, or `None` at the end of the
    /// input.
    ///
    /// # Example
    /// ```
    /// use stepcalc::interpreter::lexer::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.next_char(), Some('a'));
    /// cursor.unread('a');
    /// assert_eq!(cursor.next_char(), Some('a'));
    /// assert_eq!(cursor.next_char(), Some('b'));
    /// assert_eq!(cursor.next_char(), None);
    /// ```
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Pushes back `ch`, the character most recently returned by
    /// [`Cursor::next_char`].
    pub fn unread(&mut self, ch: char) {
        debug_assert!(self.source[..self.position].ends_with(ch),
                      "only the last character read can be pushed back");
        self.position -= ch.len_utf8();
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek()
              && ch.is_whitespace()
        {
            self.position += ch.len_utf8();
        }
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Byte offset of the next character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The text between byte offset `start` and the current position.
    #[must_use]
    pub fn slice(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Converts a byte offset into a 1-based character column.
    #[must_use]
    pub fn column(&self, offset: usize) -> usize {
        self.source[..offset].chars().count() + 1
    }
}
