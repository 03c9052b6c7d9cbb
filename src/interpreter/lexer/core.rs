use crate::{
    error::ParseError,
    interpreter::{
        lexer::{
            cursor::Cursor,
            dfa::{self, CharClass, Lexeme},
            sequence::TokenSequence,
        },
        parser::core::ParseResult,
        token::{Function, Operator, Token},
    },
};

/// Splits an expression into tokens.
///
/// Whitespace between tokens is skipped. Each token is read by running the
/// DFA from its start state until it reaches a final state; identifiers and
/// numbers end one character late, and that character is pushed back so it
/// can start the next token. Identifiers are resolved to functions right
/// away.
///
/// A `-` is a unary minus when it opens the expression or follows an
/// operator, a `(` or a `,`; everywhere else it is a binary minus.
///
/// # Parameters
/// - `expression`: The text to tokenize.
///
/// # Returns
/// The tokens in source order, each with its 1-based column.
///
/// # Errors
/// - `UnknownFunction` if an identifier is not a known function name.
/// - `UnexpectedCharacter` if a character cannot start or continue a token,
///   or the input ends in the middle of a number.
///
/// # Example
/// ```
/// use stepcalc::interpreter::{
///     lexer::tokenize,
///     token::{Function, Operator, Token},
/// };
///
/// let tokens: Vec<_> = tokenize("max(2, -1.5e3)").unwrap().into_iter().collect();
/// assert_eq!(tokens,
///            [(Token::Function(Function::Max), 1),
///             (Token::LParen, 4),
///             (Token::Literal("2".into()), 5),
///             (Token::ArgSeparator, 6),
///             (Token::Operator(Operator::UnaryMinus), 8),
///             (Token::Literal("1.5e3".into()), 9),
///             (Token::RParen, 14)]);
///
/// assert!(tokenize("foo(1)").is_err());
/// ```
pub fn tokenize(expression: &str) -> ParseResult<TokenSequence> {
    let mut cursor = Cursor::new(expression);
    let mut tokens = TokenSequence::new();

    loop {
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            break;
        }

        let start = cursor.position();
        let lexeme = next_lexeme(&mut cursor)?;
        let column = cursor.column(start);
        let token = build_token(lexeme, cursor.slice(start), column, tokens.last())?;

        log::debug!("token {token:?} at column {column}");
        tokens.push(token, column);
    }

    Ok(tokens)
}

/// Runs the DFA over the next lexeme and leaves the cursor right behind it.
fn next_lexeme(cursor: &mut Cursor<'_>) -> ParseResult<Lexeme> {
    let mut state = dfa::START;

    loop {
        let ch = cursor.next_char();
        let next = dfa::transition(state, CharClass::of(ch));
        log::trace!("{state} --{ch:?}--> {next}");

        if next == dfa::REJECT {
            return Err(unexpected(cursor, ch));
        }
        state = next;

        let code = dfa::final_code(state);
        if code == 0 {
            continue;
        }

        if code < 0
           && let Some(ch) = ch
        {
            cursor.unread(ch);
        }

        return Lexeme::from_code(code.unsigned_abs()).ok_or_else(|| unexpected(cursor, ch));
    }
}

/// Builds the error for `ch`, the character just consumed.
fn unexpected(cursor: &Cursor<'_>, ch: Option<char>) -> ParseError {
    match ch {
        Some(ch) => ParseError::UnexpectedCharacter { character: format!("'{ch}'"),
                                                      column:    cursor.column(cursor.position()
                                                                               - ch.len_utf8()), },
        None => ParseError::UnexpectedCharacter { character: "end of input".to_string(),
                                                  column:    cursor.column(cursor.position()), },
    }
}

/// Turns a recognized lexeme into a token.
///
/// `previous` is the last token emitted, used to tell unary from binary
/// minus.
fn build_token(lexeme: Lexeme,
               text: &str,
               column: usize,
               previous: Option<&Token>)
               -> ParseResult<Token> {
    let token = match lexeme {
        Lexeme::Literal => Token::Literal(text.to_string()),
        Lexeme::Function => {
            let function =
                Function::from_name(text).ok_or_else(|| ParseError::UnknownFunction { name: text.to_string(),
                                                                                       column })?;
            Token::Function(function)
        },
        Lexeme::ArgSeparator => Token::ArgSeparator,
        Lexeme::LParen => Token::LParen,
        Lexeme::RParen => Token::RParen,
        Lexeme::Exponent | Lexeme::Multiply | Lexeme::Divide | Lexeme::Plus | Lexeme::Modulo => {
            let operator = text.chars()
                               .next()
                               .and_then(Operator::from_symbol)
                               .ok_or_else(|| ParseError::UnexpectedCharacter { character: format!("'{text}'"),
                                                                                 column })?;
            Token::Operator(operator)
        },
        Lexeme::Minus => Token::Operator(Operator::minus(starts_operand(previous))),
    };

    Ok(token)
}

/// Whether the next token begins a fresh operand, i.e. nothing to its left
/// can be subtracted from.
fn starts_operand(previous: Option<&Token>) -> bool {
    match previous {
        None => true,
        Some(token) => token.is_operator() || matches!(token, Token::LParen | Token::ArgSeparator),
    }
}
