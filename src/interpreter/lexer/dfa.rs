//! The automaton recognizes:
//!
//! - function names: `[A-Za-z][A-Za-z0-9]*`
//! - numbers: `([0-9]+(\.[0-9]*)? | \.[0-9]+)([eE][+-]?[0-9]+)?`
//! - the operators `^ * / + - %`, the parentheses and the argument
//!   separator `,`
//!
//! Identifiers and numbers are only known to be complete once the first
//! character past their end has been read. Their final states therefore carry
//! a negative code: the lexer must push that character back.

/// Classes of input characters; the columns of [`TRANSITIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// An ASCII letter other than `e` and `E`.
    Letter,
    /// `e` or `E`: a letter, or the exponent mark inside a number.
    ExponentMark,
    Digit,
    Dot,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Percent,
    Comma,
    LParen,
    RParen,
    /// Whitespace and every character no token may contain.
    Other,
    /// The end of the input.
    End,
}

pub const CLASS_COUNT: usize = 15;

impl CharClass {
    /// Classifies a character; `None` stands for the end of the input.
    ///
    /// # Example
    /// ```
    /// use stepcalc::interpreter::lexer::dfa::CharClass;
    ///
    /// assert_eq!(CharClass::of(Some('E')), CharClass::ExponentMark);
    /// assert_eq!(CharClass::of(Some('7')), CharClass::Digit);
    /// assert_eq!(CharClass::of(Some(' ')), CharClass::Other);
    /// assert_eq!(CharClass::of(None), CharClass::End);
    /// ```
    #[must_use]
    pub const fn of(ch: Option<char>) -> Self {
        match ch {
            None => Self::End,
            Some('e' | 'E') => Self::ExponentMark,
            Some('a'..='z' | 'A'..='Z') => Self::Letter,
            Some('0'..='9') => Self::Digit,
            Some('.') => Self::Dot,
            Some('+') => Self::Plus,
            Some('-') => Self::Minus,
            Some('*') => Self::Star,
            Some('/') => Self::Slash,
            Some('^') => Self::Caret,
            Some('%') => Self::Percent,
            Some(',') => Self::Comma,
            Some('(') => Self::LParen,
            Some(')') => Self::RParen,
            Some(_) => Self::Other,
        }
    }
}

/// What a final state recognized. The discriminants are the codes stored in
/// [`FINALS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum Lexeme {
    Literal = 1,
    Function,
    ArgSeparator,
    LParen,
    RParen,
    Exponent,
    Multiply,
    Divide,
    Plus,
    Minus,
    Modulo,
}

impl Lexeme {
    /// Maps the absolute value of a final code back to its lexeme.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Literal),
            2 => Some(Self::Function),
            3 => Some(Self::ArgSeparator),
            4 => Some(Self::LParen),
            5 => Some(Self::RParen),
            6 => Some(Self::Exponent),
            7 => Some(Self::Multiply),
            8 => Some(Self::Divide),
            9 => Some(Self::Plus),
            10 => Some(Self::Minus),
            11 => Some(Self::Modulo),
            _ => None,
        }
    }
}

pub const START: u8 = 0;
// 1 to 9: the single-character tokens ( ) ^ * / + - % ,
pub const IDENTIFIER: u8 = 10;
pub const IDENTIFIER_END: u8 = 11;
pub const INTEGER: u8 = 12;
pub const INTEGER_END: u8 = 13;
pub const FRACTION: u8 = 14;
pub const EXPONENT_MARK: u8 = 15;
pub const EXPONENT_SIGN: u8 = 16;
pub const EXPONENT_DIGITS: u8 = 17;
pub const NUMBER_END: u8 = 18;
pub const LEADING_DOT: u8 = 19;
/// No token can continue from here.
pub const REJECT: u8 = 20;

pub const STATE_COUNT: usize = 21;

/// `TRANSITIONS[state][class]` is the state reached from `state` on a
/// character of class `class`.
pub static TRANSITIONS: [[u8; CLASS_COUNT]; STATE_COUNT] = build_transitions();

/// `FINALS[state]` is `0` for states that are not final, `+lexeme` when the
/// last character read belongs to the lexeme and `-lexeme` when it must be
/// pushed back.
pub static FINALS: [i8; STATE_COUNT] = build_finals();

const fn build_transitions() -> [[u8; CLASS_COUNT]; STATE_COUNT] {
    use CharClass as C;

    let mut table = [[REJECT; CLASS_COUNT]; STATE_COUNT];

    let start = START as usize;
    table[start][C::LParen as usize] = 1;
    table[start][C::RParen as usize] = 2;
    table[start][C::Caret as usize] = 3;
    table[start][C::Star as usize] = 4;
    table[start][C::Slash as usize] = 5;
    table[start][C::Plus as usize] = 6;
    table[start][C::Minus as usize] = 7;
    table[start][C::Percent as usize] = 8;
    table[start][C::Comma as usize] = 9;
    table[start][C::Dot as usize] = LEADING_DOT;
    table[start][C::Letter as usize] = IDENTIFIER;
    table[start][C::ExponentMark as usize] = IDENTIFIER;
    table[start][C::Digit as usize] = INTEGER;

    // any character that cannot extend the lexeme ends it
    let mut class = 0;
    while class < CLASS_COUNT {
        table[IDENTIFIER as usize][class] = IDENTIFIER_END;
        table[INTEGER as usize][class] = INTEGER_END;
        table[FRACTION as usize][class] = NUMBER_END;
        table[EXPONENT_DIGITS as usize][class] = NUMBER_END;
        class += 1;
    }

    table[IDENTIFIER as usize][C::Letter as usize] = IDENTIFIER;
    table[IDENTIFIER as usize][C::ExponentMark as usize] = IDENTIFIER;
    table[IDENTIFIER as usize][C::Digit as usize] = IDENTIFIER;

    table[INTEGER as usize][C::Digit as usize] = INTEGER;
    table[INTEGER as usize][C::Dot as usize] = FRACTION;
    table[INTEGER as usize][C::ExponentMark as usize] = EXPONENT_MARK;

    table[LEADING_DOT as usize][C::Digit as usize] = FRACTION;

    table[FRACTION as usize][C::Digit as usize] = FRACTION;
    table[FRACTION as usize][C::ExponentMark as usize] = EXPONENT_MARK;

    table[EXPONENT_MARK as usize][C::Plus as usize] = EXPONENT_SIGN;
    table[EXPONENT_MARK as usize][C::Minus as usize] = EXPONENT_SIGN;
    table[EXPONENT_MARK as usize][C::Digit as usize] = EXPONENT_DIGITS;

    table[EXPONENT_SIGN as usize][C::Digit as usize] = EXPONENT_DIGITS;

    table[EXPONENT_DIGITS as usize][C::Digit as usize] = EXPONENT_DIGITS;

    table
}

const fn build_finals() -> [i8; STATE_COUNT] {
    let mut finals = [0; STATE_COUNT];

    finals[1] = Lexeme::LParen as i8;
    finals[2] = Lexeme::RParen as i8;
    finals[3] = Lexeme::Exponent as i8;
    finals[4] = Lexeme::Multiply as i8;
    finals[5] = Lexeme::Divide as i8;
    finals[6] = Lexeme::Plus as i8;
    finals[7] = Lexeme::Minus as i8;
    finals[8] = Lexeme::Modulo as i8;
    finals[9] = Lexeme::ArgSeparator as i8;
    finals[IDENTIFIER_END as usize] = -(Lexeme::Function as i8);
    finals[INTEGER_END as usize] = -(Lexeme::Literal as i8);
    finals[NUMBER_END as usize] = -(Lexeme::Literal as i8);

    finals
}

/// Follows one transition.
///
/// # Example
/// ```
/// use stepcalc::interpreter::lexer::dfa::{CharClass, FINALS, INTEGER, INTEGER_END, START, transition};
///
/// let state = transition(START, CharClass::Digit);
/// assert_eq!(state, INTEGER);
///
/// // a space ends the integer one character late
/// let state = transition(state, CharClass::Other);
/// assert_eq!(state, INTEGER_END);
/// assert!(FINALS[usize::from(state)] < 0);
/// ```
#[must_use]
pub fn transition(state: u8, class: CharClass) -> u8 {
    TRANSITIONS[usize::from(state)][class as usize]
}

/// The signed final code of `state`; see [`FINALS`].
#[must_use]
pub fn final_code(state: u8) -> i8 {
    FINALS[usize::from(state)]
}
