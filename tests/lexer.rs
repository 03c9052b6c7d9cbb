use stepcalc::{
    error::ParseError,
    interpreter::{
        lexer::{
            dfa::{self, CharClass, FINALS, STATE_COUNT},
            tokenize,
        },
        token::{Function, Operator, Token, TokenKind},
    },
};

fn tokens_of(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"))
                 .into_iter()
                 .map(|(token, _)| token)
                 .collect()
}

fn literal(text: &str) -> Token {
    Token::Literal(text.to_string())
}

#[test]
fn numbers_are_matched_maximally() {
    assert_eq!(tokens_of("123+4"),
               [literal("123"), Token::Operator(Operator::Plus), literal("4")]);
    assert_eq!(tokens_of("3.14*2"),
               [literal("3.14"), Token::Operator(Operator::Multiply), literal("2")]);
    assert_eq!(tokens_of(".5"), [literal(".5")]);
    assert_eq!(tokens_of("12."), [literal("12.")]);
    assert_eq!(tokens_of("6.02e23"), [literal("6.02e23")]);
    assert_eq!(tokens_of("1E-3-1"),
               [literal("1E-3"), Token::Operator(Operator::BinaryMinus), literal("1")]);
    assert_eq!(tokens_of("2e+10"), [literal("2e+10")]);
}

#[test]
fn the_overshooting_character_starts_the_next_token() {
    assert_eq!(tokens_of("2)"), [literal("2"), Token::RParen]);
    assert_eq!(tokens_of("sin(1)"),
               [Token::Function(Function::Sin), Token::LParen, literal("1"), Token::RParen]);
    assert_eq!(tokens_of("2sqrt(4)"),
               [literal("2"), Token::Function(Function::Sqrt), Token::LParen, literal("4"), Token::RParen]);
}

#[test]
fn whitespace_separates_tokens() {
    assert_eq!(tokens_of("  1\t+ \n2  "),
               [literal("1"), Token::Operator(Operator::Plus), literal("2")]);
    assert_eq!(tokens_of("1 2"), [literal("1"), literal("2")]);
    assert!(tokenize("   ").unwrap().is_empty());
}

#[test]
fn minus_is_disambiguated_by_the_previous_token() {
    use TokenKind::{ArgSeparator, BinaryMinus, Function, LParen, Literal, Multiply, RParen, UnaryMinus};

    assert_eq!(tokenize("-1").unwrap().kinds(), [UnaryMinus, Literal]);
    assert_eq!(tokenize("1-1").unwrap().kinds(), [Literal, BinaryMinus, Literal]);
    assert_eq!(tokenize("1--1").unwrap().kinds(), [Literal, BinaryMinus, UnaryMinus, Literal]);
    assert_eq!(tokenize("2*-1").unwrap().kinds(), [Literal, Multiply, UnaryMinus, Literal]);
    assert_eq!(tokenize("(-1)-1").unwrap().kinds(),
               [LParen, UnaryMinus, Literal, RParen, BinaryMinus, Literal]);
    assert_eq!(tokenize("max(1,-1)").unwrap().kinds(),
               [Function, LParen, Literal, ArgSeparator, UnaryMinus, Literal, RParen]);
}

#[test]
fn tokens_carry_their_columns() {
    let columns: Vec<usize> = tokenize(" 12 + sqrt(3)").unwrap().iter().map(|(_, column)| *column).collect();
    assert_eq!(columns, [2, 5, 7, 11, 12, 13]);
}

#[test]
fn identifiers_must_name_functions() {
    assert_eq!(tokenize("x + 1").unwrap_err(),
               ParseError::UnknownFunction { name:   "x".to_string(),
                                             column: 1, });
    assert_eq!(tokenize("1 + log10(2)").unwrap_err(),
               ParseError::UnknownFunction { name:   "log10".to_string(),
                                             column: 5, });
    assert_eq!(tokens_of("ABS(1)").first(), Some(&Token::Function(Function::Abs)));
}

#[test]
fn incomplete_or_foreign_input_is_rejected() {
    assert_eq!(tokenize("1e").unwrap_err(),
               ParseError::UnexpectedCharacter { character: "end of input".to_string(),
                                                 column:    3, });
    assert_eq!(tokenize("1e+x").unwrap_err(),
               ParseError::UnexpectedCharacter { character: "'x'".to_string(),
                                                 column:    4, });
    assert_eq!(tokenize(". 5").unwrap_err(),
               ParseError::UnexpectedCharacter { character: "' '".to_string(),
                                                 column:    2, });
    assert_eq!(tokenize("3 = 3").unwrap_err(),
               ParseError::UnexpectedCharacter { character: "'='".to_string(),
                                                 column:    3, });
}

#[test]
fn final_codes_match_the_pushback_rule() {
    let negative: Vec<usize> = (0..STATE_COUNT).filter(|&state| FINALS[state] < 0).collect();
    assert_eq!(negative,
               [usize::from(dfa::IDENTIFIER_END),
                usize::from(dfa::INTEGER_END),
                usize::from(dfa::NUMBER_END)]);

    // single-character tokens never overshoot
    for symbol in ['(', ')', '^', '*', '/', '+', '-', '%', ','] {
        let state = dfa::transition(dfa::START, CharClass::of(Some(symbol)));
        assert!(dfa::final_code(state) > 0, "'{symbol}' should end its token");
    }

    // end of input completes numbers and identifiers
    for state in [dfa::IDENTIFIER, dfa::INTEGER, dfa::FRACTION, dfa::EXPONENT_DIGITS] {
        let next = dfa::transition(state, CharClass::End);
        assert!(dfa::final_code(next) < 0);
    }
}

#[test]
fn operator_tokens_come_from_the_symbol_table() {
    for symbol in ['^', '*', '/', '%', '+'] {
        let expected = Operator::from_symbol(symbol).unwrap();
        assert_eq!(tokens_of(&format!("1{symbol}2")),
                   [literal("1"), Token::Operator(expected), literal("2")]);
        assert_eq!(expected.symbol(), symbol);
    }
}
