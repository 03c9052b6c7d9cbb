use stepcalc::{
    ast::ExpressionTree,
    error::ParseError,
    interpreter::{lexer::tokenize, parser::parse},
};

fn tree_of(src: &str) -> ExpressionTree {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"));
    parse(tokens).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"))
}

fn rendered(src: &str) -> String {
    tree_of(src).to_string()
}

fn error_of(src: &str) -> ParseError {
    match parse(tokenize(src).unwrap()) {
        Ok(tree) => panic!("'{src}' parsed as {tree} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence() {
    assert_eq!(rendered("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(rendered("1 * 2 + 3"), "((1 * 2) + 3)");
    assert_eq!(rendered("2 * 3 ^ 2"), "(2 * (3 ^ 2))");
    assert_eq!(rendered("8 % 3 - 1"), "((8 % 3) - 1)");
    assert_eq!(rendered("(1 + 2) * 3"), "((1 + 2) * 3)");
}

#[test]
fn associativity() {
    assert_eq!(rendered("2^3^2"), "(2 ^ (3 ^ 2))");
    assert_eq!(rendered("8/4/2"), "((8 / 4) / 2)");
    assert_eq!(rendered("1 - 2 + 3"), "((1 - 2) + 3)");
}

#[test]
fn unary_minus() {
    assert_eq!(rendered("-3+5"), "((-3) + 5)");
    assert_eq!(rendered("3--5"), "(3 - (-5))");
    assert_eq!(rendered("-2^2"), "(-(2 ^ 2))");
    assert_eq!(rendered("2^-2"), "(2 ^ (-2))");
    assert_eq!(rendered("1+2^-3"), "(1 + (2 ^ (-3)))");
    assert_eq!(rendered("--1"), "(-(-1))");
}

#[test]
fn function_calls() {
    assert_eq!(rendered("max(3,5)"), "max(3,5)");
    assert_eq!(rendered("sin(0)"), "sin(0)");
    assert_eq!(rendered("min(1 + 2, 3 * 4)"), "min((1 + 2),(3 * 4))");
    assert_eq!(rendered("max(min(1, 2), 3)"), "max(min(1,2),3)");
    assert_eq!(rendered("-abs(-1)"), "(-abs((-1)))");
    assert_eq!(rendered("2 * sqrt(4 + 5)"), "(2 * sqrt((4 + 5)))");
}

#[test]
fn a_single_literal_is_a_leaf() {
    let tree = tree_of("((7))");
    assert!(tree.is_finished());
    assert_eq!(tree.to_string(), "7");
}

#[test]
fn unmatched_parentheses() {
    assert_eq!(error_of("(1+2"), ParseError::UnmatchedParenthesis { column: 1 });
    assert_eq!(error_of("1+2)"), ParseError::UnmatchedParenthesis { column: 4 });
    assert_eq!(error_of("max(1, (2)"), ParseError::UnmatchedParenthesis { column: 4 });
    assert_eq!(error_of(")"), ParseError::UnmatchedParenthesis { column: 1 });
}

#[test]
fn operand_count_is_checked() {
    assert_eq!(error_of("1 2"),
               ParseError::InvalidExpression { details: "2 operands are not joined by an operator".to_string(),
                                               column:  3, });
    assert_eq!(error_of(""),
               ParseError::InvalidExpression { details: "empty expression".to_string(),
                                               column:  1, });
    assert_eq!(error_of("1 +"),
               ParseError::InvalidExpression { details: "'+' is missing an operand".to_string(),
                                               column:  3, });
    assert_eq!(error_of("max(3)"),
               ParseError::InvalidExpression { details: "'max' is missing an operand".to_string(),
                                               column:  1, });
    assert!(matches!(error_of("sin(1, 2)"), ParseError::InvalidExpression { .. }));
    assert!(matches!(error_of("* 2"), ParseError::InvalidExpression { .. }));
    assert!(matches!(error_of("()"), ParseError::InvalidExpression { .. }));
}
