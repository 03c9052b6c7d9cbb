use std::fs;

use stepcalc::{
    error::ParseError,
    get_result,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse},
};
use walkdir::WalkDir;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn book_examples_work() {
    init_logger();
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_stepcalc_blocks(&content).into_iter().enumerate() {
            count += 1;
            let (expression, expected) =
                block.split_first()
                     .unwrap_or_else(|| panic!("Example {} in {path:?} is empty", i + 1));

            match get_result(expression) {
                Ok(trace) => assert_eq!(trace.steps(),
                                        expected,
                                        "Example {} in {:?} ({}) printed the wrong steps",
                                        i + 1,
                                        path,
                                        expression),
                Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 expression,
                                 e),
            }
        }
    }

    assert!(count > 0, "No stepcalc examples found in book/src");
}

fn extract_stepcalc_blocks(content: &str) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```stepcalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push(line.to_string());
        }
    }

    blocks
}

fn result_of(src: &str) -> String {
    match get_result(src) {
        Ok(trace) => trace.result().to_string(),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn parse_error_of(src: &str) -> ParseError {
    match get_result(src) {
        Ok(trace) => panic!("Expression '{src}' succeeded with {} but was expected to fail",
                            trace.result()),
        Err(e) => match e.downcast::<ParseError>() {
            Ok(e) => *e,
            Err(e) => panic!("Expression '{src}' failed with a non-parse error: {e}"),
        },
    }
}

#[test]
fn associativity() {
    assert_eq!(result_of("2^3^2"), "512");
    assert_eq!(result_of("8/4/2"), "1");
    assert_eq!(result_of("10 - 4 - 3"), "3");
    assert_eq!(result_of("2 ^ 2 ^ 3"), "256");
}

#[test]
fn unary_and_binary_minus() {
    assert_eq!(result_of("-3+5"), "2");
    assert_eq!(result_of("3-5"), "-2");
    assert_eq!(result_of("3--5"), "8");
    assert_eq!(result_of("-(-4)"), "4");
    assert_eq!(result_of("max(1, -2)"), "1");
    assert_eq!(result_of("(1)-2"), "-1");
    assert_eq!(result_of("2*-3"), "-6");
    assert_eq!(result_of("2^-1"), "0.500000000000000");
}

#[test]
fn functions_and_grouping() {
    assert_eq!(result_of("max(3,5)"), "5");
    assert_eq!(result_of("min(3,5)"), "3");
    assert_eq!(result_of("sin(0)"), "0");
    assert_eq!(result_of("cos(0)"), "1");
    assert_eq!(result_of("tan(0)"), "0");
    assert_eq!(result_of("sqrt(81)"), "9");
    assert_eq!(result_of("abs(-12)"), "12");
    assert_eq!(result_of("ln(1)"), "0");
    assert_eq!(result_of("max(1, min(5, 3)) * -2"), "-6");
    assert_eq!(result_of("Max(2, 1)"), "2");
}

#[test]
fn reduces_to_the_conventional_value() {
    let cases = [("1 + 2 * 3", 7.0),
                 ("(1 + 2) * 3", 9.0),
                 ("2 * 3 ^ 2", 18.0),
                 ("abs(-4.5) + sqrt(2.25)", 6.0),
                 (".5 + 1.5e1", 15.5),
                 ("1e-1 * 10", 1.0),
                 ("2 ^ 0.5 * 2 ^ 0.5", 2.0),
                 ("-7 / 2", -3.5),
                 ("(((4)))", 4.0),
                 ("cos(0) + tan(0) * 100", 1.0)];

    for (src, expected) in cases {
        let value: f64 = result_of(src).parse().unwrap();
        assert!((value - expected).abs() < 1e-9, "'{src}' gave {value}, expected {expected}");
    }
}

#[test]
fn precision_policy() {
    assert_eq!(result_of("6/3"), "2");
    assert_eq!(result_of("2.5 * 2"), "5");
    assert_eq!(result_of("1/3"), "0.333333333333333");
    assert_eq!(result_of("0.1 + 0.2"), "0.300000000000000");
    assert_eq!(result_of("-7/2"), "-3.500000000000000");
    assert_eq!(result_of("-0"), "0");
}

#[test]
fn modulo_uses_ieee_remainder() {
    assert_eq!(result_of("7 % 3"), "1");
    assert_eq!(result_of("8 % 3"), "-1");
    assert_eq!(result_of("6 % 3"), "0");
}

#[test]
fn results_outside_the_finite_range() {
    assert_eq!(result_of("1/0"), "inf");
    assert_eq!(result_of("1/0 + 1"), "inf");
    assert_eq!(result_of("-1/0"), "-inf");
    assert_eq!(result_of("0/0"), "NaN");
    assert_eq!(result_of("sqrt(-1)"), "NaN");
}

#[test]
fn malformed_input_is_fatal() {
    assert!(matches!(parse_error_of("(1+2"), ParseError::UnmatchedParenthesis { column: 1 }));
    assert!(matches!(parse_error_of("1+2)"), ParseError::UnmatchedParenthesis { column: 4 }));
    assert!(matches!(parse_error_of("1 2"), ParseError::InvalidExpression { column: 3, .. }));
    assert!(matches!(parse_error_of(""), ParseError::InvalidExpression { .. }));
    assert!(matches!(parse_error_of("1 +"), ParseError::InvalidExpression { .. }));
    assert!(matches!(parse_error_of("foo(2)"), ParseError::UnknownFunction { column: 1, .. }));
    assert!(matches!(parse_error_of("2 # 3"), ParseError::UnexpectedCharacter { column: 3, .. }));
}

#[test]
fn output_is_deterministic() {
    let src = "max(2 ^ 3, 9 % 4) - sin(0) * (7 - -2) / 3";

    let first = get_result(src).unwrap();
    for _ in 0..10 {
        assert_eq!(get_result(src).unwrap(), first);
    }
}

#[test]
fn every_step_removes_one_operation() {
    init_logger();

    let tree = parse(tokenize("(1 + 2) * (3 - 4) / max(5, 6 ^ 2) + -sqrt(9)").unwrap()).unwrap();
    let mut counts = vec![tree.root().internal_count()];

    let tree = evaluate(tree, |tree| counts.push(tree.root().internal_count())).unwrap();

    assert!(tree.is_finished());
    assert_eq!(counts.first(), Some(&9));
    assert!(counts.windows(2).all(|pair| pair[0] == pair[1] + 1));
    assert_eq!(counts.last(), Some(&0));
}
