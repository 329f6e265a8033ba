//! End-to-end tests: source line in, value or error out.

use pretty_assertions::assert_eq;
use rstest::rstest;
use scalc::{
    Environment, Error, Expr, evaluate, evaluate_line,
    error::{EvalError, LexError, SyntaxError},
    interpreter::parser::MAX_OPERATORS,
    parse, tokenize,
};

fn value_of(source: &str, env: &mut Environment) -> f64 {
    evaluate_line(source, env).unwrap_or_else(|e| panic!("{source:?} failed: {e}"))
                              .unwrap_or_else(|| panic!("{source:?} produced no value"))
}

fn failure_of(source: &str, env: &mut Environment) -> Error {
    match evaluate_line(source, env) {
        Ok(value) => panic!("{source:?} should fail, got {value:?}"),
        Err(e) => e,
    }
}

#[rstest]
#[case::precedence("2 + 3 * 4", 14.0)]
#[case::grouping("(2 + 3) * 4", 20.0)]
#[case::left_assoc_sub("10 - 4 - 3", 3.0)]
#[case::left_assoc_div("100 / 10 / 5", 2.0)]
#[case::right_assoc_pow("2 ^ 3 ^ 2", 512.0)]
#[case::negation_binds_looser_than_pow("-2 ^ 2", -4.0)]
#[case::grouped_negation("(-2) ^ 2", 4.0)]
#[case::negative_exponent("2 ^ -1", 0.5)]
#[case::double_negation("--3", 3.0)]
#[case::sqrt_call("sqrt(16) + 1", 5.0)]
#[case::sqrt_bare_number("sqrt 9", 3.0)]
#[case::implicit_group("2(3 + 1)", 8.0)]
#[case::implicit_adjacent_groups("(2)(3)", 6.0)]
#[case::implicit_sqrt("2 sqrt(4)", 4.0)]
#[case::trailing_dot("5. + 1", 6.0)]
#[case::whitespace_ignored("  1+\t2  ", 3.0)]
fn evaluates_constant_expressions(#[case] source: &str, #[case] expected: f64) {
    let mut env = Environment::new();
    assert_eq!(value_of(source, &mut env), expected);
}

#[rstest]
#[case::juxtaposed_name("2x", 6.0)]
#[case::spaced_name("2 x", 6.0)]
#[case::name_then_group("x(2)", 6.0)]
#[case::squared("x ^ 2 + 1", 10.0)]
#[case::negated_power("-x ^ 2", -9.0)]
fn evaluates_with_variables(#[case] source: &str, #[case] expected: f64) {
    let mut env = Environment::new();
    value_of("x = 3", &mut env);

    assert_eq!(value_of(source, &mut env), expected);
}

#[test]
fn assignment_returns_and_binds_the_value() {
    let mut env = Environment::new();

    assert_eq!(value_of("x = 2 + 5 ^ 2", &mut env), 27.0);
    assert_eq!(env.get_variable("x"), Some(27.0));

    assert_eq!(value_of("y = sqrt(x - 2)", &mut env), 5.0);
    assert_eq!(value_of("x = x + y", &mut env), 32.0);
    assert_eq!(env.len(), 2);
}

#[test]
fn evaluating_an_assignment_tree_does_not_bind() {
    let env = Environment::new();
    let statements = parse(&tokenize("x = 2 + 3").unwrap()).unwrap();

    assert!(matches!(statements[0], Expr::Assignment { .. }));
    assert_eq!(evaluate(&statements[0], &env), Ok(5.0));
    assert!(env.is_empty());
}

#[test]
fn failed_assignment_keeps_previous_value() {
    let mut env = Environment::new();
    value_of("x = 4", &mut env);

    let err = failure_of("x = 1 / 0", &mut env);

    assert!(matches!(err, Error::Eval(EvalError::DivisionByZero { .. })));
    assert_eq!(env.get_variable("x"), Some(4.0));
}

#[test]
fn syntax_error_binds_nothing() {
    let mut env = Environment::new();

    failure_of("x = (1", &mut env);

    assert!(env.is_empty());
}

#[rstest]
#[case::literal_zero("5 / 0", 2)]
#[case::negative_zero("5 / -0", 2)]
#[case::computed_zero("1 / (2 - 2)", 2)]
fn division_by_zero_is_reported(#[case] source: &str, #[case] position: usize) {
    let mut env = Environment::new();

    assert_eq!(failure_of(source, &mut env),
               Error::Eval(EvalError::DivisionByZero { position }));
}

#[test]
fn divisor_is_checked_before_dividend() {
    let mut env = Environment::new();

    let err = failure_of("undefined / 0", &mut env);

    assert!(matches!(err, Error::Eval(EvalError::DivisionByZero { .. })));
}

#[test]
fn negative_sqrt_is_reported() {
    let mut env = Environment::new();

    assert_eq!(failure_of("sqrt(-4)", &mut env),
               Error::Eval(EvalError::NegativeSqrtInput { value:    -4.0,
                                                           position: 0, }));
}

#[test]
fn undefined_variable_is_reported() {
    let mut env = Environment::new();

    assert_eq!(failure_of("1 + y", &mut env),
               Error::Eval(EvalError::UndefinedVariable { name:     "y".to_string(),
                                                           position: 4, }));
}

#[rstest]
#[case::repeated_dots("1.2.3".to_string())]
#[case::too_large_for_f64("9".repeat(400))]
fn malformed_literal_fails_at_evaluation(#[case] literal: String) {
    let mut env = Environment::new();

    assert!(parse(&tokenize(&literal).unwrap()).is_ok());
    assert_eq!(failure_of(&literal, &mut env),
               Error::Eval(EvalError::MalformedNumberLiteral { literal,
                                                                position: 0, }));
}

#[test]
fn large_but_finite_literal_is_accepted() {
    let mut env = Environment::new();

    assert_eq!(value_of(&format!("1{}", "0".repeat(300)), &mut env), 1e300);
}

#[test]
fn negative_base_with_fractional_exponent_is_nan() {
    let mut env = Environment::new();

    assert!(value_of("(-8) ^ (1 / 3)", &mut env).is_nan());
}

#[test]
fn invalid_character_is_a_lex_error() {
    let mut env = Environment::new();

    assert_eq!(failure_of("2 $ 3", &mut env),
               Error::Lex(LexError::InvalidCharacter { character: '$',
                                                       position:  2, }));
}

#[rstest]
#[case::unclosed("(2 + 3", SyntaxError::UnbalancedParentheses {
    details:  "'(' is never closed".to_string(),
    position: 0,
})]
#[case::stray_close("2 + 3)", SyntaxError::UnbalancedParentheses {
    details:  "expected '(' before matching ')'".to_string(),
    position: 5,
})]
#[case::trailing_equals("x = 1 = 2", SyntaxError::UnexpectedTrailingInput {
    token:    "=".to_string(),
    position: 6,
})]
#[case::literal_target("2 = 3", SyntaxError::InvalidAssignmentTarget {
    target:   "2".to_string(),
    position: 2,
})]
#[case::leading_operator("* 2", SyntaxError::UnexpectedTokenAtStart {
    token:    "*".to_string(),
    position: 0,
})]
#[case::missing_operand("2 *", SyntaxError::UnexpectedEndOfInput { position: 3 })]
#[case::empty_group("()", SyntaxError::UnexpectedToken {
    token:    ")".to_string(),
    position: 1,
})]
fn syntax_errors_are_reported(#[case] source: &str, #[case] expected: SyntaxError) {
    let mut env = Environment::new();

    assert_eq!(failure_of(source, &mut env), Error::Syntax(expected));
}

#[test]
fn moderate_nesting_is_accepted() {
    let mut env = Environment::new();
    let source = format!("{}1{}", "(".repeat(100), ")".repeat(100));

    assert_eq!(value_of(&source, &mut env), 1.0);
}

#[test]
fn excessive_nesting_is_refused() {
    let mut env = Environment::new();
    let depth = scalc::interpreter::parser::MAX_NESTING_DEPTH + 1;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    let err = failure_of(&source, &mut env);

    assert!(matches!(err, Error::Syntax(SyntaxError::NestingTooDeep { .. })));
}

#[rstest]
#[case::sum(format!("1{}", "+1".repeat(20_000)))]
#[case::implicit_product(format!("2{}", " x".repeat(20_000)))]
#[case::mixed_operators(format!("1{}", "*2/3+4".repeat(7_000)))]
fn long_operator_chains_are_refused(#[case] source: String) {
    let mut env = Environment::new();
    value_of("x = 1", &mut env);

    let err = failure_of(&source, &mut env);

    assert!(matches!(err,
                     Error::Syntax(SyntaxError::TooManyOperators { limit, .. }) if limit == MAX_OPERATORS));
}

#[test]
fn operator_chain_at_the_limit_is_accepted() {
    let mut env = Environment::new();
    let source = format!("1{}", "+1".repeat(MAX_OPERATORS));

    assert_eq!(value_of(&source, &mut env), (MAX_OPERATORS + 1) as f64);
}

#[test]
fn operator_limit_applies_per_statement() {
    let mut env = Environment::new();
    let half = format!("1{}", "+1".repeat(MAX_OPERATORS / 2));

    for _ in 0..4 {
        assert_eq!(value_of(&half, &mut env), (MAX_OPERATORS / 2 + 1) as f64);
    }
}

#[test]
fn blank_input_has_no_value() {
    let mut env = Environment::new();

    assert_eq!(evaluate_line("", &mut env), Ok(None));
    assert_eq!(evaluate_line(" \t ", &mut env), Ok(None));
}
