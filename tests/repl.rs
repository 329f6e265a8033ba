//! Session tests: commands, case folding and persistence across lines.

use pretty_assertions::assert_eq;
use rstest::rstest;
use scalc::{
    Error,
    error::EvalError,
    repl::{Outcome, Repl, visualize_line},
};

fn assigned(name: &str, value: f64) -> Outcome {
    Outcome::Assigned { name: name.to_string(),
                        value }
}

#[rstest]
#[case::blank("", Outcome::Empty)]
#[case::spaces("   ", Outcome::Empty)]
#[case::help("help", Outcome::Help)]
#[case::help_shouting("HELP", Outcome::Help)]
#[case::exit_padded("  exit  ", Outcome::Exit)]
#[case::exit_mixed_case("Exit", Outcome::Exit)]
fn recognizes_commands(#[case] line: &str, #[case] expected: Outcome) {
    let mut repl = Repl::new();

    assert_eq!(repl.process_line(line).unwrap(), expected);
}

#[test]
fn assignments_persist_between_lines() {
    let mut repl = Repl::new();

    assert_eq!(repl.process_line("x = 2 + 5^2").unwrap(), assigned("x", 27.0));
    assert_eq!(repl.process_line("y = sqrt(x - 2)").unwrap(), assigned("y", 5.0));
    assert_eq!(repl.process_line("x + y").unwrap(), Outcome::Value(32.0));
    assert_eq!(repl.environment().len(), 2);
}

#[test]
fn names_and_keywords_ignore_case() {
    let mut repl = Repl::new();

    repl.process_line("Rate = 4").unwrap();

    assert_eq!(repl.environment().get_variable("rate"), Some(4.0));
    assert_eq!(repl.process_line("2 RATE").unwrap(), Outcome::Value(8.0));
    assert_eq!(repl.process_line("SQRT(rate)").unwrap(), Outcome::Value(2.0));
}

#[test]
fn errors_leave_the_session_usable() {
    let mut repl = Repl::new();
    repl.process_line("x = 10").unwrap();

    let err = repl.process_line("x = x / 0").unwrap_err();
    assert!(matches!(err, Error::Eval(EvalError::DivisionByZero { .. })));

    assert!(repl.process_line("x = (").is_err());
    assert!(repl.process_line("x = 1 ?").is_err());

    assert_eq!(repl.environment().get_variable("x"), Some(10.0));
    assert_eq!(repl.process_line("x").unwrap(), Outcome::Value(10.0));
}

#[test]
fn undefined_name_reports_lowercased_name() {
    let mut repl = Repl::new();

    assert_eq!(repl.process_line("Z + 1").unwrap_err(),
               Error::Eval(EvalError::UndefinedVariable { name:     "z".to_string(),
                                                           position: 0, }));
}

#[test]
fn command_words_are_only_commands_alone() {
    let mut repl = Repl::new();

    let err = repl.process_line("help + 1").unwrap_err();

    assert!(matches!(err, Error::Eval(EvalError::UndefinedVariable { .. })));
}

#[rstest]
#[case::sum("2 + 3", vec!["+ (2, 3)"])]
#[case::assignment(" X = 5 ", vec!["= (x, 5)"])]
#[case::blank("", vec![])]
fn visualizes_normalized_lines(#[case] line: &str, #[case] expected: Vec<&str>) {
    assert_eq!(visualize_line(line).unwrap(), expected);
}

#[test]
fn visualizing_does_not_evaluate() {
    assert_eq!(visualize_line("1 / 0").unwrap(), ["/ (1, 0)"]);
    assert!(visualize_line("(1").is_err());
}
