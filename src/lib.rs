//! # scalc
//!
//! scalc is a small scientific calculator written in Rust.
//! It tokenizes an arithmetic expression, parses it into a tree honoring
//! the usual precedence rules and implicit multiplication, and evaluates the
//! tree against a variable environment that lives for a whole session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and its operator types. The tree is
/// built by the parser and walked by the evaluator; every node owns its
/// children and records where in the line it came from.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// Each pipeline stage has its own error enum, and [`error::Error`] unifies
/// them for callers that run the whole pipeline at once.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Tokenizes expression text.
/// - Builds expression trees with correct precedence and associativity.
/// - Evaluates trees against a persistent variable environment.
pub mod interpreter;
/// The interactive session that sits in front of the pipeline.
///
/// Handles the `help` and `exit` commands, normalizes input and reports
/// whether a line produced a value or bound a variable.
pub mod repl;

pub use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::{Environment, EvalResult},
        lexer::{Token, TokenKind, tokenize},
        parser::parse,
    },
};

/// Evaluates a single expression tree against `env`.
///
/// This never binds variables: an assignment evaluates to its right-hand
/// value. See [`Environment::execute`] for committing assignments.
///
/// # Example
/// ```
/// use scalc::{Environment, evaluate, parse, tokenize};
///
/// let mut env = Environment::new();
/// scalc::set_variable(&mut env, "x", 3.0);
///
/// let tree = parse(&tokenize("2x").unwrap()).unwrap();
/// assert_eq!(evaluate(&tree[0], &env).unwrap(), 6.0);
/// ```
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult<f64> {
    env.eval(expr)
}

/// Binds `name` to `value` in `env`, overwriting any previous value.
pub fn set_variable(env: &mut Environment, name: &str, value: f64) {
    env.set_variable(name, value);
}

/// Renders an expression tree as `value (left, right)`, recursively.
///
/// # Example
/// ```
/// use scalc::{parse, tokenize, visualize};
///
/// let tree = parse(&tokenize("2 + 3").unwrap()).unwrap();
/// assert_eq!(visualize(&tree[0]), "+ (2, 3)");
/// ```
#[must_use]
pub fn visualize(expr: &Expr) -> String {
    expr.visualize()
}

/// Runs one line through the whole pipeline and returns the value of its
/// last statement.
///
/// Each stage is all-or-nothing: a lexing failure stops before parsing and a
/// parse failure stops before anything is evaluated. Assignments are
/// committed to `env` only once their value has been computed. Blank input
/// yields `Ok(None)`.
///
/// # Errors
/// Returns the error of whichever stage failed first.
///
/// # Examples
/// ```
/// use scalc::{Environment, evaluate_line};
///
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate_line("x = 5", &mut env).unwrap(), Some(5.0));
/// assert_eq!(evaluate_line("x + 1", &mut env).unwrap(), Some(6.0));
/// assert_eq!(evaluate_line("   ", &mut env).unwrap(), None);
///
/// // `y` is not defined.
/// assert!(evaluate_line("y + 1", &mut env).is_err());
/// ```
pub fn evaluate_line(source: &str, env: &mut Environment) -> Result<Option<f64>, Error> {
    Ok(execute_line(source, env)?.map(|(_, value)| value))
}

/// Like [`evaluate_line`], but also hands back the last statement that was
/// executed, so callers can tell an assignment from a plain expression.
///
/// # Errors
/// Returns the error of whichever stage failed first.
///
/// # Example
/// ```
/// use scalc::{Environment, Expr, execute_line};
///
/// let mut env = Environment::new();
/// let (statement, value) = execute_line("x = 2 ^ 3", &mut env).unwrap().unwrap();
///
/// assert!(matches!(statement, Expr::Assignment { .. }));
/// assert_eq!(value, 8.0);
/// ```
pub fn execute_line(source: &str, env: &mut Environment) -> Result<Option<(Expr, f64)>, Error> {
    let tokens = tokenize(source)?;
    let statements = parse(&tokens)?;

    let mut last = None;
    for statement in statements {
        let value = env.execute(&statement)?;
        last = Some((statement, value));
    }

    Ok(last)
}
