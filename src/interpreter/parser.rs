/// Parser state and top-level entry points.
///
/// Holds the token cursor and recursion depth, validates parenthesis balance
/// up front and parses statements, including assignment detection.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for `+ -`, `* /` (with implicit
/// multiplication) and the right-associative `^`.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles negation, number literals, variables, `sqrt` applications and
/// parenthesized groups.
pub mod unary;

pub use self::core::{
    MAX_NESTING_DEPTH, MAX_OPERATORS, ParseResult, Parser, check_parentheses_balance, parse,
};
