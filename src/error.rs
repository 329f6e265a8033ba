/// Lexing errors.
///
/// Raised while turning the raw expression text into tokens, before any
/// parsing happens.
pub mod lex_error;
/// Syntax errors.
///
/// Defines every grammar violation the parser can detect: unexpected or
/// trailing tokens, unbalanced parentheses, invalid assignment targets and
/// runaway nesting.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking the tree:
/// division by zero, square roots of negative numbers, unbound variables and
/// number literals that do not parse.
pub mod eval_error;

use thiserror::Error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;

/// Any failure of the lex → parse → evaluate pipeline.
///
/// Each stage is all-or-nothing, so exactly one of these is reported per
/// line and the message is the one of the stage that failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The line contains a character the lexer does not recognize.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid statement.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The tree could not be reduced to a number.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
