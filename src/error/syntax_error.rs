use thiserror::Error;

/// Represents all errors that can occur while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Found an unexpected token while parsing.
    #[error("Unexpected token '{token}' at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source line.
        position: usize,
    },
    /// The first token cannot begin a statement.
    #[error("Unexpected token at the start: '{token}'.")]
    UnexpectedTokenAtStart {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source line.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Unexpected end of input at position {position}.")]
    UnexpectedEndOfInput {
        /// Byte offset just past the last token.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but something else was found.
    #[error("Expected ')' but found '{found}' at position {position}.")]
    ExpectedClosingParen {
        /// The token found instead.
        found:    String,
        /// Byte offset of the token in the source line.
        position: usize,
    },
    /// Parentheses do not pair up.
    #[error("Unbalanced parentheses: {details} at position {position}.")]
    UnbalancedParentheses {
        /// What went wrong with the pairing.
        details:  String,
        /// Byte offset of the offending parenthesis.
        position: usize,
    },
    /// Tokens were left over after the last complete statement.
    #[error("Unexpected token '{token}' after the end of the expression at position {position}.")]
    UnexpectedTrailingInput {
        /// The first leftover token.
        token:    String,
        /// Byte offset of the token in the source line.
        position: usize,
    },
    /// The left side of `=` is not a bare variable name.
    #[error("Invalid left-hand side '{target}' in assignment at position {position}.")]
    InvalidAssignmentTarget {
        /// Rendering of the rejected left-hand side.
        target:   String,
        /// Byte offset of the `=` token.
        position: usize,
    },
    /// Groups, roots, negations or powers are nested beyond the parser's
    /// recursion limit.
    #[error("Expression is nested more than {limit} levels deep at position {position}.")]
    NestingTooDeep {
        /// The maximum permitted depth.
        limit:    usize,
        /// Byte offset where the limit was crossed.
        position: usize,
    },
    /// A single statement holds more operators than the parser accepts.
    #[error("Expression has more than {limit} operators at position {position}.")]
    TooManyOperators {
        /// The maximum permitted number of operators.
        limit:    usize,
        /// Byte offset of the first operator over the limit.
        position: usize,
    },
}
