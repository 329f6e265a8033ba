use std::{iter::Peekable, slice};

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// How deeply groups, `sqrt` applications, negations and exponents may nest
/// before parsing is refused.
pub const MAX_NESTING_DEPTH: usize = 128;

/// How many operator nodes a single statement may contain.
///
/// Operator chains such as `1 + 1 + ...` are parsed in a loop but still build
/// a tree one level deeper per operator, and evaluating or dropping that tree
/// recurses once per level.
pub const MAX_OPERATORS: usize = 512;

/// Recursive-descent parser over a slice of tokens.
///
/// The grammar, from lowest to highest precedence:
/// ```text
///     statement  := expression ("=" expression)?
///     expression := term (("+" | "-") term)*
///     term       := unary ((("*" | "/") unary) | unary)*
///     unary      := "-" unary | factor
///     factor     := primary ("^" unary)?
///     primary    := NUMBER | IDENTIFIER | "sqrt" primary | "(" expression ")"
/// ```
/// A `term` operand that follows another with no operator in between is an
/// implicit multiplication. Negation sits above `^`, so `-2^2` is `-(2^2)`.
pub struct Parser<'a> {
    tokens: Peekable<slice::Iter<'a, Token>>,
    end:       usize,
    depth:     usize,
    operators: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens:    tokens.iter().peekable(),
               end:       tokens.last().map_or(0, Token::end),
               depth:     0,
               operators: 0, }
    }

    /// Parses one statement: an expression, optionally followed by `=` and
    /// the value to assign.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if the left side of `=` is anything but a
    ///   bare variable name.
    /// - `TooManyOperators` if the statement holds more than
    ///   [`MAX_OPERATORS`] operators.
    /// - Any error raised while parsing either side.
    pub fn parse_statement(&mut self) -> ParseResult<Expr> {
        self.operators = 0;
        let target = self.parse_expression()?;

        let Some(equals) = self.next_if_kind(TokenKind::Equals) else {
            return Ok(target);
        };

        let name = match target {
            Expr::Variable { name, .. } => name,
            other => {
                return Err(SyntaxError::InvalidAssignmentTarget { target:   other.visualize(),
                                                                  position: equals.position, });
            },
        };

        let value = self.parse_expression()?;
        Ok(Expr::Assignment { name,
                              value: Box::new(value),
                              position: equals.position })
    }

    pub(crate) fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    pub(crate) fn next_token(&mut self) -> Option<&'a Token> {
        self.tokens.next()
    }

    pub(crate) fn next_if_kind(&mut self, kind: TokenKind) -> Option<&'a Token> {
        self.tokens.next_if(|token| token.kind == kind)
    }

    /// Byte offset just past the last token, used when input runs out.
    pub(crate) const fn end(&self) -> usize {
        self.end
    }

    /// Records one more operator node in the current statement.
    pub(crate) const fn count_operator(&mut self, position: usize) -> ParseResult<()> {
        if self.operators >= MAX_OPERATORS {
            return Err(SyntaxError::TooManyOperators { limit: MAX_OPERATORS,
                                                       position });
        }
        self.operators += 1;
        Ok(())
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Every recursive rule goes through here, which keeps the call stack
    /// bounded by [`MAX_NESTING_DEPTH`].
    pub(crate) fn nested<T>(&mut self,
                            position: usize,
                            parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                     position });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

/// Parses a token stream into one tree per statement.
///
/// Parenthesis balance is verified over the whole stream before any
/// recursive descent starts. Statements follow each other without a
/// separator; in practice a single line yields a single statement. An empty
/// token stream yields no statements.
///
/// # Errors
/// - `UnexpectedTokenAtStart` if the first token is neither a primary nor
///   `-`.
/// - `UnbalancedParentheses` from [`check_parentheses_balance`].
/// - `UnexpectedTrailingInput` if tokens remain that cannot begin another
///   statement, e.g. the second `=` in `x = 1 = 2`.
/// - Any error from parsing a statement.
///
/// # Example
/// ```
/// use scalc::{
///     error::SyntaxError,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let statements = parse(&tokenize("x = 2(3 + 1)").unwrap()).unwrap();
/// assert_eq!(statements.len(), 1);
/// assert_eq!(statements[0].visualize(), "= (x, * (2, + (3, 1)))");
///
/// let err = parse(&tokenize("(2 + 3").unwrap()).unwrap_err();
/// assert!(matches!(err, SyntaxError::UnbalancedParentheses { .. }));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Expr>> {
    let Some(first) = tokens.first() else {
        return Ok(Vec::new());
    };

    if !starts_statement(first.kind) {
        return Err(SyntaxError::UnexpectedTokenAtStart { token:    first.text.clone(),
                                                         position: first.position, });
    }

    check_parentheses_balance(tokens)?;

    let mut parser = Parser::new(tokens);
    let mut statements = Vec::new();

    loop {
        let statement = parser.parse_statement()?;
        tracing::trace!(tree = %statement, "parsed statement");
        statements.push(statement);

        match parser.peek() {
            None => break,
            Some(token) if starts_statement(token.kind) => {},
            Some(token) => {
                return Err(SyntaxError::UnexpectedTrailingInput { token:    token.text.clone(),
                                                                  position: token.position, });
            },
        }
    }

    Ok(statements)
}

/// Verifies that every `(` has a matching `)` and no `)` comes first.
///
/// # Errors
/// Returns `UnbalancedParentheses` pointing at the first `)` that closes
/// nothing, or else at the innermost `(` left open.
///
/// # Example
/// ```
/// use scalc::interpreter::{lexer::tokenize, parser::check_parentheses_balance};
///
/// assert!(check_parentheses_balance(&tokenize("((1)(2))").unwrap()).is_ok());
/// assert!(check_parentheses_balance(&tokenize(")1(").unwrap()).is_err());
/// ```
pub fn check_parentheses_balance(tokens: &[Token]) -> ParseResult<()> {
    let mut open = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LParen => open.push(token.position),
            TokenKind::RParen => {
                if open.pop().is_none() {
                    return Err(SyntaxError::UnbalancedParentheses { details:  "expected '(' before matching ')'".to_string(),
                                                                    position: token.position, });
                }
            },
            _ => {},
        }
    }

    match open.last() {
        Some(&position) => {
            Err(SyntaxError::UnbalancedParentheses { details: "'(' is never closed".to_string(),
                                                     position })
        },
        None => Ok(()),
    }
}

/// Tokens that may begin a statement: any primary, or a leading minus.
const fn starts_statement(kind: TokenKind) -> bool {
    kind.starts_primary() || matches!(kind, TokenKind::Minus)
}
