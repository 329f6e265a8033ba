use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;

        while let Some(token) = self.peek()
              && let Some(op) = token_to_binary_operator(token.kind)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            self.next_token();
            self.count_operator(token.position)?;
            let right = self.parse_term()?;
            left = binary(left, op, right, token.position);
        }

        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative `*` and `/`. A token that can begin a
    /// primary, found where an operator was expected, is read as an implicit
    /// `*`; this is how `2x`, `2(3 + 5)`, `(1)(2)` and `2 sqrt(4)` parse.
    ///
    /// The rule is: `term := unary ((("*" | "/") unary) | unary)*`
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;

        while let Some(token) = self.peek() {
            let op = match token_to_binary_operator(token.kind) {
                Some(op @ (BinaryOperator::Mul | BinaryOperator::Div)) => {
                    self.next_token();
                    op
                },
                None if token.kind.starts_primary() => BinaryOperator::Mul,
                _ => break,
            };

            self.count_operator(token.position)?;
            let right = self.parse_unary()?;
            left = binary(left, op, right, token.position);
        }

        Ok(left)
    }

    /// Parses exponentiation.
    ///
    /// The exponent is parsed recursively as a full unary operand, which
    /// makes `^` right-associative (`2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`) and allows
    /// negative exponents such as `2 ^ -1`.
    ///
    /// The rule is: `factor := primary ("^" unary)?`
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        let base = self.parse_primary()?;

        match self.next_if_kind(TokenKind::Caret) {
            Some(caret) => {
                self.count_operator(caret.position)?;
                let exponent = self.nested(caret.position, Self::parse_unary)?;
                Ok(binary(base, BinaryOperator::Pow, exponent, caret.position))
            },
            None => Ok(base),
        }
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every token that is not an explicit arithmetic
/// operator, including `=`.
///
/// # Example
/// ```
/// use scalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr, position: usize) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     position }
}
