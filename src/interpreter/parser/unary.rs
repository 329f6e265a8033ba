use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// A leading `-` negates everything up to the end of the following power
    /// chain, so `-2 ^ 2` is `-(2 ^ 2) = -4`. Negations may repeat: `--3` is
    /// `3`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := "-" unary
    ///            | factor
    /// ```
    pub fn parse_unary(&mut self) -> ParseResult<Expr> {
        match self.next_if_kind(TokenKind::Minus) {
            Some(minus) => {
                self.count_operator(minus.position)?;
                let expr = self.nested(minus.position, Self::parse_unary)?;
                Ok(Expr::UnaryOp { op:       UnaryOperator::Negate,
                                   expr:     Box::new(expr),
                                   position: minus.position, })
            },
            None => self.parse_factor(),
        }
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | IDENTIFIER
    ///              | "sqrt" primary
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if no token is left.
    /// - `UnexpectedToken` for any token that cannot start a primary.
    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.next_token()
                        .ok_or(SyntaxError::UnexpectedEndOfInput { position: self.end() })?;

        match token.kind {
            TokenKind::Number => Ok(Expr::Number { literal:  token.text.clone(),
                                                   position: token.position, }),
            TokenKind::Identifier => Ok(Expr::Variable { name:     token.text.clone(),
                                                         position: token.position, }),
            TokenKind::Sqrt => {
                self.count_operator(token.position)?;
                let operand = self.nested(token.position, Self::parse_primary)?;
                Ok(Expr::UnaryOp { op:       UnaryOperator::Sqrt,
                                   expr:     Box::new(operand),
                                   position: token.position, })
            },
            TokenKind::LParen => self.nested(token.position, Self::parse_grouping),
            _ => Err(unexpected(token)),
        }
    }

    /// Parses the inside of a parenthesized group, after the `(`.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        match self.next_token() {
            Some(Token { kind: TokenKind::RParen,
                         .. }) => Ok(expr),
            Some(token) => Err(SyntaxError::ExpectedClosingParen { found:    token.text.clone(),
                                                                   position: token.position, }),
            None => Err(SyntaxError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                            position: self.end(), }),
        }
    }
}

fn unexpected(token: &Token) -> SyntaxError {
    SyntaxError::UnexpectedToken { token:    token.text.clone(),
                                   position: token.position, }
}
