//! Lexer tests using rstest for parameterization.

use pretty_assertions::assert_eq;
use rstest::rstest;
use scalc::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind, tokenize},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap_or_else(|e| panic!("{source:?} failed to lex: {e}"))
                    .iter()
                    .map(|token| token.kind)
                    .collect()
}

#[test]
fn tokens_keep_text_and_position() {
    let tokens = tokenize("x = 3.14 * (y - 2)").unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Identifier, "x", 0),
                    Token::new(TokenKind::Equals, "=", 2),
                    Token::new(TokenKind::Number, "3.14", 4),
                    Token::new(TokenKind::Star, "*", 9),
                    Token::new(TokenKind::LParen, "(", 11),
                    Token::new(TokenKind::Identifier, "y", 12),
                    Token::new(TokenKind::Minus, "-", 14),
                    Token::new(TokenKind::Number, "2", 16),
                    Token::new(TokenKind::RParen, ")", 17),]);
}

#[rstest]
#[case::operators("+-*/^", vec![TokenKind::Plus, TokenKind::Minus, TokenKind::Star, TokenKind::Slash, TokenKind::Caret])]
#[case::implicit_product("2x", vec![TokenKind::Number, TokenKind::Identifier])]
#[case::sqrt_keyword("sqrt(4)", vec![TokenKind::Sqrt, TokenKind::LParen, TokenKind::Number, TokenKind::RParen])]
#[case::sqrt_prefixed_name("sqrt2", vec![TokenKind::Identifier])]
#[case::sqrt_then_number("sqrt 2", vec![TokenKind::Sqrt, TokenKind::Number])]
#[case::alphanumeric_name("rate2b", vec![TokenKind::Identifier])]
#[case::digits_then_name("12ab", vec![TokenKind::Number, TokenKind::Identifier])]
#[case::mixed_whitespace("1\t+\n2", vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number])]
fn lexes_token_kinds(#[case] source: &str, #[case] expected: Vec<TokenKind>) {
    assert_eq!(kinds(source), expected);
}

#[rstest]
#[case::trailing_dot("5.")]
#[case::repeated_dots("1.2.3")]
#[case::plain("42")]
fn number_literals_are_kept_verbatim(#[case] source: &str) {
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens, vec![Token::new(TokenKind::Number, source, 0)]);
}

#[rstest]
#[case::leading_dot(".5", '.', 0)]
#[case::hash("2 # 3", '#', 2)]
#[case::underscore("a_b", '_', 1)]
#[case::comma("1,5", ',', 1)]
fn rejects_invalid_characters(#[case] source: &str,
                              #[case] character: char,
                              #[case] position: usize) {
    assert_eq!(tokenize(source),
               Err(LexError::InvalidCharacter { character, position }));
}

#[rstest]
#[case::empty("")]
#[case::blank("   \t ")]
fn blank_input_yields_no_tokens(#[case] source: &str) {
    assert_eq!(tokenize(source), Ok(Vec::new()));
}

#[test]
fn token_end_is_just_past_its_text() {
    let tokens = tokenize("  sqrt").unwrap();

    assert_eq!(tokens[0].position, 2);
    assert_eq!(tokens[0].end(), 6);
}
