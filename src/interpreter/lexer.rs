use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
///
/// Number literals are kept verbatim: a run of digits and dots such as
/// `1.2.3` is a single `Number` and is only rejected once the evaluator
/// converts it.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.14` or `5.`.
    #[regex(r"[0-9][0-9.]*")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// The `sqrt` keyword. Only the exact word counts; `sqrt2` is an
    /// identifier.
    #[token("sqrt")]
    Sqrt,
    /// `=`
    #[token("=")]
    Equals,
    /// Variable names such as `x` or `rate2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns `true` for tokens that can begin a primary expression.
    ///
    /// These are also the tokens that trigger implicit multiplication when
    /// they appear where an operator was expected, as in `2x` or `2(3 + 1)`.
    ///
    /// # Example
    /// ```
    /// use scalc::interpreter::lexer::TokenKind;
    ///
    /// assert!(TokenKind::Sqrt.starts_primary());
    /// assert!(!TokenKind::Minus.starts_primary());
    /// ```
    #[must_use]
    pub const fn starts_primary(self) -> bool {
        matches!(self,
                 Self::Number | Self::Identifier | Self::Sqrt | Self::LParen)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Caret => "'^'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Sqrt => "'sqrt'",
            Self::Equals => "'='",
            Self::Identifier => "identifier",
            Self::Ignored => "whitespace",
        };
        f.write_str(name)
    }
}

/// A token produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The literal slice of source text, e.g. `"3.14"`, `"x"` or `"+"`.
    pub text:     String,
    /// Byte offset of the first character in the source line.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// Byte offset just past the last character of the token.
    #[must_use]
    pub fn end(&self) -> usize {
        self.position + self.text.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Converts an expression string into its tokens, left to right.
///
/// Whitespace is skipped. The end of input is not represented by a token;
/// the returned vector simply ends. Empty or blank input yields an empty
/// vector.
///
/// # Errors
/// Returns [`LexError::InvalidCharacter`] for the first character that
/// starts no token, including a `.` that is not preceded by a digit.
///
/// # Example
/// ```
/// use scalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("2x + sqrt(4)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Identifier,
///             TokenKind::Plus,
///             TokenKind::Sqrt,
///             TokenKind::LParen,
///             TokenKind::Number,
///             TokenKind::RParen]);
/// assert!(tokenize("2 # 3").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let position = lexer.span().start;
        match kind {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), position)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::InvalidCharacter { character, position });
            },
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}
