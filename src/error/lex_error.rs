use thiserror::Error;

/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Found a character that starts no token.
    #[error("Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source line.
        position:  usize,
    },
}
