use thiserror::Error;

use crate::tokenizer::TokenKind;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected character {ch:?} at line {line}, column {column}")]
    LexError {
        ch:     char,
        line:   usize,
        column: usize,
    },

    #[error("Expected {expected} but found {found} at line {line}, column {column}")]
    ParseError {
        expected: TokenKind,
        found:    TokenKind,
        line:     usize,
        column:   usize,
    },

    #[error("Invalid array length {text:?} at line {line}, column {column}")]
    InvalidLength {
        text:   String,
        line:   usize,
        column: usize,
    },
}
