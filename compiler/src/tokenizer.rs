use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::DumpError;

lazy_static! {
    pub static ref TOKEN_REGEX:   Regex = Regex::new(r"([0-9]+|[{};\[\]]|[A-Za-z_][A-Za-z0-9_]*|[ \t\r\n]+)").unwrap();
    static ref WHITESPACE_RX: Regex = Regex::new(r"^[ \t\r\n]+$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Number,
    Typedef,
    Struct,
    LBrace,
    RBrace,
    Semicolon,
    LBracket,
    RBracket,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Ident     => "identifier",
            TokenKind::Number    => "number",
            TokenKind::Typedef   => "\"typedef\"",
            TokenKind::Struct    => "\"struct\"",
            TokenKind::LBrace    => "\"{\"",
            TokenKind::RBrace    => "\"}\"",
            TokenKind::Semicolon => "\";\"",
            TokenKind::LBracket  => "\"[\"",
            TokenKind::RBracket  => "\"]\"",
            TokenKind::Eof       => "end of input",
        };
        f.write_str(name)
    }
}

#[derive(Debug, PartialEq)]
pub struct Token {
    pub kind:   TokenKind,
    pub text:   String,
    pub line:   usize,
    pub column: usize,
}

/// The words `typedef` and `struct` lex as dedicated keyword kinds. Nothing
/// downstream keys off them (the walker skips any non-whitelisted token);
/// field-type recognition is driven entirely by the formatting rule table.
fn classify(part: &str) -> TokenKind {
    match part {
        "{"       => TokenKind::LBrace,
        "}"       => TokenKind::RBrace,
        ";"       => TokenKind::Semicolon,
        "["       => TokenKind::LBracket,
        "]"       => TokenKind::RBracket,
        "typedef" => TokenKind::Typedef,
        "struct"  => TokenKind::Struct,
        _ if part.starts_with(|c: char| c.is_ascii_digit()) => TokenKind::Number,
        _ => TokenKind::Ident,
    }
}

fn unexpected_character(text: &str, at: usize, line: usize, column: usize) -> DumpError {
    let ch = text[at..].chars().next().unwrap_or('\0');
    DumpError::LexError { ch, line, column }
}

/// Tokenize a struct declaration into an EOF-terminated token sequence.
/// Whitespace is skipped; any character outside the recognized classes is a
/// `DumpError::LexError` carrying the character and its position.
pub fn tokenize_source(text: &str) -> Result<Vec<Token>, DumpError> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut column = 1;
    let mut last_end = 0;

    for mat in TOKEN_REGEX.find_iter(text) {
        let start = mat.start();
        let end   = mat.end();
        let part  = mat.as_str();

        if start > last_end {
            // Unexpected text between last_end and start
            return Err(unexpected_character(text, last_end, line, column));
        }

        if !WHITESPACE_RX.is_match(part) {
            tokens.push(Token {
                kind:   classify(part),
                text:   part.to_string(),
                line,
                column,
            });
        }

        // Update line/column
        let newline_count = part.matches('\n').count();
        if newline_count > 0 {
            line += newline_count;
            if let Some(last_line_part) = part.split('\n').last() {
                column = last_line_part.len() + 1;
            }
        } else {
            column += part.len();
        }

        last_end = end;
    }

    if last_end != text.len() {
        return Err(unexpected_character(text, last_end, line, column));
    }

    // Append EOF token
    tokens.push(Token {
        kind:   TokenKind::Eof,
        text:   "".to_string(),
        line,
        column,
    });
    Ok(tokens)
}
