use crate::{
    error::DumpError,
    rules::is_known_type,
    tokenizer::{Token, TokenKind},
    types::Field,
};

/// Single-pass walk over an EOF-terminated token sequence, yielding one
/// `Field` per recognized declaration. Tokens that do not start a whitelisted
/// field (braces, semicolons, keywords, unlisted type names) are skipped;
/// once a whitelisted type has been matched, the rest of the declaration is
/// required to be well-formed. After the first error the walker is fused.
pub struct FieldWalker<'a> {
    tokens: &'a [Token],
    pos:    usize,
    failed: bool,
}

impl<'a> FieldWalker<'a> {
    /// The token slice must be EOF-terminated, as produced by
    /// `tokenize_source`.
    pub fn new(tokens: &'a [Token]) -> Self {
        FieldWalker {
            tokens,
            pos: 0,
            failed: false,
        }
    }

    fn peek(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> &'a Token {
        let token = &self.tokens[self.pos];
        self.pos += 1;
        token
    }

    fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.peek().kind == kind {
            Some(self.advance())
        } else {
            None
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, DumpError> {
        let token = self.peek();
        if token.kind == kind {
            Ok(self.advance())
        } else {
            Err(DumpError::ParseError {
                expected: kind,
                found:    token.kind,
                line:     token.line,
                column:   token.column,
            })
        }
    }

    fn field(&mut self, type_token: &Token) -> Result<Field, DumpError> {
        let name_token = self.expect(TokenKind::Ident)?;

        let mut array_len = None;
        if self.eat(TokenKind::LBracket).is_some() {
            let length_token = self.expect(TokenKind::Number)?;
            let length: usize = length_token.text.parse().map_err(|_| DumpError::InvalidLength {
                text:   length_token.text.clone(),
                line:   length_token.line,
                column: length_token.column,
            })?;
            if length == 0 {
                return Err(DumpError::InvalidLength {
                    text:   length_token.text.clone(),
                    line:   length_token.line,
                    column: length_token.column,
                });
            }
            self.expect(TokenKind::RBracket)?;
            array_len = Some(length);
        }

        Ok(Field {
            type_name: type_token.text.clone(),
            name:      name_token.text.clone(),
            array_len,
            line:      type_token.line,
            column:    type_token.column,
        })
    }
}

impl<'a> Iterator for FieldWalker<'a> {
    type Item = Result<Field, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while self.peek().kind != TokenKind::Eof {
            let token = self.advance();
            if token.kind == TokenKind::Ident && is_known_type(&token.text) {
                let result = self.field(token);
                if result.is_err() {
                    self.failed = true;
                }
                return Some(result);
            }
        }
        None
    }
}
