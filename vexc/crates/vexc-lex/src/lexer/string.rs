//! String and character literal lexing.
//!
//! Both literal forms decode escapes while scanning, so the token lexeme
//! holds the value rather than the source text.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Decodes the character after a backslash.
///
/// Unknown escapes stand for the escaped character itself, so `\q` is `q`.
fn decode_escape(escaped: char) -> char {
    match escaped {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Raw newlines are kept in the value. Reaching the end of input before
    /// the closing quote yields an `Unterminated String` error token.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance();
        let mut value = String::new();

        loop {
            if self.cursor.is_at_end() {
                return self.error_token(LexError::UnterminatedString);
            }

            match self.cursor.advance() {
                '"' => break,
                '\\' => {
                    if self.cursor.is_at_end() {
                        return self.error_token(LexError::UnterminatedString);
                    }
                    value.push(decode_escape(self.cursor.advance()));
                },
                c => value.push(c),
            }
        }

        self.make_token_with_lexeme(TokenKind::StringLiteral, value)
    }

    /// Lexes a character literal: exactly one (possibly escaped) character
    /// between single quotes.
    ///
    /// The content character may itself be a quote, so `'''` is the
    /// character `'`. Anything other than a closing quote after the content
    /// yields an `Unterminated Character Literal` error token.
    pub(crate) fn lex_char(&mut self) -> Token {
        self.cursor.advance();

        if self.cursor.is_at_end() {
            return self.error_token(LexError::UnterminatedChar);
        }

        let value = match self.cursor.advance() {
            '\\' => {
                if self.cursor.is_at_end() {
                    return self.error_token(LexError::UnterminatedChar);
                }
                decode_escape(self.cursor.advance())
            },
            c => c,
        };

        if !self.cursor.match_char('\'') {
            return self.error_token(LexError::UnterminatedChar);
        }

        self.make_token_with_lexeme(TokenKind::CharLiteral, value.to_string())
    }
}
