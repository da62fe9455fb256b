//! Number literal lexing.
//!
//! Only decimal forms exist: a digit run, optionally followed by `.` and
//! a second digit run.

use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float literal.
    ///
    /// A `.` only starts a fraction when a digit follows it, so `1..5`
    /// lexes as `1`, `..`, `5`.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == '.' && self.cursor.next_char().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());

            // Digit runs around a single '.' always parse.
            let value: f64 = self.current_text().parse().unwrap_or_default();
            return self.make_literal(TokenKind::FloatLiteral, Literal::Float(value));
        }

        match self.current_text().parse::<i64>() {
            Ok(value) => self.make_literal(TokenKind::IntegerLiteral, Literal::Integer(value)),
            Err(_) => self.error_token(LexError::IntegerOutOfRange),
        }
    }
}
