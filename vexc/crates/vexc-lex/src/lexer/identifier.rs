//! Identifier and keyword lexing.

use crate::keywords::keyword_from_ident;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Returns true for characters that may continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of ASCII letters, digits and underscores,
    /// then classifies it through the keyword table. A lone `_` is an
    /// identifier too.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let kind = keyword_from_ident(self.current_text()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
