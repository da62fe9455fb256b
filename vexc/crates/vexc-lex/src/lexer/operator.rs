//! Operator and punctuation lexing.
//!
//! Every routine here consumes the first character and then takes the
//! longest operator that matches.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles: `+`, `+=`
    pub(crate) fn lex_plus(&mut self) -> Token {
        self.cursor.advance();
        self.either('=', TokenKind::PlusAssign, TokenKind::Plus)
    }

    /// Handles: `-`, `-=`, `->`
    pub(crate) fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::MinusAssign)
        } else if self.cursor.match_char('>') {
            self.make_token(TokenKind::Arrow)
        } else {
            self.make_token(TokenKind::Minus)
        }
    }

    /// Handles: `*`, `*=`, `**`
    pub(crate) fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::StarAssign)
        } else if self.cursor.match_char('*') {
            self.make_token(TokenKind::Power)
        } else {
            self.make_token(TokenKind::Star)
        }
    }

    /// Handles: `/`, `/=`
    ///
    /// Comments never reach here; they are skipped before dispatch.
    pub(crate) fn lex_slash(&mut self) -> Token {
        self.cursor.advance();
        self.either('=', TokenKind::SlashAssign, TokenKind::Slash)
    }

    /// Handles: `%`, `%=`
    pub(crate) fn lex_percent(&mut self) -> Token {
        self.cursor.advance();
        self.either('=', TokenKind::PercentAssign, TokenKind::Percent)
    }

    /// Handles: `=`, `==`, `===`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if !self.cursor.match_char('=') {
            return self.make_token(TokenKind::Assign);
        }
        self.either('=', TokenKind::TypeValEq, TokenKind::Equal)
    }

    /// Handles: `!`, `!=`, `!==`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if !self.cursor.match_char('=') {
            return self.make_token(TokenKind::Not);
        }
        self.either('=', TokenKind::TypeValNeq, TokenKind::NotEqual)
    }

    /// Handles: `<`, `<=`, `<<`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::LessEqual)
        } else if self.cursor.match_char('<') {
            self.make_token(TokenKind::LeftShift)
        } else {
            self.make_token(TokenKind::Less)
        }
    }

    /// Handles: `>`, `>=`, `>>`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::GreaterEqual)
        } else if self.cursor.match_char('>') {
            self.make_token(TokenKind::RightShift)
        } else {
            self.make_token(TokenKind::Greater)
        }
    }

    /// Handles: `&`, `&&`
    pub(crate) fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        self.either('&', TokenKind::And, TokenKind::BitwiseAnd)
    }

    /// Handles: `|`, `||`
    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        self.either('|', TokenKind::Or, TokenKind::BitwiseOr)
    }

    /// Handles: `:`, `::`
    pub(crate) fn lex_colon(&mut self) -> Token {
        self.cursor.advance();
        self.either(':', TokenKind::DoubleColon, TokenKind::Colon)
    }

    /// Handles: `.`, `..`, `..=`
    pub(crate) fn lex_dot(&mut self) -> Token {
        self.cursor.advance();
        if !self.cursor.match_char('.') {
            return self.make_token(TokenKind::Dot);
        }
        self.either('=', TokenKind::DotDotEqual, TokenKind::DoubleDot)
    }

    /// Handles: `?`, `?.`, `??`
    pub(crate) fn lex_question(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('.') {
            self.make_token(TokenKind::QuestionDot)
        } else if self.cursor.match_char('?') {
            self.make_token(TokenKind::DoubleQuestion)
        } else {
            self.make_token(TokenKind::Question)
        }
    }
}
