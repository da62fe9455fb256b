//! Lexical error kinds.
//!
//! Lexical errors never abort scanning. Each one becomes an `Unknown` token
//! whose lexeme is the error's message, plus a diagnostic on the lexer's
//! handler.

use thiserror::Error;
use vexc_util::DiagnosticCode;

/// A recoverable lexical error.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// No scanning rule matches the character
    #[error("Unexpected character")]
    UnexpectedCharacter,

    /// End of input before the closing `"`
    #[error("Unterminated String")]
    UnterminatedString,

    /// End of input, an empty `''`, or a missing closing `'`
    #[error("Unterminated Character Literal")]
    UnterminatedChar,

    /// Digits that do not fit a signed 64-bit integer
    #[error("Integer literal out of range")]
    IntegerOutOfRange,
}

impl LexError {
    /// Returns the diagnostic code reported for this error.
    pub fn code(self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnterminatedChar => DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
            LexError::IntegerOutOfRange => DiagnosticCode::E_LEXER_INTEGER_OVERFLOW,
        }
    }

    /// Returns a fix-it hint for the diagnostic, if there is one.
    pub fn help(self) -> Option<&'static str> {
        match self {
            LexError::UnexpectedCharacter => None,
            LexError::UnterminatedString => Some("add a closing `\"`"),
            LexError::UnterminatedChar => {
                Some("a character literal holds exactly one character, e.g. 'a' or '\\n'")
            },
            LexError::IntegerOutOfRange => {
                Some("the largest integer literal is 9223372036854775807")
            },
        }
    }
}
