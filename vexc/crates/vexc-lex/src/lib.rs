//! vexc-lex - Lexical Analyzer for the Vex Programming Language
//!
//! This crate turns Vex source text into a stream of position-annotated
//! tokens for the parser.
//!
//! # Example Usage
//!
//! ```
//! use vexc_lex::{Lexer, TokenKind};
//!
//! let source = "Define Player\nFetch Health";
//! let mut lexer = Lexer::new(source);
//!
//! let tokens = lexer.tokenize();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[2].kind, TokenKind::Fetch);
//! assert_eq!((tokens[2].line, tokens[2].column), (2, 1));
//! assert!(!lexer.handler().has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - `Token`, `TokenKind` and `Literal`
//! - [`keywords`] - the reserved word table
//! - [`lexer`] - the scanner itself
//! - [`cursor`] - character cursor for source traversal
//! - [`error`] - lexical error kinds
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! **Declarations**: `Define`, `Fetch`, `Set`, `Interface`, `Namespace`, `Using`
//!
//! **Access**: `Public`, `Private`, `Protected`, `View`
//!
//! **Control Flow**: `if`, `else`, `for`, `while`, `do`, `match`, `break`, `continue`, `return`
//!
//! **Ownership**: `Unique`, `Shared`, `Borrow`, `Raw`, `Unsafe`
//!
//! **Types**: `Int_8` .. `Int_64`, `Uint_8` .. `Uint_64`, `Float_32`, `Float_64`, `Int`,
//! `Uint`, `Float`, `Double`, `Bool`, `Char`, `String`, `Void`, and the game-math types
//! `Vector2`, `Vector3`, `Vector4`, `Quat`, `Color`, `Transform`
//!
//! ## Literals
//!
//! - **Integer**: `42` (decimal only, must fit in `i64`)
//! - **Float**: `3.14`
//! - **String**: `"hello\n"`
//! - **Char**: `'a'`, `'\t'`
//!
//! ## Errors
//!
//! Lexical errors never stop the lexer. They come back as
//! [`TokenKind::Unknown`] tokens whose lexeme is the message, and are also
//! recorded as diagnostics on the lexer's handler.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::LexError;
pub use keywords::keyword_from_ident;
pub use lexer::Lexer;
pub use token::{Literal, Token, TokenKind};

/// Tokenizes `source` in one go.
///
/// The result always ends with exactly one `EndOfFile` token. Use
/// [`Lexer`] directly to also inspect the diagnostics.
///
/// # Examples
///
/// ```
/// use vexc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("a ?? b");
/// assert_eq!(tokens[1].kind, TokenKind::DoubleQuestion);
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
