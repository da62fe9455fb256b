//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, token dispatch and the
//! helpers every scanning routine uses to build tokens.

use tracing::{debug, trace};
use vexc_util::{Diagnostic, DiagnosticBuilder, Handler, SourceSnippet, Span};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};

/// Lexer for the Vex programming language.
///
/// The lexer transforms source code text into a stream of tokens. It
/// handles whitespace, comments, identifiers, keywords, operators, and
/// literals. Lexical errors are returned as `Unknown` tokens and recorded
/// on the lexer's [`Handler`]; scanning always continues.
///
/// # Example
///
/// ```
/// use vexc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("Fetch Health -> Int_32");
/// let kinds: Vec<_> = lexer.tokenize().into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Fetch,
///         TokenKind::Identifier,
///         TokenKind::Arrow,
///         TokenKind::Int32,
///         TokenKind::EndOfFile,
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Collects lexical diagnostics.
    handler: Handler,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler: Handler::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. Once the input is exhausted every call returns
    /// `EndOfFile`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.mark_token_start();

        let token = if self.cursor.is_at_end() {
            let span = Span::point(
                self.cursor.position(),
                self.cursor.line(),
                self.cursor.column(),
            );
            Token::new(TokenKind::EndOfFile, "", span)
        } else {
            self.dispatch()
        };

        trace!(
            kind = %token.kind,
            line = token.line,
            column = token.column,
            lexeme = %token.lexeme,
            "token"
        );
        token
    }

    fn dispatch(&mut self) -> Token {
        match self.cursor.current_char() {
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '[' => self.single(TokenKind::LeftBracket),
            ']' => self.single(TokenKind::RightBracket),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '~' => self.single(TokenKind::BitwiseNot),
            '@' => self.single(TokenKind::At),
            '#' => self.single(TokenKind::Hash),
            '^' => self.single(TokenKind::BitwiseXor),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '/' => self.lex_slash(),
            '%' => self.lex_percent(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            ':' => self.lex_colon(),
            '.' => self.lex_dot(),
            '?' => self.lex_question(),
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            c if c.is_ascii_alphabetic() || c == '_' => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            _ => {
                self.cursor.advance();
                self.error_token(LexError::UnexpectedCharacter)
            },
        }
    }

    /// Tokenizes the rest of the input.
    ///
    /// The returned vector always ends with exactly one `EndOfFile` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Returns true once the whole input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the source text being lexed.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns the handler holding the diagnostics reported so far.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Consumes the lexer and returns its diagnostics in report order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.handler.into_diagnostics()
    }

    /// Records the cursor as the start of the next token.
    pub(crate) fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Source text of the token scanned so far.
    pub(crate) fn current_text(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Span from the current token's start to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds a token whose lexeme is the scanned source text.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.current_text(), self.token_span())
    }

    /// Builds a token with a decoded lexeme (string and char literals).
    pub(crate) fn make_token_with_lexeme(&self, kind: TokenKind, lexeme: String) -> Token {
        Token::new(kind, lexeme, self.token_span())
    }

    /// Builds a numeric literal token.
    pub(crate) fn make_literal(&self, kind: TokenKind, literal: Literal) -> Token {
        self.make_token(kind).with_literal(literal)
    }

    /// Consumes one character and builds a token of `kind` for it.
    pub(crate) fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Consumes one more character if it is `expected`, choosing between
    /// the two-character and one-character kinds.
    pub(crate) fn either(
        &mut self,
        expected: char,
        matched: TokenKind,
        otherwise: TokenKind,
    ) -> Token {
        if self.cursor.match_char(expected) {
            self.make_token(matched)
        } else {
            self.make_token(otherwise)
        }
    }

    /// Reports `error` and returns the matching `Unknown` token.
    ///
    /// The token and the diagnostic both point at the start of the token
    /// being scanned.
    pub(crate) fn error_token(&self, error: LexError) -> Token {
        let span = self.token_span();
        debug!(
            code = %error.code(),
            line = span.line,
            column = span.column,
            "{}",
            error
        );

        let mut builder = DiagnosticBuilder::error(error.to_string()).code(error.code());
        if let Some(help) = error.help() {
            builder = builder.help(help);
        }
        self.emit(builder);

        Token::new(TokenKind::Unknown, error.to_string(), span)
    }

    /// Reports a warning covering the current token start to the cursor.
    pub(crate) fn warn(&self, builder: DiagnosticBuilder) {
        self.emit(builder);
    }

    /// Attaches the token span and its source line, then records the
    /// diagnostic.
    fn emit(&self, builder: DiagnosticBuilder) {
        let span = self.token_span();
        let mut builder = builder.span(span);
        if let Ok(snippet) = SourceSnippet::from_source(self.cursor.source(), span) {
            builder = builder.snippet(snippet);
        }
        builder.emit(&self.handler);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
