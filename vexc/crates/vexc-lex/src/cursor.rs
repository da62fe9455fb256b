//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

/// A cursor for traversing source code character by character.
///
/// Lookahead (`current_char`, `peek_char`) never moves the cursor; only
/// `advance` and `match_char` consume input. Reading past the end yields
/// `'\0'` rather than faulting.
///
/// # Example
///
/// ```
/// use vexc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("Set x");
///
/// assert_eq!(cursor.current_char(), 'S');
/// assert_eq!(cursor.advance(), 'S');
/// assert_eq!(cursor.current_char(), 'e');
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    ///
    /// A leading byte order mark is skipped without counting as a column.
    pub fn new(source: &'a str) -> Self {
        let position = if source.starts_with('\u{FEFF}') {
            '\u{FEFF}'.len_utf8()
        } else {
            0
        };
        Self {
            source,
            position,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character one past the current position.
    #[inline]
    pub fn next_char(&self) -> char {
        self.peek_char(1)
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use vexc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("..=");
    /// assert_eq!(cursor.peek_char(0), '.');
    /// assert_eq!(cursor.peek_char(2), '=');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes and returns the current character.
    ///
    /// A newline moves to column 1 of the next line; every other character
    /// moves one column right. Returns '\0' and does nothing at the end.
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Consumes characters while `predicate` holds.
    ///
    /// # Example
    ///
    /// ```
    /// use vexc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("540 ");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.slice_from(0), "540");
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character only if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use vexc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('!'));
    /// assert_eq!(cursor.position(), 1);
    /// ```
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// `start` must be a position previously returned by [`Cursor::position`].
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }

    /// Returns the unconsumed rest of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the whole source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
