//! Span module - Source location tracking.
//!
//! This module provides [`Span`], which records where a token or
//! diagnostic came from: a byte range into the source text together with
//! the human-readable line/column of its first character.
//!
//! # Examples
//!
//! ```
//! use vexc_util::span::Span;
//!
//! // `Player` in `Define Player`
//! let span = Span::new(7, 13, 1, 8);
//! assert_eq!(span.len(), 6);
//! assert_eq!(span.text("Define Player").unwrap(), "Player");
//! ```

use serde::Serialize;

use crate::error::{SpanError, SpanResult};

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of the first character (1-based)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use vexc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a zero-width span at a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use vexc_util::span::Span;
    ///
    /// let point = Span::point(12, 2, 5);
    /// assert!(point.is_empty());
    /// assert_eq!(point.line, 2);
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns the text this span covers in `source`
    ///
    /// # Errors
    ///
    /// Fails when the span is inverted, runs past the end of `source`, or
    /// splits a multi-byte character.
    pub fn text<'s>(&self, source: &'s str) -> SpanResult<&'s str> {
        if self.start > self.end {
            return Err(SpanError::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > source.len() {
            return Err(SpanError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: self.start,
                span_end: self.end,
            });
        }
        source
            .get(self.start..self.end)
            .ok_or(SpanError::NotCharBoundary {
                start: self.start,
                end: self.end,
            })
    }
}

/// Returns the full text of a 1-based line of `source`, without its
/// line terminator.
///
/// # Examples
///
/// ```
/// use vexc_util::span::line_text;
///
/// let source = "Define Player\nFetch Health";
/// assert_eq!(line_text(source, 2).unwrap(), "Fetch Health");
/// assert!(line_text(source, 3).is_err());
/// ```
pub fn line_text(source: &str, line: u32) -> SpanResult<&str> {
    let index = line as usize;
    let max_lines = source.lines().count().max(1);
    if index == 0 {
        return Err(SpanError::InvalidLineNumber {
            line: index,
            max_lines,
        });
    }
    source
        .lines()
        .nth(index - 1)
        .or(if source.is_empty() && index == 1 { Some("") } else { None })
        .ok_or(SpanError::InvalidLineNumber {
            line: index,
            max_lines,
        })
}
