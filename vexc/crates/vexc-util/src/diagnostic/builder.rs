//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::error::SpanResult;
use crate::span::{line_text, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the
/// offending columns underlined by carets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a snippet for `span` by looking its line up in `source`
    ///
    /// The underline covers the span's characters, clamped to the end of
    /// the line when the span continues onto later lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use vexc_util::diagnostic::SourceSnippet;
    /// use vexc_util::Span;
    ///
    /// let source = "Define Player\nSet Score = $";
    /// let snippet = SourceSnippet::from_source(source, Span::new(26, 27, 2, 13)).unwrap();
    /// assert_eq!(snippet.line, "Set Score = $");
    /// assert_eq!((snippet.start_column, snippet.end_column), (13, 14));
    /// ```
    pub fn from_source(source: &str, span: Span) -> SpanResult<Self> {
        let line = line_text(source, span.line)?;
        let width = span
            .text(source)
            .map(|text| text.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0);
        let start_column = span.column.max(1) as usize;
        let line_width = line.chars().count() + 1;
        let end_column = (start_column + width).min(line_width.max(start_column));
        Ok(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns a formatted string showing the source line with carets (^)
    /// under the relevant range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use vexc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use vexc_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "Integer literal out of range")
///     .code(DiagnosticCode::E_LEXER_INTEGER_OVERFLOW)
///     .span(Span::new(0, 20, 1, 1))
///     .help("the largest integer literal is 9223372036854775807")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion to the diagnostic
    ///
    /// Helps provide actionable suggestions for fixing the issue.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach the source line the diagnostic points at
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
