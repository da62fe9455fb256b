//! vexc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the vexc front end:
//!
//! - [`span`] - source locations (byte range plus line/column)
//! - [`diagnostic`] - errors and warnings, the fluent builder, and the
//!   [`Handler`] that collects them
//! - [`error`] - error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use vexc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::Span;
