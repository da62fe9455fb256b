//! Error handling module for the vext CLI.
//!
//! Lexical problems in the input are not errors here; they are reported as
//! diagnostics and only turn into [`VextError::Lex`] once a command decides
//! the run has failed.

use thiserror::Error;

/// Main error type for the vext CLI application.
#[derive(Error, Debug)]
pub enum VextError {
    /// Error when the configuration is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a configuration file is not valid TOML.
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The checked sources produced lexical errors.
    #[error("Lexing failed with {count} error(s)")]
    Lex {
        /// Number of diagnostics that failed the run.
        count: usize,
    },
}

/// Result type alias using VextError.
pub type Result<T> = std::result::Result<T, VextError>;
