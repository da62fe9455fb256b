//! Common types and utilities for vext commands.

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{Result, VextError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One debug-rendered token per line
    #[default]
    Text,
    /// A JSON array with one entry per input file
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";
}

/// Make sure at least one input was given.
pub fn require_inputs<P: AsRef<Path>>(inputs: &[P]) -> Result<()> {
    if inputs.is_empty() {
        return Err(VextError::Validation(error_messages::NO_INPUT_FILES.to_string()));
    }
    Ok(())
}

/// Read a source file after checking that it exists and is a file.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(VextError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(VextError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let source = std::fs::read_to_string(path)?;
    tracing::debug!("Read {} byte(s) from {}", source.len(), path.display());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_from_cli_value() {
        assert_eq!(
            OutputFormat::from_str("json", true).unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn test_require_inputs() {
        assert!(require_inputs(&[PathBuf::from("a.vex")]).is_ok());
        let err = require_inputs::<PathBuf>(&[]).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: No input files specified");
    }

    #[test]
    fn test_read_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.vex");
        std::fs::write(&path, "Define Player").unwrap();
        assert_eq!(read_source(&path).unwrap(), "Define Player");
    }

    #[test]
    fn test_read_source_missing() {
        let dir = TempDir::new().unwrap();
        let err = read_source(&dir.path().join("missing.vex")).unwrap_err();
        assert!(err.to_string().contains(error_messages::INPUT_PATH_NOT_EXIST));
    }

    #[test]
    fn test_read_source_directory() {
        let dir = TempDir::new().unwrap();
        let err = read_source(dir.path()).unwrap_err();
        assert!(err.to_string().contains(error_messages::INPUT_PATH_NOT_FILE));
    }
}
