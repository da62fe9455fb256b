//! Check command implementation.
//!
//! Lexes each input file and reports its diagnostics in the
//! `file:line:column: level[CODE]: message` form, followed by the source
//! line the lexer attached to it.

use std::io::Write;
use std::path::{Path, PathBuf};

use vexc_lex::Lexer;
use vexc_util::{Diagnostic, Level};

use crate::commands::common::{read_source, require_inputs};
use crate::commands::traits::Command;
use crate::error::{Result, VextError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to check.
    pub inputs: Vec<PathBuf>,
    /// Treat warnings as failures.
    pub deny_warnings: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Totals over every checked file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files checked.
    pub files: usize,
    /// Error diagnostics reported.
    pub errors: usize,
    /// Warning diagnostics reported.
    pub warnings: usize,
}

impl CheckSummary {
    /// Number of diagnostics that fail the run.
    pub fn failures(&self, deny_warnings: bool) -> usize {
        if deny_warnings {
            self.errors + self.warnings
        } else {
            self.errors
        }
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    fn check_file(&self, path: &Path, out: &mut dyn Write, summary: &mut CheckSummary) -> Result<()> {
        let source = read_source(path)?;
        let mut lexer = Lexer::new(&source);
        lexer.tokenize();

        for diagnostic in lexer.into_diagnostics() {
            match diagnostic.level {
                Level::Error => summary.errors += 1,
                Level::Warning => summary.warnings += 1,
            }
            write_diagnostic(out, path, &diagnostic)?;
        }
        summary.files += 1;

        if self.args.verbose {
            tracing::info!("Checked {}", path.display());
        }
        Ok(())
    }
}

/// Render one diagnostic with its location, source lines and help.
fn write_diagnostic(out: &mut dyn Write, path: &Path, diagnostic: &Diagnostic) -> Result<()> {
    let span = diagnostic.span;
    writeln!(
        out,
        "{}:{}:{}: {}",
        path.display(),
        span.line,
        span.column,
        diagnostic
    )?;

    for snippet in &diagnostic.snippets {
        writeln!(out, "{}", snippet.format())?;
    }
    for help in &diagnostic.helps {
        writeln!(out, "    = help: {}", help)?;
    }
    Ok(())
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckSummary;

    fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<CheckSummary> {
        require_inputs(&self.args.inputs)?;

        let mut summary = CheckSummary::default();
        for path in &self.args.inputs {
            self.check_file(path, out, &mut summary)?;
        }
        Ok(summary)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command against stdout.
///
/// Fails with [`VextError::Lex`] when any error was reported, or any
/// warning when `deny_warnings` is set.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let deny_warnings = args.deny_warnings;
    let command = CheckCommand::new(args);
    let stdout = std::io::stdout();
    let summary = command.execute(&mut stdout.lock())?;

    tracing::info!(
        "{}: {} file(s), {} error(s), {} warning(s)",
        CheckCommand::name(),
        summary.files,
        summary.errors,
        summary.warnings
    );

    match summary.failures(deny_warnings) {
        0 => Ok(()),
        count => Err(VextError::Lex { count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn check(source: &str) -> (CheckSummary, String) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.vex");
        std::fs::write(&path, source).unwrap();

        let mut out = Vec::new();
        let summary = CheckCommand::new(CheckArgs {
            inputs: vec![path.clone()],
            ..Default::default()
        })
        .execute(&mut out)
        .unwrap();
        let out = String::from_utf8(out).unwrap();
        (summary, out.replace(&path.display().to_string(), "main.vex"))
    }

    #[test]
    fn test_clean_source() {
        let (summary, out) = check("Define Player { Health -> Int_32; }");
        assert_eq!(
            summary,
            CheckSummary {
                files: 1,
                errors: 0,
                warnings: 0
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_unexpected_character() {
        let (summary, out) = check("Set Score = $;");
        assert_eq!(summary.errors, 1);
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("main.vex:1:13: error[E1001]: Unexpected character")
        );
        assert_eq!(lines.next(), Some("  1 | Set Score = $;"));
        assert_eq!(lines.next(), Some("    |             ^"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_help_follows_source_line() {
        let (_, out) = check("Set Name = \"open");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "main.vex:1:12: error[E1002]: Unterminated String",
                "  1 | Set Name = \"open",
                "    |            ^^^^^",
                "    = help: add a closing `\"`",
            ]
        );
    }

    #[test]
    fn test_diagnostics_follow_source_order() {
        let (summary, out) = check("$\n\"open");
        assert_eq!(summary.errors, 2);
        let locations: Vec<_> = out
            .lines()
            .filter(|line| line.starts_with("main.vex:"))
            .collect();
        assert_eq!(
            locations,
            vec![
                "main.vex:1:1: error[E1001]: Unexpected character",
                "main.vex:2:1: error[E1002]: Unterminated String",
            ]
        );
    }

    #[test]
    fn test_unterminated_comment_is_a_warning() {
        let (summary, out) = check("Define /* never closed");
        assert_eq!(summary.errors, 0);
        assert_eq!(summary.warnings, 1);
        assert!(out.starts_with("main.vex:1:8: warning[W1001]: "));
        assert_eq!(summary.failures(false), 0);
        assert_eq!(summary.failures(true), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = CheckCommand::new(CheckArgs {
            inputs: vec![dir.path().join("missing.vex")],
            ..Default::default()
        })
        .execute(&mut Vec::new())
        .unwrap_err();
        assert!(matches!(err, VextError::Validation(_)));
    }
}
