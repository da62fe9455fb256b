//! Tokens command implementation.
//!
//! Dumps the token stream of each input file, either as the debug
//! rendering of every token or as JSON.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use vexc_lex::{Lexer, Token};

use crate::commands::common::{read_source, require_inputs, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Source files to tokenize.
    pub inputs: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Print the trailing `END_OF_FILE` token.
    pub show_eof: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// The token stream of one input file.
#[derive(Debug, Serialize)]
struct FileTokens {
    file: String,
    tokens: Vec<Token>,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    fn lex_file(&self, path: &Path) -> Result<FileTokens> {
        let source = read_source(path)?;
        let mut tokens = Lexer::new(&source).tokenize();
        if !self.args.show_eof {
            tokens.retain(|token| !token.is_eof());
        }
        if self.args.verbose {
            tracing::info!("{}: {} token(s)", path.display(), tokens.len());
        }
        Ok(FileTokens {
            file: path.display().to_string(),
            tokens,
        })
    }

    fn write_text(&self, out: &mut dyn Write, files: &[FileTokens]) -> Result<()> {
        let with_headers = files.len() > 1;
        for file in files {
            if with_headers {
                writeln!(out, "==> {} <==", file.file)?;
            }
            for token in &file.tokens {
                writeln!(out, "{}", token)?;
            }
        }
        Ok(())
    }

    fn write_json(&self, out: &mut dyn Write, files: &[FileTokens]) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, files)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    /// Number of tokens written.
    type Output = usize;

    fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<usize> {
        require_inputs(&self.args.inputs)?;

        let files = self
            .args
            .inputs
            .iter()
            .map(|path| self.lex_file(path))
            .collect::<Result<Vec<_>>>()?;

        match self.args.format {
            OutputFormat::Text => self.write_text(out, &files)?,
            OutputFormat::Json => self.write_json(out, &files)?,
        }

        Ok(files.iter().map(|file| file.tokens.len()).sum())
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command against stdout.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let command = TokensCommand::new(args);
    let stdout = std::io::stdout();
    let count = command.execute(&mut stdout.lock())?;
    tracing::debug!("{} wrote {} token(s)", TokensCommand::name(), count);
    Ok(())
}
