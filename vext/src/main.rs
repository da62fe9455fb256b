//! Vext CLI - a command-line front end for the Vex lexer.
//!
//! This is the main entry point for the vext application. It uses clap for
//! argument parsing and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{Result, VextError};

/// Vext - inspect how Vex source files are tokenized
///
/// Vext dumps the token stream of Vex source files and reports the lexical
/// errors found in them.
#[derive(Parser, Debug)]
#[command(name = "vext")]
#[command(author = "Vex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect how Vex source files are tokenized", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "VEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "VEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "VEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the vext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of source files
    ///
    /// Every token is printed with its kind, lexeme and position. Lexical
    /// errors show up as UNKNOWN tokens carrying the error message.
    Tokens(TokensCommand),

    /// Report lexical errors in source files
    ///
    /// Exits with a non-zero status when any error is found.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Fail on warnings as well as errors
    #[arg(long)]
    deny_warnings: bool,
}

/// Main entry point for the vext CLI.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // The log level can come from the config file, so load it first
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose, cli.no_color, &config.log_level)?;
    if let Some(path) = &config.path {
        tracing::debug!("Loaded configuration from {}", path.display());
    }

    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output on stdout.
fn init_logging(verbose: bool, no_color: bool, log_level: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(log_level)
            .map_err(|e| VextError::Config(format!("Invalid log level '{}': {}", log_level, e)))?
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| VextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        inputs: args.inputs,
        format: args.format.unwrap_or(config.output.format),
        show_eof: config.output.show_eof,
        verbose,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        inputs: args.inputs,
        deny_warnings: args.deny_warnings || config.check.deny_warnings,
        verbose,
    };
    run_check(check_args)
}
