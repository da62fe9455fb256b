//! Command trait shared by the vext subcommands.

use std::io::Write;

use crate::error::Result;

/// Standard command trait that all vext commands implement.
///
/// Commands write their report to any [`Write`] so tests can capture it;
/// the binary passes a locked stdout.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
