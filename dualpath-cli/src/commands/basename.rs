//! Command to print the last portion of a path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathContext};
use clap::Args;

/// Print the last portion of a path, optionally without a suffix.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Suffix to strip when it ends the last portion
    #[arg(value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffix: Option<String>,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        println!("{}", ctx.engine.basename(&self.path, self.suffix.as_deref()));
        Ok(())
    }
}
