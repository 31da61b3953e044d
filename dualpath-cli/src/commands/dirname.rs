//! Command to print the directory portion of a path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathContext};
use clap::Args;

/// Print a path without its last portion.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        println!("{}", ctx.engine.dirname(&self.path));
        Ok(())
    }
}
