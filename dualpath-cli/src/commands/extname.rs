//! Command to print the extension of a path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathContext};
use clap::Args;

/// Print the extension of the last portion of a path.
#[derive(Args)]
pub struct ExtnameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl ExtnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        println!("{}", ctx.engine.extname(&self.path));
        Ok(())
    }
}
