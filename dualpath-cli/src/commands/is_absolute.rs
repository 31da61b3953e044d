//! Command to test whether a path is absolute.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathContext};
use clap::Args;

/// Report whether a path is absolute.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to test
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Print nothing and exit with status 1 if the path is relative
    #[arg(long)]
    pub check: bool,
}

impl IsAbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let absolute = ctx.engine.is_absolute(&self.path);

        if !self.check {
            println!("{absolute}");
            return Ok(());
        }
        if absolute {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Check failed: '{}' is not absolute",
                self.path
            )))
        }
    }
}
