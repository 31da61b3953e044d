//! Command to convert a path to its namespaced form.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathContext};
use clap::Args;

/// Print the `\\?\`-prefixed form of a path (unchanged on POSIX).
#[derive(Args)]
pub struct ToNamespacedPathCommand {
    /// Path to convert
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl ToNamespacedPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        println!("{}", ctx.engine.to_namespaced_path_with(ctx.host(), &self.path));
        Ok(())
    }
}
