//! Command to resolve paths into an absolute path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathContext};
use clap::Args;

/// Resolve a sequence of paths into an absolute path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve, right to left, until one is absolute
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let paths: Vec<&str> = self.paths.iter().map(String::as_str).collect();
        println!("{}", ctx.engine.resolve_with(ctx.host(), &paths));
        Ok(())
    }
}
