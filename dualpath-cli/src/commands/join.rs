//! Command to join path segments.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathContext};
use clap::Args;

/// Join path segments with the dialect separator and normalize the result.
#[derive(Args)]
pub struct JoinCommand {
    /// Segments to join
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let paths: Vec<&str> = self.paths.iter().map(String::as_str).collect();
        println!("{}", ctx.engine.join(&paths));
        Ok(())
    }
}
