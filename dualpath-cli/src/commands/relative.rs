//! Command to compute the relative path between two locations.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathContext};
use clap::Args;

/// Print the relative path from one location to another.
#[derive(Args)]
pub struct RelativeCommand {
    /// Starting location
    #[arg(value_name = "FROM", allow_hyphen_values = true)]
    pub from: String,

    /// Target location
    #[arg(value_name = "TO", allow_hyphen_values = true)]
    pub to: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        println!("{}", ctx.engine.relative_with(ctx.host(), &self.from, &self.to));
        Ok(())
    }
}
