//! Command to build a path from its components.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathContext};
use clap::Args;
use dualpath::PathComponents;

/// Assemble a path from components.
///
/// `--dir` wins over `--root`, and `--base` wins over `--name` and `--ext`.
#[derive(Args)]
pub struct FormatCommand {
    /// Directory part
    #[arg(long, value_name = "DIR", allow_hyphen_values = true)]
    pub dir: Option<String>,

    /// Root part, used when no directory is given
    #[arg(long, value_name = "ROOT", allow_hyphen_values = true)]
    pub root: Option<String>,

    /// File name with extension
    #[arg(long, value_name = "BASE", allow_hyphen_values = true)]
    pub base: Option<String>,

    /// File name without extension
    #[arg(long, value_name = "NAME", allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Extension, including its dot
    #[arg(long, value_name = "EXT", allow_hyphen_values = true)]
    pub ext: Option<String>,
}

impl FormatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let components = PathComponents {
            dir: self.dir,
            root: self.root,
            base: self.base,
            name: self.name,
            ext: self.ext,
        };
        println!("{}", ctx.engine.format(&components));
        Ok(())
    }
}
