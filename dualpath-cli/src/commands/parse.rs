//! Command to split a path into its components.

use crate::error::CliError;
use crate::utils::{GlobalOptions, OutputFormat, PathContext};
use clap::Args;
use dualpath::ParsedPath;
use std::io::{self, Write};

/// Split a path into root, dir, base, name and ext.
#[derive(Args)]
pub struct ParseCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let parsed = ctx.engine.parse(&self.path);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Plain => write_plain(&mut out, &parsed)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &parsed)
                    .map_err(|e| CliError::Io(e.into()))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

fn write_plain(out: &mut impl Write, parsed: &ParsedPath) -> io::Result<()> {
    writeln!(out, "root: {}", parsed.root)?;
    writeln!(out, "dir: {}", parsed.dir)?;
    writeln!(out, "base: {}", parsed.base)?;
    writeln!(out, "name: {}", parsed.name)?;
    writeln!(out, "ext: {}", parsed.ext)
}
