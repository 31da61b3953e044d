//! Command to show the effective dialect, host and configuration.

use crate::error::CliError;
use crate::utils::{GlobalOptions, OutputFormat, PathContext};
use clap::Args;
use dualpath::config::ConfigLoader;
use dualpath::DialectKind;
use serde::Serialize;

/// Show the dialect, separators and working directory in effect.
#[derive(Args)]
pub struct InfoCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct InfoReport {
    dialect: DialectKind,
    host_dialect: DialectKind,
    sep: String,
    delimiter: String,
    cwd: String,
    drive_cwds: Vec<(String, String)>,
    user_config: Option<String>,
}

impl InfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let report = InfoReport {
            dialect: ctx.engine.kind(),
            host_dialect: DialectKind::host(),
            sep: ctx.engine.sep().to_string(),
            delimiter: ctx.engine.delimiter().to_string(),
            cwd: ctx.host().cwd(),
            drive_cwds: ctx.config.drive_cwds.clone().into_iter().collect(),
            user_config: ConfigLoader::user_config_path()
                .filter(|path| path.exists())
                .map(|path| path.display().to_string()),
        };

        match self.format {
            OutputFormat::Plain => {
                println!("dialect: {}", report.dialect);
                println!("host dialect: {}", report.host_dialect);
                println!("sep: {}", report.sep);
                println!("delimiter: {}", report.delimiter);
                println!("cwd: {}", report.cwd);
                for (device, dir) in &report.drive_cwds {
                    println!("cwd {device} {dir}");
                }
                if let Some(ref path) = report.user_config {
                    println!("user config: {path}");
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
