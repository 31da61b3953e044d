//! Utility functions for CLI operations.
//!
//! This module provides the pieces every path command shares: global
//! options, configuration loading, and the engine/host pair a command runs
//! against.

use crate::error::CliError;
use clap::ValueEnum;
use dualpath::{Config, ConfigBuilder, DialectKind, Host, LogLevel, Logger, PathDialect};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Dialect to use instead of the configured or host one.
    pub dialect: Option<DialectKind>,

    /// Working directory to report to `resolve`.
    pub cwd: Option<String>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Output format for structured results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key: value` line per field
    #[default]
    Plain,
    /// JSON object
    Json,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }
    if let Some(dialect) = global.dialect {
        builder = builder.with_dialect(dialect);
    }
    if let Some(ref cwd) = global.cwd {
        builder = builder.with_cwd(cwd.clone());
    }

    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    install_logger(global, &config);
    Ok(config)
}

/// Route `log` records to stderr at the effective log level.
///
/// Flags win over the configured `log_mode`, which already folds in
/// `DUALPATH_LOG_MODE`.
fn install_logger(global: &GlobalOptions, config: &Config) {
    let level = if global.verbose {
        LogLevel::Verbose
    } else if global.quiet {
        LogLevel::Quiet
    } else {
        config.log_mode.unwrap_or(LogLevel::Normal)
    };
    if let Err(e) = Logger::new(level).install() {
        log::debug!("keeping the installed logger: {e}");
    }
}

/// The engine and host a path command runs against.
pub struct PathContext {
    /// The selected engine.
    pub engine: &'static dyn PathDialect,
    /// Where `resolve` gets its working directories.
    pub host: Box<dyn Host>,
    /// The configuration the pair came from.
    pub config: Config,
}

impl PathContext {
    /// Load configuration and select the engine and host.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        Ok(Self::from_config(config))
    }

    /// Select the engine and host for `config`.
    pub fn from_config(config: Config) -> Self {
        log::debug!("using {} dialect", config.dialect_kind());
        Self {
            engine: config.engine(),
            host: config.host(),
            config,
        }
    }

    /// The host as a trait object reference.
    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_follows_config() {
        let config = Config {
            dialect: Some(DialectKind::Win32),
            cwd: Some("C:\\work".into()),
            ..Config::default()
        };
        let ctx = PathContext::from_config(config);
        assert_eq!(ctx.engine.kind(), DialectKind::Win32);
        assert_eq!(ctx.engine.resolve_with(ctx.host(), &["a"]), "C:\\work\\a");
    }

    #[test]
    fn test_logger_install_twice() {
        let global = GlobalOptions {
            quiet: true,
            ..GlobalOptions::default()
        };
        install_logger(&global, &Config::default());
        install_logger(&GlobalOptions::default(), &Config::default());
        assert!(Logger::default().install().is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }
}
