//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `DUALPATH_*` environment variables that
//! override configuration file values.

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::dialect::DialectKind;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Selects the default dialect.
pub const DIALECT_ENV: &str = "DUALPATH_DIALECT";

/// Overrides the working directory reported to `resolve`.
pub const CWD_ENV: &str = "DUALPATH_CWD";

/// Per-drive working directories, as `C:=C:\dir;D:=D:\other`.
pub const DRIVE_CWDS_ENV: &str = "DUALPATH_DRIVE_CWDS";

/// Names an explicit configuration file.
pub const CONFIG_ENV: &str = "DUALPATH_CONFIG";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use dualpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an unrecognized dialect or log
    /// mode, an empty working directory, or a malformed drive table.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(DIALECT_ENV) {
            config.dialect = Some(value.parse::<DialectKind>()?);
        }

        if let Ok(cwd) = env::var(CWD_ENV) {
            ConfigValidator::validate_cwd(CWD_ENV, &cwd)?;
            config.cwd = Some(cwd);
        }

        if let Ok(value) = env::var(DRIVE_CWDS_ENV) {
            let overlay = Config {
                drive_cwds: Self::parse_drive_cwds(&value)?,
                ..Config::default()
            };
            ConfigMerger::merge_into(config, &overlay);
        }

        if let Ok(value) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(value.parse::<LogLevel>()?);
        }

        Ok(())
    }

    /// The configuration file named by `DUALPATH_CONFIG`, if set.
    #[must_use]
    pub fn config_file() -> Option<PathBuf> {
        env::var_os(CONFIG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Parse a `;`-separated list of `device=dir` entries.
    ///
    /// Empty entries are skipped, so a trailing `;` is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if an entry has no `=`, the device is not
    /// a drive, or the directory is empty.
    pub fn parse_drive_cwds(value: &str) -> Result<BTreeMap<String, String>> {
        let mut table = BTreeMap::new();
        for entry in value.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((device, dir)) = entry.split_once('=') else {
                return Err(Error::Validation {
                    field: DRIVE_CWDS_ENV.into(),
                    message: format!("Expected 'C:=dir', got '{entry}'"),
                });
            };
            let device = device.trim();
            ConfigValidator::validate_device(device)?;
            if dir.is_empty() {
                return Err(Error::Validation {
                    field: DRIVE_CWDS_ENV.into(),
                    message: format!("Missing directory for {device}"),
                });
            }
            table.insert(device.to_ascii_uppercase(), dir.to_string());
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 5] = [DIALECT_ENV, CWD_ENV, DRIVE_CWDS_ENV, LOG_MODE_ENV, CONFIG_ENV];

    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let saved: Vec<_> = ALL_VARS.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in ALL_VARS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let out = f();
        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        out
    }

    #[test]
    #[serial]
    fn test_no_variables_leaves_config_alone() {
        let config = with_env(&[], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            config
        });
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_all_variables_applied() {
        let config = with_env(
            &[
                (DIALECT_ENV, "windows"),
                (CWD_ENV, "C:\\work"),
                (DRIVE_CWDS_ENV, "d:=D:\\data"),
                (LOG_MODE_ENV, "verbose"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                config
            },
        );
        assert_eq!(config.dialect, Some(DialectKind::Win32));
        assert_eq!(config.cwd.as_deref(), Some("C:\\work"));
        assert_eq!(config.drive_cwds.get("D:").map(String::as_str), Some("D:\\data"));
        assert_eq!(config.log_mode, Some(LogLevel::Verbose));
    }

    #[test]
    #[serial]
    fn test_invalid_dialect() {
        let result = with_env(&[(DIALECT_ENV, "vms")], || {
            EnvironmentConfig::apply_overrides(&mut Config::default())
        });
        assert!(matches!(result, Err(Error::InvalidDialect { .. })));
    }

    #[test]
    #[serial]
    fn test_empty_cwd() {
        let result = with_env(&[(CWD_ENV, "")], || {
            EnvironmentConfig::apply_overrides(&mut Config::default())
        });
        assert!(matches!(result, Err(Error::Validation { ref field, .. }) if field == CWD_ENV));
    }

    #[test]
    #[serial]
    fn test_invalid_log_mode() {
        let result = with_env(&[(LOG_MODE_ENV, "loud")], || {
            EnvironmentConfig::apply_overrides(&mut Config::default())
        });
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_config_file_variable() {
        assert_eq!(with_env(&[], EnvironmentConfig::config_file), None);
        assert_eq!(with_env(&[(CONFIG_ENV, "")], EnvironmentConfig::config_file), None);
        assert_eq!(
            with_env(&[(CONFIG_ENV, "/etc/dualpath.yaml")], EnvironmentConfig::config_file),
            Some(PathBuf::from("/etc/dualpath.yaml"))
        );
    }

    #[test]
    fn test_parse_drive_cwds() {
        let table = EnvironmentConfig::parse_drive_cwds("c:=C:\\a; D:=D:\\b c;").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("C:").map(String::as_str), Some("C:\\a"));
        assert_eq!(table.get("D:").map(String::as_str), Some("D:\\b c"));
    }

    #[test]
    fn test_parse_drive_cwds_empty() {
        assert!(EnvironmentConfig::parse_drive_cwds("").unwrap().is_empty());
        assert!(EnvironmentConfig::parse_drive_cwds(" ; ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_drive_cwds_invalid() {
        assert!(EnvironmentConfig::parse_drive_cwds("C:").is_err());
        assert!(EnvironmentConfig::parse_drive_cwds("CC:=x").is_err());
        assert!(EnvironmentConfig::parse_drive_cwds("C:=").is_err());
    }
}
