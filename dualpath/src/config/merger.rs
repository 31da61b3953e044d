//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use dualpath::config::{Config, ConfigMerger};
///
/// let low = Config { cwd: Some("/low".to_string()), ..Default::default() };
/// let high = Config { cwd: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.cwd, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|s| s.precedence);
        let mut result = Config::default();
        for source in &sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`, `source` winning.
    ///
    /// Scalar fields are replaced when set in `source`. Drive tables are
    /// combined, with `source` winning per device.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.dialect.is_some() {
            target.dialect = source.dialect;
        }
        if source.cwd.is_some() {
            target.cwd.clone_from(&source.cwd);
        }
        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }
        for (device, dir) in &source.drive_cwds {
            target.drive_cwds.retain(|existing, _| !existing.eq_ignore_ascii_case(device));
            target.drive_cwds.insert(device.clone(), dir.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DialectKind;
    use crate::logging::LogLevel;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_unset_fields_do_not_clobber() {
        let mut target = Config {
            dialect: Some(DialectKind::Posix),
            log_mode: Some(LogLevel::Quiet),
            ..Config::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.dialect, Some(DialectKind::Posix));
        assert_eq!(target.log_mode, Some(LogLevel::Quiet));
    }

    #[test]
    fn test_drive_tables_accumulate() {
        let mut target = Config::default();
        target.drive_cwds.insert("C:".into(), "C:\\a".into());
        target.drive_cwds.insert("D:".into(), "D:\\a".into());
        let mut overlay = Config::default();
        overlay.drive_cwds.insert("d:".into(), "D:\\b".into());

        ConfigMerger::merge_into(&mut target, &overlay);
        assert_eq!(target.drive_cwds.len(), 2);
        assert_eq!(target.drive_cwds.get("C:").map(String::as_str), Some("C:\\a"));
        assert_eq!(target.drive_cwds.get("d:").map(String::as_str), Some("D:\\b"));
        assert!(!target.drive_cwds.contains_key("D:"));
    }

    #[test]
    fn test_merge_orders_by_precedence() {
        let high = source(
            2,
            Config {
                dialect: Some(DialectKind::Win32),
                ..Config::default()
            },
        );
        let low = source(
            1,
            Config {
                dialect: Some(DialectKind::Posix),
                cwd: Some("/from/user".into()),
                ..Config::default()
            },
        );
        let merged = ConfigMerger::merge(vec![high, low]);
        assert_eq!(merged.dialect, Some(DialectKind::Win32));
        assert_eq!(merged.cwd.as_deref(), Some("/from/user"));
    }
}
