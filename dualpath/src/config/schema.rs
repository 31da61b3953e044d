//! Configuration schema definitions.
//!
//! This module defines the structure of dualpath configuration files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dialect::{DialectKind, PathDialect};
use crate::host::{FixedHost, Host, ProcessHost};
use crate::logging::LogLevel;

/// Complete configuration, as read from `config.yaml`.
///
/// Every field is optional; unset fields fall back to the running process.
///
/// # Examples
///
/// ```
/// use dualpath::config::Config;
/// use dualpath::DialectKind;
///
/// let yaml = r#"
/// dialect: win32
/// cwd: 'C:\work'
/// drive_cwds:
///   'D:': 'D:\data'
/// "#;
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.dialect_kind(), DialectKind::Win32);
/// assert_eq!(config.drive_cwds.get("D:").map(String::as_str), Some("D:\\data"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dialect used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<DialectKind>,

    /// Working directory reported to `resolve` instead of the process cwd.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,

    /// Per-drive working directories for Windows drive-relative paths,
    /// keyed by device (`C:`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub drive_cwds: BTreeMap<String, String>,

    /// Logging verbosity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_mode: Option<LogLevel>,
}

impl Config {
    /// The configured dialect, or the host's.
    #[must_use]
    pub fn dialect_kind(&self) -> DialectKind {
        self.dialect.unwrap_or_else(DialectKind::host)
    }

    /// The engine for [`Config::dialect_kind`].
    #[must_use]
    pub fn engine(&self) -> &'static dyn PathDialect {
        self.dialect_kind().engine()
    }

    /// The host `resolve` should consult.
    ///
    /// A configured `cwd` or drive table pins the host down; otherwise the
    /// running process is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualpath::config::Config;
    ///
    /// let config = Config { cwd: Some("/srv".to_string()), ..Config::default() };
    /// assert_eq!(config.host().cwd(), "/srv");
    /// ```
    #[must_use]
    pub fn host(&self) -> Box<dyn Host> {
        if self.cwd.is_none() && self.drive_cwds.is_empty() {
            return Box::new(ProcessHost);
        }
        let cwd = self.cwd.clone().unwrap_or_else(|| ProcessHost.cwd());
        let host = self
            .drive_cwds
            .iter()
            .fold(FixedHost::new(cwd), |host, (device, dir)| {
                host.with_drive_cwd(device.as_str(), dir.as_str())
            })
            .with_windows(cfg!(windows));
        Box::new(host)
    }
}
