//! Host capabilities consulted by `resolve`.
//!
//! Path operations are pure string transformations except for two implicit
//! inputs: the current working directory and, on Windows, the per-drive
//! working directory. Both are reached through the [`Host`] trait so callers
//! and tests can pin them down.

use std::collections::BTreeMap;
use std::env;

/// Source of the working directory and related host facts.
///
/// # Examples
///
/// ```
/// use dualpath::host::{FixedHost, Host};
///
/// let host = FixedHost::new("/work");
/// assert_eq!(host.cwd(), "/work");
/// assert_eq!(host.drive_cwd("C:"), None);
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// The current working directory.
    fn cwd(&self) -> String;

    /// The working directory remembered for a Windows device such as `C:`.
    ///
    /// Windows keeps these in hidden `=C:`-style environment variables.
    /// Hosts without that convention return `None`.
    fn drive_cwd(&self, _device: &str) -> Option<String> {
        None
    }

    /// Whether the host uses Windows path conventions for its own cwd.
    fn is_windows(&self) -> bool {
        cfg!(windows)
    }
}

/// The running process as a [`Host`].
///
/// Falls back to `/` when the working directory cannot be read, which is
/// what a host without a filesystem reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessHost;

impl Host for ProcessHost {
    fn cwd(&self) -> String {
        match env::current_dir() {
            Ok(dir) => dir.to_string_lossy().into_owned(),
            Err(e) => {
                log::debug!("current directory unavailable ({e}), using /");
                "/".to_string()
            }
        }
    }

    fn drive_cwd(&self, device: &str) -> Option<String> {
        if !cfg!(windows) {
            return None;
        }
        env::var(format!("={device}")).ok()
    }
}

/// A [`Host`] with a fixed working directory and drive table.
///
/// # Examples
///
/// ```
/// use dualpath::host::{FixedHost, Host};
///
/// let host = FixedHost::new("C:\\Users\\me")
///     .with_windows(true)
///     .with_drive_cwd("D:", "D:\\projects");
/// assert_eq!(host.drive_cwd("d:"), Some("D:\\projects".to_string()));
/// assert!(host.is_windows());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedHost {
    cwd: String,
    drive_cwds: BTreeMap<String, String>,
    windows: bool,
}

impl FixedHost {
    /// Create a host reporting `cwd` as its working directory.
    #[must_use]
    pub fn new(cwd: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            drive_cwds: BTreeMap::new(),
            windows: false,
        }
    }

    /// Remember `cwd` as the working directory for `device`.
    ///
    /// Device lookups are ASCII case-insensitive.
    #[must_use]
    pub fn with_drive_cwd(mut self, device: impl Into<String>, cwd: impl Into<String>) -> Self {
        self.drive_cwds
            .insert(device.into().to_ascii_uppercase(), cwd.into());
        self
    }

    /// Mark the host as Windows-like.
    #[must_use]
    pub fn with_windows(mut self, windows: bool) -> Self {
        self.windows = windows;
        self
    }
}

impl Host for FixedHost {
    fn cwd(&self) -> String {
        self.cwd.clone()
    }

    fn drive_cwd(&self, device: &str) -> Option<String> {
        self.drive_cwds.get(&device.to_ascii_uppercase()).cloned()
    }

    fn is_windows(&self) -> bool {
        self.windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_host_cwd_matches_env() {
        let expected = env::current_dir().unwrap();
        assert_eq!(ProcessHost.cwd(), expected.to_string_lossy());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_process_host_has_no_drive_cwd_off_windows() {
        assert_eq!(ProcessHost.drive_cwd("C:"), None);
        assert!(!ProcessHost.is_windows());
    }

    #[test]
    fn test_fixed_host_defaults() {
        let host = FixedHost::new("/tmp");
        assert_eq!(host.cwd(), "/tmp");
        assert!(!host.is_windows());
        assert_eq!(host.drive_cwd("C:"), None);
    }

    #[test]
    fn test_fixed_host_drive_lookup_ignores_case() {
        let host = FixedHost::new("C:\\").with_drive_cwd("e:", "E:\\data");
        assert_eq!(host.drive_cwd("E:"), Some("E:\\data".to_string()));
        assert_eq!(host.drive_cwd("e:"), Some("E:\\data".to_string()));
        assert_eq!(host.drive_cwd("F:"), None);
    }
}
