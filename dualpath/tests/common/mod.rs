//! Common test utilities for integration tests.

use std::env;

use dualpath::FixedHost;

/// A POSIX host rooted in a home directory.
#[allow(dead_code)]
pub fn posix_host() -> FixedHost {
    FixedHost::new("/home/user")
}

/// A Windows host on `C:` that also remembers a directory for `D:`.
#[allow(dead_code)]
pub fn windows_host() -> FixedHost {
    FixedHost::new("C:\\Users\\me")
        .with_windows(true)
        .with_drive_cwd("D:", "D:\\data")
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this must be `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard drops.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard drops.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}
