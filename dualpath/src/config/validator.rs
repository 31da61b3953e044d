//! Configuration validation.

use crate::config::schema::Config;
use crate::dialect::chars::has_drive_prefix;
use crate::dialect::{DialectKind, PathDialect, WIN32};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use dualpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { cwd: Some(String::new()), ..Config::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty or relative `cwd`, a drive
    /// key that is not a letter followed by `:`, or an empty drive directory.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref cwd) = config.cwd {
            Self::validate_cwd("cwd", cwd)?;
            Self::validate_absolute_cwd("cwd", cwd, config.dialect_kind())?;
        }
        for (device, dir) in &config.drive_cwds {
            Self::validate_device(device)?;
            if dir.is_empty() {
                return Err(Error::Validation {
                    field: format!("drive_cwds.{device}"),
                    message: "Directory must not be empty".into(),
                });
            }
        }
        Ok(())
    }

    /// Validate a working directory value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming `field` if `cwd` is empty.
    pub fn validate_cwd(field: &str, cwd: &str) -> Result<()> {
        if cwd.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Working directory must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Require `cwd` to be absolute under `dialect`.
    ///
    /// On a Windows host a POSIX cwd may also be a Windows path, since it is
    /// converted to forward slashes before use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming `field` if `cwd` is relative.
    pub fn validate_absolute_cwd(field: &str, cwd: &str, dialect: DialectKind) -> Result<()> {
        let absolute = dialect.engine().is_absolute(cwd)
            || (dialect == DialectKind::Posix && cfg!(windows) && WIN32.is_absolute(cwd));
        if absolute {
            return Ok(());
        }
        Err(Error::Validation {
            field: field.into(),
            message: format!("Working directory must be an absolute {dialect} path, got '{cwd}'"),
        })
    }

    /// Validate a drive key such as `C:`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `device` is not exactly a drive
    /// letter and a colon.
    pub fn validate_device(device: &str) -> Result<()> {
        if device.len() == 2 && has_drive_prefix(device.as_bytes()) {
            return Ok(());
        }
        Err(Error::Validation {
            field: format!("drive_cwds.{device}"),
            message: "Drive must be a letter followed by ':' (e.g. 'C:')".into(),
        })
    }
}
