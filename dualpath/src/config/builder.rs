//! Layered configuration assembly.

use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::dialect::DialectKind;
use crate::error::Result;
use crate::logging::LogLevel;

/// Builds a [`Config`] from files, the environment, and explicit overrides.
///
/// # Examples
///
/// ```
/// use dualpath::config::ConfigBuilder;
/// use dualpath::DialectKind;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_dialect(DialectKind::Posix)
///     .with_cwd("/srv/app")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.dialect_kind(), DialectKind::Posix);
/// assert_eq!(config.cwd.as_deref(), Some("/srv/app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    user_config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Config,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` as the explicit configuration file.
    ///
    /// Takes the place of `DUALPATH_CONFIG`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Look for the user configuration in `dir` instead of `~/.dualpath`.
    #[must_use]
    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    /// Ignore configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `DUALPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        ConfigMerger::merge_into(&mut self.overrides, &config);
        self
    }

    /// Override the dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: DialectKind) -> Self {
        self.overrides.dialect = Some(dialect);
        self
    }

    /// Override the working directory.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.overrides.cwd = Some(cwd.into());
        self
    }

    /// Override the log mode.
    #[must_use]
    pub fn with_log_mode(mut self, level: LogLevel) -> Self {
        self.overrides.log_mode = Some(level);
        self
    }

    /// Assemble and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = ConfigMerger::merge(self.load_sources()?);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        ConfigMerger::merge_into(&mut config, &self.overrides);
        ConfigValidator::validate(&config)?;
        log::debug!(
            "configuration: dialect={}, cwd={}",
            config.dialect_kind(),
            config.cwd.as_deref().unwrap_or("<process>")
        );
        Ok(config)
    }

    fn load_sources(&self) -> Result<Vec<ConfigSource>> {
        if self.skip_files {
            return Ok(Vec::new());
        }

        let mut sources = Vec::new();
        if let Some(user) = ConfigLoader::load_user_config(self.user_config_dir.as_deref())? {
            sources.push(user);
        }

        let explicit = self.file.clone().or_else(|| {
            if self.skip_env {
                None
            } else {
                EnvironmentConfig::config_file()
            }
        });
        if let Some(path) = explicit {
            sources.push(ConfigLoader::load_explicit(&path)?);
        }

        for source in &sources {
            ConfigValidator::validate(&source.config)?;
        }
        Ok(sources)
    }
}
