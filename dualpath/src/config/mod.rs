//! Configuration system for dualpath.
//!
//! Configuration pins down what the path engines would otherwise take from
//! the running process: the default dialect, the working directory used by
//! `resolve`, the per-drive working directories used for Windows
//! drive-relative paths, and the log mode.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config` and friends)
//! 2. Environment variables (`DUALPATH_*`)
//! 3. Explicit config file (`ConfigBuilder::with_file` or `DUALPATH_CONFIG`)
//! 4. User config (`~/.dualpath/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use dualpath::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let host = config.host();
//! println!("{}", config.engine().resolve_with(host.as_ref(), &["src"]));
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use dualpath::config::{Config, ConfigBuilder};
//! use dualpath::DialectKind;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         dialect: Some(DialectKind::Win32),
//!         cwd: Some("C:\\work".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let host = config.host();
//! assert_eq!(
//!     config.engine().resolve_with(host.as_ref(), &["src"]),
//!     "C:\\work\\src"
//! );
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
