#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dualpath
//!
//! String-level path manipulation for two dialects: POSIX and Windows.
//!
//! Nothing here touches the filesystem. Paths are strings, and every
//! operation is a pure function of its arguments plus, for `resolve`, the
//! working directory supplied by a [`Host`].
//!
//! ## Core Types
//!
//! - [`PathDialect`] with the [`POSIX`] and [`WIN32`] engines
//! - [`DialectKind`]: picks an engine at runtime
//! - [`ParsedPath`] and [`PathComponents`]: `parse` output and `format` input
//! - [`Host`], [`ProcessHost`] and [`FixedHost`]: working directory sources
//! - [`Operation`] and [`invoke`]: name-based dispatch over JSON arguments
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! The free functions at the crate root use the dialect of the host the
//! crate was compiled for.
//!
//! ## Examples
//!
//! ```
//! use dualpath::{PathComponents, PathDialect, POSIX, WIN32};
//!
//! assert_eq!(POSIX.normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
//! assert_eq!(WIN32.normalize("C:/temp\\\\foo\\bar\\..\\"), "C:\\temp\\foo\\");
//!
//! let parsed = WIN32.parse("C:\\path\\dir\\file.txt");
//! assert_eq!(parsed.root, "C:\\");
//! assert_eq!(parsed.name, "file");
//!
//! let components = PathComponents {
//!     dir: Some("/home/user/dir".to_string()),
//!     base: Some("file.txt".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(POSIX.format(&components), "/home/user/dir/file.txt");
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod host;
pub mod logging;
pub mod operation;
pub mod validate;

pub use config::{Config, ConfigBuilder};
pub use dialect::{
    DialectKind, ParsedPath, PathComponents, PathDialect, Posix, Win32, POSIX, WIN32,
};
pub use error::{Error, Result};
pub use host::{FixedHost, Host, ProcessHost};
pub use logging::{init_logger, LogLevel, Logger};
pub use operation::{invoke, Operation};

fn native() -> &'static dyn PathDialect {
    DialectKind::host().engine()
}

/// Resolve `paths` into an absolute path using the host dialect.
#[must_use]
pub fn resolve(paths: &[&str]) -> String {
    native().resolve(paths)
}

/// Normalize `path` using the host dialect.
#[must_use]
pub fn normalize(path: &str) -> String {
    native().normalize(path)
}

/// Whether `path` is absolute in the host dialect.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    native().is_absolute(path)
}

/// Join and normalize `paths` using the host dialect.
#[must_use]
pub fn join(paths: &[&str]) -> String {
    native().join(paths)
}

/// The relative path from `from` to `to` in the host dialect.
#[must_use]
pub fn relative(from: &str, to: &str) -> String {
    native().relative(from, to)
}

/// The namespace-prefixed form of `path` (identity off Windows).
#[must_use]
pub fn to_namespaced_path(path: &str) -> String {
    native().to_namespaced_path(path)
}

/// The directory portion of `path` in the host dialect.
#[must_use]
pub fn dirname(path: &str) -> &str {
    native().dirname(path)
}

/// The last portion of `path`, minus `suffix` when it matches.
#[must_use]
pub fn basename<'a>(path: &'a str, suffix: Option<&str>) -> &'a str {
    native().basename(path, suffix)
}

/// The extension of `path`, from the last `.` of its last portion.
#[must_use]
pub fn extname(path: &str) -> &str {
    native().extname(path)
}

/// Split `path` into its components in the host dialect.
#[must_use]
pub fn parse(path: &str) -> ParsedPath {
    native().parse(path)
}

/// Assemble a path from `components` in the host dialect.
#[must_use]
pub fn format(components: &PathComponents) -> String {
    native().format(components)
}

/// The host dialect's separator.
#[must_use]
pub fn sep() -> char {
    native().sep()
}

/// The host dialect's `PATH` list delimiter.
#[must_use]
pub fn delimiter() -> char {
    native().delimiter()
}
