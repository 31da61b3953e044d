//! Path dialects and the operation set they share.
//!
//! Two engines implement [`PathDialect`]:
//!
//! - [`Posix`]: `/` is the only separator and there are no devices.
//! - [`Win32`]: `\` is the separator, `/` is accepted on input, and paths may
//!   carry a drive (`C:`) or UNC (`\\server\share`) root.
//!
//! Both are stateless singletons ([`POSIX`], [`WIN32`]) and each can hand out
//! the other through [`PathDialect::posix`] and [`PathDialect::win32`].
//! [`DialectKind`] is the value used to pick one at runtime.
//!
//! # Examples
//!
//! ```
//! use dualpath::{DialectKind, PathDialect, POSIX, WIN32};
//!
//! assert_eq!(POSIX.join(&["/foo", "bar", "baz/asdf", "quux", ".."]), "/foo/bar/baz/asdf");
//! assert_eq!(WIN32.basename("C:\\foo\\bar.html", Some(".html")), "bar");
//!
//! let engine = DialectKind::Win32.engine();
//! assert_eq!(engine.sep(), '\\');
//! assert_eq!(engine.posix().sep(), '/');
//! ```

pub mod chars;
pub mod format;
pub mod normalize;
mod posix;
mod scan;
mod types;
mod win32;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::host::{Host, ProcessHost};

pub use posix::Posix;
pub use types::{ParsedPath, PathComponents};
pub use win32::Win32;

/// The POSIX engine.
pub static POSIX: Posix = Posix;

/// The Windows engine.
pub static WIN32: Win32 = Win32;

/// The operations every path dialect provides.
///
/// Operations taking a `host` consult it for the working directory; the
/// variants without one use [`ProcessHost`].
pub trait PathDialect: fmt::Debug + Send + Sync {
    /// Which dialect this engine implements.
    fn kind(&self) -> DialectKind;

    /// The path segment separator.
    fn sep(&self) -> char;

    /// The separator used between entries of a path list such as `PATH`.
    fn delimiter(&self) -> char;

    /// Resolve `paths` right to left into an absolute path, using `host` for
    /// the working directory once the arguments run out.
    fn resolve_with(&self, host: &dyn Host, paths: &[&str]) -> String;

    /// Resolve `paths` against the process working directory.
    fn resolve(&self, paths: &[&str]) -> String {
        self.resolve_with(&ProcessHost, paths)
    }

    /// Collapse redundant separators and `.`/`..` segments.
    fn normalize(&self, path: &str) -> String;

    /// Whether `path` is absolute in this dialect.
    fn is_absolute(&self, path: &str) -> bool;

    /// Join the non-empty `paths` with the separator and normalize.
    fn join(&self, paths: &[&str]) -> String;

    /// The relative path from `from` to `to`, resolving both through `host`.
    fn relative_with(&self, host: &dyn Host, from: &str, to: &str) -> String;

    /// The relative path from `from` to `to` against the process working
    /// directory.
    fn relative(&self, from: &str, to: &str) -> String {
        self.relative_with(&ProcessHost, from, to)
    }

    /// The namespaced (`\\?\`) form of `path`, resolving through `host`.
    fn to_namespaced_path_with(&self, host: &dyn Host, path: &str) -> String;

    /// The namespaced (`\\?\`) form of `path`.
    fn to_namespaced_path(&self, path: &str) -> String {
        self.to_namespaced_path_with(&ProcessHost, path)
    }

    /// Everything up to the last segment.
    fn dirname<'a>(&self, path: &'a str) -> &'a str;

    /// The last segment, with `suffix` removed when it matches.
    fn basename<'a>(&self, path: &'a str, suffix: Option<&str>) -> &'a str;

    /// The extension of the last segment, from its last dot.
    fn extname<'a>(&self, path: &'a str) -> &'a str;

    /// Split `path` into root, dir, base, name and ext.
    fn parse(&self, path: &str) -> ParsedPath;

    /// Build a path from `components`.
    fn format(&self, components: &PathComponents) -> String;

    /// The POSIX engine.
    fn posix(&self) -> &'static Posix {
        &POSIX
    }

    /// The Windows engine.
    fn win32(&self) -> &'static Win32 {
        &WIN32
    }
}

/// Selects one of the two dialects.
///
/// # Examples
///
/// ```
/// use dualpath::DialectKind;
///
/// let kind: DialectKind = "win32".parse().unwrap();
/// assert_eq!(kind, DialectKind::Win32);
/// assert_eq!(kind.to_string(), "win32");
/// assert_eq!(kind.engine().delimiter(), ';');
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// `/`-separated paths.
    #[value(alias = "unix")]
    #[serde(alias = "unix")]
    Posix,
    /// `\`-separated paths with drive letters and UNC roots.
    #[value(alias = "windows")]
    #[serde(alias = "windows")]
    Win32,
}

impl DialectKind {
    /// The dialect of the host this library was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Win32
        } else {
            Self::Posix
        }
    }

    /// The engine implementing this dialect.
    #[must_use]
    pub fn engine(self) -> &'static dyn PathDialect {
        match self {
            Self::Posix => &POSIX,
            Self::Win32 => &WIN32,
        }
    }
}

impl Default for DialectKind {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Win32 => write!(f, "win32"),
        }
    }
}

impl FromStr for DialectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "win32" | "windows" => Ok(Self::Win32),
            _ => Err(Error::InvalidDialect {
                value: s.to_string(),
            }),
        }
    }
}
