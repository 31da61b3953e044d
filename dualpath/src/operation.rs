//! Dynamic dispatch of path operations over JSON arguments.
//!
//! [`invoke`] is the untyped entry point: it checks argument counts and
//! types, calls the engine and wraps the result back into a JSON value.
//! The CLI `call` command and embedders speaking JSON go through here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::dialect::{PathComponents, PathDialect};
use crate::error::{Error, Result};
use crate::host::Host;
use crate::validate;

/// A path operation that can be invoked by name.
///
/// Names parse in camelCase (`isAbsolute`), kebab-case (`is-absolute`) or
/// snake_case (`is_absolute`), ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use dualpath::Operation;
///
/// let op: Operation = "to-namespaced-path".parse().unwrap();
/// assert_eq!(op, Operation::ToNamespacedPath);
/// assert_eq!(op.to_string(), "toNamespacedPath");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// `resolve(...paths)`
    Resolve,
    /// `normalize(path)`
    Normalize,
    /// `isAbsolute(path)`
    IsAbsolute,
    /// `join(...paths)`
    Join,
    /// `relative(from, to)`
    Relative,
    /// `toNamespacedPath(path)`
    ToNamespacedPath,
    /// `dirname(path)`
    Dirname,
    /// `basename(path, suffix?)`
    Basename,
    /// `extname(path)`
    Extname,
    /// `format(pathObject)`
    Format,
    /// `parse(path)`
    Parse,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Resolve,
        Self::Normalize,
        Self::IsAbsolute,
        Self::Join,
        Self::Relative,
        Self::ToNamespacedPath,
        Self::Dirname,
        Self::Basename,
        Self::Extname,
        Self::Format,
        Self::Parse,
    ];

    /// The camelCase name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Resolve => "resolve",
            Self::Normalize => "normalize",
            Self::IsAbsolute => "isAbsolute",
            Self::Join => "join",
            Self::Relative => "relative",
            Self::ToNamespacedPath => "toNamespacedPath",
            Self::Dirname => "dirname",
            Self::Basename => "basename",
            Self::Extname => "extname",
            Self::Format => "format",
            Self::Parse => "parse",
        }
    }

    /// Accepted argument counts as `(min, max)`; `None` means unbounded.
    const fn arity(self) -> (usize, Option<usize>) {
        match self {
            Self::Resolve | Self::Join => (0, None),
            Self::Relative => (2, Some(2)),
            Self::Basename => (1, Some(2)),
            _ => (1, Some(1)),
        }
    }

    fn check_arity(self, found: usize) -> Result<()> {
        let (min, max) = self.arity();
        if found >= min && max.map_or(true, |max| found <= max) {
            return Ok(());
        }
        let expected = match (min, max) {
            (1, Some(2)) => "1 or 2",
            (2, _) => "2",
            _ => "1",
        };
        Err(Error::ArgumentCount {
            operation: self,
            expected,
            found,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| Error::UnknownOperation {
                name: s.to_string(),
            })
    }
}

/// Run `operation` on `dialect` with untyped `args`.
///
/// `toNamespacedPath` returns a non-string argument unchanged. A `null`
/// suffix for `basename` counts as no suffix.
///
/// # Errors
///
/// Returns [`Error::ArgumentCount`] for the wrong number of arguments,
/// [`Error::InvalidArgumentType`] when a path, `from`, `to` or `suffix` is
/// not a string, and [`Error::InvalidArgumentShape`] when the `format`
/// argument is not an object. [`Error::Serialization`] is returned if a
/// `parse` result cannot be converted to JSON.
///
/// # Examples
///
/// ```
/// use dualpath::{invoke, Operation, ProcessHost, POSIX};
/// use serde_json::json;
///
/// let out = invoke(&POSIX, &ProcessHost, Operation::Join, &[json!("/a"), json!("b")]).unwrap();
/// assert_eq!(out, json!("/a/b"));
///
/// let err = invoke(&POSIX, &ProcessHost, Operation::Join, &[json!("/a"), json!(1)]).unwrap_err();
/// assert!(err.is_invalid_argument());
/// ```
pub fn invoke(
    dialect: &dyn PathDialect,
    host: &dyn Host,
    operation: Operation,
    args: &[Value],
) -> Result<Value> {
    operation.check_arity(args.len())?;
    log::debug!("{} {operation} with {} argument(s)", dialect.kind(), args.len());

    let value = match operation {
        Operation::Resolve => {
            let paths = validate::strings(args, "paths")?;
            json!(dialect.resolve_with(host, &paths))
        }
        Operation::Join => {
            let paths = validate::strings(args, "paths")?;
            json!(dialect.join(&paths))
        }
        Operation::Normalize => json!(dialect.normalize(validate::string(&args[0], "path")?)),
        Operation::IsAbsolute => json!(dialect.is_absolute(validate::string(&args[0], "path")?)),
        Operation::Relative => {
            let from = validate::string(&args[0], "from")?;
            let to = validate::string(&args[1], "to")?;
            json!(dialect.relative_with(host, from, to))
        }
        Operation::ToNamespacedPath => match args[0].as_str() {
            Some(path) => json!(dialect.to_namespaced_path_with(host, path)),
            None => args[0].clone(),
        },
        Operation::Dirname => json!(dialect.dirname(validate::string(&args[0], "path")?)),
        Operation::Basename => {
            let suffix = match args.get(1) {
                None | Some(Value::Null) => None,
                Some(value) => Some(validate::string(value, "suffix")?),
            };
            let path = validate::string(&args[0], "path")?;
            json!(dialect.basename(path, suffix))
        }
        Operation::Extname => json!(dialect.extname(validate::string(&args[0], "path")?)),
        Operation::Format => {
            let components = PathComponents::from_value(&args[0])?;
            json!(dialect.format(&components))
        }
        Operation::Parse => {
            let parsed = dialect.parse(validate::string(&args[0], "path")?);
            serde_json::to_value(parsed)?
        }
    };
    Ok(value)
}
