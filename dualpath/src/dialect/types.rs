//! Value types produced by `parse` and consumed by `format`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::validate;

/// The five components of a parsed path.
///
/// `base` is always `name` followed by `ext`, and `dir` is either exactly the
/// root or the root plus intermediate segments with no trailing separator.
///
/// # Examples
///
/// ```
/// use dualpath::{PathDialect, POSIX};
///
/// let parsed = POSIX.parse("/home/user/file.txt");
/// assert_eq!(parsed.root, "/");
/// assert_eq!(parsed.dir, "/home/user");
/// assert_eq!(parsed.base, "file.txt");
/// assert_eq!(parsed.name, "file");
/// assert_eq!(parsed.ext, ".txt");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedPath {
    /// Root of the path: `""`, `"/"`, `"\\"`, `"C:"`, `"C:\\"` or a UNC root.
    pub root: String,
    /// Directory portion, including the root.
    pub dir: String,
    /// Final segment, `name` plus `ext`.
    pub base: String,
    /// Final segment without its extension.
    pub name: String,
    /// Extension of the final segment including the leading dot, or `""`.
    pub ext: String,
}

/// Input to `format`.
///
/// Every field is optional. `dir` wins over `root`, and `base` wins over
/// `name` plus `ext`.
///
/// # Examples
///
/// ```
/// use dualpath::{PathComponents, PathDialect, POSIX};
///
/// let components = PathComponents {
///     dir: Some("/home/user/dir".to_string()),
///     base: Some("file.txt".to_string()),
///     ..PathComponents::default()
/// };
/// assert_eq!(POSIX.format(&components), "/home/user/dir/file.txt");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathComponents {
    /// Directory, preferred over `root`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Root, used when `dir` is missing or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Final segment, preferred over `name` and `ext`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Final segment without extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Extension, appended to `name` verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
}

impl PathComponents {
    /// Build components from an untyped JSON value.
    ///
    /// Missing and `null` fields are treated as absent and unknown keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgumentShape`] if `value` is not an object and
    /// [`Error::InvalidArgumentType`] if a known field holds something other
    /// than a string or `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualpath::PathComponents;
    /// use serde_json::json;
    ///
    /// let components = PathComponents::from_value(&json!({"name": "a", "ext": ".b"})).unwrap();
    /// assert_eq!(components.name.as_deref(), Some("a"));
    ///
    /// assert!(PathComponents::from_value(&json!("a.b")).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = validate::object(value, "pathObject")?;
        Ok(Self {
            dir: field(object, "dir")?,
            root: field(object, "root")?,
            base: field(object, "base")?,
            name: field(object, "name")?,
            ext: field(object, "ext")?,
        })
    }
}

fn field(object: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => validate::string(value, &format!("pathObject.{key}"))
            .map(|s| Some(s.to_string())),
    }
}

impl From<ParsedPath> for PathComponents {
    fn from(parsed: ParsedPath) -> Self {
        Self {
            dir: Some(parsed.dir),
            root: Some(parsed.root),
            base: Some(parsed.base),
            name: Some(parsed.name),
            ext: Some(parsed.ext),
        }
    }
}

impl From<&ParsedPath> for PathComponents {
    fn from(parsed: &ParsedPath) -> Self {
        Self::from(parsed.clone())
    }
}

impl TryFrom<&Value> for PathComponents {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_known_fields() {
        let value = json!({"dir": "/a", "base": "b.txt", "extra": 1});
        let components = PathComponents::from_value(&value).unwrap();
        assert_eq!(components.dir.as_deref(), Some("/a"));
        assert_eq!(components.base.as_deref(), Some("b.txt"));
        assert_eq!(components.root, None);
    }

    #[test]
    fn test_from_value_null_is_absent() {
        let components = PathComponents::from_value(&json!({"root": null})).unwrap();
        assert_eq!(components, PathComponents::default());
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        for value in [json!(null), json!("x"), json!(1), json!(["a"]), json!(true)] {
            let err = PathComponents::from_value(&value).unwrap_err();
            assert!(matches!(err, Error::InvalidArgumentShape { .. }), "{value}");
        }
    }

    #[test]
    fn test_from_value_rejects_non_string_field() {
        let err = PathComponents::from_value(&json!({"name": 5})).unwrap_err();
        match err {
            Error::InvalidArgumentType { name, .. } => assert_eq!(name, "pathObject.name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_parsed_path() {
        let parsed = ParsedPath {
            root: "/".into(),
            dir: "/a".into(),
            base: "b.c".into(),
            name: "b".into(),
            ext: ".c".into(),
        };
        let components = PathComponents::from(&parsed);
        assert_eq!(components.dir.as_deref(), Some("/a"));
        assert_eq!(components.ext.as_deref(), Some(".c"));
    }

    #[test]
    fn test_parsed_path_serializes_all_fields() {
        let parsed = ParsedPath::default();
        let value = serde_json::to_value(parsed).unwrap();
        assert_eq!(
            value,
            json!({"root": "", "dir": "", "base": "", "name": "", "ext": ""})
        );
    }
}
