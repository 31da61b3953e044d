//! The POSIX path engine.

use super::chars::{is_posix_separator, FORWARD_SLASH};
use super::format::format_components;
use super::normalize::normalize_segments;
use super::scan::{self, LastSegment};
use super::{DialectKind, ParsedPath, PathComponents, PathDialect};
use crate::host::Host;

/// POSIX path semantics: `/` separates segments and a leading `/` is the
/// only kind of root.
///
/// # Examples
///
/// ```
/// use dualpath::{PathDialect, POSIX};
///
/// assert_eq!(POSIX.normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
/// assert_eq!(
///     POSIX.relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb"),
///     "../../impl/bbb"
/// );
/// assert_eq!(POSIX.dirname("/a/b/c"), "/a/b");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Posix;

/// The host working directory in POSIX form.
///
/// On a Windows-like host `C:\Users\me` becomes `/Users/me`.
fn posix_cwd(host: &dyn Host) -> String {
    let cwd = host.cwd();
    if !host.is_windows() {
        return cwd;
    }
    let cwd = cwd.replace('\\', "/");
    match cwd.find('/') {
        Some(idx) => cwd[idx..].to_string(),
        None => cwd,
    }
}

impl PathDialect for Posix {
    fn kind(&self) -> DialectKind {
        DialectKind::Posix
    }

    fn sep(&self) -> char {
        '/'
    }

    fn delimiter(&self) -> char {
        ':'
    }

    fn resolve_with(&self, host: &dyn Host, paths: &[&str]) -> String {
        let mut resolved = String::new();
        let mut resolved_absolute = false;

        for path in paths.iter().rev().filter(|p| !p.is_empty()) {
            resolved = format!("{path}/{resolved}");
            if self.is_absolute(path) {
                resolved_absolute = true;
                break;
            }
        }

        if !resolved_absolute {
            let cwd = posix_cwd(host);
            log::trace!("resolving {paths:?} against cwd {cwd}");
            if !cwd.is_empty() {
                resolved = format!("{cwd}/{resolved}");
                resolved_absolute = self.is_absolute(&cwd);
            }
        }

        let tail = normalize_segments(&resolved, !resolved_absolute, '/', is_posix_separator);
        if resolved_absolute {
            format!("/{tail}")
        } else if tail.is_empty() {
            ".".to_string()
        } else {
            tail
        }
    }

    fn normalize(&self, path: &str) -> String {
        let bytes = path.as_bytes();
        let Some(&last) = bytes.last() else {
            return ".".to_string();
        };
        let is_absolute = bytes[0] == FORWARD_SLASH;
        let trailing_separator = last == FORWARD_SLASH;

        let mut tail = normalize_segments(path, !is_absolute, '/', is_posix_separator);
        if tail.is_empty() {
            let empty = match (is_absolute, trailing_separator) {
                (true, _) => "/",
                (false, true) => "./",
                (false, false) => ".",
            };
            return empty.to_string();
        }
        if trailing_separator {
            tail.push('/');
        }
        if is_absolute {
            format!("/{tail}")
        } else {
            tail
        }
    }

    fn is_absolute(&self, path: &str) -> bool {
        path.as_bytes().first() == Some(&FORWARD_SLASH)
    }

    fn join(&self, paths: &[&str]) -> String {
        let joined = paths
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("/");
        if joined.is_empty() {
            return ".".to_string();
        }
        self.normalize(&joined)
    }

    fn relative_with(&self, host: &dyn Host, from: &str, to: &str) -> String {
        if from == to {
            return String::new();
        }
        let from = self.resolve_with(host, &[from]);
        let to = self.resolve_with(host, &[to]);
        if from == to {
            return String::new();
        }

        // Both are absolute now; compare after the leading `/`.
        let from_bytes = from.as_bytes();
        let to_bytes = to.as_bytes();
        let from_start = 1;
        let from_end = from.len();
        let from_len = from_end - from_start;
        let to_start = 1;
        let to_len = to.len() - to_start;

        let length = from_len.min(to_len);
        let mut last_common_sep: Option<usize> = None;
        let mut i = 0;
        while i < length {
            let code = from_bytes[from_start + i];
            if code != to_bytes[to_start + i] {
                break;
            }
            if code == FORWARD_SLASH {
                last_common_sep = Some(i);
            }
            i += 1;
        }

        if i == length {
            if to_len > length {
                if to_bytes[to_start + i] == FORWARD_SLASH {
                    // from='/foo/bar', to='/foo/bar/baz'
                    return to[to_start + i + 1..].to_string();
                }
                if i == 0 {
                    // from='/', to='/foo'
                    return to[to_start..].to_string();
                }
            } else if from_len > length {
                if from_bytes[from_start + i] == FORWARD_SLASH {
                    // from='/foo/bar/baz', to='/foo/bar'
                    last_common_sep = Some(i);
                } else if i == 0 {
                    // from='/foo', to='/'
                    last_common_sep = Some(0);
                }
            }
        }

        let mut out = String::new();
        let first = last_common_sep.map_or(from_start, |sep| from_start + sep + 1);
        for j in first..=from_end {
            if j == from_end || from_bytes[j] == FORWARD_SLASH {
                out.push_str(if out.is_empty() { ".." } else { "/.." });
            }
        }

        let rest = last_common_sep.map_or(to.as_str(), |sep| &to[to_start + sep..]);
        format!("{out}{rest}")
    }

    fn to_namespaced_path_with(&self, _host: &dyn Host, path: &str) -> String {
        path.to_string()
    }

    fn dirname<'a>(&self, path: &'a str) -> &'a str {
        let bytes = path.as_bytes();
        if bytes.is_empty() {
            return ".";
        }
        let has_root = bytes[0] == FORWARD_SLASH;
        let mut end: Option<usize> = None;
        let mut matched_separator = true;
        for i in (1..bytes.len()).rev() {
            if bytes[i] == FORWARD_SLASH {
                if !matched_separator {
                    end = Some(i);
                    break;
                }
            } else {
                matched_separator = false;
            }
        }

        match end {
            None if has_root => "/",
            None => ".",
            Some(1) if has_root => "//",
            Some(end) => &path[..end],
        }
    }

    fn basename<'a>(&self, path: &'a str, suffix: Option<&str>) -> &'a str {
        scan::basename(path, suffix, 0, is_posix_separator)
    }

    fn extname<'a>(&self, path: &'a str) -> &'a str {
        LastSegment::scan(path.as_bytes(), 0, is_posix_separator).ext(path)
    }

    fn parse(&self, path: &str) -> ParsedPath {
        let mut ret = ParsedPath::default();
        if path.is_empty() {
            return ret;
        }
        let root_end = if self.is_absolute(path) { 1 } else { 0 };
        ret.root = path[..root_end].to_string();

        let seg = LastSegment::scan(path.as_bytes(), root_end, is_posix_separator);
        if let Some(end) = seg.end {
            let start = seg.start_part;
            ret.base = path[start..end].to_string();
            match seg.start_dot {
                Some(dot) => {
                    ret.name = path[start..dot].to_string();
                    ret.ext = path[dot..end].to_string();
                }
                None => ret.name = ret.base.clone(),
            }
        }

        ret.dir = if seg.start_part > root_end {
            path[..seg.start_part - 1].to_string()
        } else {
            ret.root.clone()
        };
        ret
    }

    fn format(&self, components: &PathComponents) -> String {
        format_components('/', components)
    }
}
