//! The Windows path engine.
//!
//! Windows paths may start with a root made of up to three parts:
//!
//! - a UNC root, `\\server\share`, which also acts as the device
//! - a drive, `C:`, optionally followed by a separator (`C:\`)
//! - a lone separator, `\`, rooted on the current drive
//!
//! Both `\` and `/` separate segments on input; output always uses `\`.
//! Devices compare ASCII case-insensitively.

use std::borrow::Cow;

use super::chars::{has_drive_prefix, is_windows_separator, BACKWARD_SLASH, DOT, QUESTION_MARK};
use super::format::format_components;
use super::normalize::normalize_segments;
use super::scan::{self, LastSegment};
use super::{DialectKind, ParsedPath, PathComponents, PathDialect};
use crate::host::Host;

/// Windows path semantics.
///
/// # Examples
///
/// ```
/// use dualpath::{PathDialect, WIN32};
///
/// assert_eq!(WIN32.normalize("C:/temp\\\\foo\\bar\\..\\"), "C:\\temp\\foo\\");
/// assert!(WIN32.is_absolute("\\\\server\\share"));
/// assert_eq!(
///     WIN32.relative("C:\\orandea\\test\\aaa", "C:\\orandea\\impl\\bbb"),
///     "..\\..\\impl\\bbb"
/// );
/// assert_eq!(WIN32.to_namespaced_path("C:\\foo"), "\\\\?\\C:\\foo");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Win32;

/// Offsets of a `\\server\share` prefix. The server name starts at 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UncRoot {
    server_end: usize,
    share_start: usize,
    share_end: usize,
}

impl UncRoot {
    /// Match two separators, a server name, separators and a share name.
    ///
    /// A prefix missing the share (`\\server` or `\\server\`) is not a UNC
    /// root.
    fn find(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 2 || !is_windows_separator(bytes[0]) || !is_windows_separator(bytes[1]) {
            return None;
        }
        let len = bytes.len();
        let server_end = skip_while(bytes, 2, |b| !is_windows_separator(b));
        if server_end == len || server_end == 2 {
            return None;
        }
        let share_start = skip_while(bytes, server_end, is_windows_separator);
        if share_start == len {
            return None;
        }
        let share_end = skip_while(bytes, share_start, |b| !is_windows_separator(b));
        Some(Self {
            server_end,
            share_start,
            share_end,
        })
    }

    /// The root rewritten with backslashes, e.g. `\\server\share`.
    fn device(&self, path: &str) -> String {
        format!(
            "\\\\{}\\{}",
            &path[2..self.server_end],
            &path[self.share_start..self.share_end]
        )
    }
}

fn skip_while(bytes: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| !pred(b))
        .map_or(bytes.len(), |offset| from + offset)
}

/// The root of a path as `resolve` and `normalize` see it.
#[derive(Debug, Default)]
struct Root {
    /// `C:` or `\\server\share`; empty when the path names no device.
    device: String,
    /// First byte after the root.
    end: usize,
    absolute: bool,
    unc: bool,
}

impl Root {
    fn of(path: &str) -> Self {
        let bytes = path.as_bytes();
        let mut root = Self::default();
        if bytes.first().copied().is_some_and(is_windows_separator) {
            root.absolute = true;
            match UncRoot::find(bytes) {
                Some(unc) => {
                    root.device = unc.device(path);
                    root.end = unc.share_end;
                    root.unc = true;
                }
                None => root.end = 1,
            }
        } else if has_drive_prefix(bytes) {
            root.device = path[..2].to_string();
            root.end = 2;
            if bytes.get(2).copied().is_some_and(is_windows_separator) {
                root.absolute = true;
                root.end = 3;
            }
        }
        root
    }
}

/// The directory `resolve` falls back to once the arguments run out.
///
/// With a drive already known the drive's own working directory is used when
/// the host remembers one. A directory found for a different drive is
/// replaced by the root of the known drive.
fn fallback_cwd(host: &dyn Host, device: &str) -> String {
    if device.is_empty() {
        return host.cwd();
    }
    let cwd = host
        .drive_cwd(device)
        .filter(|cwd| !cwd.is_empty())
        .unwrap_or_else(|| host.cwd());
    let bytes = cwd.as_bytes();
    let same_device = bytes
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(device.as_bytes()));
    if !same_device && bytes.get(2) == Some(&BACKWARD_SLASH) {
        log::debug!("cwd {cwd} is not on {device}, using the drive root");
        format!("{device}\\")
    } else {
        cwd
    }
}

/// Byte range of `path` once leading and trailing backslashes are dropped.
///
/// At least one byte past `start` is always kept.
fn trimmed_bounds(path: &[u8]) -> (usize, usize) {
    let start = path.iter().take_while(|&&b| b == BACKWARD_SLASH).count();
    let mut end = path.len();
    while end > start + 1 && path[end - 1] == BACKWARD_SLASH {
        end -= 1;
    }
    (start, end)
}

impl PathDialect for Win32 {
    fn kind(&self) -> DialectKind {
        DialectKind::Win32
    }

    fn sep(&self) -> char {
        '\\'
    }

    fn delimiter(&self) -> char {
        ';'
    }

    fn resolve_with(&self, host: &dyn Host, paths: &[&str]) -> String {
        let mut resolved_device = String::new();
        let mut resolved_tail = String::new();
        let mut resolved_absolute = false;

        let mut pending = paths.iter().rev().filter(|p| !p.is_empty());
        let mut consulted_host = false;
        loop {
            let path: Cow<'_, str> = match pending.next() {
                Some(path) => Cow::Borrowed(*path),
                None if consulted_host => break,
                None => {
                    consulted_host = true;
                    let cwd = fallback_cwd(host, &resolved_device);
                    log::trace!("resolving {paths:?} against cwd {cwd}");
                    Cow::Owned(cwd)
                }
            };

            let root = Root::of(&path);
            if !root.device.is_empty() {
                if resolved_device.is_empty() {
                    resolved_device.clone_from(&root.device);
                } else if !root.device.eq_ignore_ascii_case(&resolved_device) {
                    // Another device; nothing here applies to the result.
                    continue;
                }
            }

            if resolved_absolute {
                if !resolved_device.is_empty() {
                    break;
                }
            } else {
                resolved_tail = format!("{}\\{resolved_tail}", &path[root.end..]);
                resolved_absolute = root.absolute;
                if resolved_absolute && !resolved_device.is_empty() {
                    break;
                }
            }
        }

        let tail = normalize_segments(
            &resolved_tail,
            !resolved_absolute,
            '\\',
            is_windows_separator,
        );
        if resolved_absolute {
            return format!("{resolved_device}\\{tail}");
        }
        let resolved = format!("{resolved_device}{tail}");
        if resolved.is_empty() {
            ".".to_string()
        } else {
            resolved
        }
    }

    fn normalize(&self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }
        let root = Root::of(path);
        if root.unc && root.end == path.len() {
            return format!("{}\\", root.device);
        }

        let mut tail = if root.end < path.len() {
            normalize_segments(
                &path[root.end..],
                !root.absolute,
                '\\',
                is_windows_separator,
            )
        } else {
            String::new()
        };
        if tail.is_empty() && !root.absolute {
            tail.push('.');
        }
        if !tail.is_empty() && path.as_bytes().last().copied().is_some_and(is_windows_separator) {
            tail.push('\\');
        }

        if root.absolute {
            format!("{}\\{tail}", root.device)
        } else {
            format!("{}{tail}", root.device)
        }
    }

    fn is_absolute(&self, path: &str) -> bool {
        let bytes = path.as_bytes();
        match bytes.first() {
            None => false,
            Some(&b) if is_windows_separator(b) => true,
            Some(_) => {
                bytes.len() > 2 && has_drive_prefix(bytes) && is_windows_separator(bytes[2])
            }
        }
    }

    fn join(&self, paths: &[&str]) -> String {
        let parts: Vec<&str> = paths.iter().filter(|p| !p.is_empty()).copied().collect();
        let Some(first) = parts.first().map(|p| p.as_bytes()) else {
            return ".".to_string();
        };
        let mut joined = parts.join("\\");

        // `\\server` as the first argument is kept as the start of a UNC
        // root; any other run of leading separators collapses to one.
        let unc_intent = first.len() > 2
            && is_windows_separator(first[0])
            && is_windows_separator(first[1])
            && !is_windows_separator(first[2]);
        if !unc_intent {
            let leading = joined
                .bytes()
                .take_while(|&b| is_windows_separator(b))
                .count();
            if leading >= 2 {
                joined = format!("\\{}", &joined[leading..]);
            }
        }

        self.normalize(&joined)
    }

    fn relative_with(&self, host: &dyn Host, from: &str, to: &str) -> String {
        if from == to {
            return String::new();
        }
        let from_orig = self.resolve_with(host, &[from]);
        let to_orig = self.resolve_with(host, &[to]);
        if from_orig == to_orig {
            return String::new();
        }
        let from = from_orig.to_ascii_lowercase();
        let to = to_orig.to_ascii_lowercase();
        if from == to {
            return String::new();
        }

        let from_bytes = from.as_bytes();
        let to_bytes = to.as_bytes();
        let (from_start, from_end) = trimmed_bounds(from_bytes);
        let (mut to_start, to_end) = trimmed_bounds(to_bytes);
        let from_len = from_end - from_start;
        let to_len = to_end - to_start;

        let length = from_len.min(to_len);
        let mut last_common_sep: Option<usize> = None;
        let mut i = 0;
        while i < length {
            let code = from_bytes[from_start + i];
            if code != to_bytes[to_start + i] {
                break;
            }
            if code == BACKWARD_SLASH {
                last_common_sep = Some(i);
            }
            i += 1;
        }

        let on_drive = has_drive_prefix(&from_bytes[from_start..]);
        let last_common_sep = if i == length {
            if to_len > length {
                if to_bytes[to_start + i] == BACKWARD_SLASH {
                    // from='C:\foo\bar', to='C:\foo\bar\baz'
                    return to_orig[to_start + i + 1..].to_string();
                }
                if i == 2 && on_drive {
                    // from='C:\', to='C:\foo'
                    return to_orig[to_start + i..].to_string();
                }
                if i == 0 {
                    // from='\', to='\foo'
                    return to_orig[to_start..to_end].to_string();
                }
            }
            if from_len > length {
                if from_bytes[from_start + i] == BACKWARD_SLASH {
                    // from='C:\foo\bar', to='C:\foo'
                    last_common_sep = Some(i);
                } else if i == 2 && on_drive {
                    // from='C:\foo', to='C:\'
                    last_common_sep = Some(3);
                }
            }
            last_common_sep
        } else {
            match last_common_sep {
                Some(sep) => Some(sep),
                // Nothing in common, not even the device.
                None => return to_orig,
            }
        };

        // Without a common separator the paths only share the bare root, so
        // every segment of `from` is climbed.
        let (walk_start, tail_start) = match last_common_sep {
            Some(sep) => (from_start + sep + 1, to_start + sep),
            None => (from_start, to_start),
        };

        let mut out = String::new();
        for j in walk_start..=from_end {
            if j == from_end || from_bytes[j] == BACKWARD_SLASH {
                out.push_str(if out.is_empty() { ".." } else { "\\.." });
            }
        }

        to_start = tail_start.min(to_end);
        if out.is_empty() {
            if to_bytes.get(to_start) == Some(&BACKWARD_SLASH) {
                to_start += 1;
            }
            return to_orig[to_start.min(to_end)..to_end].to_string();
        }
        let tail = &to_orig[to_start..to_end];
        if last_common_sep.is_none() && !tail.is_empty() {
            return format!("{out}\\{tail}");
        }
        format!("{out}{tail}")
    }

    fn to_namespaced_path_with(&self, host: &dyn Host, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        let resolved = self.resolve_with(host, &[path]);
        let bytes = resolved.as_bytes();
        if bytes.len() <= 2 {
            return path.to_string();
        }

        if bytes[0] == BACKWARD_SLASH {
            if bytes[1] == BACKWARD_SLASH && bytes[2] != QUESTION_MARK && bytes[2] != DOT {
                return format!("\\\\?\\UNC\\{}", &resolved[2..]);
            }
        } else if has_drive_prefix(bytes) && bytes[2] == BACKWARD_SLASH {
            return format!("\\\\?\\{resolved}");
        }
        path.to_string()
    }

    fn dirname<'a>(&self, path: &'a str) -> &'a str {
        let bytes = path.as_bytes();
        let len = bytes.len();
        match len {
            0 => return ".",
            1 => return if is_windows_separator(bytes[0]) { path } else { "." },
            _ => {}
        }

        let mut root_end: Option<usize> = None;
        let mut offset = 0;
        if is_windows_separator(bytes[0]) {
            root_end = Some(1);
            offset = 1;
            if let Some(unc) = UncRoot::find(bytes) {
                if unc.share_end == len {
                    return path;
                }
                // The separator after the share belongs to the root.
                root_end = Some(unc.share_end + 1);
                offset = unc.share_end + 1;
            }
        } else if has_drive_prefix(bytes) {
            let end = if len > 2 && is_windows_separator(bytes[2]) { 3 } else { 2 };
            root_end = Some(end);
            offset = end;
        }

        let mut end: Option<usize> = None;
        let mut matched_separator = true;
        for i in (offset..len).rev() {
            if is_windows_separator(bytes[i]) {
                if !matched_separator {
                    end = Some(i);
                    break;
                }
            } else {
                matched_separator = false;
            }
        }

        match end.or(root_end) {
            Some(end) => &path[..end],
            None => ".",
        }
    }

    fn basename<'a>(&self, path: &'a str, suffix: Option<&str>) -> &'a str {
        let floor = if has_drive_prefix(path.as_bytes()) { 2 } else { 0 };
        scan::basename(path, suffix, floor, is_windows_separator)
    }

    fn extname<'a>(&self, path: &'a str) -> &'a str {
        let bytes = path.as_bytes();
        let floor = if has_drive_prefix(bytes) { 2 } else { 0 };
        LastSegment::scan(bytes, floor, is_windows_separator).ext(path)
    }

    fn parse(&self, path: &str) -> ParsedPath {
        let mut ret = ParsedPath::default();
        let bytes = path.as_bytes();
        let len = bytes.len();
        if len == 0 {
            return ret;
        }

        let mut root_end = 0;
        if is_windows_separator(bytes[0]) {
            root_end = 1;
            if let Some(unc) = UncRoot::find(bytes) {
                root_end = if unc.share_end == len {
                    len
                } else {
                    unc.share_end + 1
                };
            }
        } else if has_drive_prefix(bytes) {
            root_end = if len > 2 && is_windows_separator(bytes[2]) { 3 } else { 2 };
        }
        ret.root = path[..root_end].to_string();

        let seg = LastSegment::scan(bytes, root_end, is_windows_separator);
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
        format_components('\\', components)
    }
}
