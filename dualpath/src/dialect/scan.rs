//! Reverse scans over the last segment of a path.
//!
//! `basename`, `extname` and `parse` in both dialects look at the path from
//! its end. The dialects differ only in which bytes are separators and in
//! `floor`, the first byte that can belong to a file name (past a root or a
//! drive prefix).

use super::chars::DOT;

/// Position of the last segment of a path and of its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct LastSegment {
    /// Start of the last segment, or `floor` if no separator precedes it.
    pub(super) start_part: usize,
    /// One past the last non-separator byte; `None` if there is no segment.
    pub(super) end: Option<usize>,
    /// The dot starting the extension, if the segment has one.
    pub(super) start_dot: Option<usize>,
}

impl LastSegment {
    /// Scan `bytes[floor..]` backwards, skipping trailing separators.
    ///
    /// The last dot of the segment starts its extension unless the segment
    /// has no dot, starts with its only dot (`.bashrc`), or is made of dots
    /// alone (`..`).
    pub(super) fn scan(bytes: &[u8], floor: usize, is_separator: fn(u8) -> bool) -> Self {
        let mut start_dot: Option<usize> = None;
        let mut start_part = floor;
        let mut end: Option<usize> = None;
        let mut matched_separator = true;
        // 0: no byte before the dot yet, 1: only dots so far, -1: other bytes
        let mut pre_dot_state = 0i8;

        for i in (floor..bytes.len()).rev() {
            let code = bytes[i];
            if is_separator(code) {
                if !matched_separator {
                    start_part = i + 1;
                    break;
                }
                continue;
            }
            if end.is_none() {
                matched_separator = false;
                end = Some(i + 1);
            }
            if code == DOT {
                if start_dot.is_none() {
                    start_dot = Some(i);
                } else if pre_dot_state != 1 {
                    pre_dot_state = 1;
                }
            } else if start_dot.is_some() {
                pre_dot_state = -1;
            }
        }

        let start_dot = match (start_dot, end) {
            (Some(dot), Some(end))
                if pre_dot_state != 0
                    && !(pre_dot_state == 1 && dot + 1 == end && dot == start_part + 1) =>
            {
                Some(dot)
            }
            _ => None,
        };

        Self {
            start_part,
            end,
            start_dot,
        }
    }

    /// The extension including its dot, or `""`.
    pub(super) fn ext<'a>(&self, path: &'a str) -> &'a str {
        match (self.start_dot, self.end) {
            (Some(dot), Some(end)) => &path[dot..end],
            _ => "",
        }
    }
}

/// The last segment of `path[floor..]`, minus `suffix` when it matches.
///
/// A suffix equal to the whole path yields `""`; a suffix equal to the whole
/// segment, or one that fails to match, leaves the segment untouched.
pub(super) fn basename<'a>(
    path: &'a str,
    suffix: Option<&str>,
    floor: usize,
    is_separator: fn(u8) -> bool,
) -> &'a str {
    let bytes = path.as_bytes();
    let mut start = floor;
    let mut matched_separator = true;

    if let Some(suffix) = suffix.filter(|s| !s.is_empty() && s.len() <= path.len()) {
        if suffix == path {
            return "";
        }
        let suffix = suffix.as_bytes();
        // Next suffix byte to compare, counting down; `None` once the suffix
        // has fully matched or a comparison failed.
        let mut ext_idx = Some(suffix.len() - 1);
        let mut end: Option<usize> = None;
        let mut first_non_separator_end: Option<usize> = None;

        for i in (floor..bytes.len()).rev() {
            let code = bytes[i];
            if is_separator(code) {
                if !matched_separator {
                    start = i + 1;
                    break;
                }
                continue;
            }
            if first_non_separator_end.is_none() {
                matched_separator = false;
                first_non_separator_end = Some(i + 1);
            }
            if let Some(idx) = ext_idx {
                if code == suffix[idx] {
                    if idx == 0 {
                        end = Some(i);
                    }
                    ext_idx = idx.checked_sub(1);
                } else {
                    ext_idx = None;
                    end = first_non_separator_end;
                }
            }
        }

        let end = if end == Some(start) {
            first_non_separator_end
        } else {
            end
        };
        return &path[start..end.unwrap_or(bytes.len())];
    }

    let mut end: Option<usize> = None;
    for i in (floor..bytes.len()).rev() {
        if is_separator(bytes[i]) {
            if !matched_separator {
                start = i + 1;
                break;
            }
        } else if end.is_none() {
            matched_separator = false;
            end = Some(i + 1);
        }
    }

    end.map_or("", |end| &path[start..end])
}
