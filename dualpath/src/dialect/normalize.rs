//! Segment normalization shared by both dialects.
//!
//! This module collapses `.`, `..` and redundant separators in the part of a
//! path that follows its root. Root handling (leading `/`, drive letters, UNC
//! prefixes) is the caller's job; the normalizer only ever sees the tail.

use super::chars::DOT;

/// Normalize the tail of a path.
///
/// The scan runs one step past the end of `path`, treating the end as an
/// implicit separator so the final segment is flushed. On every separator the
/// segment collected since the previous one is classified:
///
/// - empty or `.`: dropped
/// - `..`: pops the previous segment; with nothing left to pop it is kept
///   literally when `allow_above_root` is set and dropped otherwise
/// - anything else: appended after `separator`
///
/// # Examples
///
/// ```
/// use dualpath::dialect::chars::is_posix_separator;
/// use dualpath::dialect::normalize::normalize_segments;
///
/// assert_eq!(normalize_segments("a/./b/../c", false, '/', is_posix_separator), "a/c");
/// assert_eq!(normalize_segments("../a", true, '/', is_posix_separator), "../a");
/// assert_eq!(normalize_segments("../a", false, '/', is_posix_separator), "a");
/// ```
#[must_use]
pub fn normalize_segments(
    path: &str,
    allow_above_root: bool,
    separator: char,
    is_separator: fn(u8) -> bool,
) -> String {
    let bytes = path.as_bytes();
    let mut res = String::with_capacity(path.len());
    let mut last_segment_len = 0usize;
    // Index just past the last separator seen.
    let mut segment_start = 0usize;
    // Dots since the last separator; -1 once a non-dot byte shows up.
    let mut dots: i32 = 0;
    let mut code = 0u8;

    for i in 0..=bytes.len() {
        if i < bytes.len() {
            code = bytes[i];
        } else if is_separator(code) {
            break;
        } else {
            code = separator as u8;
        }

        if is_separator(code) {
            if segment_start == i || dots == 1 {
                // empty segment or `.`
            } else if dots == 2 {
                let res_is_parent = last_segment_len == 2 && res.ends_with("..");
                if !res_is_parent {
                    if res.len() > 2 {
                        match res.rfind(separator) {
                            Some(idx) => {
                                res.truncate(idx);
                                last_segment_len = match res.rfind(separator) {
                                    Some(prev) => res.len() - 1 - prev,
                                    None => res.len(),
                                };
                            }
                            None => {
                                res.clear();
                                last_segment_len = 0;
                            }
                        }
                        segment_start = i + 1;
                        dots = 0;
                        continue;
                    } else if !res.is_empty() {
                        res.clear();
                        last_segment_len = 0;
                        segment_start = i + 1;
                        dots = 0;
                        continue;
                    }
                }
                if allow_above_root {
                    if !res.is_empty() {
                        res.push(separator);
                    }
                    res.push_str("..");
                    last_segment_len = 2;
                }
            } else {
                if !res.is_empty() {
                    res.push(separator);
                }
                res.push_str(&path[segment_start..i]);
                last_segment_len = i - segment_start;
            }
            segment_start = i + 1;
            dots = 0;
        } else if code == DOT && dots != -1 {
            dots += 1;
        } else {
            dots = -1;
        }
    }

    res
}
