//! Building a path string from its components.

use super::types::PathComponents;

/// Join `components` into a path using `separator`.
///
/// The directory is `dir`, or `root` when `dir` is missing or empty. The
/// final segment is `base`, or `name` followed by `ext` when `base` is missing
/// or empty. No separator is inserted when the directory is exactly the root,
/// so `{root: "/", base: "x"}` formats as `/x`.
#[must_use]
pub fn format_components(separator: char, components: &PathComponents) -> String {
    let root = components.root.as_deref().unwrap_or("");
    let dir = match components.dir.as_deref() {
        Some(dir) if !dir.is_empty() => dir,
        _ => root,
    };
    let base = match components.base.as_deref() {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => format!(
            "{}{}",
            components.name.as_deref().unwrap_or(""),
            components.ext.as_deref().unwrap_or("")
        ),
    };

    if dir.is_empty() {
        return base;
    }
    if dir == root {
        format!("{dir}{base}")
    } else {
        format!("{dir}{separator}{base}")
    }
}
