//! Property-based tests for the path engines.

use super::{PathDialect, POSIX, WIN32};
use crate::host::FixedHost;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-z0-9_-]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn file_name_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9_-]{1,8}", prop::option::of("[a-z]{1,4}")).prop_map(|(stem, ext)| match ext {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    })
}

// Rooted, free of `.`/`..`/empty segments, no trailing separator
fn canonical_posix_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(file_name_strategy(), 0..6)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn messy_posix_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(segment_strategy(), 0..8), any::<bool>()).prop_map(
        |(absolute, parts, trailing)| {
            let mut path = parts.join("/");
            if absolute {
                path.insert(0, '/');
            }
            if trailing && !path.is_empty() {
                path.push('/');
            }
            path
        },
    )
}

fn messy_win32_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "C:", "C:\\", "d:/", "\\"]),
        prop::collection::vec(segment_strategy(), 0..8),
        prop::sample::select(vec!["\\", "/"]),
    )
        .prop_map(|(root, parts, sep)| format!("{root}{}", parts.join(sep)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn posix_normalize_idempotent(path in messy_posix_strategy()) {
        let once = POSIX.normalize(&path);
        prop_assert_eq!(POSIX.normalize(&once), once);
    }

    #[test]
    fn win32_normalize_idempotent(path in messy_win32_strategy()) {
        let once = WIN32.normalize(&path);
        prop_assert_eq!(WIN32.normalize(&once), once);
    }

    #[test]
    fn win32_normalize_emits_only_backslashes(path in messy_win32_strategy()) {
        prop_assert!(!WIN32.normalize(&path).contains('/'));
    }

    #[test]
    fn posix_join_is_normalized_concatenation(parts in prop::collection::vec("[a-z./]{1,6}", 1..5)) {
        let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
        prop_assert_eq!(POSIX.join(&refs), POSIX.normalize(&parts.join("/")));
    }

    #[test]
    fn posix_resolve_is_absolute(paths in prop::collection::vec(messy_posix_strategy(), 0..4)) {
        let host = FixedHost::new("/work/dir");
        let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
        let resolved = POSIX.resolve_with(&host, &refs);
        prop_assert!(POSIX.is_absolute(&resolved));
        prop_assert!(resolved == "/" || !resolved.ends_with('/'));
    }

    #[test]
    fn posix_relative_composes_with_resolve(
        from in canonical_posix_strategy(),
        to in canonical_posix_strategy(),
    ) {
        let host = FixedHost::new("/");
        let rel = POSIX.relative_with(&host, &from, &to);
        prop_assert_eq!(POSIX.resolve_with(&host, &[&from, &rel]), to);
    }

    #[test]
    fn win32_relative_composes_with_resolve(
        from in prop::collection::vec(file_name_strategy(), 0..5),
        to in prop::collection::vec(file_name_strategy(), 0..5),
    ) {
        let host = FixedHost::new("C:\\").with_windows(true);
        let from = format!("C:\\{}", from.join("\\"));
        let to = format!("C:\\{}", to.join("\\"));
        let rel = WIN32.relative_with(&host, &from, &to);
        prop_assert_eq!(WIN32.resolve_with(&host, &[&from, &rel]), to);
    }

    #[test]
    fn win32_relative_composes_without_device(
        from in prop::collection::vec("[a-c]{1,3}", 0..4),
        to in prop::collection::vec("[a-c]{1,3}", 0..4),
    ) {
        // Short names from a tiny alphabet so prefixes collide often.
        let host = FixedHost::new("/");
        let from = format!("\\{}", from.join("\\"));
        let to = format!("\\{}", to.join("\\"));
        let rel = WIN32.relative_with(&host, &from, &to);
        prop_assert_eq!(
            WIN32.resolve_with(&host, &[&from, &rel]),
            WIN32.resolve_with(&host, &[&to])
        );
    }

    #[test]
    fn posix_parse_format_round_trip(path in canonical_posix_strategy()) {
        let parsed = POSIX.parse(&path);
        prop_assert_eq!(&parsed.base, &format!("{}{}", parsed.name, parsed.ext));
        prop_assert_eq!(POSIX.format(&parsed.into()), path);
    }

    #[test]
    fn parse_agrees_with_component_operations(path in messy_posix_strategy()) {
        let parsed = POSIX.parse(&path);
        prop_assert_eq!(parsed.base.as_str(), POSIX.basename(&path, None));
        prop_assert_eq!(parsed.ext.as_str(), POSIX.extname(&path));
    }

    #[test]
    fn basename_has_no_separator(path in messy_win32_strategy()) {
        let base = WIN32.basename(&path, None);
        prop_assert!(!base.contains('\\') && !base.contains('/'));
    }
}
