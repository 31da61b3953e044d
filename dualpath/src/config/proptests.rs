//! Property-based tests for configuration merging.

use std::collections::BTreeMap;

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::dialect::DialectKind;
use crate::logging::LogLevel;
use proptest::prelude::*;

fn dialect_strategy() -> impl Strategy<Value = DialectKind> {
    prop_oneof![Just(DialectKind::Posix), Just(DialectKind::Win32)]
}

fn log_level_strategy() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Quiet),
        Just(LogLevel::Normal),
        Just(LogLevel::Verbose)
    ]
}

fn drive_table_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[A-F]:", "[A-F]:\\\\[a-z]{1,8}", 0..4)
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(dialect_strategy()),
        prop::option::of("/[a-z]{1,12}"),
        drive_table_strategy(),
        prop::option::of(log_level_strategy()),
    )
        .prop_map(|(dialect, cwd, drive_cwds, log_mode)| Config {
            dialect,
            cwd,
            drive_cwds,
            log_mode,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher layer always survive the merge
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.dialect, high.dialect.or(low.dialect));
        prop_assert_eq!(merged.cwd, high.cwd.clone().or(low.cwd.clone()));
        prop_assert_eq!(merged.log_mode, high.log_mode.or(low.log_mode));
        for (device, dir) in &high.drive_cwds {
            prop_assert_eq!(merged.drive_cwds.get(device), Some(dir));
        }
    }

    // Merging a default layer changes nothing
    #[test]
    fn config_merge_default_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging the same layer twice is the same as merging it once
    #[test]
    fn config_merge_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base.clone();
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    // Configs survive a YAML round trip
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, config);
    }
}
