//! Integration tests for the configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]`;
//! environment variables are process-global, so they must not race.

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::EnvGuard;
use dualpath::config::{Config, ConfigBuilder, ConfigLoader};
use dualpath::{DialectKind, Error, LogLevel, PathDialect};
use serial_test::serial;
use tempfile::TempDir;

const ENV_VARS: [&str; 5] = [
    "DUALPATH_DIALECT",
    "DUALPATH_CWD",
    "DUALPATH_DRIVE_CWDS",
    "DUALPATH_LOG_MODE",
    "DUALPATH_CONFIG",
];

fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

fn clean_env() -> Vec<EnvGuard> {
    ENV_VARS.iter().map(|key| EnvGuard::remove(key)).collect()
}

#[test]
#[serial]
fn test_user_file_drives_resolution() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    create_temp_config(
        dir.path(),
        "config.yaml",
        "dialect: win32\ncwd: 'C:\\work'\ndrive_cwds:\n  'E:': 'E:\\media'\n",
    );

    let config = ConfigBuilder::new()
        .with_user_config_dir(dir.path())
        .build()
        .unwrap();
    let host = config.host();
    let engine = config.engine();

    assert_eq!(engine.kind(), DialectKind::Win32);
    assert_eq!(engine.resolve_with(host.as_ref(), &["src"]), "C:\\work\\src");
    assert_eq!(engine.resolve_with(host.as_ref(), &["E:song"]), "E:\\media\\song");
}

#[test]
#[serial]
fn test_environment_overrides_user_file() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    create_temp_config(dir.path(), "config.yaml", "dialect: win32\ncwd: 'C:\\work'\n");
    let _dialect = EnvGuard::set("DUALPATH_DIALECT", "posix");
    let _cwd = EnvGuard::set("DUALPATH_CWD", "/srv");

    let config = ConfigBuilder::new()
        .with_user_config_dir(dir.path())
        .build()
        .unwrap();

    assert_eq!(config.dialect_kind(), DialectKind::Posix);
    let host = config.host();
    assert_eq!(config.engine().resolve_with(host.as_ref(), &["x"]), "/srv/x");
}

#[test]
#[serial]
fn test_drive_table_from_environment_merges_with_file() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    create_temp_config(
        dir.path(),
        "config.yaml",
        "drive_cwds:\n  'C:': 'C:\\a'\n  'd:': 'D:\\old'\n",
    );
    let _drives = EnvGuard::set("DUALPATH_DRIVE_CWDS", "D:=D:\\new");

    let config = ConfigBuilder::new()
        .with_user_config_dir(dir.path())
        .build()
        .unwrap();

    assert_eq!(config.drive_cwds.len(), 2);
    assert_eq!(config.drive_cwds.get("C:").map(String::as_str), Some("C:\\a"));
    assert_eq!(config.drive_cwds.get("D:").map(String::as_str), Some("D:\\new"));
}

#[test]
#[serial]
fn test_config_env_names_explicit_file() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    let explicit = create_temp_config(dir.path(), "team.yaml", "log_mode: verbose\n");
    let _config = EnvGuard::set("DUALPATH_CONFIG", explicit.to_str().unwrap());

    let config = ConfigBuilder::new()
        .with_user_config_dir(dir.path())
        .build()
        .unwrap();
    assert_eq!(config.log_mode, Some(LogLevel::Verbose));
}

#[test]
#[serial]
fn test_invalid_environment_is_reported() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    let _mode = EnvGuard::set("DUALPATH_LOG_MODE", "shouting");

    let result = ConfigBuilder::new().with_user_config_dir(dir.path()).build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
fn test_malformed_yaml_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = create_temp_config(dir.path(), "config.yaml", "dialect: [posix\n");
    assert!(matches!(
        ConfigLoader::load_file(&path),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn test_unknown_dialect_in_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = create_temp_config(dir.path(), "config.yaml", "dialect: vms\n");
    assert!(ConfigLoader::load_file(&path).is_err());
}

#[test]
fn test_programmatic_config_only() {
    let config = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            dialect: Some(DialectKind::Posix),
            cwd: Some("/opt".into()),
            ..Config::default()
        })
        .build()
        .unwrap();
    let host = config.host();
    assert_eq!(
        config.engine().relative_with(host.as_ref(), "lib", "/opt/bin"),
        "../bin"
    );
}
