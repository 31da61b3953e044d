//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointed at a temporary directory and the
//! `DUALPATH_*` variables cleared, so a developer's own configuration
//! cannot leak into results.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: [&str; 5] = [
    "DUALPATH_DIALECT",
    "DUALPATH_CWD",
    "DUALPATH_DRIVE_CWDS",
    "DUALPATH_LOG_MODE",
    "DUALPATH_CONFIG",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path used as `HOME`.
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        Self { temp_dir, home }
    }

    /// A command with the isolated home and a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dualpath").expect("Failed to find dualpath binary");
        cmd.env("HOME", &self.home).env("USERPROFILE", &self.home);
        for key in ENV_VARS {
            cmd.env_remove(key);
        }
        cmd
    }

    /// A command with `--dialect posix --cwd /home/user` preset.
    pub fn posix(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["--dialect", "posix", "--cwd", "/home/user"]);
        cmd
    }

    /// A command with `--dialect win32 --cwd C:\Users\me` preset.
    pub fn win32(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["--dialect", "win32", "--cwd", "C:\\Users\\me"]);
        cmd
    }

    /// Write `~/.dualpath/config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".dualpath");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Write a file under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// The temporary directory.
    pub fn path(&self) -> &Path {
        &self.home
    }
}

/// Run `cmd` and return its trimmed stdout, asserting success.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run dualpath");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("stdout is not UTF-8")
        .trim_end_matches('\n')
        .to_string()
}
