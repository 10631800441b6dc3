//! Common test utilities shared across integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
    root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let config_path = root.join("credscore").join("config.toml");

        Self {
            _temp_dir: temp_dir,
            config_path,
            root,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write a fixtures file holding the given reports and return its path
    pub fn write_fixtures(&self, reports: serde_json::Value) -> PathBuf {
        let path = self.root.join("reports.json");
        let content = serde_json::to_string_pretty(&reports).expect("Failed to encode fixtures");
        fs::write(&path, content).expect("Failed to write fixtures");
        path
    }

    /// Command isolated from the user's config and environment filters
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("credscore").expect("Failed to find credscore binary");
        cmd.arg("--config")
            .arg(&self.config_path)
            .env_remove("CREDSCORE_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}
