//! Common test utilities for microblog integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway site directory
pub struct TestSite {
    _temp: TempDir,
    /// Path to the site root
    pub path: PathBuf,
}

impl TestSite {
    /// Create an empty site
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { _temp: temp, path }
    }

    /// Create a site whose `_config.yml` holds `content`
    pub fn with_config(content: &str) -> Self {
        let site = Self::new();
        site.write_file("_config.yml", content);
        site
    }

    /// `microblog` binary running inside the site
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("microblog").expect("Failed to find microblog binary");
        cmd.current_dir(&self.path)
            .env_remove("MICROBLOG_SOURCE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file in the site
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the site
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the site
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Names of the entries in a site directory, sorted
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(path))
            .expect("Failed to read directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}
