//! [`TestVault`] builder for validation scenarios on a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vaultlint_spec::{DirNode, GlobalSettings, parse_spec};

/// A temporary vault directory with helpers for laying out entries.
///
/// # Example
///
/// ```rust,no_run
/// use vaultlint_test_utils::TestVault;
///
/// let vault = TestVault::new();
/// vault.dir(".obsidian").file("notes/index.md");
/// assert!(vault.root().join("notes/index.md").is_file());
/// ```
pub struct TestVault {
    temp_dir: TempDir,
}

impl Default for TestVault {
    fn default() -> Self {
        Self::new()
    }
}

impl TestVault {
    /// Create an empty temporary vault.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the vault.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a directory (and its parents) relative to the root.
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.root().join(rel)).unwrap();
        self
    }

    /// Create an empty file (and its parent directories) relative to the root.
    pub fn file(&self, rel: &str) -> &Self {
        self.write(rel, "")
    }

    /// Create a file with content relative to the root.
    pub fn write(&self, rel: &str, content: &str) -> &Self {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// Write a spec file into the vault and return its path.
    pub fn write_spec(&self, name: &str, yaml: &str) -> PathBuf {
        self.write(name, yaml);
        self.root().join(name)
    }

    /// Write a spec file into a sibling temp directory, outside the vault tree.
    ///
    /// The returned `TempDir` must be kept alive for the file to exist.
    pub fn external_spec(yaml: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vspec.yaml");
        fs::write(&path, yaml).unwrap();
        (dir, path)
    }
}

/// Parse an inline YAML spec, panicking on invalid input.
pub fn spec(yaml: &str) -> (GlobalSettings, DirNode) {
    let raw: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    parse_spec(&raw).unwrap()
}
