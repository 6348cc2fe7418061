//! In-memory filesystem for driving the validator deterministically.
//!
//! Directory listings come back in insertion order, and listings can be
//! made to fail, which a real temp directory cannot do reliably (tests
//! often run as root).

use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use vaultlint_fs::{DirEntryInfo, FsAccess, ListError};

#[derive(Debug, Clone)]
pub struct MemoryFs {
    root: PathBuf,
    kinds: HashMap<PathBuf, bool>,
    children: HashMap<PathBuf, Vec<DirEntryInfo>>,
    denied: HashSet<PathBuf>,
    broken: HashSet<PathBuf>,
}

impl MemoryFs {
    /// An empty tree whose root directory is `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut kinds = HashMap::new();
        kinds.insert(root.clone(), true);
        Self {
            root,
            kinds,
            children: HashMap::new(),
            denied: HashSet::new(),
            broken: HashSet::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Add a directory (and missing parents) relative to the root.
    pub fn dir(mut self, rel: &str) -> Self {
        self.insert(rel, true);
        self
    }

    /// Add a file (and missing parent directories) relative to the root.
    pub fn file(mut self, rel: &str) -> Self {
        self.insert(rel, false);
        self
    }

    /// Make listing the directory at `rel` fail with permission denied.
    pub fn deny(mut self, rel: &str) -> Self {
        self.denied.insert(self.root.join(rel));
        self
    }

    /// Make listing the directory at `rel` fail with a generic I/O error.
    pub fn break_listing(mut self, rel: &str) -> Self {
        self.broken.insert(self.root.join(rel));
        self
    }

    fn insert(&mut self, rel: &str, is_dir: bool) {
        let mut current = self.root.clone();
        let segments: Vec<&str> = rel.split('/').filter(|s| !s.is_empty()).collect();
        for (i, segment) in segments.iter().enumerate() {
            let next = current.join(segment);
            let leaf_is_dir = if i + 1 == segments.len() { is_dir } else { true };
            if !self.kinds.contains_key(&next) {
                self.kinds.insert(next.clone(), leaf_is_dir);
                self.children
                    .entry(current.clone())
                    .or_default()
                    .push(DirEntryInfo::new(*segment, leaf_is_dir));
            }
            current = next;
        }
    }
}

impl FsAccess for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.kinds.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.kinds.get(path).copied().unwrap_or(false)
    }

    fn list_entries(&self, path: &Path) -> Result<Vec<DirEntryInfo>, ListError> {
        if self.denied.contains(path) {
            return Err(ListError::PermissionDenied);
        }
        if self.broken.contains(path) {
            return Err(ListError::Other(std::io::Error::other("device error")));
        }
        match self.kinds.get(path) {
            Some(true) => Ok(self.children.get(path).cloned().unwrap_or_default()),
            Some(false) => Err(ListError::Other(std::io::Error::from(ErrorKind::NotADirectory))),
            None => Err(ListError::Other(std::io::Error::from(ErrorKind::NotFound))),
        }
    }
}
