//! Filesystem capability consumed by the validator
//!
//! The validator only needs three questions answered about the tree it
//! walks. Putting them behind [`FsAccess`] lets tests drive the walk from an
//! in-memory tree while the binary uses [`StdFs`].

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// A single entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Base name of the entry
    pub name: String,
    /// Whether the entry is (or resolves to) a directory
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// Why a directory could not be listed.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("permission denied")]
    PermissionDenied,

    #[error(transparent)]
    Other(std::io::Error),
}

impl From<std::io::Error> for ListError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == ErrorKind::PermissionDenied {
            Self::PermissionDenied
        } else {
            Self::Other(err)
        }
    }
}

/// Read-only view of a filesystem.
pub trait FsAccess {
    /// Whether anything exists at `path` (symlinks are followed).
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is, or resolves to, a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the entries of the directory at `path`, in iteration order.
    fn list_entries(&self, path: &Path) -> Result<Vec<DirEntryInfo>, ListError>;
}

impl<T: FsAccess + ?Sized> FsAccess for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_entries(&self, path: &Path) -> Result<Vec<DirEntryInfo>, ListError> {
        (**self).list_entries(path)
    }
}

/// The host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl FsAccess for StdFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, path: &Path) -> Result<Vec<DirEntryInfo>, ListError> {
        // The ReadDir handle is drained and dropped here, before the caller
        // recurses into any child.
        let listing = fs::read_dir(path)?;
        Ok(collect_entries(path, listing, |entry: fs::DirEntry| DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: entry.path().is_dir(),
        }))
    }
}

/// Drain a directory iterator, skipping entries that fail to read.
fn collect_entries<E>(
    path: &Path,
    entries: impl Iterator<Item = std::io::Result<E>>,
    describe: impl Fn(E) -> DirEntryInfo,
) -> Vec<DirEntryInfo> {
    entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(describe(entry)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                None
            }
        })
        .collect()
}
