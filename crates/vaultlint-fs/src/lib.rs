//! Filesystem abstraction for vaultlint
//!
//! Provides the filesystem capability the validator walks with, path
//! helpers for reporting, and format-agnostic config loading.

pub mod access;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use access::{DirEntryInfo, FsAccess, ListError, StdFs};
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::{NormalizedPath, relativize};
