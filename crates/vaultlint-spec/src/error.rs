//! Error types for vaultlint-spec

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, SpecError>;

/// Coarse classification of a [`SpecError`].
///
/// Callers use this to tell a missing spec file (which may mean "skip
/// structure checks") apart from a broken one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecErrorKind {
    NotFound,
    Unreadable,
    Unparseable,
    Empty,
    Malformed,
    Write,
}

#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("Spec file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Could not read spec file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid spec file {path}: {message}")]
    Unparseable { path: PathBuf, message: String },

    #[error("Spec file is empty: {path}")]
    Empty { path: PathBuf },

    #[error("Malformed specification at {location}: {message}")]
    Malformed { location: String, message: String },

    #[error("Duplicate entry '{name}' under {parent}")]
    DuplicateName { parent: String, name: String },

    #[error("Failed to write spec file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: vaultlint_fs::Error,
    },
}

impl SpecError {
    pub(crate) fn malformed(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> SpecErrorKind {
        match self {
            Self::NotFound { .. } => SpecErrorKind::NotFound,
            Self::Unreadable { .. } => SpecErrorKind::Unreadable,
            Self::Unparseable { .. } => SpecErrorKind::Unparseable,
            Self::Empty { .. } => SpecErrorKind::Empty,
            Self::Malformed { .. } | Self::DuplicateName { .. } => SpecErrorKind::Malformed,
            Self::Write { .. } => SpecErrorKind::Write,
        }
    }

    /// Whether the data was read but does not describe a valid structure.
    pub fn is_malformed(&self) -> bool {
        self.kind() == SpecErrorKind::Malformed
    }
}
