//! Validation issues
//!
//! An [`Issue`] is one discrepancy between the specification and the tree
//! on disk. Issues are plain output for reporters and exit-code decisions.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use vaultlint_fs::NormalizedPath;

/// Kind of discrepancy. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    /// A required directory does not exist
    MissingDir,
    /// A required file does not exist
    MissingFile,
    /// A declared entry exists with the other kind
    TypeMismatch,
    /// An undeclared directory where extra directories are not allowed
    UnexpectedDir,
    /// An undeclared file where extra files are not allowed
    UnexpectedFile,
    /// A directory could not be listed
    Permission,
    /// The check could not be applied to the tree it was given
    SpecError,
}

impl IssueCode {
    pub const ALL: [IssueCode; 7] = [
        IssueCode::MissingDir,
        IssueCode::MissingFile,
        IssueCode::TypeMismatch,
        IssueCode::UnexpectedDir,
        IssueCode::UnexpectedFile,
        IssueCode::Permission,
        IssueCode::SpecError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingDir => "MISSING_DIR",
            Self::MissingFile => "MISSING_FILE",
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::UnexpectedDir => "UNEXPECTED_DIR",
            Self::UnexpectedFile => "UNEXPECTED_FILE",
            Self::Permission => "PERMISSION",
            Self::SpecError => "SPEC_ERROR",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discrepancy found while validating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Location relative to the validation root, or absolute when it lies outside
    #[serde(serialize_with = "serialize_path")]
    pub path: PathBuf,
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<PathBuf>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code,
            message: message.into(),
        }
    }

    /// The path in forward-slash form, `.` for the root.
    pub fn display_path(&self) -> String {
        NormalizedPath::new(&self.path).to_string()
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}  ->  {}", self.code, self.message, self.display_path())
    }
}

fn serialize_path<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&NormalizedPath::new(path.as_ref()).to_string())
}
