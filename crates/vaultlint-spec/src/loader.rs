//! Loading spec documents from disk

use std::path::Path;

use serde_yaml::Value;
use vaultlint_fs::{ConfigStore, NormalizedPath};

use crate::model::{DirNode, GlobalSettings};
use crate::{Result, SpecError, parse_spec};

/// Read and deserialize a spec file without interpreting it.
///
/// Each failure mode is reported as a distinct [`SpecError`] kind: the
/// file is missing, cannot be read, cannot be parsed, or parses to nothing
/// at all.
pub fn load_spec(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Err(SpecError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let store = ConfigStore::new();
    let value: Value = store
        .load(&NormalizedPath::new(path))
        .map_err(|e| match e {
            e if e.is_not_found() => SpecError::NotFound {
                path: path.to_path_buf(),
            },
            vaultlint_fs::Error::ConfigParse { message, .. } => SpecError::Unparseable {
                path: path.to_path_buf(),
                message,
            },
            vaultlint_fs::Error::Io { source, .. } => SpecError::Unreadable {
                path: path.to_path_buf(),
                source,
            },
            other => SpecError::Unparseable {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })?;

    if value.is_null() {
        return Err(SpecError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::info!(path = %path.display(), "Spec file loaded");
    Ok(value)
}

/// Load a spec file and parse it into the typed model.
pub fn load_and_parse(path: &Path) -> Result<(GlobalSettings, DirNode)> {
    let raw = load_spec(path)?;
    parse_spec(&raw)
}
