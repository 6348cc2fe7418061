//! Re-serialization of the typed model into the raw spec shape
//!
//! Fields holding their default are left out, and `allow_extra_*` is only
//! written when a directory sets it, so parsing the output gives back the
//! same model.

use std::path::Path;

use serde_yaml::{Mapping, Value};
use vaultlint_fs::{ConfigStore, NormalizedPath};

use crate::model::{DirNode, GlobalSettings, Node};
use crate::{Result, SpecError};

/// Convert a parsed spec back into raw configuration data.
pub fn to_value(globals: &GlobalSettings, root: &DirNode) -> Value {
    let mut map = Mapping::new();
    map.insert("allow_extra_dirs".into(), Value::Bool(globals.allow_extra_dirs));
    map.insert("allow_extra_files".into(), Value::Bool(globals.allow_extra_files));
    map.insert(
        "structure".into(),
        Value::Sequence(root.children.iter().map(node_to_value).collect()),
    );
    Value::Mapping(map)
}

/// Render a parsed spec as YAML text.
pub fn to_yaml_string(globals: &GlobalSettings, root: &DirNode) -> serde_yaml::Result<String> {
    serde_yaml::to_string(&to_value(globals, root))
}

/// Write a parsed spec to disk, picking the format from the extension.
pub fn save_spec(path: &Path, globals: &GlobalSettings, root: &DirNode) -> Result<()> {
    ConfigStore::new()
        .save(&NormalizedPath::new(path), &to_value(globals, root))
        .map_err(|source| SpecError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), "Spec file written");
    Ok(())
}

fn node_to_value(node: &Node) -> Value {
    let mut map = Mapping::new();
    map.insert("type".into(), node.type_name().into());
    map.insert("name".into(), node.name().into());
    if node.is_optional() {
        map.insert("optional".into(), Value::Bool(true));
    }

    if let Node::Dir(dir) = node {
        if let Some(allow) = dir.allow_extra_dirs {
            map.insert("allow_extra_dirs".into(), Value::Bool(allow));
        }
        if let Some(allow) = dir.allow_extra_files {
            map.insert("allow_extra_files".into(), Value::Bool(allow));
        }
        if !dir.children.is_empty() {
            map.insert(
                "children".into(),
                Value::Sequence(dir.children.iter().map(node_to_value).collect()),
            );
        }
    }

    Value::Mapping(map)
}
