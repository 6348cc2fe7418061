//! Conversion of raw configuration data into the typed model

use std::collections::HashSet;

use serde_yaml::{Mapping, Value};

use crate::model::{DirNode, FileNode, GlobalSettings, Node, ROOT_NAME, is_valid_name};
use crate::{Result, SpecError};

const TOP_LEVEL: &str = "(top level)";

/// Parse a loaded spec document into global settings and the synthetic root.
///
/// Fails on the first problem found; no partial tree is ever returned.
pub fn parse_spec(raw: &Value) -> Result<(GlobalSettings, DirNode)> {
    let map = raw
        .as_mapping()
        .ok_or_else(|| SpecError::malformed(TOP_LEVEL, "Top-level spec must be a mapping"))?;

    let globals = GlobalSettings {
        allow_extra_dirs: optional_bool(map, "allow_extra_dirs", TOP_LEVEL)?.unwrap_or(false),
        allow_extra_files: optional_bool(map, "allow_extra_files", TOP_LEVEL)?.unwrap_or(false),
    };

    let structure = map
        .get("structure")
        .and_then(Value::as_sequence)
        .ok_or_else(|| SpecError::malformed(TOP_LEVEL, "Top-level 'structure' must be a list"))?;

    let children = parse_children(structure, "")?;
    tracing::debug!(
        nodes = children.len(),
        allow_extra_dirs = globals.allow_extra_dirs,
        allow_extra_files = globals.allow_extra_files,
        "Parsed specification"
    );

    Ok((globals, DirNode::root(globals, children)))
}

/// Parse a list of node mappings declared under the directory at `parent`.
///
/// `parent` is the slash-joined location of the enclosing directory, empty
/// for the top level.
fn parse_children(items: &[Value], parent: &str) -> Result<Vec<Node>> {
    let mut seen = HashSet::new();
    let mut nodes = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let node = parse_node(item, parent, index)?;
        if !seen.insert(node.name().to_string()) {
            return Err(SpecError::DuplicateName {
                parent: if parent.is_empty() {
                    ROOT_NAME.to_string()
                } else {
                    parent.to_string()
                },
                name: node.name().to_string(),
            });
        }
        nodes.push(node);
    }

    Ok(nodes)
}

fn parse_node(item: &Value, parent: &str, index: usize) -> Result<Node> {
    let unnamed = if parent.is_empty() {
        format!("structure[{index}]")
    } else {
        format!("{parent}/children[{index}]")
    };

    let map = item
        .as_mapping()
        .ok_or_else(|| SpecError::malformed(&unnamed, "Each node must be a mapping"))?;

    let node_type = required_str(map, "type", &unnamed)?;
    let name = required_str(map, "name", &unnamed)?;
    if !is_valid_name(name) {
        return Err(SpecError::malformed(
            &unnamed,
            format!("Name '{name}' must be a single path component"),
        ));
    }
    let location = if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    };
    let optional = optional_bool(map, "optional", &location)?.unwrap_or(false);

    match node_type {
        "file" => {
            if map.contains_key("children") {
                return Err(SpecError::malformed(
                    &location,
                    format!("File '{name}' cannot have 'children'"),
                ));
            }
            if map.contains_key("allow_extra_dirs") || map.contains_key("allow_extra_files") {
                return Err(SpecError::malformed(
                    &location,
                    format!("File '{name}' cannot set 'allow_extra_dirs' or 'allow_extra_files'"),
                ));
            }
            Ok(Node::File(FileNode {
                name: name.to_string(),
                optional,
            }))
        }
        "dir" => {
            let allow_extra_dirs = optional_bool(map, "allow_extra_dirs", &location)?;
            let allow_extra_files = optional_bool(map, "allow_extra_files", &location)?;
            let children = match map.get("children") {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Sequence(items)) => parse_children(items, &location)?,
                Some(_) => {
                    return Err(SpecError::malformed(
                        &location,
                        format!("Dir '{name}': 'children' must be a list"),
                    ));
                }
            };
            Ok(Node::Dir(DirNode {
                name: name.to_string(),
                optional,
                allow_extra_dirs,
                allow_extra_files,
                children,
            }))
        }
        other => Err(SpecError::malformed(
            &location,
            format!("Unsupported node type '{other}' for '{name}'"),
        )),
    }
}

fn required_str<'a>(map: &'a Mapping, key: &str, location: &str) -> Result<&'a str> {
    match map.get(key) {
        None => Err(SpecError::malformed(
            location,
            format!("Missing required field '{key}'"),
        )),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.as_str()),
        Some(_) => Err(SpecError::malformed(
            location,
            format!("Field '{key}' must be a non-empty string"),
        )),
    }
}

/// A boolean field that may be absent. Present-but-not-boolean is an error,
/// including an explicit `null`.
fn optional_bool(map: &Mapping, key: &str, location: &str) -> Result<Option<bool>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(SpecError::malformed(
            location,
            format!("Field '{key}' must be a boolean"),
        )),
    }
}
