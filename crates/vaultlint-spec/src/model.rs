//! Typed specification model
//!
//! The tree is built once by the parser and is read-only afterwards. Each
//! directory owns its children by value; there are no back-references.

use std::path::{Component, Path};

/// Name given to the synthetic directory node standing for the vault root.
pub const ROOT_NAME: &str = "<root>";

/// Whether `name` is a single path component that can match a directory entry.
///
/// Separators of either platform, `.`, `..` and absolute or prefixed paths
/// are rejected.
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Vault-wide default extras policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalSettings {
    pub allow_extra_dirs: bool,
    pub allow_extra_files: bool,
}

impl GlobalSettings {
    pub fn new(allow_extra_dirs: bool, allow_extra_files: bool) -> Self {
        Self {
            allow_extra_dirs,
            allow_extra_files,
        }
    }

    /// The policy the top level of the vault starts from.
    pub fn policy(&self) -> EffectivePolicy {
        EffectivePolicy {
            allow_dirs: self.allow_extra_dirs,
            allow_files: self.allow_extra_files,
        }
    }
}

/// Extras policy in force inside one directory, after inheritance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectivePolicy {
    pub allow_dirs: bool,
    pub allow_files: bool,
}

/// A file the vault is expected to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub optional: bool,
}

impl FileNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A directory the vault is expected to contain.
///
/// `None` in an `allow_extra_*` field means "inherit from the enclosing
/// directory", which is not the same as an explicit `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    pub name: String,
    pub optional: bool,
    pub allow_extra_dirs: Option<bool>,
    pub allow_extra_files: Option<bool>,
    pub children: Vec<Node>,
}

/// The synthetic root directory of a parsed spec.
pub type RootSpec = DirNode;

impl DirNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            allow_extra_dirs: None,
            allow_extra_files: None,
            children: Vec::new(),
        }
    }

    /// The synthetic root: its children are the top-level `structure` list and
    /// its policy is seeded from the global defaults.
    pub fn root(globals: GlobalSettings, children: Vec<Node>) -> Self {
        Self {
            name: ROOT_NAME.to_string(),
            optional: false,
            allow_extra_dirs: Some(globals.allow_extra_dirs),
            allow_extra_files: Some(globals.allow_extra_files),
            children,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn allow_extra_dirs(mut self, allow: bool) -> Self {
        self.allow_extra_dirs = Some(allow);
        self
    }

    pub fn allow_extra_files(mut self, allow: bool) -> Self {
        self.allow_extra_files = Some(allow);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Resolve this directory's policy against the one it inherits.
    pub fn effective_policy(&self, inherited: EffectivePolicy) -> EffectivePolicy {
        EffectivePolicy {
            allow_dirs: self.allow_extra_dirs.unwrap_or(inherited.allow_dirs),
            allow_files: self.allow_extra_files.unwrap_or(inherited.allow_files),
        }
    }

    /// Look up a declared child by name. The last declaration wins.
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().rev().find(|child| child.name() == name)
    }
}

/// A node of the specification tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(FileNode),
    Dir(DirNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Dir(dir) => &dir.name,
        }
    }

    pub fn is_optional(&self) -> bool {
        match self {
            Node::File(file) => file.optional,
            Node::Dir(dir) => dir.optional,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir(_))
    }

    /// The `type` value this node is written with in a spec file.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::File(_) => "file",
            Node::Dir(_) => "dir",
        }
    }
}

impl From<FileNode> for Node {
    fn from(file: FileNode) -> Self {
        Node::File(file)
    }
}

impl From<DirNode> for Node {
    fn from(dir: DirNode) -> Self {
        Node::Dir(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names_are_single_components() {
        for name in [".obsidian", "index.md", "a..b", "~notes", "..hidden"] {
            assert!(is_valid_name(name), "{name} should be accepted");
        }
        for name in ["", ".", "..", "a/b", "a\\b", "/abs", "notes/", "./notes"] {
            assert!(!is_valid_name(name), "{name} should be rejected");
        }
    }

    #[test]
    fn test_unset_override_inherits() {
        let inherited = EffectivePolicy {
            allow_dirs: true,
            allow_files: false,
        };
        let dir = DirNode::new("notes");
        assert_eq!(dir.effective_policy(inherited), inherited);
    }

    #[test]
    fn test_explicit_false_overrides_inherited_true() {
        let inherited = EffectivePolicy {
            allow_dirs: true,
            allow_files: true,
        };
        let dir = DirNode::new("notes").allow_extra_dirs(false);
        assert_eq!(
            dir.effective_policy(inherited),
            EffectivePolicy {
                allow_dirs: false,
                allow_files: true,
            }
        );
    }

    #[test]
    fn test_root_is_seeded_from_globals() {
        let globals = GlobalSettings::new(true, false);
        let root = DirNode::root(globals, Vec::new());

        assert_eq!(root.name, ROOT_NAME);
        assert_eq!(root.allow_extra_dirs, Some(true));
        assert_eq!(root.allow_extra_files, Some(false));
        assert_eq!(root.effective_policy(EffectivePolicy::default()), globals.policy());
    }

    #[test]
    fn test_find_child_last_declaration_wins() {
        let dir = DirNode::new("x")
            .child(FileNode::new("a"))
            .child(DirNode::new("a"));
        assert!(dir.find_child("a").unwrap().is_dir());
        assert!(dir.find_child("b").is_none());
    }
}
