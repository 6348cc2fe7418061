//! Recursive tree validation
//!
//! At each directory the declared children are checked first, in
//! declaration order, then the real entries are scanned for anything
//! undeclared. Extras policy flows strictly top-down: a directory's own
//! override applies to its subtree only.

use std::collections::HashSet;
use std::ops::ControlFlow;
use std::path::Path;

use vaultlint_fs::{FsAccess, ListError, StdFs, relativize};
use vaultlint_spec::{DirNode, EffectivePolicy, FileNode, GlobalSettings, Node, is_valid_name};

use crate::issue::{Issue, IssueCode};

/// Knobs for a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Collect every issue (`true`) or stop at the first one (`false`).
    pub collect_all: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self { collect_all: true }
    }
}

/// Validate the host filesystem under `root` against `spec`.
///
/// An empty result means the tree conforms.
pub fn validate_tree(
    root: &Path,
    globals: &GlobalSettings,
    spec: &DirNode,
    collect_all: bool,
) -> Vec<Issue> {
    validate_tree_with(&StdFs, root, globals, spec, ValidateOptions { collect_all })
}

/// Validate the tree under `root`, as seen through `fs`, against `spec`.
///
/// `spec` is treated as the synthetic root: it is never checked for
/// presence and always stands for `root` itself.
pub fn validate_tree_with<F: FsAccess>(
    fs: &F,
    root: &Path,
    globals: &GlobalSettings,
    spec: &DirNode,
    options: ValidateOptions,
) -> Vec<Issue> {
    let mut walker = Walker {
        fs,
        root,
        options,
        issues: Vec::new(),
    };

    let policy = spec.effective_policy(globals.policy());
    let _ = walker.check_contents(spec, root, policy);

    tracing::info!(
        root = %root.display(),
        issues = walker.issues.len(),
        "Structure validation finished"
    );
    walker.issues
}

struct Walker<'a, F> {
    fs: &'a F,
    root: &'a Path,
    options: ValidateOptions,
    issues: Vec<Issue>,
}

impl<F: FsAccess> Walker<'_, F> {
    /// Record an issue; breaks the walk in fail-fast mode.
    fn emit(&mut self, path: &Path, code: IssueCode, message: String) -> ControlFlow<()> {
        tracing::debug!(path = %path.display(), %code, "Issue");
        self.issues.push(Issue::new(relativize(self.root, path), code, message));
        if self.options.collect_all {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }

    fn check_dir(
        &mut self,
        node: &DirNode,
        path: &Path,
        inherited: EffectivePolicy,
    ) -> ControlFlow<()> {
        let policy = node.effective_policy(inherited);

        if !self.fs.exists(path) {
            if node.optional {
                return ControlFlow::Continue(());
            }
            return self.emit(
                path,
                IssueCode::MissingDir,
                format!("Required directory '{}' does not exist", node.name),
            );
        }

        if !self.fs.is_dir(path) {
            return self.emit(
                path,
                IssueCode::TypeMismatch,
                format!("Expected directory but found a non-directory: '{}'", node.name),
            );
        }

        self.check_contents(node, path, policy)
    }

    fn check_file(&mut self, node: &FileNode, path: &Path) -> ControlFlow<()> {
        if !self.fs.exists(path) {
            if node.optional {
                return ControlFlow::Continue(());
            }
            return self.emit(
                path,
                IssueCode::MissingFile,
                format!("Required file '{}' does not exist", node.name),
            );
        }

        if self.fs.is_dir(path) {
            return self.emit(
                path,
                IssueCode::TypeMismatch,
                format!("Expected file but found a directory named '{}'", node.name),
            );
        }

        ControlFlow::Continue(())
    }

    /// Check an existing directory: declared children, then extras.
    fn check_contents(
        &mut self,
        node: &DirNode,
        path: &Path,
        policy: EffectivePolicy,
    ) -> ControlFlow<()> {
        tracing::debug!(
            path = %path.display(),
            allow_dirs = policy.allow_dirs,
            allow_files = policy.allow_files,
            "Checking directory"
        );

        let declared: HashSet<&str> = node.children.iter().map(Node::name).collect();

        for child in &node.children {
            // Hand-built trees bypass the parser; never join a name that could
            // leave `path`.
            if !is_valid_name(child.name()) {
                self.emit(
                    path,
                    IssueCode::SpecError,
                    format!(
                        "Invalid entry name '{}': must be a single path component",
                        child.name()
                    ),
                )?;
                continue;
            }
            let child_path = path.join(child.name());
            match child {
                Node::File(file) => self.check_file(file, &child_path)?,
                Node::Dir(dir) => self.check_dir(dir, &child_path, policy)?,
            }
        }

        let entries = match self.fs.list_entries(path) {
            Ok(entries) => entries,
            Err(ListError::PermissionDenied) => {
                self.emit(
                    path,
                    IssueCode::Permission,
                    "Cannot list directory due to permissions".to_string(),
                )?;
                Vec::new()
            }
            Err(ListError::Other(e)) => {
                self.emit(path, IssueCode::Permission, format!("Cannot list directory: {e}"))?;
                Vec::new()
            }
        };

        for entry in entries {
            if declared.contains(entry.name.as_str()) {
                tracing::trace!(name = %entry.name, "Declared entry, skipping extras check");
                continue;
            }
            let entry_path = path.join(&entry.name);
            if entry.is_dir {
                if !policy.allow_dirs {
                    self.emit(
                        &entry_path,
                        IssueCode::UnexpectedDir,
                        format!("Unexpected directory '{}' is not allowed here", entry.name),
                    )?;
                }
            } else if !policy.allow_files {
                self.emit(
                    &entry_path,
                    IssueCode::UnexpectedFile,
                    format!("Unexpected file '{}' is not allowed here", entry.name),
                )?;
            }
        }

        ControlFlow::Continue(())
    }
}
