//! Inputs shared by every check in a lint run

use std::path::PathBuf;

/// Everything a check needs to know about the vault being linted.
///
/// Paths are expected to be resolved already; checks do not canonicalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintContext {
    pub vault_path: PathBuf,
    pub spec_path: Option<PathBuf>,
    /// Keep walking after the first issue
    pub collect_all: bool,
}

impl LintContext {
    pub fn new(vault_path: impl Into<PathBuf>) -> Self {
        Self {
            vault_path: vault_path.into(),
            spec_path: None,
            collect_all: true,
        }
    }

    pub fn with_spec(mut self, spec_path: impl Into<PathBuf>) -> Self {
        self.spec_path = Some(spec_path.into());
        self
    }

    pub fn fail_fast(mut self) -> Self {
        self.collect_all = false;
        self
    }
}
