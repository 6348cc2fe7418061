//! Vault and spec path resolution
//!
//! Turns the paths given on the command line into the resolved
//! [`LintContext`] the checks run against.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use vaultlint_core::LintContext;

use crate::error::{CliError, Result};

/// Spec file looked up in the vault root when `--spec` is not given
pub const DEFAULT_SPEC_FILE: &str = "vspec.yaml";

/// Windows MAX_PATH is 260; stay clear of the edge
#[cfg(windows)]
const WINDOWS_MAX_SAFE_PATH_LENGTH: usize = 240;

/// Build the lint context from raw command-line paths.
pub fn build_context(vault: &Path, spec: Option<&Path>, collect_all: bool) -> Result<LintContext> {
    let vault_path = validate_vault_path(vault)?;
    let spec_path = resolve_spec_file(&vault_path, spec)?;

    Ok(LintContext {
        vault_path,
        spec_path,
        collect_all,
    })
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}

/// Resolve a path to its canonical form. The path must exist.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path);

    #[cfg(windows)]
    if expanded.as_os_str().len() > WINDOWS_MAX_SAFE_PATH_LENGTH {
        return Err(CliError::user(format!(
            "Path '{}' exceeds maximum safe length",
            path.display()
        )));
    }

    dunce::canonicalize(&expanded).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            CliError::user(format!("The path '{}' does not exist", path.display()))
        }
        _ => CliError::user(format!("Could not resolve '{}': {}", path.display(), e)),
    })
}

/// Check that the vault path exists, is a directory, and can be listed.
pub fn validate_vault_path(path: &Path) -> Result<PathBuf> {
    let resolved = resolve_path(path)?;

    if !resolved.is_dir() {
        return Err(CliError::user(format!(
            "The path '{}' is not a directory",
            resolved.display()
        )));
    }

    match std::fs::read_dir(&resolved) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(CliError::user(format!(
                "The directory '{}' is not readable",
                resolved.display()
            )));
        }
        Err(e) => {
            return Err(CliError::user(format!(
                "Could not access '{}': {}",
                resolved.display(),
                e
            )));
        }
    }

    Ok(resolved)
}

/// Pick the spec file to use.
///
/// Priority:
/// 1. Explicit `--spec` argument (must resolve)
/// 2. `vspec.yaml` in the vault root
/// 3. None, and structure checks are skipped
pub fn resolve_spec_file(vault_path: &Path, spec_arg: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(spec) = spec_arg {
        let resolved = resolve_path(spec).map_err(|e| {
            CliError::user(format!("Could not resolve specified spec file: {}", e))
        })?;
        tracing::info!(spec = %resolved.display(), "Using specification file");
        return Ok(Some(resolved));
    }

    let default_spec = vault_path.join(DEFAULT_SPEC_FILE);
    if default_spec.is_file() {
        tracing::info!(spec = %default_spec.display(), "Found specification file in vault root");
        return Ok(Some(default_spec));
    }

    tracing::info!("No specification file found. Structure checks will be skipped.");
    Ok(None)
}
