//! Tree validation engine for vaultlint
//!
//! Walks a parsed structure specification in lock-step with a directory on
//! disk and reports every discrepancy as an [`Issue`]. Discrepancies are
//! data, never errors: the only error this crate returns is a specification
//! that could not be loaded.
//!
//! ```text
//!                 vaultlint-cli
//!                       |
//!                 vaultlint-core
//!                   /        \
//!        vaultlint-spec -- vaultlint-fs
//! ```

pub mod checks;
pub mod context;
pub mod error;
pub mod issue;
pub mod report;
pub mod validator;

pub use checks::{Check, CheckManager, CheckOutcome, StructureCheck};
pub use context::LintContext;
pub use error::{Error, Result};
pub use issue::{Issue, IssueCode};
pub use report::{CheckReport, CheckStatus, SkippedCheck};
pub use validator::{ValidateOptions, validate_tree, validate_tree_with};
