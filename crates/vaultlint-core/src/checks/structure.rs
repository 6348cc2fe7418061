//! Directory structure check driven by a spec file

use vaultlint_spec::load_and_parse;

use super::{Check, CheckOutcome};
use crate::context::LintContext;
use crate::issue::{Issue, IssueCode};
use crate::validator::validate_tree;
use crate::Result;

/// Validates the vault tree against the spec file in the context.
///
/// Skipped when the context names no spec file.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructureCheck;

impl Check for StructureCheck {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn run(&self, ctx: &LintContext) -> Result<CheckOutcome> {
        let Some(spec_path) = &ctx.spec_path else {
            return Ok(CheckOutcome::Skipped {
                reason: "No specification file found".to_string(),
            });
        };

        let (globals, root) = load_and_parse(spec_path)?;

        if !ctx.vault_path.is_dir() {
            return Ok(CheckOutcome::Completed(vec![Issue::new(
                &ctx.vault_path,
                IssueCode::SpecError,
                "Validation root is not a directory",
            )]));
        }

        let issues = validate_tree(&ctx.vault_path, &globals, &root, ctx.collect_all);
        Ok(CheckOutcome::Completed(issues))
    }
}
