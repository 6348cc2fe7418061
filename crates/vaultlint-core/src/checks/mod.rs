//! Check registry
//!
//! A lint run executes every registered [`Check`] against one
//! [`LintContext`] and folds the results into a [`CheckReport`].

mod structure;

pub use structure::StructureCheck;

use std::time::Instant;

use crate::context::LintContext;
use crate::issue::Issue;
use crate::report::CheckReport;
use crate::Result;

/// What a single check produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Completed(Vec<Issue>),
    Skipped { reason: String },
}

/// A validation that can be run against a vault
pub trait Check {
    /// Short identifier used in reports and logs
    fn name(&self) -> &'static str;

    /// Run the check. Discrepancies are returned as issues; an `Err` means
    /// the check's own configuration is unusable.
    fn run(&self, ctx: &LintContext) -> Result<CheckOutcome>;
}

/// Runs registered checks in registration order
pub struct CheckManager {
    checks: Vec<Box<dyn Check>>,
}

impl CheckManager {
    /// A manager with no checks registered
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// A manager with every built-in check registered
    pub fn with_builtins() -> Self {
        let mut manager = Self::new();
        manager.register(Box::new(StructureCheck));
        manager
    }

    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Run all checks. Stops at the first check whose configuration is
    /// unusable and returns that error.
    pub fn run(&self, ctx: &LintContext) -> Result<CheckReport> {
        tracing::info!(vault = %ctx.vault_path.display(), "Starting checks");
        let started = Instant::now();
        let mut report = CheckReport::new();

        for check in &self.checks {
            match check.run(ctx)? {
                CheckOutcome::Completed(issues) => {
                    tracing::debug!(check = check.name(), issues = issues.len(), "Check completed");
                    report.record(check.name(), issues);
                }
                CheckOutcome::Skipped { reason } => {
                    tracing::info!(check = check.name(), %reason, "Check skipped");
                    report.record_skip(check.name(), reason);
                }
            }
        }

        report.elapsed = started.elapsed();
        tracing::info!(
            issues = report.issues.len(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "All checks completed"
        );
        Ok(report)
    }
}

impl Default for CheckManager {
    fn default() -> Self {
        Self::with_builtins()
    }
}
