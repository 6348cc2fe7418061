//! Aggregated result of a lint run

use std::time::Duration;

use serde::Serialize;

use crate::issue::Issue;

/// Overall outcome of a lint run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// No issues found
    Passed,
    /// At least one issue found
    Failed,
}

/// A check that did not run, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCheck {
    pub name: String,
    pub reason: String,
}

/// Report from running one or more checks
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub status: CheckStatus,
    pub issues: Vec<Issue>,
    /// Names of the checks that ran to completion
    pub checks_run: Vec<String>,
    pub skipped: Vec<SkippedCheck>,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl CheckReport {
    /// An empty, passing report
    pub fn new() -> Self {
        Self {
            status: CheckStatus::Passed,
            issues: Vec::new(),
            checks_run: Vec::new(),
            skipped: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Record a check that completed with the given issues
    pub fn record(&mut self, check: &str, issues: Vec<Issue>) {
        self.checks_run.push(check.to_string());
        self.issues.extend(issues);
        self.refresh_status();
    }

    /// Record a check that was skipped
    pub fn record_skip(&mut self, check: &str, reason: impl Into<String>) {
        self.skipped.push(SkippedCheck {
            name: check.to_string(),
            reason: reason.into(),
        });
    }

    /// Merge two reports, combining their issues and check lists
    pub fn merge(mut self, other: CheckReport) -> Self {
        self.issues.extend(other.issues);
        self.checks_run.extend(other.checks_run);
        self.skipped.extend(other.skipped);
        self.elapsed += other.elapsed;
        self.refresh_status();
        self
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    /// Issues sorted by path, then code, for stable display.
    ///
    /// Listing order of undeclared entries depends on the platform, so
    /// reporters should prefer this over `issues` when output is compared.
    pub fn sorted_issues(&self) -> Vec<&Issue> {
        let mut sorted: Vec<&Issue> = self.issues.iter().collect();
        sorted.sort_by(|a, b| a.path.cmp(&b.path).then(a.code.cmp(&b.code)));
        sorted
    }

    fn refresh_status(&mut self) {
        self.status = if self.issues.is_empty() {
            CheckStatus::Passed
        } else {
            CheckStatus::Failed
        };
    }
}

impl Default for CheckReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueCode;

    #[test]
    fn test_new_report_passes() {
        let report = CheckReport::new();
        assert_eq!(report.status, CheckStatus::Passed);
        assert!(report.issues.is_empty());
        assert!(report.checks_run.is_empty());
    }

    #[test]
    fn test_record_with_issues_fails() {
        let mut report = CheckReport::new();
        report.record("structure", vec![Issue::new("a", IssueCode::MissingDir, "m")]);
        assert_eq!(report.status, CheckStatus::Failed);
        assert_eq!(report.checks_run, vec!["structure".to_string()]);
    }

    #[test]
    fn test_record_skip_keeps_status() {
        let mut report = CheckReport::new();
        report.record_skip("structure", "No specification file found");
        assert!(report.passed());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_merge_reports() {
        let mut failing = CheckReport::new();
        failing.record("structure", vec![Issue::new("x", IssueCode::TypeMismatch, "m")]);
        let mut passing = CheckReport::new();
        passing.record("other", Vec::new());

        let merged = passing.merge(failing);
        assert_eq!(merged.status, CheckStatus::Failed);
        assert_eq!(merged.checks_run.len(), 2);
        assert_eq!(merged.issues.len(), 1);
    }

    #[test]
    fn test_sorted_issues_orders_by_path_then_code() {
        let mut report = CheckReport::new();
        report.record(
            "structure",
            vec![
                Issue::new("b", IssueCode::UnexpectedFile, "m"),
                Issue::new("a", IssueCode::UnexpectedDir, "m"),
                Issue::new("a", IssueCode::MissingDir, "m"),
            ],
        );

        let order: Vec<(String, IssueCode)> = report
            .sorted_issues()
            .into_iter()
            .map(|i| (i.display_path(), i.code))
            .collect();
        assert_eq!(
            order,
            vec![
                ("a".to_string(), IssueCode::MissingDir),
                ("a".to_string(), IssueCode::UnexpectedDir),
                ("b".to_string(), IssueCode::UnexpectedFile),
            ]
        );
    }
}
