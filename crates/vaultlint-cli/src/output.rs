//! Rendering of lint results
//!
//! The core hands back a [`CheckReport`]; how it is shown is up to the
//! [`Reporter`] picked on the command line.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use vaultlint_core::{CheckReport, CheckStatus, Issue, LintContext, SkippedCheck};

use crate::cli::OutputFormat;
use crate::error::Result;

/// Presentation strategy for a lint run
pub trait Reporter {
    /// Called once the context is resolved, before any check runs.
    fn start(&self, ctx: &LintContext, out: &mut dyn Write) -> Result<()>;

    /// Called with the final report.
    fn finish(&self, ctx: &LintContext, report: &CheckReport, out: &mut dyn Write) -> Result<()>;
}

pub fn reporter_for(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter),
        OutputFormat::Json => Box::new(JsonReporter),
    }
}

/// Human-readable output
pub struct TextReporter;

impl Reporter for TextReporter {
    fn start(&self, ctx: &LintContext, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Checking vault: {}",
            ctx.vault_path.display().to_string().magenta().bold()
        )?;
        match &ctx.spec_path {
            Some(spec) => writeln!(out, "Using specification: {}", spec_name(spec).bold())?,
            None => writeln!(out, "Using default checks (no specification file)")?,
        }
        Ok(())
    }

    fn finish(&self, ctx: &LintContext, report: &CheckReport, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        match report.status {
            CheckStatus::Passed => writeln!(
                out,
                "{} Vault validation completed successfully",
                "✓".green()
            )?,
            CheckStatus::Failed => writeln!(out, "{} Vault validation failed", "✗".red())?,
        }

        writeln!(
            out,
            "  {}: {}",
            "Vault".dimmed(),
            ctx.vault_path.display().to_string().magenta().bold()
        )?;
        if let Some(spec) = &ctx.spec_path {
            writeln!(out, "  {}: {}", "Specification".dimmed(), spec_name(spec).bold())?;
        }
        writeln!(out, "  {}: {}", "Checks run".dimmed(), report.checks_run.len())?;
        let count = report.issues.len().to_string();
        let count = if report.passed() { count.bold() } else { count.red().bold() };
        writeln!(out, "  {}: {}", "Issues found".dimmed(), count)?;
        writeln!(
            out,
            "  {}: {}",
            "Time taken".dimmed(),
            format!("{:.1} seconds", report.elapsed.as_secs_f64()).dimmed()
        )?;

        for skipped in &report.skipped {
            writeln!(
                out,
                "  {} Skipped {}: {}",
                "⚠".yellow(),
                skipped.name,
                skipped.reason
            )?;
        }

        if !report.issues.is_empty() {
            writeln!(out)?;
            for issue in report.sorted_issues() {
                writeln!(out, "  {} {}", "✗".red(), issue.to_string().red())?;
            }
        }

        Ok(())
    }
}

/// Machine-readable output: one JSON document on `finish`
pub struct JsonReporter;

#[derive(Serialize)]
struct JsonReport<'a> {
    vault: String,
    spec: Option<String>,
    status: CheckStatus,
    checks_run: &'a [String],
    skipped: &'a [SkippedCheck],
    issues: &'a [Issue],
    elapsed_ms: u64,
}

impl Reporter for JsonReporter {
    fn start(&self, _ctx: &LintContext, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn finish(&self, ctx: &LintContext, report: &CheckReport, out: &mut dyn Write) -> Result<()> {
        let document = JsonReport {
            vault: ctx.vault_path.display().to_string(),
            spec: ctx.spec_path.as_ref().map(|p| p.display().to_string()),
            status: report.status,
            checks_run: &report.checks_run,
            skipped: &report.skipped,
            issues: &report.issues,
            elapsed_ms: report.elapsed.as_millis() as u64,
        };
        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)?;
        Ok(())
    }
}

fn spec_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
