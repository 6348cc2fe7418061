//! vaultlint CLI
//!
//! Checks a vault directory against its folder-structure specification.

mod cli;
mod context;
mod error;
mod logging;
mod output;

use std::io::Write;

use clap::Parser;
use colored::Colorize;
use vaultlint_core::CheckManager;

use cli::Cli;
use error::{EXIT_SUCCESS, EXIT_VALIDATION_FAILED, Result};

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }

    let code = match run(&cli) {
        Ok(passed) if passed => EXIT_SUCCESS,
        Ok(_) => EXIT_VALIDATION_FAILED,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

/// Run the lint and report; returns whether the vault passed.
fn run(cli: &Cli) -> Result<bool> {
    let ctx = context::build_context(&cli.path, cli.spec.as_deref(), !cli.fail_fast)?;
    tracing::debug!(
        vault = %ctx.vault_path.display(),
        spec = ?ctx.spec_path,
        "Resolved lint context"
    );

    let reporter = output::reporter_for(cli.format);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    reporter.start(&ctx, &mut out)?;
    let report = CheckManager::with_builtins().run(&ctx)?;
    reporter.finish(&ctx, &report, &mut out)?;
    out.flush()?;

    Ok(report.passed())
}
