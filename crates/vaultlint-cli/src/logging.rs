use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for the CLI.
///
/// Logs go to stderr so that stdout stays clean for reports. `RUST_LOG`
/// takes precedence; otherwise the level follows the `-v` count:
/// warn by default, info with `-v`, debug with `-vv`.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level_for(verbosity)))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
