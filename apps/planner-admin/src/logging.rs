//! Global `tracing` subscriber for the admin binary.

use anyhow::Context;
use planner::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Filter directive for the given `-v` count, if any.
fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Effective filter: `-v` flags win over `RUST_LOG`, which wins over the
/// configured level.
fn build_filter(config: &LoggingConfig, verbose: u8) -> anyhow::Result<EnvFilter> {
    if let Some(directive) = verbosity_directive(verbose) {
        return Ok(EnvFilter::new(directive));
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .with_context(|| format!("invalid logging.level '{}'", config.level))
}

/// Install the global subscriber and bridge `log` records into it.
///
/// # Errors
/// Returns an error if the configured level is not a valid filter directive.
pub fn init(config: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let filter = build_filter(config, verbose)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    let installed = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    if let Err(e) = installed {
        // Already installed, e.g. by a test harness.
        tracing::debug!(error = %e, "tracing subscriber already set");
        return Ok(());
    }

    // sqlx and sea-orm still emit through `log`.
    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::debug!(error = %e, "log bridge already set");
    }
    Ok(())
}
