//! Tracing setup for the CLI.
//!
//! Resolution decisions and workspace warnings are emitted through `tracing`
//! by the library; this module decides which of them reach stderr.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an explicit log filter
pub const LOG_ENV: &str = "DEPSWITCH_LOG";

/// Initialize logging for the depswitch CLI
///
/// Logs go to stderr so stdout stays parseable. The filter comes from
/// `DEPSWITCH_LOG` when set (e.g. `DEPSWITCH_LOG=debug`); otherwise only
/// warnings are shown, or resolution decisions too when `verbose` is set.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "depswitch=info"
    } else {
        "depswitch=warn"
    }
}
