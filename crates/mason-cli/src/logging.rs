//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; the library
//! crates only *emit* spans and events — they never touch subscribers.
//!
//! Verbosity is driven by `RUST_LOG` rather than a flag: argument parsing is
//! this tool's own machinery, and logging has to be live *before* the
//! dispatch pass runs so that registration and dispatch diagnostics are not
//! lost. With no `RUST_LOG` set, every crate defaults to WARN.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging() -> anyhow::Result<()> {
    // RUST_LOG wins; otherwise build our own filter string so each crate gets
    // the same default level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mason=warn,mason_core=warn,mason_args=warn"));

    // Detect colour support via the stdlib (stable since 1.70), honoring
    // NO_COLOR (https://no-color.org).
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    // `try_init` returns an error instead of panicking if a subscriber is
    // already set.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}
