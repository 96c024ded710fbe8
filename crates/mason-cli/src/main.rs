//! # Mason CLI
//!
//! C++ project scaffolding in one command.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` (silently skipped if absent).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Dispatch the argument vector through the flag registry (`--help`
//!    early-exits here).
//! 4. Load configuration (file + defaults) and bootstrap the config layout.
//! 5. Run the selected flow (template listing or project creation).
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use tracing::{debug, info, instrument};

use mason_core::options::ProjectOptions;

use crate::{
    cli::CliOptions,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Initialise tracing ─────────────────────────────────────────────
    // Must happen before the dispatch pass so registration warnings and
    // dispatch diagnostics are captured.
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    // ── 2. Parse arguments ────────────────────────────────────────────────
    let args: Vec<String> = std::env::args().collect();
    if args.len() == 1 {
        print!("{}", cli::USAGE);
        return ExitCode::from(2);
    }

    let options = cli::parse(&args);
    debug!(?options, "Arguments dispatched");

    // Help wins over everything else, positional or not, and never depends
    // on a readable config.
    if options.help {
        print!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    // ── 3. Load configuration and bootstrap the layout ────────────────────
    let config = match AppConfig::load(None) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(config_error("failed to load configuration", e)),
    };
    if let Err(e) = config.ensure_layout() {
        return handle_error(config_error("failed to prepare config directories", e));
    }

    // ── 4. Run + 5. Error handling ────────────────────────────────────────
    let output = OutputManager::new(&config);
    match run(&args, options, &config, &output) {
        Ok(()) => {
            info!("mason completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e),
    }
}

/// Dispatch to the correct flow for the parsed options.
#[instrument(skip_all)]
fn run(
    args: &[String],
    options: CliOptions,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    // `--template` without a value is a query, not a scaffold.
    if options.template_requested && options.template.is_none() {
        return commands::templates::execute(config, output);
    }

    let Some(project_name) = cli::project_name(args) else {
        return Err(CliError::MissingProjectName);
    };

    let project = build_project(project_name, options, config);
    commands::create::execute(project, config, output)
}

/// Merge CLI flags over config defaults into the core options value.
///
/// Remaining `None`s fall through to the core's own fallbacks (binary name ←
/// project name, version "1.0.0").
fn build_project(project_name: &str, options: CliOptions, config: &AppConfig) -> ProjectOptions {
    ProjectOptions {
        project_name: project_name.to_owned(),
        binary_name: options.binary_name,
        version: options.version.or_else(|| config.defaults.version.clone()),
        description: options
            .description
            .or_else(|| config.defaults.description.clone()),
        shared: options.shared,
        template: options.template,
    }
}

fn config_error(message: &str, source: anyhow::Error) -> CliError {
    CliError::ConfigError {
        message: format!("{message}: {source:#}"),
        source: None,
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes — the format/suggestion machinery in `CliError`
/// is all exercised here.
fn handle_error(err: CliError) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message.  We write directly to stderr so the
    //    message appears even when stdout is redirected.
    //
    //    Colour is disabled when stderr is not a TTY (same logic as logging.rs).
    let verbose = std::env::var_os("RUST_LOG").is_some();
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
