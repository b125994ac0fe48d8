//! Application orchestrator.
//! Initializes logging, establishes the root boundary, invokes the requested
//! engine operation, and prints the report.

use anyhow::{Context, Result};
use tracing::{debug, error};

use refile::engine::{self, ScatterFilter};
use refile::errors::RelocateError;
use refile::guard::PathGuard;
use refile::output as out;

use crate::cli::{Cli, Command};
use crate::logging::{LogLevel, init_tracing};

/// Run the CLI application.
pub fn run(cli: Cli) -> Result<()> {
    let level = cli
        .log_level
        .as_deref()
        .and_then(LogLevel::parse)
        .unwrap_or_default();
    // Hold the guard so buffered file logs flush on exit.
    let _log_guard = init_tracing(&level, cli.log_file.as_deref(), cli.json)?;

    let root = match &cli.root {
        Some(r) => r.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let guard = PathGuard::new(&root)?;
    debug!(root = %guard.root().display(), "root boundary established");

    match cli.command {
        Command::Scatter {
            source,
            target,
            extensions,
            min_size,
            max_size,
        } => {
            let filter = ScatterFilter {
                extensions,
                min_size,
                max_size,
            };
            let report = engine::scatter(&guard, &source, &target, &filter)
                .inspect_err(report_engine_error)?;
            out::print_report(&report.log);
            out::print_success(&format!(
                "Scatter complete: {} file(s) moved",
                report.files_moved
            ));
            Ok(())
        }
        Command::Gather { flat, original } => {
            let report = engine::gather(&guard, &flat, &original)
                .inspect_err(report_engine_error)?;
            out::print_report(&report.log);
            out::print_success(&format!(
                "Gather complete: {} folder(s) created, {} file(s) moved",
                report.folders_created, report.files_moved
            ));
            Ok(())
        }
    }
}

/// Structured error event plus a short user-facing line; the process exit
/// code comes from propagating the error to main.
fn report_engine_error(e: &RelocateError) {
    match e {
        RelocateError::AccessDenied { path, root } => {
            error!(kind = "access_denied", path = %path.display(), root = %root.display(), "operation aborted")
        }
        RelocateError::DestinationExists(path) => {
            error!(kind = "destination_exists", path = %path.display(), "operation aborted")
        }
        RelocateError::InvalidRoot { path, .. } => {
            error!(kind = "invalid_root", path = %path.display(), "operation aborted")
        }
        RelocateError::Io { context, path, .. } => {
            error!(kind = "io", context, path = %path.display(), "operation aborted")
        }
    }
    out::print_error(&e.to_string());
}
