//! # ReplyPack Check Command
//!
//! File: cli/src/commands/check.rs
//! Author: ReplyGuy Team
//! Repository: https://github.com/replyguy/replypack
//!
//! ## Overview
//!
//! This module implements the `replypack check` command, which reports the
//! size of an existing archive and whether it fits under the Chrome Web
//! Store upload limit, without rebuilding anything. Useful after manual
//! edits to the build, or to re-check an archive produced earlier.
//!
//! ## Architecture
//!
//! The command flow:
//! 1. Parse command arguments (archive path, size limit).
//! 2. Load configuration for any value not given on the command line; the
//!    default archive path is the configured pack output, so a bare
//!    `replypack check` inspects whatever a bare `replypack pack` produced.
//! 3. Stat the archive and print its path, size in MB, and the limit
//!    warning or confirmation.
//!
//! ## Examples
//!
//! ```bash
//! # Check the default archive (replyguy-chrome-extension-v1.0.zip)
//! replypack check
//!
//! # Check a specific archive against a tighter limit
//! replypack check out/extension.zip --limit 5
//! ```
//!
use crate::common::archive::report::SizeReport;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// # Check Arguments (`CheckArgs`)
///
/// Defines the command-line arguments accepted by the `replypack check`
/// subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Optional: Path of the archive to check.
    /// Defaults to the configured pack output (out of the box:
    /// "replyguy-chrome-extension-v1.0.zip").
    archive: Option<String>,

    /// Optional: Size limit in megabytes for the upload-size check.
    /// Defaults to the configured limit (out of the box: 10).
    #[arg(short, long)]
    limit: Option<f64>,
}

/// # Handle Check Command (`handle_check`)
///
/// Stats the archive and prints the size report.
///
/// ## Arguments
///
/// * `args`: The parsed `CheckArgs` struct containing command-line options.
///
/// ## Returns
///
/// * `Result<()>`: Returns `Ok(())` when the report was printed, or an
///   `Err` if the archive is missing or unreadable. An over-limit archive is
///   reported on stdout but is not an error.
pub fn handle_check(args: CheckArgs) -> Result<()> {
    info!("Handling check command...");
    debug!("Check args: {:?}", args);

    let cfg = config::load_config().context("Failed to load ReplyPack configuration")?;

    let archive = PathBuf::from(args.archive.unwrap_or(cfg.packaging.output));
    let limit_mb = super::resolve_limit(args.limit, cfg.packaging.limit_mb)?;

    let size = SizeReport::for_archive(&archive, limit_mb)
        .with_context(|| format!("Cannot check archive '{}'", archive.display()))?;

    println!("Archive: {}", archive.display());
    println!("Size: {:.2} MB", size.megabytes());
    println!("{}", size.status_line());

    Ok(())
}
