//! # ReplyPack Pack Command
//!
//! File: cli/src/commands/pack.rs
//! Author: ReplyGuy Team
//! Repository: https://github.com/replyguy/replypack
//!
//! ## Overview
//!
//! This module implements the `replypack pack` command, which packages the
//! extension's build output directory into the single ZIP archive that gets
//! uploaded to the Chrome Web Store, then reports the archive's size against
//! the store's upload limit.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Parse command arguments (source directory, output path, size limit).
//! 2. Load the ReplyPack configuration for any value not given on the
//!    command line; built-in defaults reproduce the original packaging
//!    script (`dist` → `replyguy-chrome-extension-v1.0.zip`, 10 MB limit).
//! 3. Validate that the source directory exists before any output is
//!    created.
//! 4. Ensure the output file's parent directory exists.
//! 5. Invoke the shared archive utility (`common::archive::zip`) which walks
//!    the tree, streams each regular file into a deflate-compressed entry,
//!    and prints one `Added:` line per file.
//! 6. Stat the finalized archive and print the summary block: created path,
//!    size in MB, and the limit warning or confirmation.
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # Package ./dist into replyguy-chrome-extension-v1.0.zip (the original flow)
//! replypack pack
//!
//! # Package a different build directory
//! replypack pack --source build/release
//!
//! # Write the archive somewhere else and tighten the size check
//! replypack pack --output out/extension.zip --limit 5
//! ```
//!
use crate::common::archive::{report, zip}; // Access shared archive utilities.
use crate::common::fs::io; // Filesystem checks.
use crate::core::config; // Access configuration loading.
use crate::core::error::Result; // Standard Result type for error handling.
use anyhow::Context; // For adding context to errors.
use clap::Parser; // For parsing command-line arguments.
use std::path::PathBuf;
use tracing::{debug, info}; // Logging framework utilities.

/// # Pack Arguments (`PackArgs`)
///
/// Defines the command-line arguments accepted by the `replypack pack`
/// subcommand. Every argument is optional; unset values fall back to the
/// configuration file and then to the built-in defaults.
#[derive(Parser, Debug)]
pub struct PackArgs {
    /// Optional: Build output directory to package.
    /// Defaults to the configured source directory (out of the box: "dist").
    #[arg(short, long)]
    source: Option<String>,

    /// Optional: Filename of the archive to produce.
    /// Defaults to the configured output (out of the box:
    /// "replyguy-chrome-extension-v1.0.zip"). Any existing file is replaced.
    #[arg(short, long)]
    output: Option<String>,

    /// Optional: Size limit in megabytes for the upload-size check.
    /// Defaults to the configured limit (out of the box: 10).
    #[arg(short, long)]
    limit: Option<f64>,
}

/// # Handle Pack Command (`handle_pack`)
///
/// The main handler function for the `replypack pack` command. It resolves
/// the effective source, output, and limit, builds the archive, and prints
/// the size report.
///
/// ## Arguments
///
/// * `args`: The parsed `PackArgs` struct containing command-line options.
///
/// ## Returns
///
/// * `Result<()>`: Returns `Ok(())` when the archive was written and
///   reported, or an `Err` if configuration loading, source validation, or
///   archive creation fails. A failed run never leaves a partial archive
///   behind.
pub fn handle_pack(args: PackArgs) -> Result<()> {
    info!("Handling pack command...");
    debug!("Pack args: {:?}", args);

    // 1. Load configuration for any value not given on the command line.
    let cfg = config::load_config().context("Failed to load ReplyPack configuration")?;

    // 2. Resolve effective parameters: CLI flag > config file > default.
    let source = PathBuf::from(args.source.unwrap_or(cfg.packaging.source_dir));
    let output = PathBuf::from(args.output.unwrap_or(cfg.packaging.output));
    let limit_mb = super::resolve_limit(args.limit, cfg.packaging.limit_mb)?;
    info!(
        "Packaging {} -> {} (limit {} MB)",
        source.display(),
        output.display(),
        limit_mb
    );

    // 3. Validate the source before creating any output.
    io::require_dir(&source)
        .with_context(|| format!("Cannot package '{}'", source.display()))?;

    // 4. Make sure the archive's destination directory exists.
    io::ensure_parent_dir(&output)
        .with_context(|| format!("Cannot prepare output location '{}'", output.display()))?;

    // 5. Build the archive. Progress (`Added:` lines) is printed as entries
    //    are written.
    let summary = zip::create_zip_archive(&source, &output)
        .with_context(|| format!("Failed to build archive '{}'", output.display()))?;
    info!(
        "Archive written: {} ({} entries)",
        summary.output.display(),
        summary.entries
    );

    // 6. Stat the finalized archive and print the summary block.
    let size = report::SizeReport::for_archive(&summary.output, limit_mb)?;
    report::print_summary(&summary.output, &size);

    Ok(())
}
