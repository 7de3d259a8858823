//! # ReplyPack Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: ReplyGuy Team
//! Repository: https://github.com/replyguy/replypack
//!
//! ## Overview
//!
//! This module aggregates the top-level commands that comprise the ReplyPack
//! CLI. It serves as the central point for importing and re-exporting command
//! modules to make them accessible to the main application entry point
//! (`main.rs`).
//!
//! ## Architecture
//!
//! Each command lives in its own module and defines its own clap arguments
//! structure plus a `handle_*` function implementing the command:
//!
//! - `pack`: Build the distribution ZIP from the extension's build output
//!   and report its size against the Chrome Web Store limit.
//! - `check`: Report the size and limit status of an existing archive
//!   without rebuilding it.
//!
use crate::core::error::{ReplypackError, Result};

/// Command for size-checking an existing archive.
pub mod check;
/// Command for packaging the build output into the distribution ZIP.
pub mod pack;

/// Resolves the effective size limit from an optional CLI override and the
/// configured fallback, rejecting values the size check cannot work with.
///
/// ## Errors
///
/// Returns a `ReplypackError::ArgumentParsing` if the override is not a
/// positive, finite number of megabytes.
pub(crate) fn resolve_limit(requested: Option<f64>, fallback: f64) -> Result<f64> {
    let limit = requested.unwrap_or(fallback);
    if !limit.is_finite() || limit <= 0.0 {
        anyhow::bail!(ReplypackError::ArgumentParsing(format!(
            "Invalid size limit '{}': expected a positive number of megabytes",
            limit
        )));
    }
    Ok(limit)
}
