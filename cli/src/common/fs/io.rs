//! # ReplyPack Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: ReplyGuy Team
//! Repository: https://github.com/replyguy/replypack
//!
//! ## Overview
//!
//! This module centralizes the fundamental filesystem checks required by the
//! packaging flow. It provides convenient, robust wrappers around standard
//! library `std::fs` functions for validating the source directory before a
//! walk starts and for preparing the location an archive will be written to.
//!
//! ## Architecture
//!
//! The module offers two focused utility functions:
//! - **`require_dir`**: Validates that a path exists and is a directory,
//!   returning a `ReplypackError::FileSystem` otherwise. The packaging flow
//!   calls this before creating any output, so a missing source directory
//!   never leaves an empty archive behind.
//! - **`ensure_parent_dir`**: Ensures the parent directory of a target file
//!   exists, creating intermediate directories if needed (`fs::create_dir_all`).
//!   Used so `pack --output nested/dir/out.zip` works without manual setup.
//!
//! These functions aim to simplify common I/O patterns and provide consistent
//! error handling with helpful context messages.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let source = Path::new("dist");
//! let output = Path::new("out/extension.zip");
//!
//! // Fail fast if the build output directory is missing.
//! io::require_dir(source)?;
//!
//! // Make sure the archive's destination directory exists.
//! io::ensure_parent_dir(output)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{ReplypackError, Result}; // Use standard Result and custom Error types
use anyhow::Context; // For adding context to errors
use std::fs; // Standard filesystem module
use std::path::Path; // Filesystem path type
use tracing::debug; // Logging utilities

/// Validates that `path` exists and is a directory.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the directory to validate.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the path is an existing directory.
///
/// # Errors
///
/// Returns a `ReplypackError::FileSystem` if:
/// - The path does not exist.
/// - The path exists but is not a directory (e.g., it's a file).
pub fn require_dir(path: &Path) -> Result<()> {
    // Check if the path exists in the filesystem.
    if !path.exists() {
        anyhow::bail!(ReplypackError::FileSystem(format!(
            "Directory not found: {}",
            path.display()
        )));
    }
    // Path exists, check if it's actually a directory.
    if !path.is_dir() {
        anyhow::bail!(ReplypackError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    }
    debug!("Directory exists: {}", path.display());
    Ok(())
}

/// Ensures the parent directory of a target file path exists.
///
/// If the target has a parent component that does not exist yet, it is
/// created recursively (similar to `mkdir -p`). A bare filename (no parent,
/// or an empty parent meaning the current directory) requires no action.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the file whose parent should exist.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the parent exists or was created.
///
/// # Errors
///
/// Returns an `Err` if creating the parent directory fails (e.g., due to
/// permissions).
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::parent` yields "" for bare filenames; nothing to create then.
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            debug!("Created directory: {}", parent.display());
        }
    }
    Ok(())
}
