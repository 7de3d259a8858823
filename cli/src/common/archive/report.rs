//! # ReplyPack Archive Size Reporting (`common::archive::report`)
//!
//! File: cli/src/common/archive/report.rs
//! Author: ReplyGuy Team
//! Repository: https://github.com/replyguy/replypack
//!
//! ## Overview
//!
//! This module derives and renders the size report for a finalized archive:
//! the archive's byte size converted to megabytes, and the decision whether
//! it fits under the Chrome Web Store upload limit. Both `replypack pack`
//! (after building) and `replypack check` (standalone) use it.
//!
//! ## Architecture
//!
//! `SizeReport` is a small value type built from filesystem metadata:
//! - `megabytes()` converts with `bytes / (1024 * 1024)`.
//! - `within_limit()` applies the `size > limit` decision.
//! - `status_line()` renders the user-facing warning or confirmation line.
//!
//! The report is printed, never persisted.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Size of a finalized archive plus the limit it is judged against.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    /// Byte size of the archive file on disk.
    pub bytes: u64,
    /// Upload limit in megabytes.
    pub limit_mb: f64,
}

impl SizeReport {
    /// Builds a report by reading the archive's size from filesystem
    /// metadata.
    ///
    /// ## Errors
    ///
    /// Returns an `Err` if the archive is missing or its metadata cannot be
    /// read.
    pub fn for_archive(path: &Path, limit_mb: f64) -> Result<Self> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read archive metadata for {}", path.display()))?;
        Ok(Self {
            bytes: metadata.len(),
            limit_mb,
        })
    }

    /// Archive size in megabytes.
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MB
    }

    /// Whether the archive fits the limit. Only a size strictly over the
    /// limit triggers the warning.
    pub fn within_limit(&self) -> bool {
        self.megabytes() <= self.limit_mb
    }

    /// The warning or confirmation line shown to the user.
    pub fn status_line(&self) -> String {
        if self.within_limit() {
            "✓ File size is within Chrome Web Store limits".to_string()
        } else {
            format!(
                "WARNING: File exceeds Chrome Web Store {}MB limit!",
                self.limit_mb
            )
        }
    }
}

/// Prints the summary block shown after a successful `pack`: the created
/// archive path, its size to two decimal places, and the limit status.
pub fn print_summary(archive: &Path, report: &SizeReport) {
    println!();
    println!("Created: {}", archive.display());
    println!("Size: {:.2} MB", report.megabytes());
    println!("{}", report.status_line());
}
