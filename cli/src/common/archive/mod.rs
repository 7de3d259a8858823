//! # ReplyPack Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//! Author: ReplyGuy Team
//! Repository: https://github.com/replyguy/replypack
//!
//! ## Overview
//!
//! This module serves as the main interface and organizational unit for
//! archive-related utilities within the ReplyPack CLI. It aggregates the
//! functionality for creating the distribution ZIP and for reporting on its
//! size relative to the Chrome Web Store upload limit.
//!
//! ## Architecture
//!
//! The module contains specialized submodules:
//!
//! - **`zip`**: Creates the distribution ZIP archive from a build output
//!   directory, one deflate-compressed entry per regular file.
//! - **`report`**: Derives the archive's size in megabytes and the
//!   limit-check outcome, and renders the summary block.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{report, zip};
//! use std::path::Path;
//!
//! # fn run() -> anyhow::Result<()> {
//! let summary = zip::create_zip_archive(Path::new("dist"), Path::new("extension.zip"))?;
//! let size = report::SizeReport::for_archive(&summary.output, 10.0)?;
//! report::print_summary(&summary.output, &size);
//! # Ok(())
//! # }
//! ```
//!

pub mod report;
pub mod zip;
