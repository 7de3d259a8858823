//! # ReplyPack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: ReplyGuy Team
//! Repository: https://github.com/replyguy/replypack
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for the
//! shared utility modules used throughout the ReplyPack CLI. It aggregates
//! functionality for the cross-cutting concerns of the tool: archive
//! handling and filesystem operations.
//!
//! By centralizing these utilities under the `common::` namespace, ReplyPack
//! keeps a clear separation between command-specific logic (`commands::`) and
//! core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`archive`**: Creating the distribution ZIP and reporting its size
//!   against the Chrome Web Store limit. Includes the `zip` and `report`
//!   submodules.
//! - **`fs`**: Foundational filesystem checks like validating the source
//!   directory and preparing the archive's destination. Includes `io`.
//!
//! ## Usage
//!
//! Command handlers import specific functionality directly from the required
//! submodule within `common`.
//!
//! ```rust
//! use crate::common::{archive, fs};
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let source = Path::new("dist");
//! let output = Path::new("extension.zip");
//!
//! // Use Filesystem utilities
//! fs::io::require_dir(source)?;
//!
//! // Use Archive utilities
//! let summary = archive::zip::create_zip_archive(source, output)?;
//! # Ok(())
//! # }
//! ```
//!

/// Utilities for creating the distribution archive and reporting its size.
pub mod archive;
/// Utilities for filesystem checks (source validation, output preparation).
pub mod fs;
