//! # ReplyPack CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: ReplyGuy Team
//! Repository: https://github.com/replyguy/replypack
//!
//! ## Overview
//!
//! This module provides shared utility functions and re-exports common crates
//! used across multiple integration test files (`pack.rs`, `check.rs`, etc.).
//! This avoids code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs`
//! file in that directory (that isn't a module like this one) is compiled as
//! a separate test crate linked against the main `replypack` binary crate.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;

use std::fs;
use std::path::Path;

/// # Get ReplyPack Command (`replypack_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to the
/// compiled `replypack` binary target for the current test run.
///
/// This ensures tests execute the correct binary being built.
///
/// ## Panics
/// Panics if the `replypack` binary cannot be found via `Command::cargo_bin`.
///
/// ## Returns
/// * `Command` - An `assert_cmd::Command` ready to have arguments added and assertions run.
pub fn replypack_cmd() -> Command {
    Command::cargo_bin("replypack").expect("Failed to find replypack binary for testing")
}

/// # Set Up Dist Tree (`setup_dist_tree`)
///
/// Creates the canonical extension build tree inside `root`:
/// `dist/manifest.json` and `dist/icons/icon128.png` (two regular files,
/// one subdirectory).
///
/// ## Returns
/// * The path of the created `dist` directory.
pub fn setup_dist_tree(root: &Path) -> std::path::PathBuf {
    let dist = root.join("dist");
    fs::create_dir_all(dist.join("icons")).expect("Failed to create dist tree");
    fs::write(dist.join("manifest.json"), b"{\"manifest_version\": 3}")
        .expect("Failed to write manifest.json");
    fs::write(dist.join("icons/icon128.png"), b"\x89PNG fake image bytes")
        .expect("Failed to write icon128.png");
    dist
}
