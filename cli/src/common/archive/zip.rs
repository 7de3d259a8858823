//! # ReplyPack ZIP Archive Operations (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//! Author: ReplyGuy Team
//! Repository: https://github.com/replyguy/replypack
//!
//! ## Overview
//!
//! This module provides the functionality for creating the distribution ZIP
//! archive. Its primary use within ReplyPack is to package the extension's
//! `dist/` build output into the single `.zip` file that gets uploaded to the
//! Chrome Web Store (`replypack pack`).
//!
//! ## Architecture
//!
//! The module leverages the `walkdir` crate for directory traversal and the
//! `zip` crate for writing the archive container.
//!
//! - The source directory is walked recursively in deterministic lexical
//!   order, so two runs over the same tree produce the same entry sequence.
//! - Every regular file is streamed into a deflate-compressed entry named by
//!   its path relative to the source root, with `/` separators regardless of
//!   platform. Directories and special files produce no entries.
//! - One `Added: <path>` progress line is printed per entry.
//! - The archive is finalized (central directory written) before the function
//!   returns; on any failure after the output file was created, the partial
//!   archive is deleted so a corrupt file never survives a failed run.
//!
//! ## Usage
//!
//! The main function `create_zip_archive` writes the archive to disk and
//! reports what it did.
//!
//! ```rust
//! use crate::common::archive::zip;
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let summary = zip::create_zip_archive(Path::new("dist"), Path::new("extension.zip"))?;
//! println!("Wrote {} entries to {}", summary.entries, summary.output.display());
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{ReplypackError, Result}; // Use the standard Result type from the core module
use anyhow::Context; // For adding contextual information to errors
use std::fs::File;
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Outcome of a successful archive build: how many entries were written and
/// where the archive landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Number of file entries written to the archive.
    pub entries: usize,
    /// Path of the finalized archive file.
    pub output: PathBuf,
}

/// # Create Distribution ZIP Archive (`create_zip_archive`)
///
/// Packages every regular file under `source_root` into a freshly created
/// ZIP archive at `output_path`, preserving paths relative to `source_root`.
///
/// The walk is depth-first in lexical order, each entry is compressed with
/// deflate, and an `Added: <relative-path>` line is printed per file. Any
/// existing file at `output_path` is overwritten.
///
/// ## Arguments
///
/// * `source_root` - The directory whose contents should be archived.
///                   Must exist and be a directory.
/// * `output_path` - Destination filename for the produced archive.
///
/// ## Returns
///
/// * `Result<ArchiveSummary>` - Entry count and output path on success.
///
/// ## Errors
///
/// Returns an `Err` if:
/// - `source_root` does not exist or is not a directory (checked before the
///   output file is created, so no output is produced in that case).
/// - The output file cannot be created (permissions, disk full).
/// - Any file or subdirectory cannot be read during the walk.
/// - Finalizing the ZIP central directory fails.
///
/// On any error after the output file was created, the partial archive is
/// removed before the error propagates.
pub fn create_zip_archive(source_root: &Path, output_path: &Path) -> Result<ArchiveSummary> {
    // Validate the source before touching the output path. A missing source
    // directory must not leave an empty archive behind.
    if !source_root.is_dir() {
        anyhow::bail!(ReplypackError::FileSystem(format!(
            "Source directory not found: {}",
            source_root.display()
        )));
    }

    // Create (or truncate) the output file. Ownership of the handle moves
    // into `write_archive`, which finalizes it on every successful path.
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create archive file {}", output_path.display()))?;

    match write_archive(file, source_root) {
        Ok(entries) => {
            debug!(
                "Archive finalized: {} ({} entries)",
                output_path.display(),
                entries
            );
            Ok(ArchiveSummary {
                entries,
                output: output_path.to_path_buf(),
            })
        }
        Err(e) => {
            // A half-written archive is worse than none; remove it before
            // propagating the original error.
            if let Err(cleanup_err) = fs::remove_file(output_path) {
                debug!(
                    "Could not remove partial archive {}: {}",
                    output_path.display(),
                    cleanup_err
                );
            }
            Err(e)
        }
    }
}

/// Walks `source_root` and streams every regular file into the ZIP writer,
/// returning the number of entries written.
fn write_archive(file: File, source_root: &Path) -> Result<usize> {
    let mut zip = ZipWriter::new(file);
    // Deflate entries; the Chrome Web Store's ingestion (and every standard
    // unzip tool) reads these.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut entries = 0usize;
    // Lexical order keeps the archive reproducible across runs and platforms.
    for entry in WalkDir::new(source_root).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!(
                "Failed to read directory entry under {}",
                source_root.display()
            )
        })?;
        // Only regular files become entries; directories and special files
        // are skipped (symlinks are not followed).
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(source_root).with_context(|| {
            format!(
                "Failed to compute path of {} relative to {}",
                path.display(),
                source_root.display()
            )
        })?;
        // ZIP entry names always use forward slashes.
        let name = relative
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/");

        zip.start_file(name.as_str(), options)
            .with_context(|| format!("Failed to start archive entry {}", name))?;
        let mut reader = File::open(path)
            .with_context(|| format!("Failed to open file {}", path.display()))?;
        io::copy(&mut reader, &mut zip)
            .with_context(|| format!("Failed to write {} into the archive", name))?;

        println!("Added: {}", name);
        entries += 1;
    }

    // Finalize the ZIP structure. This writes the central directory and
    // flushes the underlying file.
    zip.finish().context("Failed to finalize zip archive")?;

    Ok(entries)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::tempdir;
    use zip::ZipArchive;

    // Builds the scenario tree the tool exists for: a manifest at the root
    // and an icon inside a subdirectory.
    fn make_dist_tree(root: &Path) {
        fs::create_dir(root.join("icons")).unwrap();
        fs::write(root.join("manifest.json"), b"{\"manifest_version\": 3}").unwrap();
        fs::write(root.join("icons/icon128.png"), b"\x89PNG fake image bytes").unwrap();
    }

    fn open_archive(path: &Path) -> ZipArchive<File> {
        ZipArchive::new(File::open(path).unwrap()).expect("output should be a valid zip")
    }

    #[test]
    fn test_create_zip_archive_basic() -> Result<()> {
        let temp_dir = tempdir()?;
        let dist = temp_dir.path().join("dist");
        fs::create_dir(&dist)?;
        make_dist_tree(&dist);
        let output = temp_dir.path().join("out.zip");

        let summary = create_zip_archive(&dist, &output)?;

        // Exactly one entry per regular file, none for the directory.
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.output, output);

        let mut archive = open_archive(&output);
        assert_eq!(archive.len(), 2);

        // Round-trip: extracted bytes match the source tree exactly.
        let mut manifest = String::new();
        archive
            .by_name("manifest.json")
            .unwrap()
            .read_to_string(&mut manifest)
            .unwrap();
        assert_eq!(manifest, "{\"manifest_version\": 3}");

        let mut icon = Vec::new();
        archive
            .by_name("icons/icon128.png")
            .unwrap()
            .read_to_end(&mut icon)
            .unwrap();
        assert_eq!(icon, b"\x89PNG fake image bytes");
        Ok(())
    }

    #[test]
    fn test_entries_are_in_lexical_order() -> Result<()> {
        let temp_dir = tempdir()?;
        let dist = temp_dir.path().join("dist");
        fs::create_dir(&dist)?;
        make_dist_tree(&dist);
        let output = temp_dir.path().join("out.zip");

        create_zip_archive(&dist, &output)?;

        let mut archive = open_archive(&output);
        // "icons" sorts before "manifest.json", so the icon entry is written
        // first on every run.
        let first = archive.by_index(0).unwrap().name().to_string();
        let second = archive.by_index(1).unwrap().name().to_string();
        assert_eq!(first, "icons/icon128.png");
        assert_eq!(second, "manifest.json");
        Ok(())
    }

    #[test]
    fn test_empty_source_yields_empty_valid_archive() -> Result<()> {
        let temp_dir = tempdir()?;
        let dist = temp_dir.path().join("dist");
        fs::create_dir(&dist)?;
        let output = temp_dir.path().join("out.zip");

        let summary = create_zip_archive(&dist, &output)?;

        assert_eq!(summary.entries, 0);
        let archive = open_archive(&output);
        assert_eq!(archive.len(), 0);
        Ok(())
    }

    #[test]
    fn test_missing_source_fails_without_output() {
        let temp_dir = tempdir().unwrap();
        let dist = temp_dir.path().join("does-not-exist");
        let output = temp_dir.path().join("out.zip");

        let result = create_zip_archive(&dist, &output);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Source directory not found"));
        // The failure happened before the output file was created.
        assert!(!output.exists());
    }

    #[test]
    fn test_source_is_file_fails() {
        let temp_dir = tempdir().unwrap();
        let not_a_dir = temp_dir.path().join("file");
        fs::write(&not_a_dir, "data").unwrap();
        let output = temp_dir.path().join("out.zip");

        assert!(create_zip_archive(&not_a_dir, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_rerun_overwrites_previous_archive() -> Result<()> {
        let temp_dir = tempdir()?;
        let dist = temp_dir.path().join("dist");
        fs::create_dir(&dist)?;
        make_dist_tree(&dist);
        let output = temp_dir.path().join("out.zip");

        let first = create_zip_archive(&dist, &output)?;
        let second = create_zip_archive(&dist, &output)?;

        // Identical entry sets and identical decompressed content on an
        // unchanged tree; the archive is created fresh each time.
        assert_eq!(first.entries, second.entries);
        let mut archive = open_archive(&output);
        assert_eq!(archive.len(), 2);
        let mut manifest = String::new();
        archive
            .by_name("manifest.json")
            .unwrap()
            .read_to_string(&mut manifest)
            .unwrap();
        assert_eq!(manifest, "{\"manifest_version\": 3}");
        Ok(())
    }
}
