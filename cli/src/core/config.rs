//! # ReplyPack Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: ReplyGuy Team
//! Repository: https://github.com/replyguy/replypack
//!
//! ## Overview
//!
//! This module implements the configuration system for ReplyPack, handling
//! loading, merging, validation, and access to configuration data. It supports
//! a multi-level configuration approach that combines defaults, user settings,
//! and project-specific overrides.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are validated and expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.replypack.toml` in current directory or ancestors
//! 2. User-specific `~/.config/replypack/config.toml`
//! 3. Default values defined in the code
//!
//! The built-in defaults reproduce the original packaging script: source
//! directory `dist`, output `replyguy-chrome-extension-v1.0.zip`, and the
//! Chrome Web Store's 10 MB upload limit.
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//!
//! // Access packaging settings
//! let source_dir = &cfg.packaging.source_dir;
//! let output = &cfg.packaging.output;
//! let limit = cfg.packaging.limit_mb;
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{ReplypackError, Result}; // Use error from the same core module
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub packaging: PackagingConfig,
    // Add other top-level configuration sections here
}

/// Configuration for the packaging operation (`replypack pack` / `replypack check`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PackagingConfig {
    /// Build output directory to package (can use ~). Will be expanded.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// Filename of the archive to produce (can use ~). Will be expanded.
    #[serde(default = "default_output")]
    pub output: String,
    /// Size limit in megabytes used for the upload-size check.
    #[serde(default = "default_limit_mb")]
    pub limit_mb: f64,
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output: default_output(),
            limit_mb: default_limit_mb(),
        }
    }
}

// --- Default value functions ---
// These are the literals the original packaging flow used, kept as the
// out-of-the-box behavior when no config file overrides them.
fn default_source_dir() -> String {
    "dist".to_string()
}
fn default_output() -> String {
    "replyguy-chrome-extension-v1.0.zip".to_string()
}
fn default_limit_mb() -> f64 {
    10.0 // Chrome Web Store upload limit
}

// --- Configuration Loading Functions ---
const PROJECT_CONFIG_FILENAME: &str = ".replypack.toml";

/// Loads the final merged configuration from user and project files.
///
/// Precedence: project `.replypack.toml` > user config file > built-in
/// defaults. Paths are `~`-expanded and the result validated before use.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ReplyGuy", "replypack") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.replypack.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Merges user and project configs field by field.
///
/// A project value wins when it differs from the built-in default; otherwise
/// the user value (which may itself be the default) is kept.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.packaging.source_dir = if project_cfg.packaging.source_dir != default_source_dir() {
        project_cfg.packaging.source_dir
    } else {
        user.packaging.source_dir
    };
    merged.packaging.output = if project_cfg.packaging.output != default_output() {
        project_cfg.packaging.output
    } else {
        user.packaging.output
    };
    merged.packaging.limit_mb = if project_cfg.packaging.limit_mb != default_limit_mb() {
        project_cfg.packaging.limit_mb
    } else {
        user.packaging.limit_mb
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    config.packaging.source_dir = shellexpand::tilde(&config.packaging.source_dir).into_owned();
    debug!("Expanded source directory: {}", config.packaging.source_dir);
    config.packaging.output = shellexpand::tilde(&config.packaging.output).into_owned();
    debug!("Expanded output path: {}", config.packaging.output);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.packaging.source_dir.is_empty() {
        return Err(anyhow!(ReplypackError::Config(
            "Packaging configuration cannot have an empty source directory.".to_string()
        )));
    }
    if config.packaging.output.is_empty() {
        return Err(anyhow!(ReplypackError::Config(
            "Packaging configuration cannot have an empty output path.".to_string()
        )));
    }
    if !config.packaging.limit_mb.is_finite() || config.packaging.limit_mb <= 0.0 {
        return Err(anyhow!(ReplypackError::Config(format!(
            "Invalid size limit: '{}'. Expected a positive number of megabytes.",
            config.packaging.limit_mb
        ))));
    }
    info!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [packaging]
            source_dir = "build"
            output = "my-extension.zip"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.packaging.source_dir, "build");
        assert_eq!(config.packaging.output, "my-extension.zip");
        assert_eq!(config.packaging.limit_mb, default_limit_mb()); // Default
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").expect("Failed to parse TOML");
        assert_eq!(config.packaging.source_dir, "dist");
        assert_eq!(config.packaging.output, "replyguy-chrome-extension-v1.0.zip");
        assert_eq!(config.packaging.limit_mb, 10.0);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let toml_content = r#"
            [packaging]
            source_dirr = "typo"
        "#;
        assert!(toml::from_str::<Config>(toml_content).is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            packaging: PackagingConfig {
                source_dir: "~/extension/dist".to_string(),
                output: "/absolute/out.zip".to_string(),
                ..Default::default()
            },
        };

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.packaging.source_dir,
            home_dir.join("extension/dist").to_string_lossy()
        );
        assert_eq!(config.packaging.output, "/absolute/out.zip"); // Absolute path unchanged
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            packaging: PackagingConfig {
                source_dir: "user-dist".to_string(),
                output: "user.zip".to_string(),
                limit_mb: 5.0,
            },
        };
        let project = Config {
            packaging: PackagingConfig {
                source_dir: "project-dist".to_string(),
                ..Default::default() // output/limit left at defaults
            },
        };

        let merged = merge_configs(user, Some(project));

        // Project value differs from the default, so it wins.
        assert_eq!(merged.packaging.source_dir, "project-dist");
        // Project left these at their defaults, so the user values survive.
        assert_eq!(merged.packaging.output, "user.zip");
        assert_eq!(merged.packaging.limit_mb, 5.0);
    }

    #[test]
    fn test_merge_without_project_config() {
        let user = Config {
            packaging: PackagingConfig {
                limit_mb: 2.5,
                ..Default::default()
            },
        };
        let merged = merge_configs(user, None);
        assert_eq!(merged.packaging.limit_mb, 2.5);
        assert_eq!(merged.packaging.source_dir, "dist");
    }

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_limit() {
        let config = Config {
            packaging: PackagingConfig {
                limit_mb: 0.0,
                ..Default::default()
            },
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid size limit"));
    }

    #[test]
    fn test_validate_config_empty_output() {
        let config = Config {
            packaging: PackagingConfig {
                output: String::new(),
                ..Default::default()
            },
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty output path"));
    }
}
