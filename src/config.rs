//! Tool configuration.
//!
//! Every setting has a default that reproduces the stock behavior: scan
//! `items/`, write `items_structure.js`, last directory wins on a name
//! collision. A config file is only needed to change that.
//!
//! ## Config File Location
//!
//! 1. The path given with `--config`, or
//! 2. `items-manifest.toml` in the working directory, if present.
//!
//! Command-line flags override values from the file.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! root = "items"                                  # Directory to scan
//! output = "items_structure.js"                   # Generated file
//! collision = "overwrite"                         # or "merge"
//! sorted = false                                  # Sort listings by name
//! extensions = [".png", ".jpg", ".jpeg", ".gif"]  # Case-insensitive
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming::DEFAULT_EXTENSIONS;
use crate::scan::ScanOptions;
use crate::types::CollisionPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "items-manifest.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Directory to scan.
    pub root: String,
    /// File the generated manifest is written to.
    pub output: String,
    /// Behavior when two directories share a name.
    pub collision: CollisionPolicy,
    /// Sort directory listings by name for platform-independent output.
    pub sorted: bool,
    /// Filename suffixes (with leading dot) that count as images.
    pub extensions: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            root: "items".to_string(),
            output: "items_structure.js".to_string(),
            collision: CollisionPolicy::Overwrite,
            sorted: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ManifestConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.is_empty() {
            return Err(ConfigError::Validation("root must not be empty".into()));
        }
        if self.output.is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| !e.starts_with('.') || e.len() < 2)
        {
            return Err(ConfigError::Validation(format!(
                "extension {bad:?} must start with '.' followed by a suffix"
            )));
        }
        Ok(())
    }

    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output)
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            collision: self.collision,
            sorted: self.sorted,
            extensions: self.extensions.clone(),
        }
    }
}

/// Parse and validate a config file.
pub fn load_config_file(path: &Path) -> Result<ManifestConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ManifestConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Resolve the config for a run.
///
/// An explicit path must exist. Without one, `items-manifest.toml` in `dir`
/// is used when present, stock defaults otherwise.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ManifestConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    let implicit = dir.join(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        tracing::debug!("using config {}", implicit.display());
        return load_config_file(&implicit);
    }
    Ok(ManifestConfig::default())
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# items-manifest configuration
# ============================
#
# Every option is optional. The values below are the defaults and
# reproduce the tool's stock behavior.

# Directory to scan. Each directory below it (and the root itself) becomes
# a category named after the directory. Directories named "items" are never
# categories, but their subdirectories are still scanned.
root = "items"

# File the manifest is written to, as `const itemsStructure = {...};`.
# Overwritten on every run.
output = "items_structure.js"

# What happens when two directories have the same name:
#   "overwrite"  the directory scanned last replaces the earlier list
#   "merge"      lists are concatenated in scan order
collision = "overwrite"

# Sort directory listings by name. Off by default, which keeps the
# filesystem's own listing order.
sorted = false

# Filename suffixes that count as images. Matching ignores case.
extensions = [".png", ".jpg", ".jpeg", ".gif"]
"##
}
