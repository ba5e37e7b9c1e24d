//! Configuration management for maxstrip.
//!
//! This module provides the [`Config`] struct which controls which files are processed.
//! Configuration can be loaded from:
//! - TOML files (`maxstrip.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the file
//! being stripped up to the filesystem root, plus the user's home directory.
//! Comment markers are fixed and not configurable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StripError};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["maxstrip.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

/// Main configuration struct for maxstrip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Files larger than this many bytes are skipped (default: no limit)
    #[serde(default)]
    pub max_file_size: Option<u64>,

    /// Files with more lines than this are skipped (default: no limit)
    #[serde(default)]
    pub max_lines: Option<usize>,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    pub max_file_size: Option<u64>,
    pub max_lines: Option<usize>,
}

impl Config {
    /// Validate configuration values
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.max_file_size == Some(0) {
            return Some("max_file_size must be at least 1".to_string());
        }
        if self.max_lines == Some(0) {
            return Some("max_lines must be at least 1".to_string());
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let partial = read_partial(path)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.max_file_size {
            self.max_file_size = Some(v);
        }
        if let Some(v) = partial.max_lines {
            self.max_lines = Some(v);
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the file's directory up to the root, then adds home directory config.
    /// Returns list of config file paths in order of priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Home directory config has the lowest priority
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let start_dir = if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Bare file names have an empty parent; fall back to the current directory
            match start_path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() && parent.is_dir() => {
                    Some(parent.to_path_buf())
                }
                _ => std::env::current_dir().ok(),
            }
        };

        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Root first, so more specific configs come later
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Files that fail to load are reported on stderr unless `silent` and skipped.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path, silent: bool) -> Self {
        let mut config = Self::default();
        for path in &Self::discover_config_files(start_path) {
            match read_partial(path) {
                Ok(partial) => config.apply_partial(&partial),
                Err(e) => {
                    if !silent {
                        eprintln!("Warning: {e}");
                    }
                }
            }
        }
        config
    }
}

fn read_partial(path: &Path) -> Result<PartialConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| StripError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| StripError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
