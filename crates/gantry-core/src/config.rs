//! Configuration loading
//!
//! Gantry reads an optional `gantry.toml`. Every field has a default, so a
//! repository with no config file at all works out of the box.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "gantry.toml";

/// Main configuration for Gantry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File holding the `__version__` literal
    pub version_file: PathBuf,

    /// Readme carrying the `**Version:**` marker
    pub readme_file: PathBuf,

    /// Changelog file for scaffolded sections
    pub changelog_file: PathBuf,

    /// Default plan document for issue conversion
    pub plan_file: PathBuf,

    /// Where the changelog draft snapshot is written
    pub draft_file: PathBuf,

    /// Where converted issue records are written
    pub records_file: PathBuf,

    /// Directory for version-info artifacts
    pub build_dir: PathBuf,

    /// Tracker integration
    pub tracker: TrackerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version_file: PathBuf::from("version.py"),
            readme_file: PathBuf::from("readme.md"),
            changelog_file: PathBuf::from("changelog.md"),
            plan_file: PathBuf::from("templates/plan_template.md"),
            draft_file: PathBuf::from("build/changelog_draft.json"),
            records_file: PathBuf::from("build/plan_issues.jsonl"),
            build_dir: PathBuf::from("build"),
            tracker: TrackerConfig::default(),
        }
    }
}

/// Configuration for the external issue tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Tracker CLI executable name
    pub cli: String,

    /// Line-delimited JSON issue store, relative to the repository root
    pub store_file: PathBuf,

    /// Issue prefix used when the tracker CLI cannot report one
    pub default_prefix: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            cli: "bd".to_string(),
            store_file: PathBuf::from(".beads/issues.jsonl"),
            default_prefix: "bd".to_string(),
        }
    }
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    info!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Find the configuration file in a directory or its parents.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            info!(path = %config_path.display(), "found config file");
            return Some(config_path);
        }
        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration or use defaults
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    match find_config(dir) {
        Some(path) => match load_config(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config unreadable, using defaults");
                (Config::default(), None)
            }
        },
        None => (Config::default(), None),
    }
}
