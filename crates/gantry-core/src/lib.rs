//! Gantry Core - Core library for release automation
//!
//! This crate provides the shared error types, configuration, the version
//! source-of-truth model, and the subprocess capability interface used by the
//! other Gantry crates.

pub mod config;
pub mod error;
pub mod process;
pub mod version;

pub use config::{find_config, load_config, load_config_or_default, Config, TrackerConfig};
pub use error::{
    ChangelogError, ConfigError, GantryError, PlanError, Result, TrackerError, VersionError,
};
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use version::{bump, update_readme_version, BumpLevel, VersionFile};
