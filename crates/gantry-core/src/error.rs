//! Error types for Gantry

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GantryError
pub type Result<T> = std::result::Result<T, GantryError>;

/// Main error type for Gantry operations
#[derive(Debug, Error)]
pub enum GantryError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Plan-conversion errors
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Tracker-related errors
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse configuration at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Version-file errors. These are fatal configuration errors: without a
/// readable version literal there is nothing to release.
#[derive(Debug, Error)]
pub enum VersionError {
    /// Version file not found
    #[error("Version file not found at {0}")]
    FileNotFound(PathBuf),

    /// No version literal in the file
    #[error("Could not find __version__ literal in {0}")]
    LiteralNotFound(PathBuf),

    /// Failed to parse version
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to write the draft snapshot
    #[error("Failed to write draft snapshot to {path}: {reason}")]
    SnapshotWriteFailed { path: PathBuf, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Plan-conversion errors
#[derive(Debug, Error)]
pub enum PlanError {
    /// Plan file not found
    #[error("Plan file not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error reading plan: {0}")]
    Io(#[from] std::io::Error),
}

/// Tracker-related errors
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Failed to write issue records
    #[error("Failed to write issue records to {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GantryError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
