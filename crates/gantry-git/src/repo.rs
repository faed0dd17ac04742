//! Read-only git queries over the subprocess capability.
//!
//! Every query degrades rather than fails: a missing git binary, a repository
//! without tags, or unset identity config all map to documented fallbacks.

use gantry_core::process::CommandRunner;
use tracing::debug;

/// Fallback owner name when git identity is unavailable
pub const FALLBACK_NAME: &str = "User";

/// Fallback owner email when git identity is unavailable
pub const FALLBACK_EMAIL: &str = "user@example.com";

/// Local committer identity from git config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// user.name, or [`FALLBACK_NAME`]
    pub name: String,
    /// user.email, or [`FALLBACK_EMAIL`]
    pub email: String,
}

/// Git repository queries via the `git` CLI.
pub struct GitCli<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> GitCli<R> {
    /// Create a query handle using the given runner
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Most recent release tag reachable from HEAD, if any.
    pub fn latest_tag(&self) -> Option<String> {
        let stdout = self
            .runner
            .capture("git", &["describe", "--tags", "--abbrev=0"])?;
        let tag = stdout.trim();
        if tag.is_empty() {
            return None;
        }
        debug!(tag, "resolved latest release tag");
        Some(tag.to_string())
    }

    /// Commit subjects since `marker` in reverse-chronological order.
    ///
    /// With no marker the full history is covered. Unavailable git yields an
    /// empty list.
    pub fn subjects_since(&self, marker: Option<&str>) -> Vec<String> {
        let range;
        let mut args = vec!["log", "--pretty=format:%s"];
        if let Some(marker) = marker {
            range = format!("{marker}..HEAD");
            args.push(&range);
        }

        let Some(stdout) = self.runner.capture("git", &args) else {
            debug!("git log unavailable, treating history as empty");
            return Vec::new();
        };

        stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Local identity from `git config`, with literal fallbacks.
    pub fn identity(&self) -> Identity {
        let name = self
            .runner
            .capture("git", &["config", "user.name"])
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_NAME.to_string());
        let email = self
            .runner
            .capture("git", &["config", "user.email"])
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_EMAIL.to_string());
        Identity { name, email }
    }
}
