//! Changelog scaffold command

use chrono::Local;
use clap::Args;
use tracing::info;

use gantry_changelog::ensure_version_section;
use gantry_core::config::load_config_or_default;
use gantry_core::version::VersionFile;

use crate::cli::{output, Cli};
use crate::exit_codes;

/// Scaffold a changelog section for a version
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Version without leading v (defaults to the version file contents)
    #[arg(long)]
    pub version: Option<String>,

    /// Release date in YYYY-MM-DD format (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(version = ?self.version, date = ?self.date, "executing changelog command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let version = match &self.version {
            Some(version) => version.clone(),
            None => VersionFile::new(cwd.join(&config.version_file))
                .read()?
                .to_string(),
        };
        let date = self
            .date
            .clone()
            .unwrap_or_else(|| Local::now().date_naive().to_string());

        let changelog_path = cwd.join(&config.changelog_file);
        let added = ensure_version_section(&changelog_path, &version, &date)?;

        if !cli.quiet {
            if added {
                output::success(&format!("Added changelog section for v{version}"));
            } else {
                output::info(&format!("Changelog already has v{version}"));
            }
        }
        Ok(exit_codes::SUCCESS)
    }
}
