//! Release command

use chrono::Local;
use clap::Args;
use console::style;
use tracing::info;

use gantry_changelog::ensure_version_section;
use gantry_core::config::load_config_or_default;
use gantry_core::version::{bump, update_readme_version, BumpLevel, VersionFile};

use crate::cli::{output, Cli};
use crate::exit_codes;

/// Bump the version and update the dependent files
#[derive(Debug, Args)]
pub struct ReleaseCommand {
    /// Bump level (major, minor, patch)
    pub bump: BumpLevel,

    /// Do not modify the changelog
    #[arg(long)]
    pub skip_changelog: bool,
}

impl ReleaseCommand {
    /// Execute the release command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(bump = %self.bump, skip_changelog = self.skip_changelog, "executing release command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let version_file = VersionFile::new(cwd.join(&config.version_file));
        let current = version_file.read()?;
        let next = bump(&current, self.bump);
        version_file.write(&next)?;

        update_readme_version(&cwd.join(&config.readme_file), &next)?;

        if !self.skip_changelog {
            let today = Local::now().date_naive().to_string();
            ensure_version_section(
                &cwd.join(&config.changelog_file),
                &next.to_string(),
                &today,
            )?;
        }

        if !cli.quiet {
            output::success(&format!(
                "Updated version to {}",
                style(&next).green().bold()
            ));
        }
        Ok(exit_codes::SUCCESS)
    }
}
