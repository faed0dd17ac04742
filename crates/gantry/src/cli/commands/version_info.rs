//! Version-info artifact command

use clap::Args;
use console::style;
use tracing::info;

use gantry_core::config::load_config_or_default;
use gantry_core::version::VersionFile;

use crate::cli::{output, Cli};
use crate::exit_codes;

/// Write version-info build artifacts
#[derive(Debug, Args)]
pub struct VersionInfoCommand {}

impl VersionInfoCommand {
    /// Execute the version-info command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!("executing version-info command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let version = VersionFile::new(cwd.join(&config.version_file)).read()?;

        let build_dir = cwd.join(&config.build_dir);
        std::fs::create_dir_all(&build_dir)?;
        std::fs::write(
            build_dir.join("version_info.txt"),
            format!("Version={version}\n"),
        )?;
        std::fs::write(
            build_dir.join("version_info_updater.txt"),
            format!("UpdaterVersion={version}\n"),
        )?;

        if !cli.quiet {
            output::success(&format!(
                "Wrote version info for {} to {}",
                style(&version).green().bold(),
                style(build_dir.display()).cyan()
            ));
        }
        Ok(exit_codes::SUCCESS)
    }
}
