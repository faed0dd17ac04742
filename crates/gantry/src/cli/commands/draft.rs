//! Changelog draft command

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use tracing::info;

use gantry_changelog::{DraftAssembler, ReferenceExtractor};
use gantry_core::config::load_config_or_default;
use gantry_core::process::SystemRunner;
use gantry_core::version::VersionFile;
use gantry_git::GitCli;
use gantry_tracker::{issue_prefix, IssueStore};

use crate::cli::{output, Cli};
use crate::exit_codes;

/// Draft a categorized changelog snapshot from commit history
#[derive(Debug, Args)]
pub struct DraftCommand {
    /// Version the draft is for (defaults to the version file contents)
    #[arg(long)]
    pub version: Option<String>,

    /// Release date (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Snapshot file (defaults to the configured draft file)
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,
}

impl DraftCommand {
    /// Execute the draft command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(version = ?self.version, date = ?self.date, "executing draft command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let version = match &self.version {
            Some(version) => version.clone(),
            None => VersionFile::new(cwd.join(&config.version_file))
                .read()?
                .to_string(),
        };
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());

        let runner = SystemRunner::new();
        let git = GitCli::new(runner);
        let since_tag = git.latest_tag();
        let subjects = git.subjects_since(since_tag.as_deref());

        let prefix = issue_prefix(&runner, &config.tracker.cli, &config.tracker.default_prefix);
        let extractor = ReferenceExtractor::new(&prefix);
        let store = IssueStore::new(cwd.join(&config.tracker.store_file));
        let assembler = DraftAssembler::new(&extractor, &store);

        let Some(draft) = assembler.assemble(&version, date, since_tag.as_deref(), subjects)
        else {
            if !cli.quiet {
                output::info("No commits since last release; nothing to draft.");
            }
            return Ok(exit_codes::SUCCESS);
        };

        let snapshot_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(&config.draft_file));
        draft.write_snapshot(&snapshot_path)?;

        if !cli.quiet {
            output::success(&format!(
                "Drafted {} commits since {} to {}",
                draft.commit_count,
                style(&draft.since_tag).cyan(),
                style(snapshot_path.display()).cyan()
            ));
        }
        Ok(exit_codes::SUCCESS)
    }
}
