//! Plan conversion command

use clap::Args;
use console::style;
use tracing::info;

use gantry_core::config::load_config_or_default;
use gantry_core::error::PlanError;
use gantry_core::process::SystemRunner;
use gantry_git::GitCli;
use gantry_plan::{build_records, parse_plan, Author};
use gantry_tracker::{issue_prefix, write_records, IdAllocator};

use crate::cli::{output, Cli};
use crate::exit_codes;

/// Convert a plan document into tracker issue records
#[derive(Debug, Args)]
pub struct PlanCommand {
    /// Plan document (defaults to the configured plan file)
    #[arg(long)]
    pub plan: Option<std::path::PathBuf>,

    /// Record file (defaults to the configured records file)
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,
}

impl PlanCommand {
    /// Execute the plan command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(plan = ?self.plan, output = ?self.output, "executing plan command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let plan_path = self
            .plan
            .clone()
            .unwrap_or_else(|| cwd.join(&config.plan_file));
        if !plan_path.exists() {
            return Err(PlanError::FileNotFound(plan_path).into());
        }
        let content = std::fs::read_to_string(&plan_path).map_err(PlanError::Io)?;

        let items = parse_plan(content.lines());
        if items.is_empty() {
            output::warning("No plan items found. Check the template format.");
            return Ok(exit_codes::EMPTY_PLAN);
        }

        let runner = SystemRunner::new();
        let identity = GitCli::new(runner).identity();
        let author = Author {
            name: identity.name,
            email: identity.email,
        };
        let prefix = issue_prefix(&runner, &config.tracker.cli, &config.tracker.default_prefix);
        let allocator = IdAllocator::new(prefix);

        let plan_file_name = plan_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let records = build_records(&items, &plan_file_name, &allocator, &author);

        let records_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(&config.records_file));
        let count = write_records(&records_path, &records)?;

        if !cli.quiet {
            output::success(&format!(
                "Wrote {} issue records to {}",
                count,
                style(records_path.display()).cyan()
            ));
        }
        Ok(exit_codes::SUCCESS)
    }
}
