//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{
    ChangelogCommand, DraftCommand, PlanCommand, ReleaseCommand, VersionInfoCommand,
};

/// Gantry - release automation for template repositories
#[derive(Debug, Parser)]
#[command(name = "gantry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bump the version and update the dependent files
    Release(ReleaseCommand),

    /// Scaffold a changelog section for a version
    Changelog(ChangelogCommand),

    /// Draft a categorized changelog snapshot from commit history
    Draft(DraftCommand),

    /// Convert a plan document into tracker issue records
    Plan(PlanCommand),

    /// Write version-info build artifacts
    VersionInfo(VersionInfoCommand),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code.
    pub fn execute(self) -> anyhow::Result<i32> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Release(ref cmd) => cmd.execute(&self),
            Commands::Changelog(ref cmd) => cmd.execute(&self),
            Commands::Draft(ref cmd) => cmd.execute(&self),
            Commands::Plan(ref cmd) => cmd.execute(&self),
            Commands::VersionInfo(ref cmd) => cmd.execute(&self),
        }
    }
}
