//! CLI commands

mod changelog;
mod draft;
mod plan;
mod release;
mod version_info;

pub use changelog::ChangelogCommand;
pub use draft::DraftCommand;
pub use plan::PlanCommand;
pub use release::ReleaseCommand;
pub use version_info::VersionInfoCommand;
