//! Changelog file scaffolding.
//!
//! The changelog is markdown with a top-level `# Changelog` heading followed
//! by `## vX.Y.Z` sections. Insertion is idempotent: a version that already
//! has a section leaves the file byte-identical.

use std::path::Path;

use gantry_core::error::{ChangelogError, Result};
use regex::Regex;
use tracing::info;

/// Build the placeholder section for a new version.
pub fn build_section(version: &str, release_date: &str) -> String {
    format!(
        "## v{version}\n\n\
         *Released: {release_date}*\n\n\
         ### Features\n\n\
         - TBD\n\n\
         ### Improvements\n\n\
         - TBD\n\n\
         ### Bug Fixes\n\n\
         - TBD\n\n"
    )
}

/// Ensure the changelog has a section for `version`.
///
/// Creates the file with its heading when absent. Returns `false` when the
/// section already existed and nothing was written.
pub fn ensure_version_section(path: &Path, version: &str, release_date: &str) -> Result<bool> {
    if !path.exists() {
        std::fs::write(path, "# Changelog\n\n").map_err(ChangelogError::Io)?;
    }

    let content = std::fs::read_to_string(path).map_err(ChangelogError::Io)?;

    let heading_re = Regex::new(&format!(r"(?m)^## v{}\b", regex::escape(version)))
        .expect("Invalid regex");
    if heading_re.is_match(&content) {
        info!(version, path = %path.display(), "changelog section already present");
        return Ok(false);
    }

    let mut lines: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();
    let insert_at = if lines.first().map(|l| l.trim()) == Some("# Changelog") {
        1
    } else {
        lines.insert(0, "# Changelog\n".to_string());
        lines.insert(1, "\n".to_string());
        2
    };

    lines.insert(insert_at, build_section(version, release_date));
    std::fs::write(path, lines.concat()).map_err(ChangelogError::Io)?;
    info!(version, path = %path.display(), "added changelog section");
    Ok(true)
}
