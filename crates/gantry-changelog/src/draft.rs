//! Changelog draft assembly and snapshot persistence.
//!
//! The draft is a structured snapshot of the commits since the last release,
//! not changelog prose. A downstream authoring step (human or automated)
//! turns the snapshot into the final section text.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use gantry_core::error::{ChangelogError, Result};
use gantry_tracker::IssueStore;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classify::Category;
use crate::group::Grouper;
use crate::reference::ReferenceExtractor;

/// Since-marker used when the repository has no release tag yet
pub const INITIAL_MARKER: &str = "initial commit";

/// Structured changelog draft, one snapshot per invocation.
///
/// Immutable after assembly. Every commit in `commits` is represented exactly
/// once across `grouped` and `beads_issues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogDraft {
    /// Version the draft is for
    pub version: String,
    /// Release date
    pub date: NaiveDate,
    /// Release tag the range starts at, or [`INITIAL_MARKER`]
    pub since_tag: String,
    /// Number of commits covered
    pub commit_count: usize,
    /// Raw subjects in reverse-chronological git order
    pub commits: Vec<String>,
    /// Category → cleaned messages, fixed layout order
    pub grouped: BTreeMap<Category, Vec<String>>,
    /// Referenced tracker issues, id → title
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub beads_issues: BTreeMap<String, String>,
}

impl ChangelogDraft {
    /// Write the snapshot as pretty JSON, replacing any previous snapshot.
    pub fn write_snapshot(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(ChangelogError::Io)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| ChangelogError::SnapshotWriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), commits = self.commit_count, "wrote draft snapshot");
        Ok(())
    }
}

/// Builds [`ChangelogDraft`] aggregates from grouped commit subjects.
pub struct DraftAssembler<'a> {
    grouper: Grouper<'a>,
}

impl<'a> DraftAssembler<'a> {
    /// Create an assembler over the given extractor and issue store
    pub fn new(extractor: &'a ReferenceExtractor, store: &'a IssueStore) -> Self {
        Self {
            grouper: Grouper::new(extractor, store),
        }
    }

    /// Assemble a draft, or `None` when there is nothing to draft.
    ///
    /// `since_tag: None` means the commit range covered full history and the
    /// marker becomes [`INITIAL_MARKER`].
    pub fn assemble(
        &self,
        version: &str,
        date: NaiveDate,
        since_tag: Option<&str>,
        subjects: Vec<String>,
    ) -> Option<ChangelogDraft> {
        if subjects.is_empty() {
            info!("no commits since last release, skipping draft");
            return None;
        }

        let grouped = self.grouper.group(&subjects);
        Some(ChangelogDraft {
            version: version.to_string(),
            date,
            since_tag: since_tag.unwrap_or(INITIAL_MARKER).to_string(),
            commit_count: subjects.len(),
            commits: subjects,
            grouped: grouped.by_category,
            beads_issues: grouped.by_tracker,
        })
    }
}
