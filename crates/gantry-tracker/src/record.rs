//! Issue record model.

use serde::{Deserialize, Serialize};

/// Status stamped on every freshly created record
pub const STATUS_OPEN: &str = "open";

/// A single issue record as persisted for the tracker.
///
/// Field names follow the tracker's JSON schema (camelCase). `created_at` and
/// `updated_at` are identical at creation; this system never updates records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    /// Generated id: prefix plus random suffix
    pub id: String,
    /// Item title, priority marker stripped
    pub title: String,
    /// Synthesized description (plan file, parent, notes)
    pub description: String,
    /// Always [`STATUS_OPEN`] at creation
    pub status: String,
    /// Priority, default 2
    pub priority: u32,
    /// "feature" or "task"
    pub issue_type: String,
    /// Owner display name
    pub owner: String,
    /// Local timezone-aware RFC 3339 timestamp
    pub created_at: String,
    /// Creator email
    pub created_by: String,
    /// Equal to `created_at` at creation
    pub updated_at: String,
}
