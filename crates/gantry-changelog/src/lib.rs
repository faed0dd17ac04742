//! Gantry Changelog - commit classification and changelog drafting
//!
//! Turns raw commit subjects into a categorized draft snapshot: a rule
//! cascade classifies each subject, tracker references are split out and
//! resolved against the issue store, and the result is assembled into an
//! immutable [`ChangelogDraft`]. Also owns the idempotent scaffolding of
//! `## vX.Y.Z` sections in the changelog file itself.

pub mod classify;
pub mod draft;
pub mod group;
pub mod reference;
pub mod scaffold;

pub use classify::{classify, Category, Classification};
pub use draft::{ChangelogDraft, DraftAssembler, INITIAL_MARKER};
pub use group::{GroupedCommits, Grouper};
pub use reference::ReferenceExtractor;
pub use scaffold::{build_section, ensure_version_section};
