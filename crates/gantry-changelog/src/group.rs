//! Partitioning commits into tracker references and category buckets.

use std::collections::BTreeMap;

use gantry_tracker::IssueStore;
use tracing::debug;

use crate::classify::{classify, Category};
use crate::reference::ReferenceExtractor;

/// Result of grouping a commit sequence.
///
/// Every input commit lands in exactly one of the two partitions: commits
/// with a tracker reference contribute an entry to `by_tracker`, everything
/// else is classified into `by_category`. Category buckets exist only when
/// non-empty; `BTreeMap` keeps them in the fixed [`Category`] layout order.
#[derive(Debug, Default)]
pub struct GroupedCommits {
    /// Category → cleaned messages, in input order within each bucket
    pub by_category: BTreeMap<Category, Vec<String>>,
    /// Tracker id → issue title (or the raw subject when no title is known)
    pub by_tracker: BTreeMap<String, String>,
}

/// Groups commits using reference extraction first, classification second.
pub struct Grouper<'a> {
    extractor: &'a ReferenceExtractor,
    store: &'a IssueStore,
}

impl<'a> Grouper<'a> {
    /// Create a grouper over the given extractor and issue store
    pub fn new(extractor: &'a ReferenceExtractor, store: &'a IssueStore) -> Self {
        Self { extractor, store }
    }

    /// Partition `subjects` (reverse-chronological, as delivered by git).
    pub fn group(&self, subjects: &[String]) -> GroupedCommits {
        let mut grouped = GroupedCommits::default();

        for subject in subjects {
            if let Some(id) = self.extractor.extract(subject) {
                let title = self
                    .store
                    .title_for(&self.extractor.full_id(&id))
                    .unwrap_or_else(|| subject.clone());
                grouped.by_tracker.entry(id).or_insert(title);
            } else {
                let classification = classify(subject);
                grouped
                    .by_category
                    .entry(classification.category)
                    .or_default()
                    .push(classification.message);
            }
        }

        debug!(
            tracker = grouped.by_tracker.len(),
            categories = grouped.by_category.len(),
            "grouped commit subjects"
        );
        grouped
    }
}
