//! Plan document parsing.
//!
//! The plan grammar is line-oriented markdown: `### Feature:` headers,
//! `- Task:` and `- Subtask:` bullets, `- Notes:` bullets, everything else
//! ignored. Hierarchy is implicit: a task's parent is the most recently seen
//! feature, a subtask's parent the most recently seen task. The parser keeps
//! two rolling indices into the output list instead of building a tree.
//!
//! Parent linkage is by title string. Duplicate feature or task titles make
//! parentage indistinguishable downstream; this is a known limitation of the
//! plan format, kept as-is.

use tracing::debug;

/// Default priority when a title carries no `[P<digits>]` marker
pub const DEFAULT_PRIORITY: u32 = 2;

/// Kind of plan item. Subtasks are normalized to [`ItemType::Task`] at the
/// record level; the three-level grammar collapses to two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    /// A feature header
    Feature,
    /// A task or subtask bullet
    Task,
}

impl ItemType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Task => "task",
        }
    }
}

/// One parsed plan item, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanItem {
    /// Feature or task
    pub item_type: ItemType,
    /// Title with the priority marker stripped
    pub title: String,
    /// Parent title: `None` for features; for tasks and subtasks always a
    /// string, empty when no parent was active
    pub parent_title: Option<String>,
    /// Priority from the `[P<digits>]` marker, default 2
    pub priority: u32,
    /// Accumulated `- Notes:` lines
    pub notes: Vec<String>,
}

/// Split a trailing `[P<digits>]` marker off a title.
///
/// The marker only fires when the trimmed text contains `[P` and ends with
/// `]` and the captured value is all digits; otherwise it is plain text and
/// the priority stays at the default.
fn split_priority(text: &str) -> (String, u32) {
    let trimmed = text.trim();
    if trimmed.ends_with(']') {
        if let Some(idx) = trimmed.rfind("[P") {
            let value = &trimmed[idx + 2..trimmed.len() - 1];
            if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(priority) = value.parse::<u32>() {
                    return (trimmed[..idx].trim().to_string(), priority);
                }
            }
        }
    }
    (trimmed.to_string(), DEFAULT_PRIORITY)
}

/// Parse a plan document into its ordered item list.
pub fn parse_plan<'a, I>(lines: I) -> Vec<PlanItem>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut items: Vec<PlanItem> = Vec::new();
    // Rolling pointers: indices of the most recently seen feature and task
    let mut current_feature: Option<usize> = None;
    let mut current_task: Option<usize> = None;

    for raw_line in lines {
        let line = raw_line.trim_end();

        if let Some(rest) = line.strip_prefix("### Feature:") {
            let (title, priority) = split_priority(rest);
            items.push(PlanItem {
                item_type: ItemType::Feature,
                title,
                parent_title: None,
                priority,
                notes: Vec::new(),
            });
            current_feature = Some(items.len() - 1);
            current_task = None;
            continue;
        }

        let bullet = line.trim_start();

        if let Some(rest) = bullet.strip_prefix("- Task:") {
            let (title, priority) = split_priority(rest);
            let parent = current_feature
                .map(|i| items[i].title.clone())
                .unwrap_or_default();
            items.push(PlanItem {
                item_type: ItemType::Task,
                title,
                parent_title: Some(parent),
                priority,
                notes: Vec::new(),
            });
            current_task = Some(items.len() - 1);
            continue;
        }

        if let Some(rest) = bullet.strip_prefix("- Subtask:") {
            let (title, priority) = split_priority(rest);
            let parent = current_task
                .map(|i| items[i].title.clone())
                .unwrap_or_default();
            // A subtask cannot parent further subtasks: current_task stays
            items.push(PlanItem {
                item_type: ItemType::Task,
                title,
                parent_title: Some(parent),
                priority,
                notes: Vec::new(),
            });
            continue;
        }

        if let Some(rest) = bullet.strip_prefix("- Notes:") {
            let note = rest.trim().to_string();
            if let Some(i) = current_task.or(current_feature) {
                items[i].notes.push(note);
            }
            // No active feature or task: the note is dropped silently
        }
    }

    debug!(items = items.len(), "parsed plan document");
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<PlanItem> {
        parse_plan(text.lines())
    }

    #[test]
    fn test_feature_and_task_linkage() {
        let items = parse("### Feature: Foo [P1]\n- Task: Bar\n");
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].item_type, ItemType::Feature);
        assert_eq!(items[0].title, "Foo");
        assert_eq!(items[0].priority, 1);
        assert_eq!(items[0].parent_title, None);

        assert_eq!(items[1].item_type, ItemType::Task);
        assert_eq!(items[1].parent_title.as_deref(), Some("Foo"));
        assert_eq!(items[1].priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn test_subtask_parents_to_task_not_feature() {
        let items = parse(
            "### Feature: Foo\n- Task: Bar\n- Subtask: Baz\n",
        );
        assert_eq!(items[2].item_type, ItemType::Task);
        assert_eq!(items[2].parent_title.as_deref(), Some("Bar"));
    }

    #[test]
    fn test_subtask_does_not_become_parent() {
        let items = parse(
            "### Feature: Foo\n- Task: Bar\n- Subtask: Baz\n- Subtask: Qux\n",
        );
        assert_eq!(items[3].parent_title.as_deref(), Some("Bar"));
    }

    #[test]
    fn test_orphan_task_gets_empty_string_parent() {
        let items = parse("- Task: Floating\n");
        // Empty string, not "no parent"
        assert_eq!(items[0].parent_title.as_deref(), Some(""));
    }

    #[test]
    fn test_new_feature_resets_task_pointer() {
        let items = parse(
            "### Feature: One\n- Task: A\n### Feature: Two\n- Subtask: Orphaned\n",
        );
        assert_eq!(items[3].parent_title.as_deref(), Some(""));
    }

    #[test]
    fn test_notes_prefer_task_over_feature() {
        let items = parse(
            "### Feature: Foo\n- Notes: about the feature\n- Task: Bar\n- Notes: about the task\n",
        );
        assert_eq!(items[0].notes, vec!["about the feature".to_string()]);
        assert_eq!(items[1].notes, vec!["about the task".to_string()]);
    }

    #[test]
    fn test_notes_without_context_are_dropped() {
        let items = parse("- Notes: floating note\n### Feature: Foo\n");
        assert_eq!(items.len(), 1);
        assert!(items[0].notes.is_empty());
    }

    #[test]
    fn test_notes_after_subtask_go_to_task() {
        let items = parse(
            "### Feature: Foo\n- Task: Bar\n- Subtask: Baz\n- Notes: still the task's\n",
        );
        assert_eq!(items[1].notes, vec!["still the task's".to_string()]);
        assert!(items[2].notes.is_empty());
    }

    #[test]
    fn test_feature_prefix_is_case_sensitive() {
        let items = parse("### feature: not recognized\n#### Feature: also not\n");
        assert!(items.is_empty());
    }

    #[test]
    fn test_unrecognized_lines_ignored() {
        let items = parse(
            "# Plan\n\nSome prose.\n### Feature: Foo\n* Task: wrong bullet\n- Task: Bar\n",
        );
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_indented_bullets_recognized() {
        let items = parse("### Feature: Foo\n  - Task: Indented\n");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "Indented");
    }

    #[test]
    fn test_priority_marker_variants() {
        assert_eq!(split_priority("Foo [P1]"), ("Foo".to_string(), 1));
        assert_eq!(split_priority("Foo [P12]"), ("Foo".to_string(), 12));
        assert_eq!(split_priority("Foo"), ("Foo".to_string(), DEFAULT_PRIORITY));
        // Malformed markers stay in the title
        assert_eq!(
            split_priority("Foo [Px]"),
            ("Foo [Px]".to_string(), DEFAULT_PRIORITY)
        );
        assert_eq!(
            split_priority("Foo [P]"),
            ("Foo [P]".to_string(), DEFAULT_PRIORITY)
        );
        // Marker not at the end is plain text
        assert_eq!(
            split_priority("Foo [P1] bar"),
            ("Foo [P1] bar".to_string(), DEFAULT_PRIORITY)
        );
    }

    #[test]
    fn test_empty_plan_yields_no_items() {
        assert!(parse("").is_empty());
        assert!(parse("just\nprose\nlines\n").is_empty());
    }
}
