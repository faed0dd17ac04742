//! Plan items to issue records.

use chrono::{Local, SecondsFormat};
use gantry_tracker::{IdAllocator, IssueRecord, STATUS_OPEN};
use tracing::debug;

use crate::parser::PlanItem;

/// Identity stamped on created records.
#[derive(Debug, Clone)]
pub struct Author {
    /// Record owner display name
    pub name: String,
    /// Record creator email
    pub email: String,
}

/// Synthesize the record description for a plan item.
///
/// `"Plan: <file>. Parent: <parent>. Notes: <n1>; <n2>"`, omitting the Parent
/// clause when the parent title is absent or empty and Notes when empty.
pub fn build_description(item: &PlanItem, plan_file_name: &str) -> String {
    let mut parts = vec![format!("Plan: {plan_file_name}")];
    if let Some(parent) = item.parent_title.as_deref() {
        if !parent.is_empty() {
            parts.push(format!("Parent: {parent}"));
        }
    }
    if !item.notes.is_empty() {
        parts.push(format!("Notes: {}", item.notes.join("; ")));
    }
    parts.join(". ")
}

/// Build one issue record per plan item, in input order.
///
/// Each record samples its own local-timezone timestamp; `created_at` and
/// `updated_at` are identical at creation.
pub fn build_records(
    items: &[PlanItem],
    plan_file_name: &str,
    allocator: &IdAllocator,
    author: &Author,
) -> Vec<IssueRecord> {
    let records: Vec<IssueRecord> = items
        .iter()
        .map(|item| {
            let created_at = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
            IssueRecord {
                id: allocator.allocate(),
                title: item.title.clone(),
                description: build_description(item, plan_file_name),
                status: STATUS_OPEN.to_string(),
                priority: item.priority,
                issue_type: item.item_type.as_str().to_string(),
                owner: author.name.clone(),
                created_at: created_at.clone(),
                created_by: author.email.clone(),
                updated_at: created_at,
            }
        })
        .collect();

    debug!(count = records.len(), "built issue records from plan");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ItemType, DEFAULT_PRIORITY};

    fn author() -> Author {
        Author {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn item(item_type: ItemType, title: &str, parent: Option<&str>) -> PlanItem {
        PlanItem {
            item_type,
            title: title.to_string(),
            parent_title: parent.map(str::to_string),
            priority: DEFAULT_PRIORITY,
            notes: Vec::new(),
        }
    }

    #[test]
    fn test_description_all_clauses() {
        let mut task = item(ItemType::Task, "Bar", Some("Foo"));
        task.notes = vec!["first".to_string(), "second".to_string()];

        assert_eq!(
            build_description(&task, "plan.md"),
            "Plan: plan.md. Parent: Foo. Notes: first; second"
        );
    }

    #[test]
    fn test_description_omits_empty_clauses() {
        let feature = item(ItemType::Feature, "Foo", None);
        assert_eq!(build_description(&feature, "plan.md"), "Plan: plan.md");

        // Empty-string parent is treated like no parent in the description
        let orphan = item(ItemType::Task, "Bar", Some(""));
        assert_eq!(build_description(&orphan, "plan.md"), "Plan: plan.md");
    }

    #[test]
    fn test_records_follow_item_order_and_types() {
        let items = vec![
            item(ItemType::Feature, "Foo", None),
            item(ItemType::Task, "Bar", Some("Foo")),
        ];
        let allocator = IdAllocator::new("bd");
        let records = build_records(&items, "plan.md", &allocator, &author());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Foo");
        assert_eq!(records[0].issue_type, "feature");
        assert_eq!(records[1].issue_type, "task");
        for record in &records {
            assert!(record.id.starts_with("bd-"));
            assert_eq!(record.status, STATUS_OPEN);
            assert_eq!(record.owner, "Ada");
            assert_eq!(record.created_by, "ada@example.com");
            assert_eq!(record.created_at, record.updated_at);
        }
    }
}
