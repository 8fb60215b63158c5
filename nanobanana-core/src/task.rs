//! Task and tag domain types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do item scoped to one list and one calendar date.
///
/// `order` positions the task among tasks sharing the same
/// `(list_id, date)`; only the relative ordering matters and duplicates
/// are tolerated. `migrated` marks tasks imported from the legacy flat
/// task file and guards against a second import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub list_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub migrated: bool,
}

impl Task {
    /// Toggle completion status
    pub fn toggle_complete(&mut self) {
        self.completed = !self.completed;
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|id| id == tag_id)
    }

    /// Attach or detach a tag id
    pub fn toggle_tag(&mut self, tag_id: &str) {
        if let Some(pos) = self.tags.iter().position(|id| id == tag_id) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag_id.to_string());
        }
    }
}

/// A global label with a color, attachable to any task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: 1,
            text: "Water plants".to_string(),
            completed: false,
            list_id: "default".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid date"),
            tags: Vec::new(),
            order: 0,
            migrated: false,
        }
    }

    #[test]
    fn test_toggle_complete() {
        let mut task = task();
        task.toggle_complete();
        assert!(task.completed);
        task.toggle_complete();
        assert!(!task.completed);
    }

    #[test]
    fn test_toggle_tag() {
        let mut task = task();
        task.toggle_tag("urgent");
        assert!(task.has_tag("urgent"));
        task.toggle_tag("urgent");
        assert!(!task.has_tag("urgent"));
    }

    #[test]
    fn test_wire_format_uses_camel_case_and_iso_dates() {
        let serialized = serde_json::to_string(&task()).expect("task serializes");
        assert!(serialized.contains(r#""listId":"default""#));
        assert!(serialized.contains(r#""date":"2026-08-29""#));
        // The migration marker is only written once set.
        assert!(!serialized.contains("migrated"));
    }

    #[test]
    fn test_backfills_missing_tags() {
        let task: Task = serde_json::from_str(
            r#"{"id":5,"text":"x","completed":false,"listId":"default","date":"2026-08-29"}"#,
        )
        .expect("task without tags should deserialize");

        assert!(task.tags.is_empty());
        assert_eq!(task.order, 0);
    }
}
