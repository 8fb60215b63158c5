//! Lists: named, themed containers partitioning tasks

use serde::{Deserialize, Serialize};

/// Id of the distinguished list that always exists and is never deleted.
pub const DEFAULT_LIST_ID: &str = "default";

/// How often a list's tasks are automatically un-completed.
///
/// Weekly recurrence never shipped, so it has no variant; a state blob
/// carrying an unknown frequency is treated as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetFrequency {
    #[default]
    None,
    Daily,
}

/// A named container partitioning tasks, with its own theme and color.
///
/// The serde defaults backfill fields that older state blobs lack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default = "List::default_icon")]
    pub icon: String,
    /// Theme id; unknown ids fall back to the first built-in theme.
    #[serde(default = "List::default_theme")]
    pub theme: String,
    #[serde(default = "List::default_color")]
    pub color: String,
    #[serde(default)]
    pub reset_frequency: ResetFrequency,
}

impl List {
    /// Create a new user list with default presentation settings
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: Self::default_icon(),
            theme: Self::default_theme(),
            color: Self::default_color(),
            reset_frequency: ResetFrequency::None,
        }
    }

    /// The seed list present in every fresh state
    pub fn default_list() -> Self {
        let mut list = Self::new(DEFAULT_LIST_ID, "My Tasks");
        list.icon = "📝".to_string();
        list
    }

    fn default_icon() -> String {
        "📋".to_string()
    }

    fn default_theme() -> String {
        "default".to_string()
    }

    fn default_color() -> String {
        "#ffe135".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backfills_missing_presentation_fields() {
        let list: List = serde_json::from_str(r#"{"id":"default","name":"My Tasks"}"#)
            .expect("minimal list should deserialize");

        assert_eq!(list.theme, "default");
        assert_eq!(list.color, "#ffe135");
        assert_eq!(list.reset_frequency, ResetFrequency::None);
    }

    #[test]
    fn test_reset_frequency_wire_names() {
        let list: List = serde_json::from_str(
            r#"{"id":"a","name":"A","resetFrequency":"daily"}"#,
        )
        .expect("daily list should deserialize");

        assert_eq!(list.reset_frequency, ResetFrequency::Daily);
    }
}
