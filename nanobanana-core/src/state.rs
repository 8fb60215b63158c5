//! The single application state object and every mutation on it
//!
//! All user actions funnel through `AppState` methods so that callers
//! only ever persist one blob. Mutations that take free-form text trim
//! it first and refuse empty input by returning `None`/`false` rather
//! than erroring; the UI reverts silently in that case.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calendar;
use crate::error::{CoreError, Result};
use crate::list::{DEFAULT_LIST_ID, List, ResetFrequency};
use crate::task::{Tag, Task};

/// Sort mode applied to the visible task slice.
///
/// Sorting never rewrites task `order`; switching back to `Custom`
/// restores the manual arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Custom,
    Alpha,
    Completed,
}

impl SortBy {
    /// The fixed cycle custom -> alpha -> completed -> custom
    pub fn next(self) -> Self {
        match self {
            Self::Custom => Self::Alpha,
            Self::Alpha => Self::Completed,
            Self::Completed => Self::Custom,
        }
    }

    /// Short indicator shown in the header
    pub fn label(self) -> &'static str {
        match self {
            Self::Custom => "⇅",
            Self::Alpha => "AZ",
            Self::Completed => "✓",
        }
    }
}

/// Global user settings persisted inside the state blob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub sort_by: SortBy,
}

/// A task from the legacy flat task file, predating lists and dates
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyTask {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// The whole persisted application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub lists: Vec<List>,
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub current_list_id: String,
    pub current_date: NaiveDate,
    pub view_date: NaiveDate,
    #[serde(default)]
    pub settings: Settings,
}

impl AppState {
    /// Fresh first-run state: one default list and two starter tags
    pub fn seed(today: NaiveDate) -> Self {
        Self {
            lists: vec![List::default_list()],
            tasks: Vec::new(),
            tags: vec![
                Tag {
                    id: "urgent".to_string(),
                    name: "Urgent".to_string(),
                    color: "#ff4d4d".to_string(),
                },
                Tag {
                    id: "work".to_string(),
                    name: "Work".to_string(),
                    color: "#00bfff".to_string(),
                },
            ],
            current_list_id: DEFAULT_LIST_ID.to_string(),
            current_date: today,
            view_date: today,
            settings: Settings::default(),
        }
    }

    /// Forward-migrate a raw state document in place.
    ///
    /// Tasks saved before manual ordering existed carry no `order`
    /// field; they get their position in the stored array. Backfill
    /// has to happen before typed deserialization since a serde field
    /// default cannot see the element index. All other added fields
    /// are handled by per-field defaults on the types themselves.
    pub fn migrate_document(doc: &mut Value) {
        let Some(tasks) = doc.get_mut("tasks").and_then(Value::as_array_mut) else {
            return;
        };
        for (index, task) in tasks.iter_mut().enumerate() {
            if let Some(fields) = task.as_object_mut() {
                if !fields.contains_key("order") {
                    fields.insert("order".to_string(), Value::from(index));
                }
            }
        }
    }

    /// Rebuild state from a persisted document, migrating old shapes.
    ///
    /// Returns `None` when the document does not describe a state at
    /// all; callers fall back to [`AppState::seed`].
    pub fn from_document(mut doc: Value, today: NaiveDate) -> Option<Self> {
        Self::migrate_document(&mut doc);
        let mut state: Self = serde_json::from_value(doc).ok()?;
        state.begin_session(today);
        Some(state)
    }

    /// Reset the session-scoped parts of the state for a new run.
    ///
    /// The persisted current/view dates belong to the previous session;
    /// both snap to today. A dangling current list id falls back to the
    /// default list, which is recreated if the blob lost it.
    pub fn begin_session(&mut self, today: NaiveDate) {
        self.current_date = today;
        self.view_date = today;
        if !self.lists.iter().any(|l| l.id == DEFAULT_LIST_ID) {
            self.lists.insert(0, List::default_list());
        }
        if self.list(&self.current_list_id).is_none() {
            self.current_list_id = DEFAULT_LIST_ID.to_string();
        }
    }

    pub fn list(&self, id: &str) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn list_mut(&mut self, id: &str) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.id == id)
    }

    pub fn current_list(&self) -> Option<&List> {
        self.list(&self.current_list_id)
    }

    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    // ---- tasks ----

    /// Add a task to the current list on the current date.
    ///
    /// The order index is the total task count across all lists, which
    /// keeps new tasks after everything else without renumbering.
    /// Returns the new task's id, or `None` for blank text.
    pub fn add_task(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_task_id();
        let order = self.tasks.len() as u32;
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
            list_id: self.current_list_id.clone(),
            date: self.current_date,
            tags: Vec::new(),
            order,
            migrated: false,
        });
        Some(id)
    }

    /// Replace a task's text; blank input leaves the old text in place
    pub fn edit_task_text(&mut self, id: u64, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.task_mut(id) {
            Some(task) => {
                task.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn toggle_task(&mut self, id: u64) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.toggle_complete();
                true
            }
            None => false,
        }
    }

    pub fn delete_task(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Remove completed tasks from the current list and date only
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        let list_id = self.current_list_id.clone();
        let date = self.current_date;
        self.tasks
            .retain(|t| !(t.completed && t.list_id == list_id && t.date == date));
        before - self.tasks.len()
    }

    // ---- lists ----

    /// Create a list and switch to it. Returns the new id.
    pub fn add_list(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = self.next_list_id();
        self.lists.push(List::new(id.clone(), name));
        self.current_list_id = id.clone();
        Some(id)
    }

    pub fn rename_list(&mut self, id: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.list_mut(id) {
            Some(list) => {
                list.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Delete a list and every task in it, on any date.
    ///
    /// The default list is protected. Deleting the current list moves
    /// the selection back to the default list.
    pub fn delete_list(&mut self, id: &str) -> Result<()> {
        if id == DEFAULT_LIST_ID {
            return Err(CoreError::validation(
                "list",
                "the default list cannot be deleted",
            ));
        }
        if self.list(id).is_none() {
            return Err(CoreError::ListNotFound(id.to_string()));
        }
        self.lists.retain(|l| l.id != id);
        self.tasks.retain(|t| t.list_id != id);
        if self.current_list_id == id {
            self.current_list_id = DEFAULT_LIST_ID.to_string();
        }
        Ok(())
    }

    pub fn select_list(&mut self, id: &str) -> bool {
        if self.list(id).is_some() {
            self.current_list_id = id.to_string();
            true
        } else {
            false
        }
    }

    pub fn set_list_color(&mut self, id: &str, color: &str) -> bool {
        match self.list_mut(id) {
            Some(list) => {
                list.color = color.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_list_reset_frequency(&mut self, id: &str, frequency: ResetFrequency) -> bool {
        match self.list_mut(id) {
            Some(list) => {
                list.reset_frequency = frequency;
                true
            }
            None => false,
        }
    }

    /// Set the theme of the current list; unknown ids are stored as-is
    /// and resolved leniently at render time.
    pub fn set_current_list_theme(&mut self, theme_id: &str) -> bool {
        let id = self.current_list_id.clone();
        match self.list_mut(&id) {
            Some(list) => {
                list.theme = theme_id.to_string();
                true
            }
            None => false,
        }
    }

    // ---- dates ----

    pub fn select_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    /// Move the calendar view cursor by whole months, clamping the day
    /// to the target month's length
    pub fn shift_view_month(&mut self, offset: i32) {
        self.view_date = calendar::shift_month(self.view_date, offset);
    }

    pub fn set_view_date(&mut self, date: NaiveDate) {
        self.view_date = date;
    }

    // ---- tags ----

    /// Create a tag with the given name and color. Returns the new id.
    pub fn create_tag(&mut self, name: &str, color: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = self.next_tag_id();
        self.tags.push(Tag {
            id: id.clone(),
            name: name.to_string(),
            color: color.to_string(),
        });
        Some(id)
    }

    pub fn toggle_task_tag(&mut self, task_id: u64, tag_id: &str) -> bool {
        match self.task_mut(task_id) {
            Some(task) => {
                task.toggle_tag(tag_id);
                true
            }
            None => false,
        }
    }

    /// Delete a tag globally and detach it from every task
    pub fn delete_tag(&mut self, tag_id: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t.id != tag_id);
        if self.tags.len() == before {
            return false;
        }
        for task in &mut self.tasks {
            task.tags.retain(|id| id != tag_id);
        }
        true
    }

    // ---- settings ----

    pub fn cycle_sort(&mut self) {
        self.settings.sort_by = self.settings.sort_by.next();
    }

    // ---- maintenance ----

    /// Un-complete every task in lists with daily recurrence.
    ///
    /// Runs at most once per calendar day; the caller gates on the
    /// last-run marker. Returns how many tasks were flipped.
    pub fn reset_recurring_lists(&mut self) -> usize {
        let daily: Vec<String> = self
            .lists
            .iter()
            .filter(|l| l.reset_frequency == ResetFrequency::Daily)
            .map(|l| l.id.clone())
            .collect();
        let mut reset = 0;
        for task in &mut self.tasks {
            if task.completed && daily.iter().any(|id| *id == task.list_id) {
                task.completed = false;
                reset += 1;
            }
        }
        reset
    }

    /// One-time import of the legacy flat task file into the default
    /// list, dated today.
    ///
    /// Any surviving task carrying the `migrated` marker suppresses the
    /// import. Returns whether anything was imported; the caller only
    /// deletes the legacy file on `true`.
    pub fn import_legacy(&mut self, items: Vec<LegacyTask>, today: NaiveDate) -> bool {
        if items.is_empty() {
            return false;
        }
        if self.tasks.iter().any(|t| t.migrated) {
            return false;
        }
        for (index, item) in items.into_iter().enumerate() {
            self.tasks.push(Task {
                id: item.id,
                text: item.text,
                completed: item.completed,
                list_id: DEFAULT_LIST_ID.to_string(),
                date: today,
                tags: Vec::new(),
                order: index as u32,
                migrated: true,
            });
        }
        true
    }

    // ---- id allocation ----

    /// Millisecond timestamp ids, bumped past any collision so that
    /// rapid successive inserts stay unique.
    fn next_task_id(&self) -> u64 {
        let mut id = now_millis();
        while self.tasks.iter().any(|t| t.id == id) {
            id += 1;
        }
        id
    }

    fn next_list_id(&self) -> String {
        let mut millis = now_millis();
        loop {
            let id = format!("list_{millis}");
            if self.lists.iter().all(|l| l.id != id) {
                return id;
            }
            millis += 1;
        }
    }

    fn next_tag_id(&self) -> String {
        let mut millis = now_millis();
        loop {
            let id = format!("tag_{millis}");
            if self.tags.iter().all(|t| t.id != id) {
                return id;
            }
            millis += 1;
        }
    }
}

fn now_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
