//! TUI application state and event handling

use std::io;

use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

use nanobanana_core::{AppState, DEFAULT_LIST_ID, ResetFrequency, Task, view};

use crate::error::Result;
use crate::storage::StateStorage;
use crate::ui;

/// Which panel owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Lists,
    Calendar,
    Tasks,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Lists => Focus::Calendar,
            Focus::Calendar => Focus::Tasks,
            Focus::Tasks => Focus::Lists,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Lists => Focus::Tasks,
            Focus::Calendar => Focus::Lists,
            Focus::Tasks => Focus::Calendar,
        }
    }
}

/// Swatches offered for tag and list colors
pub const COLOR_SWATCHES: [&str; 8] = [
    "#ff4d4d", "#ff9f43", "#ffe135", "#2ecc71", "#00bfff", "#a55eea", "#ff69b4", "#ffffff",
];

#[derive(Debug, Clone, PartialEq)]
pub enum DialogMode {
    None,
    AddTask { input: String },
    EditTask { id: u64, input: String },
    NewList { input: String },
    RenameList { id: String, input: String },
    DeleteListConfirm { id: String, name: String },
    ListSettings { id: String, color: usize, daily: bool, field: usize },
    TagMenu { task_id: u64, selected: usize },
    NewTag { task_id: u64, input: String, color: usize },
    DeleteTagConfirm { task_id: u64, tag_id: String, name: String, selected: usize },
    ThemePicker { selected: usize },
    Help,
}

pub struct App {
    pub state: AppState,
    pub storage: StateStorage,
    pub focus: Focus,
    pub selected_index: usize,
    pub sidebar_selection: usize,
    /// Task currently picked up for reordering
    pub grabbed: Option<u64>,
    pub dialog: DialogMode,
    pub should_quit: bool,
    pub error_message: Option<String>,
}

impl App {
    pub fn new(state: AppState, storage: StateStorage) -> Self {
        let sidebar_selection = state
            .lists
            .iter()
            .position(|l| l.id == state.current_list_id)
            .unwrap_or(0);
        Self {
            state,
            storage,
            focus: Focus::Tasks,
            selected_index: 0,
            sidebar_selection,
            grabbed: None,
            dialog: DialogMode::None,
            should_quit: false,
            error_message: None,
        }
    }

    /// Write the whole state after a mutation. A failed write keeps
    /// the in-memory state and surfaces the error in the status line.
    pub fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.state) {
            warn!(%e, "failed to persist state");
            self.error_message = Some(format!("Failed to save: {}", e));
        }
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        view::visible_tasks(&self.state)
    }

    pub fn selected_task_id(&self) -> Option<u64> {
        view::visible_task_ids(&self.state)
            .get(self.selected_index)
            .copied()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected_task_id().and_then(|id| self.state.task(id))
    }

    fn clamp_selection(&mut self) {
        let len = view::visible_task_ids(&self.state).len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = view::visible_task_ids(&self.state).len();
        if len == 0 {
            return;
        }
        self.selected_index = if delta < 0 {
            self.selected_index.saturating_sub((-delta) as usize)
        } else {
            (self.selected_index + delta as usize).min(len - 1)
        };
    }

    pub fn move_sidebar_selection(&mut self, delta: i32) {
        let len = self.state.lists.len();
        if len == 0 {
            return;
        }
        self.sidebar_selection = if delta < 0 {
            self.sidebar_selection.saturating_sub((-delta) as usize)
        } else {
            (self.sidebar_selection + delta as usize).min(len - 1)
        };
    }

    fn sidebar_list_id(&self) -> Option<String> {
        self.state
            .lists
            .get(self.sidebar_selection)
            .map(|l| l.id.clone())
    }

    // Task actions

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.state.toggle_task(id);
            self.persist();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if self.grabbed == Some(id) {
                self.grabbed = None;
            }
            self.state.delete_task(id);
            self.clamp_selection();
            self.persist();
        }
    }

    pub fn add_task(&mut self, text: String) {
        if self.state.add_task(&text).is_some() {
            self.persist();
        }
        self.dialog = DialogMode::None;
    }

    pub fn update_task_text(&mut self, id: u64, text: String) {
        // Blank input reverts to the previous text.
        if self.state.edit_task_text(id, &text) {
            self.persist();
        }
        self.dialog = DialogMode::None;
    }

    pub fn clear_completed(&mut self) {
        let count = self.state.clear_completed();
        self.clamp_selection();
        if count > 0 {
            self.persist();
            self.error_message = Some(format!("Cleared {} completed task(s)", count));
        }
    }

    pub fn cycle_sort(&mut self) {
        self.state.cycle_sort();
        self.persist();
    }

    /// Pick up the selected task, or drop a held one before the
    /// selection. Dropping a task on itself just releases it.
    pub fn grab_or_drop(&mut self) {
        match self.grabbed.take() {
            Some(dragged) => {
                if let Some(target) = self.selected_task_id() {
                    if view::reorder(&mut self.state, dragged, target) {
                        // Follow the task to its new slot.
                        let ids = view::visible_task_ids(&self.state);
                        if let Some(pos) = ids.iter().position(|id| *id == dragged) {
                            self.selected_index = pos;
                        }
                        self.persist();
                    }
                }
            }
            None => {
                self.grabbed = self.selected_task_id();
            }
        }
    }

    // List actions

    pub fn select_sidebar_list(&mut self) {
        if let Some(id) = self.sidebar_list_id() {
            if self.state.select_list(&id) {
                self.selected_index = 0;
                self.grabbed = None;
                self.persist();
            }
        }
    }

    pub fn add_list(&mut self, name: String) {
        if self.state.add_list(&name).is_some() {
            self.sidebar_selection = self.state.lists.len() - 1;
            self.selected_index = 0;
            self.grabbed = None;
            self.persist();
        }
        self.dialog = DialogMode::None;
    }

    pub fn rename_list(&mut self, id: String, name: String) {
        if self.state.rename_list(&id, &name) {
            self.persist();
        }
        self.dialog = DialogMode::None;
    }

    pub fn delete_list(&mut self, id: String) {
        match self.state.delete_list(&id) {
            Ok(()) => {
                if self.sidebar_selection >= self.state.lists.len() {
                    self.sidebar_selection = self.state.lists.len().saturating_sub(1);
                }
                self.selected_index = 0;
                self.grabbed = None;
                self.persist();
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
        self.dialog = DialogMode::None;
    }

    pub fn apply_list_settings(&mut self, id: String, color: usize, daily: bool) {
        let frequency = if daily {
            ResetFrequency::Daily
        } else {
            ResetFrequency::None
        };
        let color = COLOR_SWATCHES[color % COLOR_SWATCHES.len()];
        if self.state.set_list_color(&id, color) {
            self.state.set_list_reset_frequency(&id, frequency);
            self.persist();
        }
        self.dialog = DialogMode::None;
    }

    pub fn apply_theme(&mut self, index: usize) {
        if let Some(theme) = nanobanana_core::theme::THEMES.get(index) {
            self.state.set_current_list_theme(theme.id);
            self.persist();
        }
        self.dialog = DialogMode::None;
    }

    // Tag actions

    pub fn toggle_tag(&mut self, task_id: u64, tag_id: String) {
        if self.state.toggle_task_tag(task_id, &tag_id) {
            self.persist();
        }
        self.dialog = DialogMode::None;
    }

    pub fn create_tag(&mut self, task_id: u64, name: String, color: usize) {
        let color = COLOR_SWATCHES[color % COLOR_SWATCHES.len()];
        if let Some(tag_id) = self.state.create_tag(&name, color) {
            self.state.toggle_task_tag(task_id, &tag_id);
            self.persist();
        }
        self.dialog = DialogMode::None;
    }

    pub fn delete_tag(&mut self, tag_id: String) {
        if self.state.delete_tag(&tag_id) {
            self.persist();
        }
        self.dialog = DialogMode::None;
    }

    // Calendar actions

    pub fn move_view_cursor(&mut self, days: i64) {
        let cursor = self.state.view_date + chrono::Duration::days(days);
        self.state.set_view_date(cursor);
    }

    pub fn change_month(&mut self, offset: i32) {
        self.state.shift_view_month(offset);
    }

    pub fn select_view_day(&mut self) {
        self.state.select_date(self.state.view_date);
        self.selected_index = 0;
        self.grabbed = None;
        self.persist();
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.state.set_view_date(today);
        self.state.select_date(today);
        self.selected_index = 0;
        self.grabbed = None;
        self.persist();
    }

    // Dialog openers

    pub fn open_edit_dialog(&mut self) {
        if let Some(task) = self.selected_task() {
            self.dialog = DialogMode::EditTask {
                id: task.id,
                input: task.text.clone(),
            };
        }
    }

    pub fn open_rename_dialog(&mut self) {
        if let Some(id) = self.sidebar_list_id() {
            if let Some(list) = self.state.list(&id) {
                self.dialog = DialogMode::RenameList {
                    id,
                    input: list.name.clone(),
                };
            }
        }
    }

    pub fn open_delete_list_dialog(&mut self) {
        if let Some(id) = self.sidebar_list_id() {
            if id == DEFAULT_LIST_ID {
                self.error_message = Some("The default list cannot be deleted".to_string());
                return;
            }
            if let Some(list) = self.state.list(&id) {
                self.dialog = DialogMode::DeleteListConfirm {
                    id,
                    name: list.name.clone(),
                };
            }
        }
    }

    pub fn open_list_settings_dialog(&mut self) {
        if let Some(id) = self.sidebar_list_id() {
            if let Some(list) = self.state.list(&id) {
                let color = COLOR_SWATCHES
                    .iter()
                    .position(|c| *c == list.color)
                    .unwrap_or(2);
                self.dialog = DialogMode::ListSettings {
                    id,
                    color,
                    daily: list.reset_frequency == ResetFrequency::Daily,
                    field: 0,
                };
            }
        }
    }

    pub fn open_tag_menu(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.dialog = DialogMode::TagMenu {
                task_id: id,
                selected: 0,
            };
        }
    }

    pub fn open_theme_picker(&mut self) {
        let current = self
            .state
            .current_list()
            .map(|l| l.theme.clone())
            .unwrap_or_default();
        let selected = nanobanana_core::theme::THEMES
            .iter()
            .position(|t| t.id == current)
            .unwrap_or(0);
        self.dialog = DialogMode::ThemePicker { selected };
    }
}

pub fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Handle dialog input first
            if app.dialog != DialogMode::None {
                handle_dialog_input(app, key.code);
                if app.should_quit {
                    break;
                }
                continue;
            }

            // Messages live until the next keypress.
            app.error_message = None;

            match key.code {
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    if app.grabbed.is_some() {
                        app.grabbed = None;
                    } else {
                        app.should_quit = true;
                    }
                }
                KeyCode::Tab => app.focus = app.focus.next(),
                KeyCode::BackTab => app.focus = app.focus.prev(),
                KeyCode::Char('?') => app.dialog = DialogMode::Help,
                KeyCode::Char('T') => app.open_theme_picker(),
                _ => match app.focus {
                    Focus::Tasks => handle_tasks_input(app, key.code),
                    Focus::Lists => handle_lists_input(app, key.code),
                    Focus::Calendar => handle_calendar_input(app, key.code),
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_tasks_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            let len = app.visible_tasks().len();
            if len > 0 {
                app.selected_index = len - 1;
            }
        }
        KeyCode::Enter if app.grabbed.is_some() => app.grab_or_drop(),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => app.toggle_selected(),
        KeyCode::Char('a') => {
            app.dialog = DialogMode::AddTask {
                input: String::new(),
            };
        }
        KeyCode::Char('e') => app.open_edit_dialog(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('c') => app.clear_completed(),
        KeyCode::Char('t') => app.open_tag_menu(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('m') => app.grab_or_drop(),
        _ => {}
    }
}

fn handle_lists_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_sidebar_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_sidebar_selection(1),
        KeyCode::Char(' ') | KeyCode::Enter => app.select_sidebar_list(),
        KeyCode::Char('n') | KeyCode::Char('a') => {
            app.dialog = DialogMode::NewList {
                input: String::new(),
            };
        }
        KeyCode::Char('r') | KeyCode::Char('e') => app.open_rename_dialog(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_list_dialog(),
        KeyCode::Char('o') => app.open_list_settings_dialog(),
        _ => {}
    }
}

fn handle_calendar_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.move_view_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_view_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_view_cursor(-7),
        KeyCode::Down | KeyCode::Char('j') => app.move_view_cursor(7),
        KeyCode::Char('[') | KeyCode::Char('p') => app.change_month(-1),
        KeyCode::Char(']') | KeyCode::Char('n') => app.change_month(1),
        KeyCode::Char(' ') | KeyCode::Enter => app.select_view_day(),
        KeyCode::Char('t') => {
            let today = chrono::Local::now().date_naive();
            app.go_to_today(today);
        }
        _ => {}
    }
}

fn handle_dialog_input(app: &mut App, key: KeyCode) {
    match &mut app.dialog {
        DialogMode::AddTask { input } => match key {
            KeyCode::Esc => app.dialog = DialogMode::None,
            KeyCode::Enter => {
                let text = input.clone();
                app.add_task(text);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                input.push(c);
            }
            _ => {}
        },
        DialogMode::EditTask { id, input } => match key {
            KeyCode::Esc => app.dialog = DialogMode::None,
            KeyCode::Enter => {
                let id = *id;
                let text = input.clone();
                app.update_task_text(id, text);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                input.push(c);
            }
            _ => {}
        },
        DialogMode::NewList { input } => match key {
            KeyCode::Esc => app.dialog = DialogMode::None,
            KeyCode::Enter => {
                let name = input.clone();
                app.add_list(name);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                input.push(c);
            }
            _ => {}
        },
        DialogMode::RenameList { id, input } => match key {
            KeyCode::Esc => app.dialog = DialogMode::None,
            KeyCode::Enter => {
                let id = id.clone();
                let name = input.clone();
                app.rename_list(id, name);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                input.push(c);
            }
            _ => {}
        },
        DialogMode::DeleteListConfirm { id, name: _ } => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let id = id.clone();
                app.delete_list(id);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.dialog = DialogMode::None;
            }
            _ => {}
        },
        DialogMode::ListSettings { id, color, daily, field } => match key {
            KeyCode::Esc => app.dialog = DialogMode::None,
            KeyCode::Tab | KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
                *field = (*field + 1) % 2;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if *field == 0 {
                    *color = (*color + COLOR_SWATCHES.len() - 1) % COLOR_SWATCHES.len();
                } else {
                    *daily = !*daily;
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                if *field == 0 {
                    *color = (*color + 1) % COLOR_SWATCHES.len();
                } else {
                    *daily = !*daily;
                }
            }
            KeyCode::Enter => {
                let id = id.clone();
                let color = *color;
                let daily = *daily;
                app.apply_list_settings(id, color, daily);
            }
            _ => {}
        },
        DialogMode::TagMenu { task_id, selected } => {
            // Entries are the existing tags plus a final "new tag" row.
            let tag_count = app.state.tags.len();
            match key {
                KeyCode::Esc => app.dialog = DialogMode::None,
                KeyCode::Up | KeyCode::Char('k') => {
                    if *selected > 0 {
                        *selected -= 1;
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if *selected < tag_count {
                        *selected += 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let task_id = *task_id;
                    if *selected < tag_count {
                        let tag_id = app.state.tags[*selected].id.clone();
                        app.toggle_tag(task_id, tag_id);
                    } else {
                        app.dialog = DialogMode::NewTag {
                            task_id,
                            input: String::new(),
                            color: 0,
                        };
                    }
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    if *selected < tag_count {
                        let task_id = *task_id;
                        let selected = *selected;
                        let tag = &app.state.tags[selected];
                        let tag_id = tag.id.clone();
                        let name = tag.name.clone();
                        app.dialog = DialogMode::DeleteTagConfirm {
                            task_id,
                            tag_id,
                            name,
                            selected,
                        };
                    }
                }
                _ => {}
            }
        }
        DialogMode::NewTag { task_id, input, color } => match key {
            KeyCode::Esc => app.dialog = DialogMode::None,
            KeyCode::Enter => {
                let task_id = *task_id;
                let name = input.clone();
                let color = *color;
                app.create_tag(task_id, name, color);
            }
            KeyCode::Tab | KeyCode::Right => {
                *color = (*color + 1) % COLOR_SWATCHES.len();
            }
            KeyCode::Left => {
                *color = (*color + COLOR_SWATCHES.len() - 1) % COLOR_SWATCHES.len();
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                input.push(c);
            }
            _ => {}
        },
        DialogMode::DeleteTagConfirm { task_id, tag_id, name: _, selected } => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let tag_id = tag_id.clone();
                app.delete_tag(tag_id);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // Back to the tag menu the confirm came from.
                let task_id = *task_id;
                let selected = *selected;
                app.dialog = DialogMode::TagMenu { task_id, selected };
            }
            _ => {}
        },
        DialogMode::ThemePicker { selected } => {
            let count = nanobanana_core::theme::THEMES.len();
            match key {
                KeyCode::Esc => app.dialog = DialogMode::None,
                KeyCode::Up | KeyCode::Char('k') => {
                    if *selected > 0 {
                        *selected -= 1;
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if *selected < count - 1 {
                        *selected += 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let index = *selected;
                    app.apply_theme(index);
                }
                _ => {}
            }
        }
        DialogMode::Help => match key {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q') => {
                app.dialog = DialogMode::None;
            }
            _ => {}
        },
        DialogMode::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn app() -> (TempDir, App) {
        let dir = TempDir::new().expect("tempdir created");
        let storage = StateStorage::open(dir.path()).expect("storage opened");
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid date");
        let app = App::new(AppState::seed(today), storage);
        (dir, app)
    }

    #[test]
    fn test_add_task_via_dialog_persists() {
        let (_dir, mut app) = app();
        app.dialog = DialogMode::AddTask {
            input: "Water plants".to_string(),
        };
        handle_dialog_input(&mut app, KeyCode::Enter);

        assert_eq!(app.dialog, DialogMode::None);
        assert_eq!(app.visible_tasks().len(), 1);
        let restored = app.storage.load(app.state.current_date);
        assert_eq!(restored.tasks.len(), 1);
    }

    #[test]
    fn test_blank_dialog_input_is_rejected_silently() {
        let (_dir, mut app) = app();
        app.dialog = DialogMode::AddTask {
            input: "   ".to_string(),
        };
        handle_dialog_input(&mut app, KeyCode::Enter);

        assert_eq!(app.dialog, DialogMode::None);
        assert!(app.visible_tasks().is_empty());
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_grab_and_drop_reorders() {
        let (_dir, mut app) = app();
        let a = app.state.add_task("a").expect("task added");
        app.state.add_task("b").expect("task added");
        let c = app.state.add_task("c").expect("task added");

        // Grab c (index 2), drop it before a (index 0).
        app.selected_index = 2;
        app.grab_or_drop();
        assert_eq!(app.grabbed, Some(c));
        app.selected_index = 0;
        app.grab_or_drop();

        assert_eq!(app.grabbed, None);
        assert_eq!(view::visible_task_ids(&app.state)[0], c);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.state.task(a).expect("task exists").order, 1);
    }

    #[test]
    fn test_delete_list_dialog_protects_default() {
        let (_dir, mut app) = app();
        app.sidebar_selection = 0;
        app.open_delete_list_dialog();
        assert_eq!(app.dialog, DialogMode::None);
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_tag_menu_last_entry_opens_creation() {
        let (_dir, mut app) = app();
        let id = app.state.add_task("tagged").expect("task added");
        app.dialog = DialogMode::TagMenu {
            task_id: id,
            selected: 2,
        };
        handle_dialog_input(&mut app, KeyCode::Enter);

        assert!(matches!(app.dialog, DialogMode::NewTag { .. }));
    }

    #[test]
    fn test_tag_delete_cancel_returns_to_menu() {
        let (_dir, mut app) = app();
        let id = app.state.add_task("tagged").expect("task added");
        app.dialog = DialogMode::TagMenu {
            task_id: id,
            selected: 1,
        };
        handle_dialog_input(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.dialog, DialogMode::DeleteTagConfirm { .. }));

        handle_dialog_input(&mut app, KeyCode::Esc);
        assert_eq!(
            app.dialog,
            DialogMode::TagMenu {
                task_id: id,
                selected: 1
            }
        );
        assert_eq!(app.state.tags.len(), 2);
    }

    #[test]
    fn test_selection_clamped_after_clear() {
        let (_dir, mut app) = app();
        let a = app.state.add_task("a").expect("task added");
        let b = app.state.add_task("b").expect("task added");
        app.state.toggle_task(a);
        app.state.toggle_task(b);
        app.selected_index = 1;

        app.clear_completed();
        assert_eq!(app.selected_index, 0);
        assert!(app.visible_tasks().is_empty());
    }
}
