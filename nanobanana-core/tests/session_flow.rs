//! End-to-end exercise of a user session against the state object,
//! including the serialize/restart/deserialize cycle a real run does.

use chrono::NaiveDate;
use nanobanana_core::{AppState, DEFAULT_LIST_ID, LegacyTask, ResetFrequency, SortBy, view};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn test_full_session_survives_restart() {
    let monday = date(2026, 8, 24);
    let mut state = AppState::seed(monday);

    // Day one: a groceries list with a manual arrangement.
    let groceries = state.add_list("Groceries").expect("list added");
    let milk = state.add_task("Milk").expect("task added");
    let bread = state.add_task("Bread").expect("task added");
    let eggs = state.add_task("Eggs").expect("task added");
    assert!(view::reorder(&mut state, eggs, milk));
    assert_eq!(view::visible_task_ids(&state), vec![eggs, milk, bread]);

    state.toggle_task(bread);
    let urgent_tag = state.create_tag("Perishable", "#ff4d4d").expect("tag created");
    state.toggle_task_tag(milk, &urgent_tag);

    // A daily habits list completed for the day.
    let habits = state.add_list("Habits").expect("list added");
    state.set_list_reset_frequency(&habits, ResetFrequency::Daily);
    let stretch = state.add_task("Stretch").expect("task added");
    state.toggle_task(stretch);

    // Restart: persist, reload on the next calendar day.
    let doc = serde_json::to_value(&state).expect("state serializes");
    let tuesday = date(2026, 8, 25);
    let mut state = AppState::from_document(doc, tuesday).expect("state restored");

    assert_eq!(state.current_date, tuesday);
    assert_eq!(state.view_date, tuesday);
    assert_eq!(state.current_list_id, habits);

    // The daily list resets, the groceries list does not.
    assert_eq!(state.reset_recurring_lists(), 1);
    assert!(!state.task(stretch).expect("task exists").completed);
    assert!(state.task(bread).expect("task exists").completed);

    // Monday's arrangement is untouched by the new session.
    state.select_list(&groceries);
    state.select_date(monday);
    assert_eq!(view::visible_task_ids(&state), vec![eggs, milk, bread]);
    assert!(state.task(milk).expect("task exists").has_tag(&urgent_tag));
    assert_eq!(view::active_count(&state), 2);

    // Today is empty for groceries; the marker points at Monday only.
    state.select_date(tuesday);
    assert!(view::visible_tasks(&state).is_empty());
    assert!(view::day_has_open_tasks(&state, monday));
    assert!(!view::day_has_open_tasks(&state, tuesday));
}

#[test]
fn test_legacy_import_lands_in_default_list() {
    let today = date(2026, 8, 29);
    let mut state = AppState::seed(today);

    let imported = state.import_legacy(
        vec![
            LegacyTask {
                id: 1700000000001,
                text: "Renew passport".to_string(),
                completed: false,
            },
            LegacyTask {
                id: 1700000000002,
                text: "Call dentist".to_string(),
                completed: true,
            },
        ],
        today,
    );
    assert!(imported);
    assert_eq!(view::visible_task_ids(&state), vec![1700000000001, 1700000000002]);

    // The import survives a restart and still blocks a re-import.
    let doc = serde_json::to_value(&state).expect("state serializes");
    let mut state = AppState::from_document(doc, today).expect("state restored");
    assert!(!state.import_legacy(
        vec![LegacyTask {
            id: 9,
            text: "again".to_string(),
            completed: false,
        }],
        today,
    ));
    assert_eq!(state.tasks.len(), 2);
}

#[test]
fn test_deleting_current_list_falls_back_to_default() {
    let today = date(2026, 8, 29);
    let mut state = AppState::seed(today);
    let errands = state.add_list("Errands").expect("list added");
    state.add_task("Post office").expect("task added");
    state.cycle_sort();
    assert_eq!(state.settings.sort_by, SortBy::Alpha);

    state.delete_list(&errands).expect("list deleted");
    assert_eq!(state.current_list_id, DEFAULT_LIST_ID);
    assert!(view::visible_tasks(&state).is_empty());
    // Sort mode is global and unaffected by list removal.
    assert_eq!(state.settings.sort_by, SortBy::Alpha);
}
