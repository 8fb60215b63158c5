//! Visible task slice: filtering, sorting and manual reordering
//!
//! The visible slice is always the tasks of the current list on the
//! current date, arranged by the active sort mode. Sorting is a view
//! concern and never touches stored `order` values; only an explicit
//! reorder rewrites them.

use chrono::NaiveDate;

use crate::state::{AppState, SortBy};
use crate::task::Task;

/// Tasks of the current list on the current date, in display order
pub fn visible_tasks(state: &AppState) -> Vec<&Task> {
    let mut tasks: Vec<&Task> = state
        .tasks
        .iter()
        .filter(|t| t.list_id == state.current_list_id && t.date == state.current_date)
        .collect();
    sort_tasks(&mut tasks, state.settings.sort_by);
    tasks
}

/// Ids of the visible tasks, in display order
pub fn visible_task_ids(state: &AppState) -> Vec<u64> {
    visible_tasks(state).iter().map(|t| t.id).collect()
}

/// How many visible tasks are still open
pub fn active_count(state: &AppState) -> usize {
    visible_tasks(state).iter().filter(|t| !t.completed).count()
}

/// Whether the current list has any open task on the given date.
///
/// Drives the calendar day markers; tasks in other lists do not count.
pub fn day_has_open_tasks(state: &AppState, date: NaiveDate) -> bool {
    state
        .tasks
        .iter()
        .any(|t| t.list_id == state.current_list_id && t.date == date && !t.completed)
}

/// Drop the dragged task directly before the target task.
///
/// Works in any sort mode: the current visual sequence is taken as-is,
/// the dragged entry is moved, and orders 0..n-1 are written back over
/// it, materializing whatever arrangement was on screen. Dropping a
/// task on itself is a no-op. Returns whether anything changed.
pub fn reorder(state: &mut AppState, dragged: u64, target: u64) -> bool {
    if dragged == target {
        return false;
    }
    let mut sequence = visible_task_ids(state);
    let Some(from) = sequence.iter().position(|id| *id == dragged) else {
        return false;
    };
    sequence.remove(from);
    let Some(to) = sequence.iter().position(|id| *id == target) else {
        return false;
    };
    sequence.insert(to, dragged);
    for (index, id) in sequence.iter().enumerate() {
        if let Some(task) = state.task_mut(*id) {
            task.order = index as u32;
        }
    }
    true
}

fn sort_tasks(tasks: &mut [&Task], mode: SortBy) {
    match mode {
        SortBy::Custom => tasks.sort_by_key(|t| t.order),
        SortBy::Alpha => {
            tasks.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()));
        }
        // Stable sort: ties keep storage order, not the manual order.
        SortBy::Completed => tasks.sort_by_key(|t| t.completed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid date")
    }

    fn raw_task(id: u64, text: &str, list_id: &str, date: NaiveDate, order: u32) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed: false,
            list_id: list_id.to_string(),
            date,
            tags: Vec::new(),
            order,
            migrated: false,
        }
    }

    #[test]
    fn test_visible_tasks_filter_by_list_and_date() {
        let mut state = AppState::seed(today());
        let other_day = NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date");
        state.tasks.push(raw_task(1, "here", "default", today(), 0));
        state.tasks.push(raw_task(2, "tomorrow", "default", other_day, 1));
        state.tasks.push(raw_task(3, "other list", "list_9", today(), 2));

        assert_eq!(visible_task_ids(&state), vec![1]);
    }

    #[test]
    fn test_alpha_sort_is_case_insensitive() {
        let mut state = AppState::seed(today());
        state.tasks.push(raw_task(1, "banana", "default", today(), 0));
        state.tasks.push(raw_task(2, "Apple", "default", today(), 1));
        state.settings.sort_by = SortBy::Alpha;

        assert_eq!(visible_task_ids(&state), vec![2, 1]);
    }

    #[test]
    fn test_completed_sort_ties_keep_storage_order() {
        let mut state = AppState::seed(today());
        state.tasks.push(raw_task(1, "first", "default", today(), 2));
        let mut done = raw_task(2, "done", "default", today(), 0);
        done.completed = true;
        state.tasks.push(done);
        state.tasks.push(raw_task(3, "second", "default", today(), 1));
        state.settings.sort_by = SortBy::Completed;

        // Open tasks first in storage order (ignoring manual order),
        // completed tasks after.
        assert_eq!(visible_task_ids(&state), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_mode_switch_leaves_manual_order_intact() {
        let mut state = AppState::seed(today());
        let banana = state.add_task("banana").expect("task added");
        let apple = state.add_task("apple").expect("task added");

        state.settings.sort_by = SortBy::Alpha;
        assert_eq!(visible_task_ids(&state), vec![apple, banana]);

        state.settings.sort_by = SortBy::Custom;
        assert_eq!(visible_task_ids(&state), vec![banana, apple]);
        assert_eq!(state.task(banana).expect("task exists").order, 0);
        assert_eq!(state.task(apple).expect("task exists").order, 1);
    }

    #[test]
    fn test_reorder_inserts_before_target() {
        let mut state = AppState::seed(today());
        let a = state.add_task("a").expect("task added");
        let b = state.add_task("b").expect("task added");
        let c = state.add_task("c").expect("task added");

        assert!(reorder(&mut state, c, a));
        assert_eq!(visible_task_ids(&state), vec![c, a, b]);
        assert_eq!(state.task(c).expect("task exists").order, 0);
        assert_eq!(state.task(a).expect("task exists").order, 1);
        assert_eq!(state.task(b).expect("task exists").order, 2);
    }

    #[test]
    fn test_reorder_self_drop_is_noop() {
        let mut state = AppState::seed(today());
        let a = state.add_task("a").expect("task added");
        state.add_task("b").expect("task added");

        assert!(!reorder(&mut state, a, a));
        assert_eq!(state.task(a).expect("task exists").order, 0);
    }

    #[test]
    fn test_reorder_under_alpha_materializes_visual_sequence() {
        let mut state = AppState::seed(today());
        let banana = state.add_task("banana").expect("task added");
        let apple = state.add_task("apple").expect("task added");
        let cherry = state.add_task("cherry").expect("task added");
        state.settings.sort_by = SortBy::Alpha;

        // Visual: apple, banana, cherry. Drop cherry before apple.
        assert!(reorder(&mut state, cherry, apple));
        assert_eq!(state.task(cherry).expect("task exists").order, 0);
        assert_eq!(state.task(apple).expect("task exists").order, 1);
        assert_eq!(state.task(banana).expect("task exists").order, 2);
    }

    #[test]
    fn test_active_count_ignores_completed() {
        let mut state = AppState::seed(today());
        let a = state.add_task("a").expect("task added");
        state.add_task("b").expect("task added");
        state.toggle_task(a);

        assert_eq!(active_count(&state), 1);
    }

    #[test]
    fn test_day_marker_scoped_to_current_list() {
        let mut state = AppState::seed(today());
        let elsewhere = NaiveDate::from_ymd_opt(2026, 8, 31).expect("valid date");
        state.tasks.push(raw_task(1, "other list", "list_9", elsewhere, 0));
        let mut done = raw_task(2, "done here", "default", today(), 1);
        done.completed = true;
        state.tasks.push(done);
        state.tasks.push(raw_task(3, "open here", "default", today(), 2));

        assert!(day_has_open_tasks(&state, today()));
        assert!(!day_has_open_tasks(&state, elsewhere));
    }

    #[test]
    fn test_groceries_flow() {
        let mut state = AppState::seed(today());
        state.add_list("Groceries").expect("list added");
        let milk = state.add_task("Milk").expect("task added");
        state.cycle_sort();
        let bread = state.add_task("Bread").expect("task added");

        assert_eq!(visible_task_ids(&state), vec![bread, milk]);
        assert_eq!(state.task(milk).expect("task exists").order, 0);
        assert_eq!(state.task(bread).expect("task exists").order, 1);
    }
}
