//! JSON file persistence for the application state
//!
//! Everything lives in one data directory: the current state blob, the
//! legacy flat task file from before lists existed, and a last-run
//! marker gating the daily recurrence reset. The state is written
//! whole after every mutation; at this scale a full rewrite is cheaper
//! than being clever.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use nanobanana_core::{AppState, LegacyTask};

use crate::error::{AppError, Result};

pub const STATE_FILE: &str = "nanobanana_state.json";
pub const LEGACY_FILE: &str = "nanobanana_todos.json";
pub const LAST_RUN_FILE: &str = "nanobanana_last_run";

pub struct StateStorage {
    data_dir: PathBuf,
}

impl StateStorage {
    /// Open the storage, creating the data directory if needed
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|err| {
            AppError::io(
                format!("Failed to create data directory {}", data_dir.display()),
                err,
            )
        })?;
        debug!(data_dir = %data_dir.display(), "opened state storage");
        Ok(Self { data_dir })
    }

    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE)
    }

    fn legacy_path(&self) -> PathBuf {
        self.data_dir.join(LEGACY_FILE)
    }

    fn last_run_path(&self) -> PathBuf {
        self.data_dir.join(LAST_RUN_FILE)
    }

    /// Load the persisted state.
    ///
    /// A missing, unreadable or malformed state file yields the seed
    /// state; user data is never a fatal error on startup.
    pub fn load(&self, today: NaiveDate) -> AppState {
        let path = self.state_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => {
                info!(file = %path.display(), "no state file, starting fresh");
                return AppState::seed(today);
            }
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => match AppState::from_document(doc, today) {
                Some(state) => {
                    debug!(tasks = state.tasks.len(), lists = state.lists.len(), "state loaded");
                    state
                }
                None => {
                    warn!(file = %path.display(), "state file has an unexpected shape, starting fresh");
                    AppState::seed(today)
                }
            },
            Err(err) => {
                warn!(file = %path.display(), %err, "unreadable state file, starting fresh");
                AppState::seed(today)
            }
        }
    }

    /// Write the whole state blob synchronously
    pub fn save(&self, state: &AppState) -> Result<()> {
        let serialized = serde_json::to_string(state)?;
        let path = self.state_path();
        fs::write(&path, serialized)
            .map_err(|err| AppError::io(format!("Failed to write {}", path.display()), err))?;
        debug!(tasks = state.tasks.len(), "state saved");
        Ok(())
    }

    /// Read the legacy flat task file, if one is present and readable.
    ///
    /// The file is only deleted after a successful import, via
    /// [`StateStorage::remove_legacy`].
    pub fn read_legacy(&self) -> Option<Vec<LegacyTask>> {
        let raw = fs::read_to_string(self.legacy_path()).ok()?;
        match serde_json::from_str(&raw) {
            Ok(items) => Some(items),
            Err(err) => {
                warn!(%err, "ignoring unreadable legacy task file");
                None
            }
        }
    }

    pub fn remove_legacy(&self) -> Result<()> {
        let path = self.legacy_path();
        fs::remove_file(&path)
            .map_err(|err| AppError::io(format!("Failed to remove {}", path.display()), err))?;
        info!("removed legacy task file");
        Ok(())
    }

    /// The date the recurrence reset last ran, if recorded
    pub fn last_run(&self) -> Option<NaiveDate> {
        let raw = fs::read_to_string(self.last_run_path()).ok()?;
        raw.trim().parse().ok()
    }

    pub fn set_last_run(&self, date: NaiveDate) -> Result<()> {
        let path = self.last_run_path();
        fs::write(&path, date.format("%Y-%m-%d").to_string())
            .map_err(|err| AppError::io(format!("Failed to write {}", path.display()), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid date")
    }

    fn storage() -> (TempDir, StateStorage) {
        let dir = TempDir::new().expect("tempdir created");
        let storage = StateStorage::open(dir.path()).expect("storage opened");
        (dir, storage)
    }

    #[test]
    fn test_missing_state_file_yields_seed() {
        let (_dir, storage) = storage();
        let state = storage.load(today());
        assert_eq!(state.lists.len(), 1);
        assert_eq!(state.lists[0].name, "My Tasks");
        assert_eq!(state.tags.len(), 2);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (_dir, storage) = storage();
        let mut state = storage.load(today());
        state.add_task("persist me").expect("task added");
        state.add_list("Errands").expect("list added");
        storage.save(&state).expect("state saved");

        let restored = storage.load(today());
        assert_eq!(restored, state);
    }

    #[test]
    fn test_malformed_state_file_yields_seed() {
        let (_dir, storage) = storage();
        fs::write(storage.state_path(), "{not json").expect("file written");
        let state = storage.load(today());
        assert!(state.tasks.is_empty());

        fs::write(storage.state_path(), r#"{"tasks": []}"#).expect("file written");
        let state = storage.load(today());
        assert_eq!(state.lists.len(), 1);
    }

    #[test]
    fn test_legacy_file_lifecycle() {
        let (dir, storage) = storage();
        assert!(storage.read_legacy().is_none());

        let legacy = dir.path().join(LEGACY_FILE);
        fs::write(&legacy, r#"[{"id": 1, "text": "old", "completed": true}]"#)
            .expect("file written");
        let items = storage.read_legacy().expect("legacy items read");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "old");
        assert!(items[0].completed);

        storage.remove_legacy().expect("legacy file removed");
        assert!(!legacy.exists());
    }

    #[test]
    fn test_unreadable_legacy_file_is_ignored() {
        let (dir, storage) = storage();
        fs::write(dir.path().join(LEGACY_FILE), "oops").expect("file written");
        assert!(storage.read_legacy().is_none());
    }

    #[test]
    fn test_last_run_marker_roundtrip() {
        let (_dir, storage) = storage();
        assert!(storage.last_run().is_none());
        storage.set_last_run(today()).expect("marker written");
        assert_eq!(storage.last_run(), Some(today()));
    }
}
