//! Nanobanana core - pure domain logic for per-day task lists
//!
//! This crate contains no I/O operations. Persistence is handled by
//! storage adapters in consuming crates; the state here is a single
//! owned object that every mutation funnels through.

pub mod calendar;
pub mod error;
pub mod list;
pub mod state;
pub mod task;
pub mod theme;
pub mod view;

pub use error::{CoreError, Result};
pub use list::{DEFAULT_LIST_ID, List, ResetFrequency};
pub use state::{AppState, LegacyTask, Settings, SortBy};
pub use task::{Tag, Task};
