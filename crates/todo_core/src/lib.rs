//! Core state and persistence logic for the todo list.
//! This crate is the single source of truth for list invariants; views only
//! forward intents and render snapshots.

pub mod db;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod stats;
pub mod storage;
pub mod store;
pub mod sync;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::action::TodoAction;
pub use model::todo::{normalize_title, now_epoch_ms, Priority, Todo, TodoId};
pub use reducer::{empty_list, transition, TodoList};
pub use stats::TodoStats;
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
    TodoStorage, STORAGE_KEY,
};
pub use store::{ChangeListener, TodoStore};
pub use sync::{persist_on_change, start_session};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
