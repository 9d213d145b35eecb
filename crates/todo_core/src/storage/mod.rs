//! Best-effort persistence for the todo list.
//!
//! # Responsibility
//! - Abstract the key-value medium behind [`KeyValueStore`].
//! - Serialize the whole list under one fixed key.
//!
//! # Invariants
//! - `TodoStorage::load` and `TodoStorage::save` never return errors and
//!   never panic; failures are only observable through log events.
//! - Stored values that do not decode into a valid list are discarded.

pub mod kv_store;
pub mod todo_storage;

pub use kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
pub use todo_storage::{TodoStorage, STORAGE_KEY};
