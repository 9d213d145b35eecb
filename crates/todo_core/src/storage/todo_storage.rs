//! Todo list persistence adapter.
//!
//! # Responsibility
//! - Encode the list as a JSON array under a fixed key.
//! - Degrade every failure to "no persisted state" plus an error log event.
//!
//! # Invariants
//! - A blank or missing value loads as an empty list.
//! - A value with duplicate ids is rejected as a whole.

use super::kv_store::{KeyValueStore, StorageError, StorageResult};
use crate::model::todo::Todo;
use log::{debug, error, info};
use std::collections::HashSet;

/// Fixed key holding the serialized list.
pub const STORAGE_KEY: &str = "advanced-todo-dashboard";

/// Best-effort list persistence over any [`KeyValueStore`].
pub struct TodoStorage<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TodoStorage<S> {
    /// Uses the default [`STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the previously saved list.
    ///
    /// Returns an empty list on a missing key, undecodable data, or any
    /// storage error. Never fails.
    pub fn load(&self) -> Vec<Todo> {
        match self.try_load() {
            Ok(todos) => {
                info!(
                    "event=todos_load module=storage status=ok count={}",
                    todos.len()
                );
                todos
            }
            Err(err) => {
                error!(
                    "event=todos_load module=storage status=error error_code={} error={}",
                    error_code(&err),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the stored list. Failures are logged and swallowed.
    pub fn save(&self, todos: &[Todo]) {
        match self.try_save(todos) {
            Ok(()) => debug!(
                "event=todos_save module=storage status=ok count={}",
                todos.len()
            ),
            Err(err) => error!(
                "event=todos_save module=storage status=error error_code={} count={} error={}",
                error_code(&err),
                todos.len(),
                err
            ),
        }
    }

    /// Error-reporting variant of [`load`](Self::load).
    pub fn try_load(&self) -> StorageResult<Vec<Todo>> {
        let raw = match self.store.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Vec::new()),
        };

        let todos: Vec<Todo> = serde_json::from_str(&raw)?;
        ensure_unique_ids(&todos)?;
        Ok(todos)
    }

    /// Error-reporting variant of [`save`](Self::save).
    pub fn try_save(&self, todos: &[Todo]) -> StorageResult<()> {
        let raw = serde_json::to_string(todos)?;
        self.store.set(&self.key, &raw)
    }
}

fn ensure_unique_ids(todos: &[Todo]) -> StorageResult<()> {
    let mut seen = HashSet::with_capacity(todos.len());
    for todo in todos {
        if !seen.insert(&todo.id) {
            return Err(StorageError::InvalidData(format!(
                "duplicate todo id `{}`",
                todo.id
            )));
        }
    }
    Ok(())
}

fn error_code(err: &StorageError) -> &'static str {
    match err {
        StorageError::Db(_) => "storage_db_failed",
        StorageError::Serialization(_) => "storage_decode_failed",
        StorageError::Unavailable(_) => "storage_unavailable",
        StorageError::InvalidData(_) => "storage_invalid_data",
    }
}

#[cfg(test)]
mod tests {
    use super::{TodoStorage, STORAGE_KEY};
    use crate::model::todo::{Priority, Todo};
    use crate::storage::kv_store::{MemoryKeyValueStore, StorageError};

    #[test]
    fn blank_value_loads_as_empty() {
        let kv = MemoryKeyValueStore::new();
        kv.insert_raw(STORAGE_KEY, "   ");

        let storage = TodoStorage::new(kv);
        assert!(storage.try_load().unwrap().is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let todo = Todo::new("twice", Priority::Low);
        let raw = serde_json::to_string(&vec![todo.clone(), todo]).unwrap();
        let kv = MemoryKeyValueStore::new();
        kv.insert_raw(STORAGE_KEY, raw);

        let storage = TodoStorage::new(kv);
        let err = storage.try_load().unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn custom_key_is_used_for_reads_and_writes() {
        let kv = MemoryKeyValueStore::new();
        let storage = TodoStorage::with_key(kv.clone(), "other-list");

        storage.save(&[Todo::new("scoped", Priority::High)]);

        assert_eq!(storage.key(), "other-list");
        assert!(kv.raw("other-list").is_some());
        assert!(kv.raw(STORAGE_KEY).is_none());
    }
}
