//! Key-value storage contract and its implementations.
//!
//! # Responsibility
//! - Provide `get`/`set` of string values by string key.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - `set` overwrites any previous value for the key.
//! - `get` of a never-written key is `Ok(None)`, not an error.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reading, writing or decoding persisted data.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Serialization(serde_json::Error),
    /// The medium refuses access (disabled, quota exceeded, ...).
    Unavailable(String),
    /// Decoded data violates a list invariant.
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "serialization failed: {err}"),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::Unavailable(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// String key-value medium.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// SQLite-backed key-value store over the `kv_store` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-process key-value store.
///
/// Clones share the same map, so a caller can keep a handle for inspection
/// after moving one into a [`TodoStorage`](super::TodoStorage). Not `Send`.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    disabled: bool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fault-injection and inspection helpers.
///
/// These bypass the [`KeyValueStore`] contract: they simulate an unavailable
/// medium and read or plant raw values under any key, the way a user could
/// tamper with browser storage. Production callers go through
/// [`TodoStorage`](super::TodoStorage) and never need them.
impl MemoryKeyValueStore {
    /// Marks the medium as unavailable; every later trait call fails with
    /// [`StorageError::Unavailable`] until re-enabled.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.borrow_mut().disabled = disabled;
    }

    /// Writes a raw value, bypassing the disabled flag.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner
            .borrow_mut()
            .entries
            .insert(key.into(), value.into());
    }

    /// Reads a raw value, bypassing the disabled flag.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let state = self.inner.borrow();
        if state.disabled {
            return Err(StorageError::Unavailable("memory store disabled".to_string()));
        }
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut state = self.inner.borrow_mut();
        if state.disabled {
            return Err(StorageError::Unavailable("memory store disabled".to_string()));
        }
        state.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore, StorageError};

    #[test]
    fn disabled_flag_blocks_trait_calls_but_not_raw_access() {
        let kv = MemoryKeyValueStore::new();
        kv.set("k", "before").unwrap();
        kv.set_disabled(true);

        assert!(matches!(kv.get("k"), Err(StorageError::Unavailable(_))));
        assert!(matches!(kv.set("k", "x"), Err(StorageError::Unavailable(_))));
        assert_eq!(kv.raw("k").as_deref(), Some("before"));

        kv.insert_raw("k", "planted");
        kv.set_disabled(false);
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("planted"));
    }

    #[test]
    fn clones_share_entries() {
        let kv = MemoryKeyValueStore::new();
        let handle = kv.clone();

        kv.set("k", "v").unwrap();

        assert_eq!(handle.raw("k").as_deref(), Some("v"));
    }
}
