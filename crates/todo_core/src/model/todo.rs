//! Todo item model.
//!
//! # Responsibility
//! - Define the canonical todo record and its priority tag.
//! - Provide the persisted JSON field naming (`createdAt`, lowercase priority).
//!
//! # Invariants
//! - `id` is assigned at creation and never changes afterwards.
//! - `completed` starts as `false` and is only flipped by a toggle.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Opaque identifier for a todo item, persisted as a plain string.
///
/// New ids are random UUID v4 strings, but any string read back from
/// storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wraps an existing id without interpreting it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TodoId {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(value))
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Closed priority tag for a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    /// Preselected by input forms.
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Wire/display label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses user-entered priority text.
    ///
    /// Case-insensitive; surrounding whitespace is ignored and `med` is
    /// accepted as shorthand for medium.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// Display text. Stored exactly as given by the caller.
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    /// Unix epoch milliseconds. Not used for ordering.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Todo {
    /// Creates a pending todo with a generated id and the current timestamp.
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self::with_id(TodoId::generate(), title, priority, now_epoch_ms())
    }

    /// Creates a pending todo with caller-provided identity and timestamp.
    ///
    /// Used by restore paths and tests where identity already exists.
    pub fn with_id(
        id: TodoId,
        title: impl Into<String>,
        priority: Priority,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            priority,
            created_at,
        }
    }

    /// Returns a copy with `completed` flipped and every other field unchanged.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Trims raw form input into an acceptable title.
///
/// Returns `None` when nothing but whitespace was entered; views must not
/// dispatch an add in that case.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Clamps to `0` if the clock reports a time before the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
