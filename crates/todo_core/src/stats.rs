//! Derived list statistics for display.

use crate::model::todo::Todo;
use serde::Serialize;

/// Counts derived from one list snapshot.
///
/// `pending` is always `total - completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TodoStats {
    pub fn from_todos(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|todo| todo.completed).count();
        Self {
            total: todos.len(),
            completed,
            pending: todos.len() - completed,
        }
    }

    /// Completed share as a whole percentage, rounded half up.
    ///
    /// An empty list reports `0`.
    pub fn completion_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let rounded = (self.completed * 100 + self.total / 2) / self.total;
        u8::try_from(rounded).unwrap_or(100)
    }
}
