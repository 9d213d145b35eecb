//! Owned todo state container.
//!
//! # Responsibility
//! - Hold the authoritative list snapshot and its cached statistics.
//! - Route every mutation through [`transition`].
//! - Notify on-change listeners after each committed transition.
//!
//! # Invariants
//! - The list is never edited in place; each commit swaps in a new snapshot.
//! - Statistics are recomputed only on commit.
//! - Listeners run exactly once per commit, after the commit, in
//!   registration order. No-op transitions do not notify.

use crate::model::action::TodoAction;
use crate::model::todo::{Priority, Todo, TodoId};
use crate::reducer::{empty_list, transition, TodoList};
use crate::stats::TodoStats;
use log::debug;
use std::sync::Arc;

/// Hook invoked with the new snapshot after each committed transition.
pub type ChangeListener<'a> = Box<dyn FnMut(&TodoList) + 'a>;

/// Single-threaded todo store.
pub struct TodoStore<'a> {
    state: TodoList,
    stats: TodoStats,
    listeners: Vec<ChangeListener<'a>>,
}

impl Default for TodoStore<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TodoStore<'a> {
    /// Creates a store holding an empty list and no listeners.
    pub fn new() -> Self {
        Self {
            state: empty_list(),
            stats: TodoStats::default(),
            listeners: Vec::new(),
        }
    }

    /// Registers an on-change hook.
    ///
    /// The hook does not fire for the current state, only for later commits.
    pub fn subscribe(&mut self, listener: impl FnMut(&TodoList) + 'a) {
        self.listeners.push(Box::new(listener));
    }

    /// Applies `action` and returns whether a new state was committed.
    pub fn dispatch(&mut self, action: TodoAction) -> bool {
        let kind = action.kind();
        let next = transition(&self.state, action);
        if Arc::ptr_eq(&next, &self.state) {
            debug!("event=dispatch module=store status=noop action={kind}");
            return false;
        }

        self.state = next;
        self.stats = TodoStats::from_todos(&self.state);
        debug!(
            "event=dispatch module=store status=ok action={} total={}",
            kind, self.stats.total
        );

        let snapshot = Arc::clone(&self.state);
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
        true
    }

    /// Adds a todo and returns its generated id.
    ///
    /// The title is taken as-is; callers trim and reject blank input first.
    pub fn add(&mut self, title: impl Into<String>, priority: Priority) -> Option<TodoId> {
        let committed = self.dispatch(TodoAction::Add {
            title: title.into(),
            priority,
        });
        if !committed {
            return None;
        }
        self.state.last().map(|todo| todo.id.clone())
    }

    /// Flips completion of `id`. Returns `false` when no such todo exists.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        self.dispatch(TodoAction::Toggle { id })
    }

    /// Removes `id`. Returns `false` when no such todo exists.
    pub fn delete(&mut self, id: TodoId) -> bool {
        self.dispatch(TodoAction::Delete { id })
    }

    /// Returns a shared handle to the current snapshot.
    pub fn snapshot(&self) -> TodoList {
        Arc::clone(&self.state)
    }

    pub fn todos(&self) -> &[Todo] {
        &self.state
    }

    pub fn stats(&self) -> TodoStats {
        self.stats
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.state.iter().find(|todo| &todo.id == id)
    }
}
