//! Session startup and the persistence hook.

use crate::model::action::TodoAction;
use crate::reducer::TodoList;
use crate::storage::{KeyValueStore, TodoStorage};
use crate::store::TodoStore;
use log::info;
use std::time::Instant;

/// Creates a store hydrated from `storage` and wired to persist changes.
///
/// A non-empty saved list is injected through a `Load` action after the
/// persistence hook is attached, so the restored state is written back once.
/// An empty or unreadable saved list leaves the store empty and untouched.
pub fn start_session<'a, S: KeyValueStore + 'a>(storage: TodoStorage<S>) -> TodoStore<'a> {
    let started_at = Instant::now();
    info!("event=session_start module=sync status=start");

    let saved = storage.load();
    let restored = saved.len();

    let mut store = TodoStore::new();
    store.subscribe(persist_on_change(storage));
    if !saved.is_empty() {
        store.dispatch(TodoAction::Load(saved));
    }

    info!(
        "event=session_start module=sync status=ok restored={} duration_ms={}",
        restored,
        started_at.elapsed().as_millis()
    );
    store
}

/// On-change hook: saves the new snapshot, then emits `todos_updated`.
pub fn persist_on_change<'a, S: KeyValueStore + 'a>(
    storage: TodoStorage<S>,
) -> impl FnMut(&TodoList) + 'a {
    move |todos: &TodoList| {
        storage.save(todos);
        info!(
            "event=todos_updated module=sync status=ok total={}",
            todos.len()
        );
    }
}
