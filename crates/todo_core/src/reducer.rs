//! Pure todo state transitions.
//!
//! # Responsibility
//! - Map `(current list, action)` to the next list.
//!
//! # Invariants
//! - Never mutates the input snapshot and never panics.
//! - Add never introduces a duplicate: a generated id is re-rolled if it
//!   already exists.
//! - Load trusts its input and installs it verbatim; callers that read
//!   untrusted data (storage) reject duplicate ids before dispatching.
//! - A transition that changes nothing returns the input snapshot itself
//!   (`Arc::ptr_eq` holds), so owners can detect no-ops without comparing
//!   contents.

use crate::model::action::TodoAction;
use crate::model::todo::{Todo, TodoId};
use std::sync::Arc;

/// Immutable shared snapshot of the ordered todo list.
pub type TodoList = Arc<Vec<Todo>>;

/// Returns a fresh empty snapshot.
pub fn empty_list() -> TodoList {
    Arc::new(Vec::new())
}

/// Applies one action to the current snapshot and returns the next one.
pub fn transition(current: &TodoList, action: TodoAction) -> TodoList {
    match action {
        TodoAction::Add { title, priority } => {
            let mut todo = Todo::new(title, priority);
            todo.id = fresh_id(current, todo.id);

            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(todo);
            Arc::new(next)
        }
        TodoAction::Delete { id } => {
            if !contains(current, &id) {
                return Arc::clone(current);
            }
            Arc::new(
                current
                    .iter()
                    .filter(|todo| todo.id != id)
                    .cloned()
                    .collect(),
            )
        }
        TodoAction::Toggle { id } => {
            if !contains(current, &id) {
                return Arc::clone(current);
            }
            Arc::new(
                current
                    .iter()
                    .map(|todo| {
                        if todo.id == id {
                            todo.toggled()
                        } else {
                            todo.clone()
                        }
                    })
                    .collect(),
            )
        }
        TodoAction::Load(todos) => Arc::new(todos),
        TodoAction::Unrecognized => Arc::clone(current),
    }
}

fn contains(list: &[Todo], id: &TodoId) -> bool {
    list.iter().any(|todo| &todo.id == id)
}

fn fresh_id(list: &[Todo], candidate: TodoId) -> TodoId {
    let mut id = candidate;
    while contains(list, &id) {
        id = TodoId::generate();
    }
    id
}
