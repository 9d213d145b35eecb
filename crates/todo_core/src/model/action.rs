//! Actions accepted by the todo state store.
//!
//! The JSON form is `{"type": <TAG>, "payload": <data>}` with tags
//! `ADD_TODO`, `DELETE_TODO`, `TOGGLE_TODO` and `LOAD_TODOS`; a load carries
//! the list itself as its payload. Any other tag decodes to
//! [`TodoAction::Unrecognized`] whatever its payload, and the reducer treats
//! it as a no-op.

use crate::model::todo::{Priority, Todo, TodoId};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

const ADD_TODO: &str = "ADD_TODO";
const DELETE_TODO: &str = "DELETE_TODO";
const TOGGLE_TODO: &str = "TOGGLE_TODO";
const LOAD_TODOS: &str = "LOAD_TODOS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum TodoAction {
    /// Append a new pending todo. Titles are not validated here.
    #[serde(rename = "ADD_TODO")]
    Add { title: String, priority: Priority },
    #[serde(rename = "DELETE_TODO")]
    Delete { id: TodoId },
    #[serde(rename = "TOGGLE_TODO")]
    Toggle { id: TodoId },
    /// Replace the whole list. Used once at startup to hydrate from storage.
    #[serde(rename = "LOAD_TODOS")]
    Load(Vec<Todo>),
    #[serde(rename = "UNRECOGNIZED")]
    Unrecognized,
}

impl TodoAction {
    /// Short metadata-only label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Delete { .. } => "delete",
            Self::Toggle { .. } => "toggle",
            Self::Load(_) => "load",
            Self::Unrecognized => "unrecognized",
        }
    }
}

#[derive(Deserialize)]
struct ActionEnvelope {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    payload: serde_json::Value,
}

#[derive(Deserialize)]
struct AddPayload {
    title: String,
    priority: Priority,
}

#[derive(Deserialize)]
struct IdPayload {
    id: TodoId,
}

impl ActionEnvelope {
    fn into_action(self) -> serde_json::Result<TodoAction> {
        let action = match self.tag.as_str() {
            ADD_TODO => {
                let AddPayload { title, priority } = serde_json::from_value(self.payload)?;
                TodoAction::Add { title, priority }
            }
            DELETE_TODO => {
                let IdPayload { id } = serde_json::from_value(self.payload)?;
                TodoAction::Delete { id }
            }
            TOGGLE_TODO => {
                let IdPayload { id } = serde_json::from_value(self.payload)?;
                TodoAction::Toggle { id }
            }
            LOAD_TODOS => TodoAction::Load(serde_json::from_value(self.payload)?),
            _ => TodoAction::Unrecognized,
        };
        Ok(action)
    }
}

// Hand-written so unknown tags stay total even when they carry a payload.
impl<'de> Deserialize<'de> for TodoAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ActionEnvelope::deserialize(deserializer)?
            .into_action()
            .map_err(D::Error::custom)
    }
}
