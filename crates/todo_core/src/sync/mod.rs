//! Bridge between the pure store and best-effort persistence.
//!
//! # Responsibility
//! - Hydrate a new store from storage once at startup.
//! - Persist and report every committed state change.
//!
//! # Invariants
//! - Persistence runs from an on-change hook, never inside the reducer.
//! - Each commit is saved once, then logged once, after the commit.

mod session;

pub use session::{persist_on_change, start_session};
