//! Todo domain model.
//!
//! # Responsibility
//! - Define the item record shared by the reducer, storage and views.
//! - Define the closed action vocabulary accepted by the state store.
//!
//! # Invariants
//! - Every todo is identified by a stable `TodoId`.
//! - Item ids are unique within one list.

pub mod action;
pub mod todo;
