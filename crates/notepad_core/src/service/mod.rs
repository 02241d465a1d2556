//! Use-case services over the domain model.
//!
//! # Responsibility
//! - Own mutable panel state and expose it only through named operations.
//! - Keep UI shells decoupled from storage details.

pub mod drawing_history;
pub mod editor_binding;
pub mod note_list;
pub mod note_store;
pub mod todo_list;
pub mod vector_canvas;
