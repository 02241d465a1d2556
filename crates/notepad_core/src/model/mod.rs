//! Domain records for the notes, todo and drawing panels.
//!
//! # Invariants
//! - The three collections are independent; no record refers to another.
//! - Ids are unique within their own collection only.

pub mod canvas;
pub mod note;
pub mod todo;
