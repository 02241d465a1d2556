//! In-memory checklist. Nothing here is persisted.

use crate::model::todo::{TodoId, TodoItem};
use log::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an open item. Blank or whitespace-only text is ignored.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        if text.trim().is_empty() {
            debug!("event=todo_add module=todos status=skipped reason=blank");
            return None;
        }
        let item = TodoItem::new(text);
        let id = item.id;
        self.items.push(item);
        info!(
            "event=todo_add module=todos status=ok todo_id={id} count={}",
            self.items.len()
        );
        Some(id)
    }

    /// Flips `completed` on the matching item; returns whether one matched.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                debug!(
                    "event=todo_toggle module=todos status=ok todo_id={id} completed={}",
                    item.completed
                );
                true
            }
            None => false,
        }
    }

    /// Removes the matching item; returns whether one was removed.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            info!(
                "event=todo_delete module=todos status=ok todo_id={id} count={}",
                self.items.len()
            );
        }
        removed
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet completed.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }
}
