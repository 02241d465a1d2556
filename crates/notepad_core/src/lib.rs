//! Core state and persistence for the notepad: notes with a rich-text
//! editor binding, a todo checklist, and a freehand drawing pad with undo.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use app::{open_app, start_logging, NotepadApp, SqliteNotepadApp};
pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::canvas::{
    CanvasDocument, CanvasObject, DrawTool, DrawingSnapshot, PathObject, Point,
};
pub use model::note::{Note, NoteId, NotePatch, DEFAULT_NOTE_TITLE};
pub use model::todo::{TodoId, TodoItem};
pub use repo::note_repo::{NoteRepository, StorageNoteRepository, NOTES_STORAGE_KEY};
pub use repo::storage::{KeyValueStorage, MemoryStorage, SqliteStorage};
pub use repo::{RepoError, RepoResult};
pub use service::drawing_history::{DrawingError, DrawingHistory, DrawingResult, DrawingSurface};
pub use service::editor_binding::{FormatState, NoteEditorBinding, RichTextSurface, TextFormat};
pub use service::note_list::{
    plain_text_preview, project_notes, NoteListQuery, NoteSummary, SortDirection,
};
pub use service::note_store::NoteStore;
pub use service::todo_list::TodoList;
pub use service::vector_canvas::VectorCanvas;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
