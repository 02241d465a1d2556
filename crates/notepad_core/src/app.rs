//! Top-level state container for the notes, todo and drawing panels.
//!
//! # Responsibility
//! - Own every panel's state and the list view's search/sort settings.
//! - Offer the operations a UI shell wires to its controls.
//!
//! # Invariants
//! - Child views only read through accessors or mutate through operations.

use crate::config::CoreConfig;
use crate::logging::{init_logging, LoggingError};
use crate::model::note::{Note, NoteId, NotePatch};
use crate::repo::note_repo::{NoteRepository, StorageNoteRepository};
use crate::repo::storage::SqliteStorage;
use crate::repo::RepoResult;
use crate::service::drawing_history::{DrawingHistory, DrawingSurface};
use crate::service::editor_binding::{NoteEditorBinding, RichTextSurface};
use crate::service::note_list::{project_notes, NoteListQuery, NoteSummary, SortDirection};
use crate::service::note_store::NoteStore;
use crate::service::todo_list::TodoList;
use crate::service::vector_canvas::VectorCanvas;
use log::info;

/// App backed by the on-disk SQLite storage and the built-in canvas.
pub type SqliteNotepadApp = NotepadApp<StorageNoteRepository<SqliteStorage>, VectorCanvas>;

pub struct NotepadApp<R: NoteRepository, D: DrawingSurface = VectorCanvas> {
    notes: NoteStore<R>,
    todos: TodoList,
    drawing: DrawingHistory<D>,
    query: NoteListQuery,
}

impl<R: NoteRepository, D: DrawingSurface> NotepadApp<R, D> {
    /// Loads persisted notes and starts with empty todos and history.
    pub fn load(repo: R, surface: D) -> RepoResult<Self> {
        Ok(Self {
            notes: NoteStore::load(repo)?,
            todos: TodoList::new(),
            drawing: DrawingHistory::new(surface),
            query: NoteListQuery::default(),
        })
    }

    pub fn new_note(&mut self) -> RepoResult<NoteId> {
        self.notes.create()
    }

    pub fn select_note(&mut self, id: NoteId) {
        self.notes.select(id);
    }

    /// Renames the selected note. Returns `false` when nothing is selected.
    pub fn rename_selected(&mut self, title: impl Into<String>) -> RepoResult<bool> {
        let Some(id) = self.selected_existing_id() else {
            return Ok(false);
        };
        self.notes.update(&id, NotePatch::title(title))?;
        Ok(true)
    }

    /// Deletes the selected note. Returns `false` when nothing is selected.
    pub fn delete_selected(&mut self) -> RepoResult<bool> {
        let Some(id) = self.selected_existing_id() else {
            return Ok(false);
        };
        self.notes.delete(&id)?;
        Ok(true)
    }

    pub fn set_search_query(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn search_query(&self) -> &str {
        &self.query.search
    }

    pub fn toggle_sort(&mut self) -> SortDirection {
        self.query.sort = self.query.sort.toggled();
        self.query.sort
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.query.sort
    }

    /// Notes matching the current search, in the current sort order.
    pub fn visible_notes(&self) -> Vec<&Note> {
        project_notes(self.notes.notes(), &self.query)
    }

    pub fn note_summaries(&self) -> Vec<NoteSummary> {
        self.visible_notes()
            .into_iter()
            .map(NoteSummary::from_note)
            .collect()
    }

    /// Binds `editor` to the selected note, if one exists.
    pub fn open_editor<E: RichTextSurface>(&self, editor: E) -> Option<NoteEditorBinding<E>> {
        self.notes
            .selected_note()
            .map(|note| NoteEditorBinding::attach(note, editor))
    }

    pub fn notes(&self) -> &NoteStore<R> {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteStore<R> {
        &mut self.notes
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn todos_mut(&mut self) -> &mut TodoList {
        &mut self.todos
    }

    pub fn drawing(&self) -> &DrawingHistory<D> {
        &self.drawing
    }

    pub fn drawing_mut(&mut self) -> &mut DrawingHistory<D> {
        &mut self.drawing
    }

    fn selected_existing_id(&self) -> Option<NoteId> {
        self.notes.selected_note().map(|note| note.id.clone())
    }
}

/// Starts file logging at `config.log_level` under `config.log_dir()`.
///
/// Idempotent for the same config; see [`init_logging`] for conflicts.
pub fn start_logging(config: &CoreConfig) -> Result<(), LoggingError> {
    init_logging(&config.log_level, config.log_dir())
}

/// Opens the SQLite-backed app described by `config`.
///
/// Creates `data_dir` when missing. Logging is started separately through
/// [`start_logging`].
pub fn open_app(config: &CoreConfig) -> RepoResult<SqliteNotepadApp> {
    std::fs::create_dir_all(config.data_dir())?;
    let storage = SqliteStorage::open(config.db_path())?;
    let app = NotepadApp::load(StorageNoteRepository::new(storage), VectorCanvas::new())?;
    info!(
        "event=app_open module=core status=ok notes={}",
        app.notes().notes().len()
    );
    Ok(app)
}
