//! Glue between a rich-text editing surface and one note.
//!
//! # Responsibility
//! - Load the note's stored markup into the surface on attach.
//! - Write the surface's markup back as the note content after every edit.
//!
//! # Invariants
//! - Markup is stored verbatim; no validation or sanitizing happens here.
//! - Format toggles count as edits and are written back like typing.

use crate::model::note::{Note, NoteId, NotePatch};
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoResult;
use crate::service::note_store::NoteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFormat {
    Bold,
    Italic,
    BulletList,
}

/// Active formats at the editor's current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatState {
    pub bold: bool,
    pub italic: bool,
    pub bullet_list: bool,
}

/// Capabilities consumed from a WYSIWYG editing surface.
pub trait RichTextSurface {
    /// Current document serialized as markup.
    fn html(&self) -> String;
    fn set_content(&mut self, markup: &str);
    fn is_active(&self, format: TextFormat) -> bool;
    fn toggle(&mut self, format: TextFormat);
}

/// Editor attached to a single note.
pub struct NoteEditorBinding<E: RichTextSurface> {
    note_id: NoteId,
    editor: E,
}

impl<E: RichTextSurface> NoteEditorBinding<E> {
    /// Attaches `editor` to `note`, replacing the surface content.
    pub fn attach(note: &Note, mut editor: E) -> Self {
        editor.set_content(&note.content);
        Self {
            note_id: note.id.clone(),
            editor,
        }
    }

    pub fn note_id(&self) -> &NoteId {
        &self.note_id
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs `edit` against the surface, then stores the resulting markup.
    pub fn apply_edit<R, F>(&mut self, store: &mut NoteStore<R>, edit: F) -> RepoResult<()>
    where
        R: NoteRepository,
        F: FnOnce(&mut E),
    {
        edit(&mut self.editor);
        self.sync(store)
    }

    pub fn toggle_format<R: NoteRepository>(
        &mut self,
        store: &mut NoteStore<R>,
        format: TextFormat,
    ) -> RepoResult<()> {
        self.apply_edit(store, |editor| editor.toggle(format))
    }

    pub fn format_state(&self) -> FormatState {
        FormatState {
            bold: self.editor.is_active(TextFormat::Bold),
            italic: self.editor.is_active(TextFormat::Italic),
            bullet_list: self.editor.is_active(TextFormat::BulletList),
        }
    }

    /// Detaches and hands the surface back.
    pub fn into_editor(self) -> E {
        self.editor
    }

    fn sync<R: NoteRepository>(&self, store: &mut NoteStore<R>) -> RepoResult<()> {
        store.update(&self.note_id, NotePatch::content(self.editor.html()))
    }
}
