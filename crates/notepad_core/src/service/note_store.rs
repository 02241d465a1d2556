//! Note store: the ordered, persisted list of notes plus selection.
//!
//! # Responsibility
//! - Own the in-memory note list and the current selection.
//! - Mirror the full list to the repository after every mutation.
//!
//! # Invariants
//! - New notes are inserted at the head and become selected.
//! - Updates and deletes of unknown ids are silent no-ops, but still persist.
//! - `delete` clears the selection regardless of which note was selected.
//! - Persistence always observes the state after the mutation.

use crate::model::note::{Note, NoteId, NotePatch};
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoResult;
use chrono::{DateTime, Utc};
use log::{debug, error, info};

pub struct NoteStore<R: NoteRepository> {
    repo: R,
    notes: Vec<Note>,
    selected: Option<NoteId>,
}

impl<R: NoteRepository> NoteStore<R> {
    /// Loads the persisted list; a missing list starts empty.
    ///
    /// Corrupt stored data is returned as an error, not replaced.
    pub fn load(repo: R) -> RepoResult<Self> {
        let notes = repo.load_notes()?;
        info!(
            "event=note_store_load module=notes status=ok count={}",
            notes.len()
        );
        Ok(Self {
            repo,
            notes,
            selected: None,
        })
    }

    /// Creates an empty `"Untitled"` note at the head and selects it.
    pub fn create(&mut self) -> RepoResult<NoteId> {
        let now = Utc::now();
        let id = self.next_id(now);
        self.notes.insert(0, Note::new(id.clone(), now));
        self.selected = Some(id.clone());
        self.persist("note_create")?;
        info!(
            "event=note_create module=notes status=ok note_id={id} count={}",
            self.notes.len()
        );
        Ok(id)
    }

    /// Merges `patch` into the note with `id` and refreshes its timestamp.
    pub fn update(&mut self, id: &NoteId, patch: NotePatch) -> RepoResult<()> {
        let now = Utc::now();
        let found = match self.notes.iter_mut().find(|note| &note.id == id) {
            Some(note) => {
                note.apply(patch, now);
                true
            }
            None => false,
        };
        self.persist("note_update")?;
        debug!("event=note_update module=notes status=ok note_id={id} found={found}");
        Ok(())
    }

    /// Removes the note with `id` and clears the selection.
    pub fn delete(&mut self, id: &NoteId) -> RepoResult<()> {
        let before = self.notes.len();
        self.notes.retain(|note| &note.id != id);
        self.selected = None;
        self.persist("note_delete")?;
        info!(
            "event=note_delete module=notes status=ok note_id={id} removed={} count={}",
            before - self.notes.len(),
            self.notes.len()
        );
        Ok(())
    }

    /// Selects `id`; an id without a matching note selects nothing visible.
    pub fn select(&mut self, id: NoteId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn selected_id(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn persist(&mut self, event: &'static str) -> RepoResult<()> {
        self.repo.save_notes(&self.notes).inspect_err(|err| {
            error!(
                "event={event} module=notes status=error error_code=persist_failed error={err}"
            );
        })
    }

    // Ids come from the creation millisecond; bump past collisions.
    fn next_id(&self, now: DateTime<Utc>) -> NoteId {
        let mut millis = now.timestamp_millis();
        loop {
            let candidate = NoteId::new(millis.to_string());
            if self.get(&candidate).is_none() {
                return candidate;
            }
            millis += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStore;
    use crate::model::note::{NoteId, NotePatch};
    use crate::repo::note_repo::StorageNoteRepository;
    use crate::repo::storage::MemoryStorage;

    fn empty_store() -> NoteStore<StorageNoteRepository<MemoryStorage>> {
        NoteStore::load(StorageNoteRepository::new(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn rapid_creates_get_distinct_ids_newest_first() {
        let mut store = empty_store();
        let first = store.create().unwrap();
        let second = store.create().unwrap();
        let third = store.create().unwrap();

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
        let order: Vec<&NoteId> = store.notes().iter().map(|note| &note.id).collect();
        assert_eq!(order, vec![&third, &second, &first]);
        assert_eq!(store.selected_id(), Some(&third));
    }

    #[test]
    fn update_of_unknown_id_changes_nothing() {
        let mut store = empty_store();
        store.create().unwrap();
        let before = store.notes().to_vec();

        store
            .update(&NoteId::new("missing"), NotePatch::title("X"))
            .unwrap();

        assert_eq!(store.notes(), before.as_slice());
    }

    #[test]
    fn selecting_unknown_id_yields_no_selected_note() {
        let mut store = empty_store();
        store.select(NoteId::new("ghost"));
        assert!(store.selected_note().is_none());
        assert_eq!(store.selected_id(), Some(&NoteId::new("ghost")));
    }
}
