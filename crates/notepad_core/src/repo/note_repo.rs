//! Note list persistence on top of key/value storage.
//!
//! # Invariants
//! - The whole list lives as one JSON array under [`NOTES_STORAGE_KEY`].
//! - A missing key means an empty list; an unparseable value is an error.

use crate::model::note::Note;
use crate::repo::storage::KeyValueStorage;
use crate::repo::{RepoError, RepoResult};
use log::{debug, error};

pub const NOTES_STORAGE_KEY: &str = "notes";

/// Whole-list note persistence.
pub trait NoteRepository {
    fn load_notes(&self) -> RepoResult<Vec<Note>>;
    fn save_notes(&mut self, notes: &[Note]) -> RepoResult<()>;
}

/// Stores notes as a serialized array in any [`KeyValueStorage`].
pub struct StorageNoteRepository<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> StorageNoteRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: KeyValueStorage> NoteRepository for StorageNoteRepository<S> {
    fn load_notes(&self) -> RepoResult<Vec<Note>> {
        let Some(raw) = self.storage.get_item(NOTES_STORAGE_KEY)? else {
            debug!("event=notes_load module=repo status=ok source=empty count=0");
            return Ok(Vec::new());
        };

        let notes: Vec<Note> = serde_json::from_str(&raw).map_err(|source| {
            error!(
                "event=notes_load module=repo status=error error_code=corrupt_state bytes={}",
                raw.len()
            );
            RepoError::CorruptState {
                key: NOTES_STORAGE_KEY.to_string(),
                source,
            }
        })?;
        debug!(
            "event=notes_load module=repo status=ok source=storage count={}",
            notes.len()
        );
        Ok(notes)
    }

    fn save_notes(&mut self, notes: &[Note]) -> RepoResult<()> {
        let raw = serde_json::to_string(notes).map_err(RepoError::Encode)?;
        self.storage.set_item(NOTES_STORAGE_KEY, &raw)?;
        debug!(
            "event=notes_save module=repo status=ok count={} bytes={}",
            notes.len(),
            raw.len()
        );
        Ok(())
    }
}
