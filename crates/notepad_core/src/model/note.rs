//! Note record and partial-update patch.
//!
//! # Invariants
//! - `id` is derived from the creation timestamp and never reassigned.
//! - Any applied patch refreshes `last_modified`, even an empty one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Title given to every freshly created note.
pub const DEFAULT_NOTE_TITLE: &str = "Untitled";

/// Opaque note identifier.
///
/// Serialized as a bare string so stored arrays stay readable by other hosts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Id for a note created at `created_at` (epoch milliseconds).
    pub fn from_timestamp(created_at: DateTime<Utc>) -> Self {
        Self(created_at.timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A titled rich-text document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Serialized editor markup, stored verbatim.
    pub content: String,
    pub last_modified: DateTime<Utc>,
}

impl Note {
    /// Creates an empty `"Untitled"` note.
    pub fn new(id: NoteId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: String::new(),
            last_modified: now,
        }
    }

    /// Merges `patch` into this note and stamps `now`.
    pub fn apply(&mut self, patch: NotePatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.last_modified = now;
    }
}

/// Partial note update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteId, NotePatch};
    use chrono::{TimeZone, Utc};

    #[test]
    fn serializes_with_camel_case_fields_and_iso_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let note = Note::new(NoteId::from_timestamp(at), at);
        let json = serde_json::to_value(&note).unwrap();

        assert_eq!(json["id"], "1709285400000");
        assert_eq!(json["title"], "Untitled");
        assert_eq!(json["content"], "");
        assert_eq!(json["lastModified"], "2024-03-01T09:30:00Z");
    }

    #[test]
    fn deserializes_millisecond_iso_strings() {
        let raw = r#"{"id":"1","title":"a","content":"<p>b</p>","lastModified":"2024-03-01T09:30:00.123Z"}"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(note.last_modified.timestamp_millis(), 1_709_285_400_123);
        assert_eq!(note.content, "<p>b</p>");
    }

    #[test]
    fn apply_only_touches_provided_fields() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let mut note = Note::new(NoteId::new("n1"), created);
        note.content = "<p>body</p>".to_string();

        note.apply(NotePatch::title("Groceries"), later);

        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "<p>body</p>");
        assert_eq!(note.last_modified, later);
    }
}
