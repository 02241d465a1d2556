//! Read-only projection of the note list for display.
//!
//! # Invariants
//! - Projection never mutates or clones the underlying notes.
//! - Search is a case-insensitive substring match over title or content.
//! - Sorting by `last_modified` is stable for equal timestamps.

use crate::model::note::{Note, NoteId, DEFAULT_NOTE_TITLE};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;

static MARKUP_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid markup tag regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Oldest first.
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListQuery {
    pub search: String,
    pub sort: SortDirection,
}

impl NoteListQuery {
    pub fn new(search: impl Into<String>, sort: SortDirection) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }
}

/// Filters and orders `notes` for the list panel.
pub fn project_notes<'a>(notes: &'a [Note], query: &NoteListQuery) -> Vec<&'a Note> {
    let needle = query.search.to_lowercase();
    let mut visible: Vec<&Note> = notes
        .iter()
        .filter(|note| matches_search(note, &needle))
        .collect();

    match query.sort {
        SortDirection::Desc => visible.sort_by(|a, b| b.last_modified.cmp(&a.last_modified)),
        SortDirection::Asc => visible.sort_by(|a, b| a.last_modified.cmp(&b.last_modified)),
    }
    visible
}

fn matches_search(note: &Note, needle: &str) -> bool {
    needle.is_empty()
        || note.title.to_lowercase().contains(needle)
        || note.content.to_lowercase().contains(needle)
}

/// One row of the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    pub id: NoteId,
    /// Title, or `"Untitled"` when blank.
    pub title: String,
    /// Content with markup tags removed, capped to 100 characters.
    pub preview: String,
    pub last_modified: DateTime<Utc>,
}

impl NoteSummary {
    pub fn from_note(note: &Note) -> Self {
        let title = if note.title.is_empty() {
            DEFAULT_NOTE_TITLE.to_string()
        } else {
            note.title.clone()
        };
        Self {
            id: note.id.clone(),
            title,
            preview: plain_text_preview(&note.content),
            last_modified: note.last_modified,
        }
    }
}

/// Strips markup tags and keeps the first 100 characters.
pub fn plain_text_preview(markup: &str) -> String {
    MARKUP_TAG_RE
        .replace_all(markup, "")
        .chars()
        .take(PREVIEW_MAX_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{plain_text_preview, project_notes, NoteListQuery, NoteSummary, SortDirection};
    use crate::model::note::{Note, NoteId};
    use chrono::{TimeZone, Utc};

    fn note(id: &str, title: &str, content: &str, day: u32) -> Note {
        let at = Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap();
        let mut note = Note::new(NoteId::new(id), at);
        note.title = title.to_string();
        note.content = content.to_string();
        note
    }

    fn ids<'a>(notes: &[&'a Note]) -> Vec<&'a str> {
        notes.iter().map(|note| note.id.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let notes = vec![
            note("a", "Shopping", "<p>buy Milk</p>", 1),
            note("b", "MILK run", "", 2),
            note("c", "Work", "<p>standup</p>", 3),
        ];

        let upper = project_notes(&notes, &NoteListQuery::new("MILK", SortDirection::Desc));
        let lower = project_notes(&notes, &NoteListQuery::new("milk", SortDirection::Desc));

        assert_eq!(ids(&upper), vec!["b", "a"]);
        assert_eq!(ids(&upper), ids(&lower));
    }

    #[test]
    fn empty_search_keeps_every_note() {
        let notes = vec![note("a", "", "", 1), note("b", "", "", 2)];
        assert_eq!(project_notes(&notes, &NoteListQuery::default()).len(), 2);
    }

    #[test]
    fn sort_direction_orders_by_last_modified() {
        let notes = vec![note("old", "x", "", 1), note("new", "y", "", 9)];

        let desc = project_notes(&notes, &NoteListQuery::new("", SortDirection::Desc));
        assert_eq!(ids(&desc), vec!["new", "old"]);

        let asc = project_notes(
            &notes,
            &NoteListQuery::new("", SortDirection::Desc.toggled()),
        );
        assert_eq!(ids(&asc), vec!["old", "new"]);
    }

    #[test]
    fn summary_falls_back_to_untitled_and_strips_markup() {
        let summary = NoteSummary::from_note(&note("a", "", "<p>Hello <b>world</b></p>", 1));
        assert_eq!(summary.title, "Untitled");
        assert_eq!(summary.preview, "Hello world");
    }

    #[test]
    fn preview_is_capped_at_one_hundred_chars() {
        let long = format!("<p>{}</p>", "é".repeat(150));
        assert_eq!(plain_text_preview(&long).chars().count(), 100);
    }
}
