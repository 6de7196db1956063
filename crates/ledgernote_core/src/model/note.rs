//! Note domain model.
//!
//! # Invariants
//! - `created_at` is stamped by the note store and never changes afterwards.
//! - Title and content are stored verbatim; empty strings are valid.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// One note kept by the note store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    /// ISO-8601 UTC instant, e.g. `2024-01-01T09:30:00.000Z`.
    pub created_at: String,
}

impl Record for Note {
    const KIND: &'static str = "note";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Caller-supplied fields for a new note.
///
/// Identity and creation time are always assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub(crate) fn into_note(self, id: RecordId, created_at: String) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            created_at,
        }
    }
}
