//! Note struct representing a titled, tagged, timestamped piece of text.

use crate::domain::NoteId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note with its metadata.
///
/// Notes live in a single JSON document on disk, so every field here is part
/// of the persisted format. Field names serialize in camelCase and
/// timestamps as RFC 3339 strings.
///
/// # Fields
/// - `id`: unique identifier, immutable after creation
/// - `title`: may be empty; no validation is performed
/// - `content`: may be empty
/// - `tags`: flat labels, insertion order preserved, duplicates allowed
/// - `created_at`: set once at creation
/// - `updated_at`: refreshed on every successful update
///
/// # Examples
///
/// ```
/// use carnet::domain::{Note, NoteId};
/// use chrono::Utc;
///
/// let note = Note::new(NoteId::generate(), "API Design", "Notes on REST.", vec![], Utc::now());
/// assert_eq!(note.title(), "API Design");
/// assert_eq!(note.created_at(), note.updated_at());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note with both timestamps set to `now`.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the supplied fields of `update` and stamps `updated_at`.
    ///
    /// Absent fields are left untouched. `id` and `created_at` are not
    /// representable in [`NoteUpdate`] and therefore never change.
    /// `updated_at` is refreshed even when the update carries no fields.
    pub fn apply(&mut self, update: NoteUpdate, now: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = now;
    }

    /// Whether the lowercased `query` occurs in the title, the content, or
    /// (when `include_tags` is set) any tag, case-insensitively.
    ///
    /// The empty query matches every note.
    pub fn matches_query(&self, query: &str, include_tags: bool) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.content.to_lowercase().contains(&query)
            || (include_tags
                && self
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&query)))
    }

    /// Whether any tag equals `tag` after case-folding. Exact match, not
    /// substring.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// An explicit partial update for a note.
///
/// Each field is independently present-or-absent, preserving the "only
/// supplied fields change" contract without a loosely typed map.
///
/// # Examples
///
/// ```
/// use carnet::domain::NoteUpdate;
///
/// let update = NoteUpdate::default().title("New title");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteUpdate {
    title: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
}

impl NoteUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}
