//! The persisted JSON envelope holding every note.

use crate::domain::Note;
use serde::{Deserialize, Serialize};

/// The on-disk document: all notes, in store-insertion order.
///
/// This is the shape written to the primary path after every mutation, and
/// the shape exchanged through export and import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotesDocument {
    pub notes: Vec<Note>,
}

impl NotesDocument {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_document_is_empty() {
        let doc = NotesDocument::default();
        assert!(doc.notes.is_empty());
    }

    #[test]
    fn deserializes_the_documented_wire_shape() {
        let json = r#"{
            "notes": [
                {
                    "id": "note_1700000000000_k3x9qp2ab",
                    "title": "Réunion client",
                    "content": "Discuter du projet X",
                    "tags": ["travail", "client"],
                    "createdAt": "2024-01-15T10:30:00.000Z",
                    "updatedAt": "2024-01-15T10:30:00.000Z"
                }
            ]
        }"#;

        let doc: NotesDocument = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(doc.notes.len(), 1);
        let note = &doc.notes[0];
        assert_eq!(note.id().as_str(), "note_1700000000000_k3x9qp2ab");
        assert_eq!(note.title(), "Réunion client");
        assert_eq!(note.tags(), ["travail", "client"]);
    }
}
