//! Domain types: notes, their identifiers, and the persisted document.

mod document;
mod note;
mod note_id;

pub use document::NotesDocument;
pub use note::{Note, NoteUpdate};
pub use note_id::NoteId;
