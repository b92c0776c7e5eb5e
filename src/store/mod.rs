//! The authoritative in-memory note collection and its persistence contract.

use crate::domain::{Note, NoteId, NotesDocument, NoteUpdate};
use crate::infra::clock::{Clock, SystemClock};
use crate::infra::fs::{self, FsError};
use std::path::{Path, PathBuf};

/// The in-memory note collection for one process, backed by a JSON document.
///
/// The store is the sole mutator of note state: every mutating operation
/// completes its write to the primary path before returning, so the on-disk
/// document always reflects the in-memory sequence. Queries never touch the
/// filesystem.
///
/// Absence is a normal return value (`Option`/`bool`), never an error;
/// the only errors a mutating operation can produce are persistence
/// failures, and those always propagate.
///
/// # Examples
///
/// ```no_run
/// use carnet::store::NoteStore;
///
/// let mut store = NoteStore::open("notes.json")?;
/// let note = store.create("API Design", "Notes on REST.", vec!["work".into()])?;
/// assert!(store.get(note.id()).is_some());
/// # Ok::<(), carnet::infra::FsError>(())
/// ```
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<Note>,
    clock: Box<dyn Clock>,
    load_diagnostic: Option<String>,
}

impl NoteStore {
    /// Opens a store against `path` using the system clock.
    ///
    /// A missing file starts the store empty. An existing but unparseable
    /// file also starts the store empty, with the problem recorded in
    /// [`load_diagnostic`](Self::load_diagnostic) rather than failing, so
    /// accidental corruption never makes the tool permanently unusable.
    ///
    /// # Errors
    ///
    /// Returns an error for read failures other than a missing or
    /// unparseable file (e.g. permission denied).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FsError> {
        Self::open_with_clock(path, Box::new(SystemClock))
    }

    /// Opens a store with an injected [`Clock`], for deterministic
    /// timestamps in tests.
    pub fn open_with_clock(
        path: impl Into<PathBuf>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, FsError> {
        let path = path.into();
        let (notes, load_diagnostic) = match fs::load_document(&path) {
            Ok(doc) => (doc.notes, None),
            Err(err @ FsError::Parse { .. }) => (Vec::new(), Some(err.to_string())),
            Err(err) => return Err(err),
        };
        Ok(Self {
            path,
            notes,
            clock,
            load_diagnostic,
        })
    }

    /// The primary path this store loads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The diagnostic recorded when the primary document existed but could
    /// not be parsed at open time.
    pub fn load_diagnostic(&self) -> Option<&str> {
        self.load_diagnostic.as_deref()
    }

    /// Creates a note with a fresh id and both timestamps set to now,
    /// appends it to the end of the sequence, and persists.
    ///
    /// No field validation is performed; empty titles and content are fine.
    ///
    /// # Errors
    ///
    /// Returns an error only if the persistence write fails.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Note, FsError> {
        let note = Note::new(NoteId::generate(), title, content, tags, self.clock.now());
        self.notes.push(note.clone());
        self.persist()?;
        Ok(note)
    }

    /// Returns a defensive copy of the full sequence, in store order.
    pub fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    /// Looks up a note by id. `None` means not found, which is not an error.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    /// Applies a partial update to the note with `id` and persists.
    ///
    /// Only the fields present in `update` change; `id` and `created_at`
    /// are untouchable. `updated_at` is refreshed even when the update
    /// carries no fields. Returns `Ok(None)` when no note has `id`, in
    /// which case nothing is written and the sequence is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error only if the persistence write fails.
    pub fn update(&mut self, id: &NoteId, update: NoteUpdate) -> Result<Option<Note>, FsError> {
        let now = self.clock.now();
        let Some(note) = self.notes.iter_mut().find(|note| note.id() == id) else {
            return Ok(None);
        };
        note.apply(update, now);
        let updated = note.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// Removes the note(s) with `id`, preserving the relative order of the
    /// rest. Returns whether anything was removed; persists only then.
    ///
    /// # Errors
    ///
    /// Returns an error only if the persistence write fails.
    pub fn delete(&mut self, id: &NoteId) -> Result<bool, FsError> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id() != id);
        if self.notes.len() < before {
            self.persist()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Returns every note whose title, content, or (when `include_tags`)
    /// any tag contains `query`, case-insensitively. The empty query
    /// matches every note.
    pub fn search(&self, query: &str, include_tags: bool) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| note.matches_query(query, include_tags))
            .cloned()
            .collect()
    }

    /// Returns every note carrying `tag`, compared case-insensitively as an
    /// exact match (not a substring).
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| note.has_tag(tag))
            .cloned()
            .collect()
    }

    /// Empties the sequence and persists.
    ///
    /// # Errors
    ///
    /// Returns an error only if the persistence write fails.
    pub fn clear(&mut self) -> Result<(), FsError> {
        self.notes.clear();
        self.persist()
    }

    /// Writes the current document to `destination`, leaving the primary
    /// document untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the export file cannot be written.
    pub fn export_to(&self, destination: &Path) -> Result<(), FsError> {
        fs::save_document(destination, &self.document())
    }

    /// Reads a document from `source` and either replaces the sequence with
    /// it (`merge == false`) or appends it after the existing notes
    /// (`merge == true`), then persists to the primary path.
    ///
    /// Imported ids and timestamps are preserved exactly as read. A merge
    /// does not de-duplicate ids, so importing a document that shares ids
    /// with the current store produces duplicates.
    ///
    /// Returns the number of notes read from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is missing or unparseable, or if the
    /// persistence write fails.
    pub fn import_from(&mut self, source: &Path, merge: bool) -> Result<usize, FsError> {
        let imported = fs::read_document(source)?.notes;
        let count = imported.len();
        if merge {
            self.notes.extend(imported);
        } else {
            self.notes = imported;
        }
        self.persist()?;
        Ok(count)
    }

    fn document(&self) -> NotesDocument {
        NotesDocument::new(self.notes.clone())
    }

    fn persist(&self) -> Result<(), FsError> {
        fs::save_document(&self.path, &self.document())
    }
}
