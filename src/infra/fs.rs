//! File I/O for the notes document with atomic writes.

use crate::domain::NotesDocument;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during file system operations on the notes document.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse notes document at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Loads the primary notes document.
///
/// A missing file is not an error: the store simply starts empty. An
/// existing but unparseable file is `FsError::Parse`, which the store
/// degrades to an empty collection plus a diagnostic.
///
/// # Errors
///
/// Returns `FsError::Parse` if the content is not a valid notes document.
/// Returns `FsError::PermissionDenied` or `FsError::Io` for other read
/// failures.
pub fn load_document(path: &Path) -> Result<NotesDocument, FsError> {
    if !path.exists() {
        return Ok(NotesDocument::default());
    }
    read_document(path)
}

/// Reads a notes document from an explicitly named path.
///
/// Unlike [`load_document`], a missing file here is a hard error: the user
/// asked for this specific file, so its absence must be reported.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::Parse` if the content is not a valid notes document.
pub fn read_document(path: &Path) -> Result<NotesDocument, FsError> {
    let content = std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))?;
    serde_json::from_str(&content).map_err(|e| FsError::Parse {
        path: path.into(),
        source: e,
    })
}

/// Writes the notes document to `path` atomically, replacing prior content.
///
/// Serializes to pretty-printed JSON, writes to a temporary file in the
/// target's parent directory, then renames into place so no reader can
/// observe a partial write.
///
/// # Errors
///
/// Returns `FsError::AtomicWrite` if the final rename fails, and
/// `FsError::Io`/`FsError::PermissionDenied` for earlier write failures.
/// A failed save means the caller's last mutation is not durable, so none
/// of these are ever swallowed.
pub fn save_document(path: &Path, document: &NotesDocument) -> Result<(), FsError> {
    // serde_json only fails on non-string map keys or failing Serialize
    // impls; neither occurs for NotesDocument, but the error still routes
    // through Parse rather than panicking.
    let content = serde_json::to_string_pretty(document).map_err(|e| FsError::Parse {
        path: path.into(),
        source: e,
    })?;

    // An empty parent means a bare filename relative to the cwd.
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;

    temp.write_all(content.as_bytes())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Note, NoteId};
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn test_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn test_document() -> NotesDocument {
        NotesDocument::new(vec![Note::new(
            NoteId::from("01HQ3K5M7NXJK4QZPW8V2R6T9Y"),
            "Test Note",
            "Body content.",
            vec!["test".to_string()],
            test_time(),
        )])
    }

    #[test]
    fn load_missing_file_returns_empty_document() {
        let dir = TempDir::new().unwrap();
        let doc = load_document(&dir.path().join("notes.json")).expect("should load");
        assert_eq!(doc, NotesDocument::default());
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_document(&dir.path().join("import.json")).unwrap_err();
        assert!(matches!(err, FsError::NotFound { .. }));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");
        let doc = test_document();

        save_document(&path, &doc).expect("should save");
        let loaded = load_document(&path).expect("should load");

        assert_eq!(loaded, doc);
    }

    #[test]
    fn save_overwrites_prior_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");

        save_document(&path, &test_document()).unwrap();
        save_document(&path, &NotesDocument::default()).unwrap();

        let loaded = load_document(&path).unwrap();
        assert!(loaded.notes.is_empty());
    }

    #[test]
    fn save_leaves_no_temp_files_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");

        save_document(&path, &test_document()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["notes.json"]);
    }

    #[test]
    fn save_to_bare_filename_uses_cwd() {
        let dir = TempDir::new().unwrap();
        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let result = save_document(Path::new("notes.json"), &test_document());

        std::env::set_current_dir(prev).unwrap();
        result.expect("bare filename should save relative to cwd");
        assert!(dir.path().join("notes.json").exists());
    }

    #[test]
    fn corrupt_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, FsError::Parse { .. }));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, r#"{"entries": []}"#).unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, FsError::Parse { .. }));
    }

    #[test]
    fn parse_error_message_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "[]").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().contains("notes.json"));
    }

    #[test]
    fn save_into_missing_directory_fails_loudly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("notes.json");

        let result = save_document(&path, &test_document());
        assert!(result.is_err(), "write into missing directory must error");
    }
}
