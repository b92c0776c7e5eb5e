//! Opaque note identifier with ULID-based generation and serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// A unique identifier for notes.
///
/// Freshly generated identifiers are ULIDs: 26-character Crockford Base32
/// strings combining a 48-bit millisecond timestamp with 80 random bits, so
/// two ids generated within the same clock tick still cannot collide.
///
/// The type itself is an opaque string rather than a parsed ULID: documents
/// imported from elsewhere may carry ids in any format, and those must
/// round-trip through the store byte-for-byte.
///
/// # Examples
///
/// ```
/// use carnet::domain::NoteId;
///
/// let id = NoteId::generate();
/// assert_eq!(id.as_str().len(), 26);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a new unique identifier from the current instant.
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
