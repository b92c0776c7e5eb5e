//! Output format types and rendering helpers for CLI commands.

use crate::domain::Note;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Truncates a string to `max` characters, adding an ellipsis when cut.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max).collect();
    format!("{cut}...")
}

/// Prints one note as a short listing entry: title, id, content preview,
/// and tags when present.
pub(crate) fn print_note_entry(index: usize, note: &Note) {
    println!("[{}] {}", index + 1, note.title());
    println!("    id: {}", note.id());
    if !note.content().is_empty() {
        println!("    {}", truncate_str(note.content(), 50));
    }
    if !note.tags().is_empty() {
        println!("    tags: {}", note.tags().join(", "));
    }
    println!();
}

/// Prints a full note: title banner, content, tags, and timestamps.
pub(crate) fn print_note_full(note: &Note) {
    println!("{}", "=".repeat(60));
    println!("{}", note.title());
    println!("{}", "=".repeat(60));
    println!();
    println!("{}", note.content());
    println!();
    if !note.tags().is_empty() {
        println!("tags: {}", note.tags().join(", "));
    }
    println!("id: {}", note.id());
    println!("created: {}", note.created_at().to_rfc3339());
    println!("updated: {}", note.updated_at().to_rfc3339());
}
