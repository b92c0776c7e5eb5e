//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notes - a file-persisted note manager
#[derive(Parser, Debug)]
#[command(name = "notes", version, about, long_about = None)]
pub struct Cli {
    /// Notes file (overrides config; default: ./notes.json)
    #[arg(short = 'f', long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// List all notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// Update a note's title, content, or tags
    Edit(EditArgs),

    /// Delete a note
    Rm(RmArgs),

    /// Search notes by substring
    Search(SearchArgs),

    /// List notes carrying a tag
    Tag(TagArgs),

    /// Delete every note
    Clear(ClearArgs),

    /// Export all notes to a file
    Export(ExportArgs),

    /// Import notes from a file
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Note content
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Tag to attach (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note id
    pub id: String,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note id
    pub id: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New content
    #[arg(short, long)]
    pub content: Option<String>,

    /// Replace tags with this set (can be specified multiple times)
    #[arg(short = 'T', long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Remove every tag
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,
}

/// Arguments for the `rm` (delete) command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note id
    pub id: String,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Do not match against tags
    #[arg(long)]
    pub no_tags: bool,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tag` command
#[derive(Parser, Debug)]
pub struct TagArgs {
    /// Tag to filter by (case-insensitive exact match)
    pub tag: String,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `clear` command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Destination path
    pub output: PathBuf,
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Source path
    pub input: PathBuf,

    /// Append imported notes instead of replacing the store
    #[arg(short, long)]
    pub merge: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
