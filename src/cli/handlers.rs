//! Command handlers for the CLI.

use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use serde::Serialize;
use std::io;

use crate::cli::output::{Output, OutputFormat, print_note_entry, print_note_full};
use crate::cli::{
    Cli, ClearArgs, CompletionsArgs, EditArgs, ExportArgs, ImportArgs, ListArgs, NewArgs, RmArgs,
    SearchArgs, ShowArgs, TagArgs,
};
use crate::domain::{Note, NoteId, NoteUpdate};
use crate::store::NoteStore;

pub fn handle_new(args: &NewArgs, store: &mut NoteStore) -> Result<()> {
    let note = store
        .create(args.title.clone(), args.content.clone(), args.tags.clone())
        .context("failed to save new note")?;

    println!("Created note {}", note.id());
    println!("  title: {}", note.title());
    if !note.tags().is_empty() {
        println!("  tags: {}", note.tags().join(", "));
    }
    Ok(())
}

pub fn handle_list(args: &ListArgs, store: &NoteStore) -> Result<()> {
    print_notes(&store.list(), args.format, "No notes found.")
}

pub fn handle_show(args: &ShowArgs, store: &NoteStore) -> Result<()> {
    let id = NoteId::from(args.id.as_str());
    let Some(note) = store.get(&id) else {
        bail!("no note found with id '{}'", args.id);
    };

    match args.format {
        OutputFormat::Human => print_note_full(note),
        OutputFormat::Json => print_json(note)?,
    }
    Ok(())
}

/// Builds the partial update described by the edit flags, or `None` when no
/// flag was given at all.
pub fn edit_update(args: &EditArgs) -> Option<NoteUpdate> {
    if args.title.is_none() && args.content.is_none() && args.tags.is_empty() && !args.clear_tags {
        return None;
    }

    let mut update = NoteUpdate::default();
    if let Some(title) = &args.title {
        update = update.title(title.clone());
    }
    if let Some(content) = &args.content {
        update = update.content(content.clone());
    }
    if args.clear_tags {
        update = update.tags(Vec::new());
    } else if !args.tags.is_empty() {
        update = update.tags(args.tags.clone());
    }
    Some(update)
}

pub fn handle_edit(args: &EditArgs, store: &mut NoteStore) -> Result<()> {
    let Some(update) = edit_update(args) else {
        bail!("nothing to update: pass --title, --content, --tag, or --clear-tags");
    };

    let id = NoteId::from(args.id.as_str());
    match store.update(&id, update).context("failed to save note")? {
        Some(note) => {
            println!("Updated note {}", note.id());
            println!("  title: {}", note.title());
            Ok(())
        }
        None => bail!("no note found with id '{}'", args.id),
    }
}

pub fn handle_rm(args: &RmArgs, store: &mut NoteStore) -> Result<()> {
    let id = NoteId::from(args.id.as_str());
    if store.delete(&id).context("failed to save after delete")? {
        println!("Deleted note {}", args.id);
        Ok(())
    } else {
        bail!("no note found with id '{}'", args.id);
    }
}

pub fn handle_search(args: &SearchArgs, store: &NoteStore) -> Result<()> {
    let results = store.search(&args.query, !args.no_tags);
    let empty_message = format!("No notes found for '{}'.", args.query);
    print_notes(&results, args.format, &empty_message)
}

pub fn handle_tag(args: &TagArgs, store: &NoteStore) -> Result<()> {
    let results = store.filter_by_tag(&args.tag);
    let empty_message = format!("No notes tagged '{}'.", args.tag);
    print_notes(&results, args.format, &empty_message)
}

pub fn handle_clear(args: &ClearArgs, store: &mut NoteStore) -> Result<()> {
    if !args.yes {
        bail!("refusing to delete all notes without --yes");
    }
    let count = store.list().len();
    store.clear().context("failed to save cleared store")?;
    println!("Deleted {count} note(s)");
    Ok(())
}

pub fn handle_export(args: &ExportArgs, store: &NoteStore) -> Result<()> {
    store
        .export_to(&args.output)
        .with_context(|| format!("failed to export notes to {}", args.output.display()))?;
    println!("Exported {} note(s) to {}", store.list().len(), args.output.display());
    Ok(())
}

pub fn handle_import(args: &ImportArgs, store: &mut NoteStore) -> Result<()> {
    let count = store
        .import_from(&args.input, args.merge)
        .with_context(|| format!("failed to import notes from {}", args.input.display()))?;
    let mode = if args.merge { "merged" } else { "imported" };
    println!("{} {} note(s) from {}", mode, count, args.input.display());
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "notes", &mut io::stdout());
    Ok(())
}

fn print_notes(notes: &[Note], format: OutputFormat, empty_message: &str) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("{empty_message}");
                return Ok(());
            }
            println!("{} note(s):", notes.len());
            println!();
            for (index, note) in notes.iter().enumerate() {
                print_note_entry(index, note);
            }
        }
        OutputFormat::Json => print_json(notes)?,
    }
    Ok(())
}

fn print_json<T: Serialize>(data: T) -> Result<()> {
    let json = serde_json::to_string_pretty(&Output::new(data))?;
    println!("{json}");
    Ok(())
}
