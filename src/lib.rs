//! carnet - a file-persisted note manager with a JSON document store

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_clear, handle_completions, handle_edit, handle_export, handle_import, handle_list,
        handle_new, handle_rm, handle_search, handle_show, handle_tag,
    },
};
use store::NoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Completions need no store; everything else does.
    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let store_path = config.store_path(cli.file.as_ref());
    let mut store = NoteStore::open(&store_path)
        .with_context(|| format!("failed to open notes store at {}", store_path.display()))?;

    if let Some(diagnostic) = store.load_diagnostic() {
        eprintln!("warning: starting with an empty store: {diagnostic}");
    }

    match &cli.command {
        Command::New(args) => handle_new(args, &mut store),
        Command::List(args) => handle_list(args, &store),
        Command::Show(args) => handle_show(args, &store),
        Command::Edit(args) => handle_edit(args, &mut store),
        Command::Rm(args) => handle_rm(args, &mut store),
        Command::Search(args) => handle_search(args, &store),
        Command::Tag(args) => handle_tag(args, &store),
        Command::Clear(args) => handle_clear(args, &mut store),
        Command::Export(args) => handle_export(args, &store),
        Command::Import(args) => handle_import(args, &mut store),
        Command::Completions(_) => unreachable!("handled above"),
    }
}
