//! Command-line host for the notejar core.
//!
//! # Responsibility
//! - Stand in for a web host: translate subcommands into loader/action
//!   calls on [`NotesBoundary`] and render the results.
//! - Own process concerns only (argument parsing, logging bootstrap,
//!   exit codes). All note semantics live in `notejar_core`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use notejar_core::{
    default_log_level, derive_content_preview, init_logging, EmptyListPolicy, ErrorPayload,
    JsonNoteStore, NoteForm, NoteService, NotesBoundary,
};

#[derive(Parser)]
#[command(
    name = "notejar",
    version = notejar_core::core_version(),
    about = "Note keeping over a single JSON document"
)]
struct Cli {
    /// Path of the notes document.
    #[arg(long, default_value = "notes.json", env = "NOTEJAR_FILE")]
    file: PathBuf,

    /// Treat an empty note collection as missing instead of rendering an
    /// empty state.
    #[arg(long)]
    empty_as_missing: bool,

    /// Print payloads as JSON instead of rendered text.
    #[arg(long)]
    json: bool,

    /// Level for the rolling file log (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling file logs; logging stays off when
    /// unset.
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all notes the way the list view would render them.
    List,
    /// Submit a new note and follow the redirect on success.
    Add {
        /// Title field of the submitted form.
        #[arg(long)]
        title: String,
        /// Content field of the submitted form.
        #[arg(long)]
        content: String,
    },
    /// Show one note by id the way the detail view would render it.
    Show {
        /// Id of the note to fetch.
        id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(message) = init_logging(level, log_dir) {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    }

    let policy = if cli.empty_as_missing {
        EmptyListPolicy::NotFound
    } else {
        EmptyListPolicy::ShowEmpty
    };
    let service = NoteService::new(JsonNoteStore::new(cli.file));
    let boundary = NotesBoundary::with_empty_list_policy(service, policy);

    let outcome = match cli.command {
        Commands::List => run_list(&boundary, cli.json),
        Commands::Add { title, content } => run_add(&boundary, title, content, cli.json),
        Commands::Show { id } => run_show(&boundary, &id, cli.json),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(payload) => {
            render_error(&payload, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run_list(boundary: &NotesBoundary<JsonNoteStore>, json: bool) -> Result<(), ErrorPayload> {
    let payload = boundary.notes_loader()?;
    if json {
        print_json(&payload);
        return Ok(());
    }

    if payload.notes.is_empty() {
        println!("No notes available");
        return Ok(());
    }

    for note in &payload.notes {
        println!("{}  {}", note.created_at.format("%Y-%m-%d %H:%M"), note.title);
        println!("    id: {}", note.id);
        if let Some(preview) = derive_content_preview(&note.content) {
            println!("    {preview}");
        }
    }
    Ok(())
}

fn run_add(
    boundary: &NotesBoundary<JsonNoteStore>,
    title: String,
    content: String,
    json: bool,
) -> Result<(), ErrorPayload> {
    let redirect = boundary.notes_action(NoteForm { title, content })?;
    if json {
        print_json(&redirect);
    } else {
        println!("Note stored. Redirecting to {}", redirect.location);
    }
    Ok(())
}

fn run_show(
    boundary: &NotesBoundary<JsonNoteStore>,
    id: &str,
    json: bool,
) -> Result<(), ErrorPayload> {
    let payload = boundary.note_loader(id)?;
    if json {
        print_json(&payload);
        return Ok(());
    }

    let note = &payload.selected_note;
    println!("Note ID: {}", note.id);
    println!("Title: {}", note.title);
    println!("Created: {}", note.created_at.format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", note.content);
    Ok(())
}

fn render_error(payload: &ErrorPayload, json: bool) {
    if json {
        match serde_json::to_string_pretty(payload) {
            Ok(rendered) => eprintln!("{rendered}"),
            Err(err) => eprintln!("error: could not render error payload: {err}"),
        }
    } else {
        eprintln!("error: {payload}");
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => eprintln!("error: could not render payload: {err}"),
    }
}
