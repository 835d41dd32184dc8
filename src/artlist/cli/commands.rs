//! # CLI Layer
//!
//! This module is **one possible UI client** for artlist: an interactive
//! session that reads one command per line from standard input.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Uses `std::process::exit` (through `main.rs`)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! All session state lives in the [`ArtlistApi`] held by [`AppContext`]; it
//! lasts until the input ends or `quit` is read. A failing command prints its
//! error and the session carries on.
//!
//! ## Structure
//!
//! - `run()`: Startup, logging and the read loop (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `dispatch()`: Parses one line and calls its handler
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    print_config, print_draft, print_error, print_messages, print_record, print_records,
};
use super::setup::{print_grouped_help, print_help_for_command, Cli, SessionCommand, SessionLine};
use artlist::api::{ArtlistApi, CmdResult, ConfigAction};
use artlist::config::ArtlistConfig;
use artlist::error::{ArtlistError, Result};
use artlist::filter::SearchScope;
use artlist::model::{Field, RecordId};
use artlist::session::EditTarget;
use artlist::store::memory::MemoryStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "artlist> ";

struct AppContext {
    api: ArtlistApi<MemoryStore>,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context()?;

    if let Some(path) = &cli.import {
        // A bad startup document is reported like any other failed import.
        match ctx.api.import_file(path) {
            Ok(result) => print_messages(&result.messages),
            Err(e) => print_error(e),
        }
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match dispatch(&mut ctx, &line, &mut lines) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => print_error(e),
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber installed by an embedding process wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// `ARTLIST_HOME` if set, else the platform config directory.
fn config_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("ARTLIST_HOME") {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "artlist", "artlist").map(|dirs| dirs.config_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let config_dir = config_dir();
    let config = match &config_dir {
        Some(dir) => ArtlistConfig::load(dir)?,
        None => ArtlistConfig::default(),
    };
    debug!(dir = ?config_dir, "configuration loaded");

    let api = ArtlistApi::new(MemoryStore::new(), config, config_dir);
    Ok(AppContext { api })
}

fn dispatch<I>(ctx: &mut AppContext, line: &str, rest: &mut I) -> Result<Flow>
where
    I: Iterator<Item = io::Result<String>>,
{
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }

    let words = shlex::split(line)
        .ok_or_else(|| ArtlistError::InvalidValue(format!("unbalanced quotes in: {}", line)))?;
    let command = match SessionLine::try_parse_from(&words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            eprint!("{}", e.render());
            return Ok(Flow::Continue);
        }
    };

    match command {
        SessionCommand::List => handle_list(ctx.api.list()),
        SessionCommand::Search { query, scope } => {
            let scope: SearchScope = scope.parse()?;
            handle_list(ctx.api.search(&query.join(" "), scope))
        }
        SessionCommand::ClearSearch => handle_list(ctx.api.clear_search()),
        SessionCommand::Show { id } => handle_show(ctx, id.parse()?)?,
        SessionCommand::Add => handle_draft(ctx.api.begin_add()?),
        SessionCommand::Edit { id } => {
            let id: RecordId = id.parse()?;
            handle_draft(ctx.api.begin_edit(id)?)
        }
        SessionCommand::Set { field, value } => handle_set(ctx, &field, &value.join(" "))?,
        SessionCommand::Photo { target, file } => handle_photo(ctx, &target, Some(&file))?,
        SessionCommand::Unphoto { target } => handle_photo(ctx, &target, None)?,
        SessionCommand::Draft => handle_draft(ctx.api.draft()),
        SessionCommand::Save => print_messages(&ctx.api.commit()?.messages),
        SessionCommand::Cancel => print_messages(&ctx.api.cancel().messages),
        SessionCommand::Delete { id, yes } => handle_delete(ctx, &id, yes, rest)?,
        SessionCommand::Import { path } => print_messages(&ctx.api.import_file(&path)?.messages),
        SessionCommand::Export { path } => handle_written(ctx.api.export_file(path.as_deref())?),
        SessionCommand::Print { path } => handle_written(ctx.api.print_file(path.as_deref())?),
        SessionCommand::Config { key, value } => handle_config(ctx, key, value)?,
        SessionCommand::Help { command } => match command {
            Some(name) => print_help_for_command(&name),
            None => print_grouped_help(),
        },
        SessionCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn handle_list(result: CmdResult) {
    print_records(&result.listed_records);
    print_messages(&result.messages);
}

fn handle_show(ctx: &AppContext, id: RecordId) -> Result<()> {
    let result = ctx.api.show(id)?;
    for record in &result.listed_records {
        print_record(record);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_draft(result: CmdResult) {
    print_messages(&result.messages);
    if let Some(draft) = &result.draft {
        print_draft(draft);
    }
}

fn handle_set(ctx: &mut AppContext, field: &str, value: &str) -> Result<()> {
    let field: Field = field.parse()?;
    let result = ctx.api.set_field(field, value)?;
    print_messages(&result.messages);
    if let Some(draft) = &result.draft {
        println!("{} = {}", field, draft.artwork.get(field));
    }
    Ok(())
}

fn handle_photo(ctx: &mut AppContext, target: &str, file: Option<&Path>) -> Result<()> {
    let target: EditTarget = target.parse()?;
    let result = match file {
        Some(path) => ctx.api.attach_photo(target, path)?,
        None => ctx.api.clear_photo(target)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete<I>(ctx: &mut AppContext, id: &str, yes: bool, rest: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let id: RecordId = id.parse()?;
    if !yes {
        let title = ctx
            .api
            .show(id)?
            .listed_records
            .into_iter()
            .next()
            .map(|r| r.artwork.title)
            .unwrap_or_default();
        print!("Delete #{} {}? [y/N] ", id, title);
        io::stdout().flush()?;
        let answer = rest.next().transpose()?.unwrap_or_default();
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = ctx.api.delete(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_written(result: CmdResult) {
    print_messages(&result.messages);
    if let Some(path) = &result.written_path {
        println!("Wrote {}", path.display());
    }
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Vec<String>) -> Result<()> {
    let action = match (key, value.is_empty()) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), true) => ConfigAction::ShowKey(k),
        (Some(k), false) => ConfigAction::Set(k, value.join(" ")),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
