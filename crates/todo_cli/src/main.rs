//! Terminal front end for `todo_core`.
//!
//! # Responsibility
//! - Parse intents from the command line and forward them to the store.
//! - Trim and reject blank titles before dispatching an add.
//! - Fall back to a session-only store when the database cannot be opened.

mod render;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::warn;
use std::path::PathBuf;
use todo_core::db::open_db;
use todo_core::{
    default_log_level, init_logging, normalize_title, start_session, KeyValueStore,
    MemoryKeyValueStore, Priority, SqliteKeyValueStore, TodoId, TodoStorage,
};

const DEFAULT_DB_FILE_NAME: &str = "todo_core.sqlite3";

/// Local todo list with priorities.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about, long_about = None)]
struct Cli {
    /// SQLite database holding the saved list
    #[arg(long, env = "TODO_DB_PATH", value_name = "PATH")]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "TODO_LOG_DIR", value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "TODO_LOG_LEVEL", value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a todo
    Add {
        title: String,
        #[arg(short, long, default_value = "medium", value_parser = parse_priority)]
        priority: Priority,
    },
    /// Flip a todo between pending and completed
    Toggle { id: TodoId },
    /// Delete a todo
    Delete { id: TodoId },
    /// Show all todos
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show total/completed/pending counts
    Stats {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let dir = log_dir
            .to_str()
            .ok_or_else(|| anyhow!("log dir `{}` is not valid UTF-8", log_dir.display()))?;
        if let Err(err) = init_logging(level, dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));

    match open_db(&db_path) {
        Ok(conn) => run(TodoStorage::new(SqliteKeyValueStore::new(&conn)), cli.command),
        Err(err) => {
            warn!("event=cli_start module=cli status=degraded error={err}");
            eprintln!(
                "warning: cannot open `{}` ({err}); changes will not be saved",
                db_path.display()
            );
            run(TodoStorage::new(MemoryKeyValueStore::new()), cli.command)
        }
    }
}

fn run<S: KeyValueStore>(storage: TodoStorage<S>, command: Command) -> Result<()> {
    let mut store = start_session(storage);

    match command {
        Command::Add { title, priority } => {
            let Some(title) = normalize_title(&title) else {
                println!("Nothing to add: title is empty.");
                return Ok(());
            };
            if let Some(id) = store.add(title, priority) {
                println!("Added {id}");
            }
        }
        Command::Toggle { id } => {
            if store.toggle(id.clone()) {
                if let Some(todo) = store.get(&id) {
                    println!("{}", render::render_todo(todo));
                }
            } else {
                println!("No todo with id {id}.");
            }
        }
        Command::Delete { id } => {
            if store.delete(id.clone()) {
                println!("Deleted {id}");
            } else {
                println!("No todo with id {id}.");
            }
        }
        Command::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.todos())?);
            } else {
                println!("{}", render::render_list(store.todos()));
            }
        }
        Command::Stats { json } => {
            let stats = store.stats();
            if json {
                println!("{}", serde_json::to_string(&stats)?);
            } else {
                println!("{}", render::render_stats(&stats));
            }
        }
    }

    Ok(())
}

fn parse_priority(value: &str) -> Result<Priority, String> {
    Priority::parse(value)
        .ok_or_else(|| format!("unknown priority `{value}`; expected low|medium|high"))
}
