//! Tagger: tag files from the command line.
//!
//! Associations between file paths and free-form string tags live in a
//! flat JSON file, `tags.json`, in the working directory. One overloaded
//! argument list adds, removes, lists and queries them:
//!
//! - tokens containing `.` are paths, everything else is a tag;
//! - `r` anywhere switches to removal;
//! - `undo` anywhere swaps `tags.json` with `tags.bak.json`.
//!
//! Each run loads the whole store, snapshots it to `tags.bak.json`, and
//! rewrites it in canonical order only when something changed. Output is
//! quoted so results can be piped back in through `xargs`.
//!
//! # Crate Structure
//!
//! - [`core`]: data model, persistence, classification, canonical ordering, undo
//! - [`dispatch`]: the four query/mutation modes
//! - [`cli`]: clap definitions
//!
//! Concurrent runs against the same directory are not coordinated; run one
//! at a time.

pub mod cli;
pub mod core;
pub mod dispatch;

use crate::cli::Cli;
use crate::core::classify::{self, Command};
use crate::core::error::TaggerError;
use crate::core::journal::{self, JournalEvent};
use crate::core::output::{self, Diagnostics};
use crate::core::schemas::{BACKUP_FILE_NAME, STORE_FILE_NAME};
use crate::core::store::{LoadedStore, Store};
use crate::core::undo;
use crate::dispatch::Outcome;

use clap::Parser;

pub const USAGE: &str = r#"Apply multiple tags to multiple files:
$ tagger File\ 1.opus File\ 2.opus album=Hyperdrama artist=Justice format=Opus mistake1 mistake2

Delete tag:
$ tagger r mistake1

Remove multiple tags from multiple files:
$ tagger r mistake2 File\ 1.opus

List files with all specified tags:
$ tagger album=Hyperdrama artist=Justice

List tags of specific files:
$ tagger File\ 1.opus

Undo last operation:
$ tagger undo

Apply tag to files with specific tags:
$ tagger album=Hyperdrama | xargs tagger format=Opus

Apply tags of specific file to other files:
$ tagger File\ 1.opus | xargs tagger File\ 2.opus

Get all tags for files with specific tags:
$ tagger album=Hyperdrama | xargs tagger

Apply tags of specific files by tag to specific files:
$ tagger album=Hyperdrama | xargs tagger | xargs tagger File\ 3.opus

And so on and so forth."#;

pub fn run() -> Result<(), TaggerError> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<(), TaggerError> {
    let diag = Diagnostics {
        verbose: cli.verbose,
    };
    let command = classify::classify(&cli.tokens);
    if command == Command::Usage {
        println!("{}", USAGE);
        return Ok(());
    }

    let store = Store::new(&cli.dir);
    diag.note(format!("store: {}", store.store_path().display()));
    if store.ensure_initialized()? {
        output::status(&format!("Initialised {}", STORE_FILE_NAME));
        if cli.journal {
            journal::record_current(&store, "init", None, Some(0))?;
        }
    }

    diag.note(format!("command: {:?}", command));
    if command == Command::Undo {
        undo::rotate(&store)?;
        output::status(&format!(
            "Swapped {} and {}",
            BACKUP_FILE_NAME, STORE_FILE_NAME
        ));
        if cli.journal {
            journal::record_current(&store, command.name(), None, None)?;
        }
        return Ok(());
    }

    let LoadedStore { mut table, raw } = store.load()?;
    store.backup(&raw)?;
    diag.note(format!(
        "loaded {} associations, backup written to {}",
        table.len(),
        store.backup_path().display()
    ));

    match dispatch::apply(&command, &mut table) {
        Outcome::Paths(paths) => println!("{}", output::render_paths(&paths)),
        Outcome::Tags(tags) => println!("{}", output::render_tags(&tags)),
        Outcome::Mutated { before, after } => {
            let text = store.persist(&mut table)?;
            diag.note(format!("{}: {} -> {} associations", command.name(), before, after));
            output::status(&output::association_count(after));
            if cli.journal {
                let event = JournalEvent::new(command.name(), Some(before), Some(after), &text);
                journal::append_event(&store, &event)?;
            }
        }
        Outcome::Unchanged { count } => {
            diag.note("nothing to remove");
            output::status(&output::association_count(count));
        }
    }

    Ok(())
}
