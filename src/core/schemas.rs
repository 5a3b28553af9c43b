//! File names used by the tag store.
//!
//! Everything lives side by side in one directory (the current directory
//! unless `--dir` says otherwise):
//! 1. tags.json: the live association store.
//! 2. tags.bak.json: the previous generation, used by `undo`.
//! 3. tags.undo.json: transient name used while the two are rotated.
//! 4. tags.events.jsonl: opt-in audit journal (`--journal`).

pub const STORE_FILE_NAME: &str = "tags.json";
pub const BACKUP_FILE_NAME: &str = "tags.bak.json";
pub const SWAP_FILE_NAME: &str = "tags.undo.json";
pub const JOURNAL_FILE_NAME: &str = "tags.events.jsonl";

/// Serialized form of an empty store, written on first run.
pub const EMPTY_STORE: &str = "[]";

/// Reserved token selecting removal mode.
pub const REMOVE_TOKEN: &str = "r";
/// Reserved token swapping the store with its backup.
pub const UNDO_TOKEN: &str = "undo";
/// A token containing this is a path; anything else is a tag.
pub const PATH_MARKER: char = '.';
