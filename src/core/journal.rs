//! Opt-in audit journal (`--journal`).
//!
//! Appends one JSON line per state change to `tags.events.jsonl` so a user can
//! see what each run did to the store and match a file to an event by hash.

use crate::core::error::TaggerError;
use crate::core::store::Store;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::io::Write;
use ulid::Ulid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEvent {
    pub ts: String,
    pub event_id: String,
    pub op: String,
    /// Association count before the run; absent for undo and init.
    pub before: Option<usize>,
    pub after: Option<usize>,
    pub store_sha256: String,
}

impl JournalEvent {
    pub fn new(op: &str, before: Option<usize>, after: Option<usize>, store_text: &str) -> Self {
        Self {
            ts: now_epoch_z(),
            event_id: Ulid::new().to_string(),
            op: op.to_string(),
            before,
            after,
            store_sha256: hash_text(store_text),
        }
    }
}

/// Returns unix-epoch seconds with `Z` suffix (e.g. `1771220592Z`).
pub fn now_epoch_z() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{}Z", secs)
}

pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text);
    format!("{:x}", hasher.finalize())
}

pub fn append_event(store: &Store, event: &JournalEvent) -> Result<(), TaggerError> {
    let line =
        serde_json::to_string(event).map_err(|e| TaggerError::JournalError(e.to_string()))?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(store.journal_path())?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// Records `op` against whatever the store file holds right now.
pub fn record_current(
    store: &Store,
    op: &str,
    before: Option<usize>,
    after: Option<usize>,
) -> Result<(), TaggerError> {
    let text = fs::read_to_string(store.store_path())?;
    append_event(store, &JournalEvent::new(op, before, after, &text))
}
