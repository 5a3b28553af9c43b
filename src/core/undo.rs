//! One-level undo: the store and its backup trade places.
//!
//! The rotation is three renames (store -> swap, backup -> store,
//! swap -> backup). Each rename is atomic on its own but the sequence is not:
//! a crash after the first or second step leaves `tags.undo.json` behind and
//! one of the two slots empty. Recover by renaming it back by hand.

use crate::core::error::TaggerError;
use crate::core::store::Store;
use std::fs;

pub fn rotate(store: &Store) -> Result<(), TaggerError> {
    let live = store.store_path();
    let backup = store.backup_path();
    let swap = store.swap_path();

    if !backup.exists() {
        return Err(TaggerError::MissingBackupError(backup));
    }

    fs::rename(&live, &swap)?;
    if let Err(err) = fs::rename(&backup, &live) {
        fs::rename(&swap, &live)?;
        return Err(err.into());
    }
    fs::rename(&swap, &backup)?;
    Ok(())
}
