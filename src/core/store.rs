//! Association store: data model plus the load/backup/persist protocol.
//!
//! The store is a JSON array of `[path, tag]` pairs kept in `tags.json`.
//! Every run loads it whole, snapshots the raw text into `tags.bak.json`,
//! and (only if something changed) rewrites it whole in canonical order.

use crate::core::error::TaggerError;
use crate::core::schemas;
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::preferences::CollationNumericOrdering;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// "This path carries this tag." Serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Association {
    pub path: String,
    pub tag: String,
}

impl Association {
    pub fn new(path: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
        }
    }
}

impl From<(String, String)> for Association {
    fn from((path, tag): (String, String)) -> Self {
        Self { path, tag }
    }
}

impl From<Association> for (String, String) {
    fn from(assoc: Association) -> Self {
        (assoc.path, assoc.tag)
    }
}

/// Ordered sequence of distinct associations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssociationTable {
    entries: Vec<Association>,
}

impl AssociationTable {
    /// Builds a table, dropping later duplicates of an earlier pair.
    pub fn from_entries(entries: impl IntoIterator<Item = Association>) -> Self {
        let mut table = Self::default();
        table.extend(entries);
        table
    }

    pub fn entries(&self) -> &[Association] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends every candidate not already present. Returns how many were added.
    pub fn extend(&mut self, candidates: impl IntoIterator<Item = Association>) -> usize {
        let mut seen: FxHashSet<Association> = self.entries.iter().cloned().collect();
        let before = self.entries.len();
        for assoc in candidates {
            if seen.insert(assoc.clone()) {
                self.entries.push(assoc);
            }
        }
        self.entries.len() - before
    }

    /// Drops every association the predicate matches. Returns how many were removed.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&Association) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|assoc| !pred(assoc));
        before - self.entries.len()
    }

    /// Distinct paths in order of first appearance.
    pub fn distinct_paths(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.entries
            .iter()
            .map(|a| a.path.as_str())
            .filter(|p| seen.insert(*p))
            .collect()
    }

    #[cfg(test)]
    pub fn has(&self, path: &str, tag: &str) -> bool {
        self.entries.iter().any(|a| a.path == path && a.tag == tag)
    }

    /// Sort by path then tag. Root-locale collation at primary strength with
    /// numeric ordering: case and accents are ignored and `track2` sorts
    /// before `track10`. Stable on ties.
    pub fn canonicalize(&mut self) -> Result<(), TaggerError> {
        let collator = canonical_collator()?;
        self.entries.sort_by(|a, b| {
            collator
                .compare(&a.path, &b.path)
                .then_with(|| collator.compare(&a.tag, &b.tag))
        });
        Ok(())
    }

    pub fn to_pretty_json(&self) -> Result<String, TaggerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A freshly loaded store: the parsed table plus the exact text it came from.
#[derive(Debug, Clone)]
pub struct LoadedStore {
    pub table: AssociationTable,
    pub raw: String,
}

/// Handle to the directory holding the store, its backup and journal.
#[derive(Debug, Clone)]
pub struct Store {
    pub root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join(schemas::STORE_FILE_NAME)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.root.join(schemas::BACKUP_FILE_NAME)
    }

    pub fn swap_path(&self) -> PathBuf {
        self.root.join(schemas::SWAP_FILE_NAME)
    }

    pub fn journal_path(&self) -> PathBuf {
        self.root.join(schemas::JOURNAL_FILE_NAME)
    }

    /// Creates an empty store if none exists. Returns true when it did.
    pub fn ensure_initialized(&self) -> Result<bool, TaggerError> {
        let path = self.store_path();
        if path.exists() {
            return Ok(false);
        }
        fs::write(&path, schemas::EMPTY_STORE)?;
        Ok(true)
    }

    pub fn load(&self) -> Result<LoadedStore, TaggerError> {
        let path = self.store_path();
        let raw = fs::read_to_string(&path)?;
        let table = parse_table(&path, &raw)?;
        Ok(LoadedStore { table, raw })
    }

    /// Snapshots `raw` into the backup slot, overwriting the previous generation.
    pub fn backup(&self, raw: &str) -> Result<(), TaggerError> {
        fs::write(self.backup_path(), raw)?;
        Ok(())
    }

    /// Canonically orders `table` and overwrites the store with it.
    /// Returns the text that was written.
    pub fn persist(&self, table: &mut AssociationTable) -> Result<String, TaggerError> {
        table.canonicalize()?;
        let text = table.to_pretty_json()?;
        fs::write(self.store_path(), &text)?;
        Ok(text)
    }
}

fn canonical_collator() -> Result<CollatorBorrowed<'static>, TaggerError> {
    let mut prefs = CollatorPreferences::default();
    prefs.numeric_ordering = Some(CollationNumericOrdering::True);
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Primary);
    Collator::try_new(prefs, options).map_err(|e| TaggerError::CollatorError(e.to_string()))
}

fn parse_table(path: &Path, raw: &str) -> Result<AssociationTable, TaggerError> {
    let entries: Vec<Association> =
        serde_json::from_str(raw).map_err(|source| TaggerError::StoreParseError {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(AssociationTable::from_entries(entries))
}
