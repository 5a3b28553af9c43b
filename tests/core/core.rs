use tagger::core::classify::{Command, classify};
use tagger::core::error::TaggerError;
use tagger::core::journal;
use tagger::core::store::{Association, AssociationTable, Store};
use tagger::core::undo;
use tagger::dispatch::{self, Outcome};
use std::collections::BTreeSet;
use std::fs;
use tempfile::tempdir;

/// One full non-undo run against `store`, minus console output.
fn run_tokens(store: &Store, tokens: &[&str]) -> Result<Outcome, TaggerError> {
    store.ensure_initialized()?;
    let command = classify(tokens);
    let loaded = store.load()?;
    store.backup(&loaded.raw)?;
    let mut table = loaded.table;
    let outcome = dispatch::apply(&command, &mut table);
    if let Outcome::Mutated { .. } = outcome {
        store.persist(&mut table)?;
    }
    Ok(outcome)
}

fn as_set(table: &AssociationTable) -> BTreeSet<(String, String)> {
    table
        .entries()
        .iter()
        .map(|a| (a.path.clone(), a.tag.clone()))
        .collect()
}

#[test]
fn scenario_add_then_query_both_directions() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path());

    let out = run_tokens(&store, &["file1.opus", "album=X", "artist=Y"]).unwrap();
    assert_eq!(out, Outcome::Mutated { before: 0, after: 2 });
    run_tokens(&store, &["file2.opus", "album=X"]).unwrap();

    let paths = run_tokens(&store, &["album=X"]).unwrap();
    assert_eq!(
        paths,
        Outcome::Paths(vec!["file1.opus".to_string(), "file2.opus".to_string()])
    );

    let tags = run_tokens(&store, &["file1.opus"]).unwrap();
    assert_eq!(
        tags,
        Outcome::Tags(vec!["album=X".to_string(), "artist=Y".to_string()])
    );
}

#[test]
fn adding_twice_matches_adding_once() {
    let tmp_once = tempdir().unwrap();
    let tmp_twice = tempdir().unwrap();
    let once = Store::new(tmp_once.path());
    let twice = Store::new(tmp_twice.path());

    run_tokens(&once, &["a.opus", "b.opus", "x", "y"]).unwrap();
    run_tokens(&twice, &["a.opus", "b.opus", "x", "y"]).unwrap();
    run_tokens(&twice, &["a.opus", "b.opus", "x", "y"]).unwrap();

    assert_eq!(
        as_set(&once.load().unwrap().table),
        as_set(&twice.load().unwrap().table)
    );
}

#[test]
fn persisted_table_round_trips() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path());
    let mut table = AssociationTable::from_entries(vec![
        Association::new("Zed \"quoted\".opus", "ünïcode"),
        Association::new("a.opus", "tag with space"),
    ]);
    store.persist(&mut table).unwrap();
    assert_eq!(as_set(&store.load().unwrap().table), as_set(&table));
}

#[test]
fn persisted_order_is_canonical() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path());
    run_tokens(&store, &["track10.opus", "track2.opus", "b", "A"]).unwrap();

    let order: Vec<(String, String)> = store
        .load()
        .unwrap()
        .table
        .entries()
        .iter()
        .map(|a| (a.path.clone(), a.tag.clone()))
        .collect();
    let expected = [
        ("track2.opus", "A"),
        ("track2.opus", "b"),
        ("track10.opus", "A"),
        ("track10.opus", "b"),
    ];
    assert_eq!(
        order,
        expected
            .iter()
            .map(|(p, t)| (p.to_string(), t.to_string()))
            .collect::<Vec<_>>()
    );
}

#[test]
fn backup_holds_previous_generation_and_undo_restores_it() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path());
    run_tokens(&store, &["a.opus", "x"]).unwrap();
    let first = fs::read_to_string(store.store_path()).unwrap();
    run_tokens(&store, &["r", "x"]).unwrap();

    assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), first);
    assert!(store.load().unwrap().table.is_empty());

    undo::rotate(&store).unwrap();
    assert_eq!(fs::read_to_string(store.store_path()).unwrap(), first);
}

#[test]
fn undo_is_classified_before_anything_else() {
    assert_eq!(classify(&["r", "a.opus", "x", "undo"]), Command::Undo);
}

#[test]
fn journal_event_hash_matches_store_text() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path());
    run_tokens(&store, &["a.opus", "x"]).unwrap();
    journal::record_current(&store, "add", Some(0), Some(1)).unwrap();

    let events: Vec<journal::JournalEvent> = fs::read_to_string(store.journal_path())
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let text = fs::read_to_string(store.store_path()).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].store_sha256, journal::hash_text(&text));
}
