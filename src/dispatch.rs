//! Query and mutation dispatch over a loaded association table.

use crate::core::classify::Command;
use crate::core::store::{Association, AssociationTable};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Paths matching a tag filter, in narrowing order.
    Paths(Vec<String>),
    /// Tags found on the requested paths, in store order.
    Tags(Vec<String>),
    /// The table changed and must be persisted.
    Mutated { before: usize, after: usize },
    /// Nothing to read and nothing to write.
    Unchanged { count: usize },
}

/// Runs one of the four store modes. `Usage` and `Undo` are not store
/// modes and must be handled by the caller.
pub fn apply(command: &Command, table: &mut AssociationTable) -> Outcome {
    match command {
        Command::List { tags } => Outcome::Paths(paths_with_all_tags(table, tags)),
        Command::Query { paths } => Outcome::Tags(tags_of_paths(table, paths)),
        Command::Add { paths, tags } => {
            let before = table.len();
            table.extend(cross(paths, tags));
            Outcome::Mutated {
                before,
                after: table.len(),
            }
        }
        Command::Remove { tags, .. } if tags.is_empty() => Outcome::Unchanged {
            count: table.len(),
        },
        Command::Remove { paths, tags } => {
            let before = table.len();
            if paths.is_empty() {
                let doomed: FxHashSet<&str> = tags.iter().map(String::as_str).collect();
                table.remove_where(|a| doomed.contains(a.tag.as_str()));
            } else {
                let doomed: FxHashSet<Association> = cross(paths, tags).collect();
                table.remove_where(|a| doomed.contains(a));
            }
            Outcome::Mutated {
                before,
                after: table.len(),
            }
        }
        // `run_with` answers both before the store is loaded.
        Command::Usage | Command::Undo => {
            unreachable!("{} never reaches the dispatcher", command.name())
        }
    }
}

/// Start from every distinct path and keep those carrying each tag in turn.
pub fn paths_with_all_tags(table: &AssociationTable, tags: &[String]) -> Vec<String> {
    let mut survivors = table.distinct_paths();
    for tag in tags {
        let carriers: FxHashSet<&str> = table
            .entries()
            .iter()
            .filter(|a| &a.tag == tag)
            .map(|a| a.path.as_str())
            .collect();
        survivors.retain(|path| carriers.contains(path));
    }
    survivors.into_iter().map(str::to_string).collect()
}

pub fn tags_of_paths(table: &AssociationTable, paths: &[String]) -> Vec<String> {
    let wanted: FxHashSet<&str> = paths.iter().map(String::as_str).collect();
    let mut seen = FxHashSet::default();
    table
        .entries()
        .iter()
        .filter(|a| wanted.contains(a.path.as_str()))
        .map(|a| a.tag.as_str())
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect()
}

fn cross<'a>(paths: &'a [String], tags: &'a [String]) -> impl Iterator<Item = Association> + 'a {
    paths
        .iter()
        .flat_map(move |p| tags.iter().map(move |t| Association::new(p.as_str(), t.as_str())))
}
