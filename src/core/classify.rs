//! Turns the raw token list into a [`Command`].
//!
//! Tokens containing `.` are paths, `r` is the removal flag, `undo` swaps the
//! store with its backup, and everything else is a tag.

use crate::core::schemas::{PATH_MARKER, REMOVE_TOKEN, UNDO_TOKEN};

/// Tokens split by role, in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub paths: Vec<String>,
    pub tags: Vec<String>,
    pub remove: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No tokens at all.
    Usage,
    /// Swap the store and its backup.
    Undo,
    /// Paths carrying every given tag (all paths when `tags` is empty).
    List { tags: Vec<String> },
    /// Tags attached to any of the given paths.
    Query { paths: Vec<String> },
    /// Tag every path with every tag.
    Add { paths: Vec<String>, tags: Vec<String> },
    /// Drop the path x tag pairs, or every use of the tags when `paths` is empty.
    /// An empty `tags` matches nothing.
    Remove { paths: Vec<String>, tags: Vec<String> },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Usage => "usage",
            Command::Undo => "undo",
            Command::List { .. } => "list",
            Command::Query { .. } => "query",
            Command::Add { .. } => "add",
            Command::Remove { .. } => "remove",
        }
    }
}

pub fn split_tokens<S: AsRef<str>>(tokens: &[S]) -> Classified {
    let mut out = Classified::default();
    for token in tokens.iter().map(AsRef::as_ref) {
        if token.contains(PATH_MARKER) {
            out.paths.push(token.to_string());
        } else if token == REMOVE_TOKEN {
            out.remove = true;
        } else {
            out.tags.push(token.to_string());
        }
    }
    out
}

pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Command {
    if tokens.is_empty() {
        return Command::Usage;
    }
    if tokens.iter().any(|t| t.as_ref() == UNDO_TOKEN) {
        return Command::Undo;
    }

    let Classified {
        paths,
        tags,
        remove,
    } = split_tokens(tokens);

    match (paths.is_empty(), tags.is_empty(), remove) {
        (true, true, false) | (true, false, false) => Command::List { tags },
        (false, true, false) => Command::Query { paths },
        (false, false, false) => Command::Add { paths, tags },
        (false, false, true) | (true, false, true) => Command::Remove { paths, tags },
        (false, true, true) | (true, true, true) => Command::Remove {
            paths,
            tags: Vec::new(),
        },
    }
}
