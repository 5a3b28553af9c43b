//! Output rendering for CLI surfaces.
//!
//! Query results are plain text meant for `xargs`; status lines and
//! diagnostics are styled.

use colored::Colorize;

/// Wrap in double quotes so `xargs` keeps names with spaces intact.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", s)
}

/// One quoted path per line.
pub fn render_paths<S: AsRef<str>>(paths: &[S]) -> String {
    paths
        .iter()
        .map(|p| quote(p.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// All quoted tags on one line.
pub fn render_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| quote(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn association_count(count: usize) -> String {
    format!("{} associations", count)
}

pub fn status(line: &str) {
    println!("{}", line.bright_green());
}

/// Verbose diagnostics go to stderr so stdout stays pipeable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    pub verbose: bool,
}

impl Diagnostics {
    pub fn note(&self, msg: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{} {}", "tagger:".dimmed(), msg.as_ref());
        }
    }
}
