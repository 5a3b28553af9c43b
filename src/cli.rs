//! CLI struct definitions for the tagger command-line interface.
//!
//! Options are deliberately few and only recognised before the first token;
//! from the first token on, everything (including `-v` or `-intro.opus`)
//! goes to the classifier in `core::classify` untouched.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "tagger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tag files from the command line. Run without arguments for examples."
)]
pub struct Cli {
    /// Directory holding tags.json and its backup.
    #[clap(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,
    /// Print classification and I/O diagnostics to stderr.
    #[clap(short, long)]
    pub verbose: bool,
    /// Append an audit event to tags.events.jsonl for every state change.
    #[clap(long)]
    pub journal: bool,
    /// Paths (anything containing '.'), tags, 'r' to remove, or 'undo'.
    #[clap(value_name = "TOKEN", allow_hyphen_values = true, trailing_var_arg = true)]
    pub tokens: Vec<String>,
}
