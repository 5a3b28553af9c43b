use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Store parse error in {}: {source}", .path.display())]
    StoreParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("No backup to swap with: {} does not exist", .0.display())]
    MissingBackupError(PathBuf),
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("Collator error: {0}")]
    CollatorError(String),
    #[error("Journal error: {0}")]
    JournalError(String),
}
