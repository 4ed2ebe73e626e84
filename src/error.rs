//! Error types for word list loading.
//!
//! The classifier and session are total; only the data source can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while building or loading a word list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,
    #[error("word #{position} has a blank term or translation")]
    BlankEntry { position: usize },
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid word list {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
