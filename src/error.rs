use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the extraction, discovery, and rendering layers.
///
/// Callers decide how to report these: the batch driver downgrades `Read`
/// to a per-file warning while `Write` and `Pattern` abort the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid glob pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
