use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a benchmark file from loading. All variants are
/// fatal for the run.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{line}: expected at least {expected} fields, found {found}", path.display())]
    TooFewFields {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{}:{line}: '{value}' is not an integer", path.display())]
    NotNumeric {
        path: PathBuf,
        line: u64,
        value: String,
    },
}

impl ParseError {
    /// Whether the error came from a path that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ParseError::Open { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
