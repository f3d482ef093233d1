//! Error types for scanning and report writing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a scan. There is no partial-success mode:
/// every variant terminates the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Root path is missing or not a directory. Raised before any
    /// traversal happens.
    #[error("\"{}\" is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Metadata extraction was asked for a path that is not a regular
    /// file (e.g. it vanished between listing and extraction).
    #[error("\"{}\" is not a file", path.display())]
    NotAFile { path: PathBuf },

    /// A directory listing or file content read failed mid-scan.
    #[error("cannot read \"{}\": {source}", path.display())]
    UnreadableEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Hash algorithm identifier outside the supported set.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedHash(String),

    /// Report destination extension is neither `.xml` nor `.json`.
    #[error("\"{0}\" is not of .xml or .json type")]
    UnsupportedFormat(String),

    /// Report destination could not be created or written. The
    /// completed scan is discarded.
    #[error("cannot write report \"{}\": {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wrap an I/O error that occurred while reading `path`.
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::UnreadableEntry {
            path: path.into(),
            source,
        }
    }

    /// Wrap an I/O error that occurred while writing the report.
    pub fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
