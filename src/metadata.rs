//! Per-file metadata extraction
//!
//! A [FileEntry] records everything the report carries about one file:
//! its base name and an ordered attribute mapping of formatted strings.
//! Attributes are inserted as size, content hash (when requested), then
//! modification time, and serializers preserve that order.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use indexmap::IndexMap;

use crate::error::Error;
use crate::hash::HashAlgo;

/// Size units, scaled by successive division by 1024.
const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Timestamp layout: full weekday name, MM/DD/YYYY, 12-hour clock.
const MODIFIED_FORMAT: &str = "%A, %m/%d/%Y, %I:%M:%S %p";

/// Metadata for one regular file, captured at traversal time.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path the entry was extracted from.
    pub path: PathBuf,
    /// Base name, as reported in the output.
    pub name: String,
    /// Formatted attributes in insertion order: size, hash, modified.
    pub stats: IndexMap<String, String>,
}

impl FileEntry {
    /// Extract metadata for the file at `path`.
    ///
    /// When `hash` is given, the entire file content is read into
    /// memory and digested in one pass; there is no chunked hashing.
    /// Fails with [Error::NotAFile] if `path` is not an existing
    /// regular file at call time.
    pub fn extract(path: &Path, hash: Option<HashAlgo>) -> Result<FileEntry, Error> {
        if !path.is_file() {
            return Err(Error::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let metadata = fs::metadata(path).map_err(|e| Error::unreadable(path, e))?;

        let mut stats = IndexMap::new();
        stats.insert("size".to_string(), format_size(metadata.len()));

        if let Some(algo) = hash {
            let content = fs::read(path).map_err(|e| Error::unreadable(path, e))?;
            stats.insert(algo.stat_key(), algo.digest(&content));
        }

        let mtime = metadata
            .modified()
            .map_err(|e| Error::unreadable(path, e))?;
        stats.insert("modified".to_string(), format_modified(mtime));

        Ok(FileEntry {
            path: path.to_path_buf(),
            name,
            stats,
        })
    }
}

/// Format a byte count with its largest applicable unit.
///
/// The count is divided by 1024 until it drops below 1024 (capped at
/// TB), then rounded half-to-even, so `1536` renders as `"2 KB"` and
/// the exact byte count is not recoverable from the output.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{} {}", size.round_ties_even(), UNITS[unit])
}

/// Format a modification time in the local system timezone, e.g.
/// `Friday, 03/14/2025, 09:26:53 AM`.
pub fn format_modified(mtime: std::time::SystemTime) -> String {
    let local: DateTime<Local> = mtime.into();
    local.format(MODIFIED_FORMAT).to_string()
}
