//! Report serialization
//!
//! Two interchangeable backends render the completed tree:
//!
//! - `xml` - structured markup, pretty-printed with tabs
//! - `json` - object notation, pretty-printed
//!
//! The backend is picked from the report file's extension. Neither
//! backend writes through a temp file, so a failure mid-write can
//! leave a truncated report behind.

mod json;
mod xml;

use std::path::Path;

pub use json::write_json;
pub use xml::write_xml;

use crate::error::Error;
use crate::tree::DirectoryEntry;

/// Output document format, selected by the report extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Xml,
    Json,
}

impl ReportFormat {
    /// Pick the format from `path`'s extension. Anything other than
    /// `.xml` or `.json` (including no extension at all) is an error,
    /// raised before any traversal starts.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("xml") => Ok(Self::Xml),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Render `tree` to `destination` with the chosen backend.
pub fn write_report(
    tree: &DirectoryEntry,
    destination: &Path,
    format: ReportFormat,
) -> Result<(), Error> {
    match format {
        ReportFormat::Xml => write_xml(tree, destination),
        ReportFormat::Json => write_json(tree, destination),
    }
}
