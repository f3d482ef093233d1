//! Object-notation report backend

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Error;
use crate::tree::DirectoryEntry;

/// Root wrapper: the document's top-level object is
/// `{"Directory": {...}}`, same as any nested directory node.
struct Root<'a>(&'a DirectoryEntry);

impl Serialize for Root<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("Directory", self.0)?;
        map.end()
    }
}

/// Write `tree` as a pretty-printed JSON document.
pub fn write_json(tree: &DirectoryEntry, destination: &Path) -> Result<(), Error> {
    let file = File::create(destination).map_err(|e| Error::output_write(destination, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &Root(tree))
        .map_err(|e| Error::output_write(destination, io::Error::new(io::ErrorKind::Other, e)))?;
    writer
        .flush()
        .map_err(|e| Error::output_write(destination, e))
}
