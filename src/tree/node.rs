//! In-memory tree model built by the walker
//!
//! The content graph is a strict tree: children are owned by their
//! parent's `Vec`, so there are no cycles, shared nodes or
//! back-references by construction. Nodes are appended during the walk
//! and never mutated afterward.
//!
//! The JSON encoding lives here as one `Serialize` impl per node kind,
//! mirroring the report shapes `{"Directory": {"name", "content"}}` and
//! `{"File": {<stats>, "name"}}`.

use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Error;
use crate::metadata::FileEntry;

/// One node of the scanned hierarchy: a regular file with its
/// extracted metadata, or a directory with its children.
#[derive(Debug, Clone)]
pub enum TreeNode {
    File(FileEntry),
    Dir(DirectoryEntry),
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir(_))
    }
}

/// A scanned directory and its children in discovery order.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Directory path as reported in the output.
    pub path: PathBuf,
    pub children: Vec<TreeNode>,
}

impl DirectoryEntry {
    /// Create an entry for `path`, which must be an existing directory.
    pub fn new(path: &Path) -> Result<Self, Error> {
        if !path.is_dir() {
            return Err(Error::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            children: Vec::new(),
        })
    }

    pub fn push(&mut self, node: TreeNode) {
        self.children.push(node);
    }

    /// Number of files in this subtree.
    pub fn file_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                TreeNode::File(_) => 1,
                TreeNode::Dir(dir) => dir.file_count(),
            })
            .sum()
    }

    /// Number of directories in this subtree, the root included.
    pub fn dir_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| match child {
                TreeNode::File(_) => 0,
                TreeNode::Dir(dir) => dir.dir_count(),
            })
            .sum::<usize>()
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            TreeNode::File(file) => map.serialize_entry("File", file)?,
            TreeNode::Dir(dir) => map.serialize_entry("Directory", dir)?,
        }
        map.end()
    }
}

impl Serialize for FileEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stats.len() + 1))?;
        for (key, value) in &self.stats {
            map.serialize_entry(key, value)?;
        }
        // name goes last, after the stats
        map.serialize_entry("name", &self.name)?;
        map.end()
    }
}

impl Serialize for DirectoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("name", &self.path.to_string_lossy())?;
        map.serialize_entry("content", &self.children)?;
        map.end()
    }
}
