//! TreeWalker - depth-first filesystem traversal

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Error;
use crate::hash::HashAlgo;
use crate::metadata::FileEntry;

use super::config::ScanConfig;
use super::node::{DirectoryEntry, TreeNode};

/// Walks a directory tree and builds the full [DirectoryEntry] model
/// in memory. Single-threaded; every filesystem call blocks in
/// sequence, and the first failure aborts the whole walk.
pub struct TreeWalker {
    hash: Option<HashAlgo>,
}

impl TreeWalker {
    pub fn new(config: &ScanConfig) -> Self {
        Self { hash: config.hash }
    }

    /// Walk the tree rooted at `root`.
    ///
    /// Fails with [Error::NotADirectory] if `root` is not an existing
    /// directory. Listing or extraction failures anywhere below it
    /// propagate as [Error::UnreadableEntry].
    pub fn walk(&self, root: &Path) -> Result<DirectoryEntry, Error> {
        let mut tree = DirectoryEntry::new(root)?;
        info!(root = %root.display(), "starting scan");
        self.walk_dir(root, &mut tree)?;
        info!(
            files = tree.file_count(),
            directories = tree.dir_count(),
            "scan complete"
        );
        Ok(tree)
    }

    fn walk_dir(&self, path: &Path, parent: &mut DirectoryEntry) -> Result<(), Error> {
        // Children are taken in the order the filesystem yields them;
        // report order is platform-dependent.
        let entries = fs::read_dir(path).map_err(|e| Error::unreadable(path, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| Error::unreadable(path, e))?;
            let entry_path = entry.path();

            if entry_path.is_dir() {
                // Symlinked directories are followed; a symlink cycle
                // recurses unboundedly.
                let mut subdir = DirectoryEntry::new(&entry_path)?;
                self.walk_dir(&entry_path, &mut subdir)?;
                parent.push(TreeNode::Dir(subdir));
            } else if entry_path.is_file() {
                parent.push(TreeNode::File(FileEntry::extract(&entry_path, self.hash)?));
            } else {
                // sockets, device files, broken symlinks
                debug!(path = %entry_path.display(), "skipping special entry");
            }
        }

        Ok(())
    }
}
