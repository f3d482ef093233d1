//! Directory tree scanning
//!
//! `TreeWalker` builds the full tree in memory in a single depth-first
//! pass; a serializer from [crate::output] then renders it.

mod config;
mod node;
mod walker;

pub use config::ScanConfig;
pub use node::{DirectoryEntry, TreeNode};
pub use walker::TreeWalker;
