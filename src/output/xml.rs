//! Structured-markup report backend
//!
//! A hand-written recursive pretty-printer: one element per line,
//! tab-indented, led by an XML declaration. A directory becomes
//! `<Directory name="...">`, a file `<File name="...">` with one child
//! element per stats attribute in insertion order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::metadata::FileEntry;
use crate::tree::{DirectoryEntry, TreeNode};

pub fn write_xml(tree: &DirectoryEntry, destination: &Path) -> Result<(), Error> {
    let file = File::create(destination).map_err(|e| Error::output_write(destination, e))?;
    let mut writer = BufWriter::new(file);
    render(tree, &mut writer).map_err(|e| Error::output_write(destination, e))
}

fn render<W: Write>(tree: &DirectoryEntry, out: &mut W) -> io::Result<()> {
    writeln!(out, "<?xml version=\"1.0\" ?>")?;
    render_directory(tree, out, 0)?;
    out.flush()
}

fn render_directory<W: Write>(dir: &DirectoryEntry, out: &mut W, depth: usize) -> io::Result<()> {
    let indent = "\t".repeat(depth);
    let name = escape_attr(&dir.path.to_string_lossy());

    if dir.children.is_empty() {
        return writeln!(out, "{indent}<Directory name=\"{name}\"/>");
    }

    writeln!(out, "{indent}<Directory name=\"{name}\">")?;
    for child in &dir.children {
        match child {
            TreeNode::File(file) => render_file(file, out, depth + 1)?,
            TreeNode::Dir(subdir) => render_directory(subdir, out, depth + 1)?,
        }
    }
    writeln!(out, "{indent}</Directory>")
}

fn render_file<W: Write>(file: &FileEntry, out: &mut W, depth: usize) -> io::Result<()> {
    let indent = "\t".repeat(depth);
    writeln!(out, "{indent}<File name=\"{}\">", escape_attr(&file.name))?;
    for (key, value) in &file.stats {
        writeln!(out, "{indent}\t<{key}>{}</{key}>", escape_text(value))?;
    }
    writeln!(out, "{indent}</File>")
}

/// Escape text content: `&`, `<` and `>`.
fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape attribute values: text escapes plus `"`.
fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
