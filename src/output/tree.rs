//! Tree formatter for plain text output
//!
//! This module provides `TreeFormatter` which turns a walked [`Directory`]
//! into connector-prefixed lines. Formatting never touches the filesystem
//! and never mutates the tree, so the same tree always renders identically.

use std::io::{self, Write};

use crate::tree::{Directory, Item};

use super::utils::{CONNECTOR, LINK_ARROW, child_prefix};

/// Formatter for tree output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render `root` as lines, without trailing newlines.
    pub fn lines(&self, root: &Directory) -> Vec<String> {
        let mut lines = vec![format!("{}/", root.name)];
        self.format_children(root, "", &mut lines);
        lines
    }

    /// Render `root` as a single string, one newline-terminated line per entry.
    pub fn format(&self, root: &Directory) -> String {
        let mut output = String::new();
        for line in self.lines(root) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Write the rendered tree to `out`.
    pub fn write_to<W: Write>(&self, root: &Directory, out: &mut W) -> io::Result<()> {
        for line in self.lines(root) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Print the rendered tree to stdout.
    pub fn print(&self, root: &Directory) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_to(root, &mut lock)?;
        lock.flush()
    }

    fn format_children(&self, dir: &Directory, prefix: &str, lines: &mut Vec<String>) {
        let count = dir.children.len();
        for (i, child) in dir.children.iter().enumerate() {
            let is_last = i + 1 == count;
            let mut line = format!("{}{} {}", prefix, CONNECTOR, child.display_name());
            match child {
                Item::Link(link) => {
                    line.push_str(&format!(" {} {}", LINK_ARROW, link.target.display()));
                    lines.push(line);
                }
                Item::File(_) => lines.push(line),
                Item::Directory(sub) => {
                    lines.push(line);
                    self.format_children(sub, &child_prefix(prefix, is_last), lines);
                }
            }
        }
    }
}
