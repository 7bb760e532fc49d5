//! Item model: the nodes of a directory tree
//!
//! A tree is a [`Directory`] owning its children. Files and links are leaves;
//! a link records where it points without being followed.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{InvalidRootReason, TreeError};

/// Discriminant of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    File,
    Link,
    Directory,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemKind::File => "file",
            ItemKind::Link => "link",
            ItemKind::Directory => "directory",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub path: PathBuf,
    /// Raw link contents as returned by `read_link`, never resolved.
    pub target: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub name: String,
    pub path: PathBuf,
    /// Entries in the order the walker appended them (sorted by name).
    pub children: Vec<Item>,
}

/// A single node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    File(File),
    Link(Link),
    Directory(Directory),
}

/// Final path component as a string; empty for a filesystem root.
pub(crate) fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

impl File {
    pub fn new(path: PathBuf) -> Self {
        Self {
            name: name_of(&path),
            path,
        }
    }
}

impl Link {
    pub fn new(path: PathBuf, target: PathBuf) -> Self {
        Self {
            name: name_of(&path),
            path,
            target,
        }
    }
}

impl Directory {
    /// Create a childless directory item for an already resolved path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            name: name_of(&path),
            path,
            children: Vec::new(),
        }
    }

    /// Resolve `path` into the root of a tree.
    ///
    /// The path is made absolute with symlinks resolved. Fails with
    /// [`TreeError::InvalidRoot`] if it does not exist or is not a directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TreeError> {
        let path = path.as_ref();
        let invalid = |reason| TreeError::InvalidRoot {
            path: path.to_path_buf(),
            reason,
        };

        let resolved = dunce::canonicalize(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => invalid(InvalidRootReason::NotFound),
            _ => invalid(InvalidRootReason::Io(e)),
        })?;

        if !resolved.is_dir() {
            return Err(invalid(InvalidRootReason::NotADirectory));
        }

        Ok(Self::new(resolved))
    }

    pub fn children(&self) -> &[Item] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Count descendants as `(directories, files, links)`, excluding self.
    pub fn count(&self) -> (usize, usize, usize) {
        self.children
            .iter()
            .fold((0, 0, 0), |(d, f, l), child| match child {
                Item::File(_) => (d, f + 1, l),
                Item::Link(_) => (d, f, l + 1),
                Item::Directory(dir) => {
                    let (cd, cf, cl) = dir.count();
                    (d + 1 + cd, f + cf, l + cl)
                }
            })
    }
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::File(f) => &f.name,
            Item::Link(l) => &l.name,
            Item::Directory(d) => &d.name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Item::File(f) => &f.path,
            Item::Link(l) => &l.path,
            Item::Directory(d) => &d.path,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::File(_) => ItemKind::File,
            Item::Link(_) => ItemKind::Link,
            Item::Directory(_) => ItemKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Item::File(_))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Item::Link(_))
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Item::Directory(_))
    }

    /// Name as shown in a tree: directories get a trailing `/`.
    pub fn display_name(&self) -> String {
        match self {
            Item::Directory(d) => format!("{}/", d.name),
            _ => self.name().to_string(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<File> for Item {
    fn from(file: File) -> Self {
        Item::File(file)
    }
}

impl From<Link> for Item {
    fn from(link: Link) -> Self {
        Item::Link(link)
    }
}

impl From<Directory> for Item {
    fn from(dir: Directory) -> Self {
        Item::Directory(dir)
    }
}
