//! TreeWalker - builds the item tree in memory

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::filter::ExcludeFilter;
use super::item::{Directory, File, Item, Link};

/// Tree walker that reads a directory recursively into a [`Directory`].
///
/// Entries are visited in byte order of their names. Symlinks are recorded
/// as leaves and never followed.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: ExcludeFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = ExcludeFilter::new(&config.exclude);
        Self { config, filter }
    }

    /// Resolve `root` and build its tree.
    pub fn walk(&self, root: &Path) -> Result<Directory, TreeError> {
        self.walk_directory(Directory::open(root)?)
    }

    /// Build the tree below an already opened root, replacing any children it had.
    pub fn walk_directory(&self, mut root: Directory) -> Result<Directory, TreeError> {
        root.children.clear();
        self.expand(&mut root, 0)?;
        let (dirs, files, links) = root.count();
        debug!(root = %root.path.display(), dirs, files, links, "walk finished");
        Ok(root)
    }

    /// Populate `dir`, which sits `level` steps below the root.
    fn expand(&self, dir: &mut Directory, level: usize) -> Result<(), TreeError> {
        debug!(path = %dir.path.display(), level, "expanding directory");

        let dir_path = dir.path.clone();
        let read_error = |source| TreeError::DirectoryRead {
            path: dir_path.clone(),
            source,
        };
        let mut entries = fs::read_dir(&dir.path)
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if self.filter.is_excluded(&name) {
                debug!(name = %name, "excluded");
                continue;
            }

            let path = dir_path.join(entry.file_name());
            let file_type = entry.file_type().map_err(read_error)?;

            let item = if file_type.is_symlink() {
                let target = fs::read_link(&path).map_err(|source| TreeError::LinkRead {
                    path: path.clone(),
                    source,
                })?;
                Item::Link(Link::new(path, target))
            } else if file_type.is_dir() {
                let mut child = Directory::new(path);
                if self.config.expands(level + 1) {
                    self.expand(&mut child, level + 1)?;
                }
                Item::Directory(child)
            } else {
                Item::File(File::new(path))
            };

            trace!(name = item.name(), kind = %item.kind(), "classified");
            dir.children.push(item);
        }

        Ok(())
    }
}
