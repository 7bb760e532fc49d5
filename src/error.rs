//! Error types for tree building

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a path was rejected as the root of a tree.
#[derive(Debug, Error)]
pub enum InvalidRootReason {
    #[error("No such file or directory")]
    NotFound,

    #[error("Not a directory")]
    NotADirectory,

    #[error("{0}")]
    Io(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid root '{}': {reason}", path.display())]
    InvalidRoot {
        path: PathBuf,
        reason: InvalidRootReason,
    },

    #[error("cannot read directory '{}': {source}", path.display())]
    DirectoryRead { path: PathBuf, source: io::Error },

    #[error("cannot read link '{}': {source}", path.display())]
    LinkRead { path: PathBuf, source: io::Error },
}

impl TreeError {
    /// Path the error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            TreeError::InvalidRoot { path, .. }
            | TreeError::DirectoryRead { path, .. }
            | TreeError::LinkRead { path, .. } => path,
        }
    }
}
