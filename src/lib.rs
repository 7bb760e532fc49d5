//! Twig - print a directory as a box-drawn tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{InvalidRootReason, TreeError};
pub use output::TreeFormatter;
pub use tree::{
    DEFAULT_EXCLUDES, Directory, ExcludeFilter, File, Item, ItemKind, Link, TreeWalker,
    WalkerConfig,
};
