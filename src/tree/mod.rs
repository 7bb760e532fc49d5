//! Directory tree model and walking logic
//!
//! - `item`: the `Item` sum type and its `File`, `Link`, `Directory` payloads
//! - `walker`: `TreeWalker`, which reads a directory into that model
//! - `filter`: glob-based exclusion of entries by name
//! - `config`: walker configuration and default exclusions

mod config;
mod filter;
mod item;
mod walker;

pub use config::{DEFAULT_EXCLUDES, WalkerConfig};
pub use filter::ExcludeFilter;
pub use item::{Directory, File, Item, ItemKind, Link};
pub use walker::TreeWalker;
