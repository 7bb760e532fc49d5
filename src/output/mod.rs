//! Tree formatting and display
//!
//! - `tree` - `TreeFormatter`, which renders a walked tree as text lines
//! - `utils` - connector glyphs and prefix calculation

mod tree;
mod utils;

pub use tree::TreeFormatter;
pub use utils::{CONNECTOR, CONTINUE_INDENT, LAST_INDENT, LINK_ARROW, child_prefix};
