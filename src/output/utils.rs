//! Glyphs and prefix helpers shared by tree formatting

/// Connector drawn before every entry, last sibling or not.
pub const CONNECTOR: &str = "└──";

/// Separator between a link's name and its target.
pub const LINK_ARROW: &str = "->";

/// Indent under an entry that was the last of its siblings.
pub const LAST_INDENT: &str = "    ";

/// Indent under an entry that still has siblings below it.
pub const CONTINUE_INDENT: &str = "│   ";

/// Calculate the prefix for the children of an entry drawn at `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, LAST_INDENT)
    } else {
        format!("{}{}", prefix, CONTINUE_INDENT)
    }
}
