//! Name-based exclusion for tree walking

use glob::Pattern;

/// Compiled set of exclusion globs, matched against base names only.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<Pattern>,
}

impl ExcludeFilter {
    /// Compile `patterns`. Runs of `*` act as a single `*`. A pattern that is
    /// still not a valid glob (for example an unclosed `[`) matches itself
    /// literally instead of failing.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(&collapse_stars(p)).unwrap_or_else(|_| {
                    tracing::debug!(pattern = p, "invalid glob, matching literally");
                    Pattern::new(&Pattern::escape(p)).unwrap_or_default()
                })
            })
            .collect();
        Self { patterns }
    }

    /// Check if an entry with this base name should be left out.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Collapse consecutive `*` into one; `glob` reserves `**` for whole path
/// components, which never occur in a base name.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '*' && out.ends_with('*') {
            continue;
        }
        out.push(c);
    }
    out
}
