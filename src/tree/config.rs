//! Configuration types for the tree walker

/// Exclusion patterns applied when the user supplies none.
pub const DEFAULT_EXCLUDES: [&str; 3] = ["__pycache__", "*venv*", ".git"];

/// Configuration for tree walking behavior.
///
/// `Default` excludes nothing; an empty `exclude` list is taken literally.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Number of directory levels to expand. `None` = unbounded.
    pub max_depth: Option<usize>,
    /// Glob patterns matched against entry base names.
    pub exclude: Vec<String>,
}

impl WalkerConfig {
    /// Unbounded walk excluding [`DEFAULT_EXCLUDES`].
    pub fn with_default_excludes() -> Self {
        Self {
            max_depth: None,
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether a directory `level` steps below the root gets its entries listed.
    /// The root itself is always listed.
    pub fn expands(&self, level: usize) -> bool {
        self.max_depth.is_none_or(|max| level < max)
    }
}
