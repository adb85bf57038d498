//! Traversal limits for recursive find

/// Limits applied while walking a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindLimits {
    /// Maximum number of directory levels to descend below the root.
    /// `Some(0)` searches the root's own entries only.
    /// Default: unbounded
    pub max_depth: Option<usize>,
}

impl FindLimits {
    /// Create new limits with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum descent depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Whether a directory at `depth` below the root may be entered.
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}
