//! Index configuration.

use crate::spatial::index::DEFAULT_MAX_DEPTH;

/// Settings used when building a day's partition tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexConfig {
    /// Depth at which the tree stops splitting and stores the remainder flat
    pub max_depth: usize,
}

impl IndexConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
