use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};

/// Identifier of a fragment in the order it was added to the buffer
pub type FragmentId = u32;

/// Default lower bound on element group length
pub const DEFAULT_MIN_GROUP_SIZE: usize = 10;

/// Default upper bound on element group length
pub const DEFAULT_MAX_GROUP_SIZE: usize = 100;

/// Configuration for the indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Shortest repeat reported as an element group
    pub min_group_size: usize,
    /// Longest repeat reported as an element group
    pub max_group_size: usize,
    /// Mine element groups while building the interval tree
    pub mine_groups: bool,
    /// Worker threads for batch construction (0 = one per core)
    pub workers: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            max_group_size: DEFAULT_MAX_GROUP_SIZE,
            mine_groups: true,
            workers: 0,
        }
    }
}

impl IndexConfig {
    pub fn with_min_group_size(min_group_size: usize) -> Self {
        Self {
            min_group_size,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_group_size == 0 {
            return Err(IndexError::invalid("min_group_size must be positive"));
        }
        if self.min_group_size > self.max_group_size {
            return Err(IndexError::invalid(format!(
                "min_group_size {} exceeds max_group_size {}",
                self.min_group_size, self.max_group_size
            )));
        }
        Ok(())
    }
}

/// Summary of a built index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Buffer length including sentinels
    pub buffer_len: u64,
    pub fragment_count: u32,
    /// Number of lcp-intervals, root included
    pub interval_count: u64,
    /// Deepest lcp value in the buffer
    pub max_lcp: u32,
    pub child_entries: u64,
    pub link_entries: u64,
    pub element_groups: u64,
}
