//! Types for the enhanced suffix array
//!
//! Positions and suffix array ranks are stored as `u32`, which bounds a single
//! buffer to 4G symbols (a whole human chromosome fits comfortably).

use crate::index::types::FragmentId;
use serde::{Deserialize, Serialize};

/// Position in the symbol buffer
pub type TextPosition = u32;

/// Suffix array entry - position in the symbol buffer
pub type SuffixEntry = u32;

/// Largest buffer length a single index can hold
pub const MAX_BUFFER_LEN: usize = u32::MAX as usize;

/// Inclusive range of suffix array ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    pub left: u32,
    pub right: u32,
}

impl Interval {
    #[inline]
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    /// Number of suffixes in the interval
    #[inline]
    pub fn count(&self) -> usize {
        (self.right - self.left) as usize + 1
    }

    #[inline]
    pub fn contains(&self, other: &Interval) -> bool {
        self.left <= other.left && other.right <= self.right
    }

    /// A single suffix rather than a branching node
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.left == self.right
    }
}

/// A node of the virtual suffix tree: an lcp-interval or a single leaf
///
/// For a leaf, `depth` is the remaining suffix length `n - position - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcpNode {
    pub interval: Interval,
    pub depth: u32,
}

impl LcpNode {
    #[inline]
    pub fn new(left: u32, right: u32, depth: u32) -> Self {
        Self {
            interval: Interval::new(left, right),
            depth,
        }
    }
}

/// Child table key: the parent interval plus the symbol right after its
/// common prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildKey {
    pub interval: Interval,
    pub symbol: u8,
}

impl ChildKey {
    #[inline]
    pub fn new(interval: Interval, symbol: u8) -> Self {
        Self { interval, symbol }
    }
}

/// Fragment boundary in the symbol buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentBoundary {
    pub fragment_id: FragmentId,
    /// Start position in the buffer (inclusive)
    pub start: TextPosition,
    /// End position in the buffer (exclusive, before the sentinel)
    pub end: TextPosition,
}
