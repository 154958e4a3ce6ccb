//! Traversal cursor over the virtual suffix tree
//!
//! The cursor sits either exactly on a node (`matched == depth`) or part way
//! along the edge into it (`matched < depth`). It also remembers the node it
//! last descended from, which is where the next suffix link is taken.

use crate::error::{IndexError, Result};
use crate::index::suffix_array::types::{Interval, LcpNode};
use crate::index::suffix_index::SuffixIndex;
use crate::utils::nucleotide::ALPHABET_SIZE;

pub struct Cursor<'a> {
    index: &'a SuffixIndex,
    current: LcpNode,
    last: LcpNode,
}

impl<'a> Cursor<'a> {
    /// A cursor at the root
    pub fn new(index: &'a SuffixIndex) -> Self {
        let root = index.root();
        Self {
            index,
            current: root,
            last: root,
        }
    }

    pub fn reset(&mut self) {
        self.current = self.index.root();
        self.last = self.current;
    }

    /// Suffixes sharing the matched prefix
    #[inline]
    pub fn interval(&self) -> Interval {
        self.current.interval
    }

    /// Depth of the node the cursor is on or heading into
    #[inline]
    pub fn depth(&self) -> u32 {
        self.current.depth
    }

    #[inline]
    pub fn node(&self) -> LcpNode {
        self.current
    }

    /// Try to extend a match of length `matched` by `symbol`
    ///
    /// Sentinels and the terminator never match, so a match cannot run across
    /// a fragment boundary.
    pub fn descend(&mut self, symbol: u8, matched: usize) -> bool {
        if symbol >= ALPHABET_SIZE {
            return false;
        }

        let depth = self.current.depth as usize;
        if matched == depth {
            match self.index.child_table().get(self.current.interval, symbol) {
                Some(&child) => {
                    self.last = self.current;
                    self.current = child;
                    true
                }
                None => false,
            }
        } else if matched < depth {
            let pos = self.index.suftab()[self.current.interval.left as usize] as usize + matched;
            self.index.symbols().get(pos) == Some(&symbol)
        } else {
            false
        }
    }

    /// Move from the node for `aW` to the node for `W`
    ///
    /// The link is taken from the last node descended from. The cursor then
    /// sits on the link target, which may be shallower than the new match.
    pub fn follow_link(&mut self) -> Result<()> {
        let target = *self
            .index
            .suffix_links()
            .get(&self.last.interval)
            .ok_or_else(|| {
                IndexError::invariant(format!(
                    "no suffix link for [{}, {}]",
                    self.last.interval.left, self.last.interval.right
                ))
            })?;
        self.current = target;
        self.last = target;
        Ok(())
    }

    /// Walk down to the node covering a match of `matched` symbols starting
    /// at `query[start]`, hopping whole edges
    ///
    /// Those symbols are already known to occur, so only the first symbol of
    /// each edge is looked at and every lookup must succeed.
    pub fn rescan(&mut self, query: &[u8], start: usize, matched: usize) -> Result<()> {
        while (self.current.depth as usize) < matched {
            let offset = start + self.current.depth as usize;
            let symbol = *query.get(offset).ok_or_else(|| {
                IndexError::invariant(format!("rescan ran past the query at offset {}", offset))
            })?;

            let child = *self
                .index
                .child_table()
                .get(self.current.interval, symbol)
                .ok_or_else(|| {
                    IndexError::invariant(format!(
                        "no child of [{}, {}] for symbol {} while rescanning",
                        self.current.interval.left, self.current.interval.right, symbol
                    ))
                })?;
            self.last = self.current;
            self.current = child;
        }
        Ok(())
    }
}
