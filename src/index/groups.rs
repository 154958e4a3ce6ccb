//! Element groups: repeats mined while the interval tree is built
//!
//! Every lcp-interval that closes during the scan is a candidate. Candidates
//! outside the configured length window, low-complexity chains and chains
//! crossing a fragment boundary are dropped. Nested candidates closing one
//! after another collapse into a single group.

use crate::index::suffix_array::types::{SuffixEntry, TextPosition};
use crate::index::types::IndexConfig;
use crate::utils::nucleotide::{self, ALPHABET_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A repeated chain and every position it occurs at
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementGroup {
    pub chain: Vec<u8>,
    /// Occurrence positions, ascending
    pub positions: Vec<TextPosition>,
}

impl ElementGroup {
    pub fn new(chain: Vec<u8>, mut positions: Vec<TextPosition>) -> Self {
        positions.sort_unstable();
        Self { chain, positions }
    }

    /// Number of occurrences
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn chain_as_string(&self) -> String {
        nucleotide::decode(&self.chain)
    }
}

impl fmt::Display for ElementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "len:{},count:{}", self.chain.len(), self.positions.len())?;
        if let Some(first) = self.positions.first() {
            write!(f, ",pos0:{}", first)?;
        }
        Ok(())
    }
}

/// Check whether one symbol makes up at least two thirds of the chain
pub fn is_low_complexity(chain: &[u8]) -> bool {
    if chain.is_empty() {
        return true;
    }
    let mut counts = [0usize; ALPHABET_SIZE as usize];
    for &s in chain {
        if let Some(c) = counts.get_mut(s as usize) {
            *c += 1;
        }
    }
    let dominant = counts.iter().copied().max().unwrap_or(0);
    dominant * 3 >= chain.len() * 2
}

/// Collects element groups as intervals close
pub struct GroupCollector<'a> {
    buffer: &'a [u8],
    suftab: &'a [SuffixEntry],
    min_len: usize,
    max_len: usize,
    groups: Vec<ElementGroup>,
}

impl<'a> GroupCollector<'a> {
    pub fn new(buffer: &'a [u8], suftab: &'a [SuffixEntry], config: &IndexConfig) -> Self {
        Self {
            buffer,
            suftab,
            min_len: config.min_group_size,
            max_len: config.max_group_size,
            groups: Vec::new(),
        }
    }

    /// Evaluate a closed interval `[left, right]` with common prefix `lcp`
    pub fn on_close(&mut self, left: u32, right: u32, lcp: u32) {
        let lcp = lcp as usize;
        if lcp < self.min_len || lcp > self.max_len || right <= left {
            return;
        }

        let start = self.suftab[left as usize] as usize;
        let Some(chain) = self.buffer.get(start..start + lcp) else {
            return;
        };
        if chain.iter().any(|&s| s >= ALPHABET_SIZE) || is_low_complexity(chain) {
            return;
        }

        let positions = self.suftab[left as usize..=right as usize].to_vec();
        self.push(ElementGroup::new(chain.to_vec(), positions));
    }

    fn push(&mut self, group: ElementGroup) {
        if let Some(prev) = self.groups.last_mut() {
            let nested = is_strict_prefix(&group.chain, &prev.chain)
                || is_strict_prefix(&prev.chain, &group.chain);
            if nested && group.count() != prev.count() {
                *prev = group;
                return;
            }
        }
        self.groups.push(group);
    }

    pub fn finish(self) -> Vec<ElementGroup> {
        self.groups
    }
}

#[inline]
fn is_strict_prefix(short: &[u8], long: &[u8]) -> bool {
    short.len() < long.len() && long.starts_with(short)
}
