//! The built enhanced suffix array and its exact-lookup operations

use crate::error::Result;
use crate::index::groups::ElementGroup;
use crate::index::suffix_array::builder::build_index;
use crate::index::suffix_array::types::{Interval, LcpNode, SuffixEntry, TextPosition};
use crate::index::symbols::SymbolBuffer;
use crate::index::tables::{ChildTable, SuffixLinkTable};
use crate::index::types::{FragmentId, IndexConfig};
use crate::query::cursor::Cursor;
use crate::query::searcher::{MatchRecord, Searcher};

/// Suffix array, LCP array, child table, suffix links and element groups
/// over one symbol buffer
///
/// Immutable once built; any number of searches may run against it
/// concurrently.
#[derive(Debug, Clone)]
pub struct SuffixIndex {
    buffer: SymbolBuffer,
    suftab: Vec<SuffixEntry>,
    lcptab: Vec<u32>,
    children: ChildTable,
    links: SuffixLinkTable,
    groups: Vec<ElementGroup>,
    config: IndexConfig,
    interval_count: usize,
    max_lcp: u32,
}

// The index is shared read-only across search threads
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SuffixIndex>();
};

impl SuffixIndex {
    /// Build an index over a finished symbol buffer
    pub fn build(buffer: SymbolBuffer, config: &IndexConfig) -> Result<Self> {
        build_index(buffer, config)
    }

    /// Build an index over fragments of raw symbol codes
    pub fn from_fragments<F: AsRef<[u8]>>(fragments: &[F], config: &IndexConfig) -> Result<Self> {
        build_index(SymbolBuffer::from_fragments(fragments)?, config)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        buffer: SymbolBuffer,
        suftab: Vec<SuffixEntry>,
        lcptab: Vec<u32>,
        children: ChildTable,
        links: SuffixLinkTable,
        groups: Vec<ElementGroup>,
        config: IndexConfig,
        interval_count: usize,
        max_lcp: u32,
    ) -> Self {
        Self {
            buffer,
            suftab,
            lcptab,
            children,
            links,
            groups,
            config,
            interval_count,
            max_lcp,
        }
    }

    #[inline]
    pub fn buffer(&self) -> &SymbolBuffer {
        &self.buffer
    }

    #[inline]
    pub fn symbols(&self) -> &[u8] {
        self.buffer.symbols()
    }

    #[inline]
    pub fn suftab(&self) -> &[SuffixEntry] {
        &self.suftab
    }

    #[inline]
    pub fn lcptab(&self) -> &[u32] {
        &self.lcptab
    }

    #[inline]
    pub fn child_table(&self) -> &ChildTable {
        &self.children
    }

    #[inline]
    pub fn suffix_links(&self) -> &SuffixLinkTable {
        &self.links
    }

    /// Element groups in the order they were mined
    pub fn element_groups(&self) -> &[ElementGroup] {
        &self.groups
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Buffer length including sentinels
    #[inline]
    pub fn len(&self) -> usize {
        self.suftab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suftab.is_empty()
    }

    pub(crate) fn interval_count(&self) -> usize {
        self.interval_count
    }

    pub(crate) fn max_lcp(&self) -> u32 {
        self.max_lcp
    }

    /// The whole suffix array at depth 0
    #[inline]
    pub fn root(&self) -> LcpNode {
        LcpNode::new(0, self.suftab.len().saturating_sub(1) as u32, 0)
    }

    /// A searcher with its own cursor over this index
    pub fn searcher(&self) -> Searcher<'_> {
        Searcher::new(self)
    }

    /// All maximal matches of `query` at least `min_len` symbols long
    pub fn search(&self, query: &[u8], min_len: usize) -> Result<Vec<MatchRecord>> {
        self.searcher().search(query, min_len)
    }

    /// Suffix array interval of all suffixes starting with `pattern`
    pub fn find_interval(&self, pattern: &[u8]) -> Option<Interval> {
        if pattern.is_empty() {
            return None;
        }
        let mut cursor = Cursor::new(self);
        for (matched, &symbol) in pattern.iter().enumerate() {
            if !cursor.descend(symbol, matched) {
                return None;
            }
        }
        Some(cursor.interval())
    }

    /// Number of occurrences of `pattern`
    pub fn count(&self, pattern: &[u8]) -> usize {
        self.find_interval(pattern).map_or(0, |iv| iv.count())
    }

    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.find_interval(pattern).is_some()
    }

    /// Buffer positions of every occurrence of `pattern`, ascending
    pub fn positions(&self, pattern: &[u8]) -> Vec<TextPosition> {
        let Some(iv) = self.find_interval(pattern) else {
            return Vec::new();
        };
        let mut positions = self.suftab[iv.left as usize..=iv.right as usize].to_vec();
        positions.sort_unstable();
        positions
    }

    /// Fragment and offset within it where a match starts
    pub fn locate(&self, record: &MatchRecord) -> Option<(FragmentId, u32)> {
        self.buffer.fragment_of(record.source_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::nucleotide::{SENTINEL, encode};

    fn index_of(texts: &[&[u8]]) -> SuffixIndex {
        let fragments: Vec<Vec<u8>> = texts.iter().map(|t| encode(t).unwrap()).collect();
        SuffixIndex::from_fragments(&fragments, &IndexConfig::default()).unwrap()
    }

    #[test]
    fn test_find_interval() {
        let index = index_of(&[b"ATAT"]);
        assert_eq!(index.find_interval(&[0, 1]), Some(Interval::new(0, 1)));
        assert_eq!(index.find_interval(&[1]), Some(Interval::new(2, 3)));
        assert_eq!(index.find_interval(&[0, 1, 0, 1]), Some(Interval::new(0, 0)));
        assert_eq!(index.find_interval(&[2]), None);
        assert_eq!(index.find_interval(&[0, 1, 0, 1, 0]), None);
        assert_eq!(index.find_interval(&[]), None);
    }

    #[test]
    fn test_count_and_positions() {
        let index = index_of(&[b"ACGTACGT", b"CGTT"]);
        let cgt = encode(b"CGT").unwrap();
        assert_eq!(index.count(&cgt), 3);
        assert_eq!(index.positions(&cgt), vec![1, 5, 9]);
        assert!(index.contains(&encode(b"GTT").unwrap()));
        assert!(!index.contains(&encode(b"TTT").unwrap()));
    }

    #[test]
    fn test_pattern_never_crosses_sentinel() {
        let index = index_of(&[b"ACG", b"TAC"]);
        // "GT" only exists across the fragment boundary
        assert_eq!(index.count(&encode(b"GT").unwrap()), 0);
        assert_eq!(index.count(&[2, SENTINEL]), 0);
    }

    #[test]
    fn test_locate() {
        let index = index_of(&[b"ACGT", b"GGCC"]);
        let record = MatchRecord {
            query_position: 0,
            source_position: 6,
            length: 2,
        };
        assert_eq!(index.locate(&record), Some((1, 1)));
    }

    #[test]
    fn test_root_spans_everything() {
        let index = index_of(&[b"ACGT"]);
        assert_eq!(index.root(), LcpNode::new(0, 4, 0));
        assert_eq!(index.len(), 5);
    }
}
