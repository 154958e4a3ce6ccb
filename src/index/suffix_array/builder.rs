//! Enhanced suffix array builder
//!
//! Builds a [`SuffixIndex`] from a collection of fragments by:
//! 1. Concatenating all fragments with sentinel separators
//! 2. Sorting suffixes by prefix doubling
//! 3. Deriving the rank and LCP arrays
//! 4. Scanning the LCP array into the interval tree, mining element groups
//! 5. Flattening the tree into the child and suffix-link tables
//!
//! Every stage consumes the complete output of the previous one. The rank
//! array and the interval tree are dropped once the tables exist.

use super::{lcp, radix};
use crate::error::Result;
use crate::index::groups::GroupCollector;
use crate::index::interval_tree::IntervalTree;
use crate::index::suffix_index::SuffixIndex;
use crate::index::symbols::{SymbolBuffer, SymbolBufferBuilder};
use crate::index::tables::build_tables;
use crate::index::types::{FragmentId, IndexConfig};

/// Builder for constructing an index from fragments
pub struct SuffixArrayBuilder {
    config: IndexConfig,
    symbols: SymbolBufferBuilder,
}

impl SuffixArrayBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: IndexConfig) -> Self {
        Self {
            config,
            symbols: SymbolBufferBuilder::new(),
        }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(IndexConfig::default())
    }

    /// Add a fragment of raw symbol codes
    pub fn add_fragment(&mut self, fragment: &[u8]) -> Result<FragmentId> {
        self.symbols.add_fragment(fragment)
    }

    /// Add a fragment written as nucleotide letters
    pub fn add_text(&mut self, text: &[u8]) -> Result<FragmentId> {
        self.symbols.add_text(text)
    }

    /// Number of fragments added
    pub fn fragment_count(&self) -> usize {
        self.symbols.fragment_count()
    }

    /// Current size of the accumulated buffer
    pub fn text_size(&self) -> usize {
        self.symbols.len()
    }

    /// Build the index from the accumulated fragments
    pub fn build(self) -> Result<SuffixIndex> {
        let buffer = self.symbols.build()?;
        build_index(buffer, &self.config)
    }
}

/// Run the full construction pipeline over a finished symbol buffer
pub fn build_index(buffer: SymbolBuffer, config: &IndexConfig) -> Result<SuffixIndex> {
    config.validate()?;

    let symbols = buffer.symbols();
    let suftab = radix::sort(symbols)?;
    let (rank, lcptab) = lcp::build_lcp(symbols, &suftab);

    let mut collector = config
        .mine_groups
        .then(|| GroupCollector::new(symbols, &suftab, config));
    let tree = IntervalTree::build(&lcptab, |node| {
        if let Some(collector) = collector.as_mut() {
            collector.on_close(node.left, node.right, node.lcp);
        }
    });
    let groups = collector.map(GroupCollector::finish).unwrap_or_default();

    let (children, links) = build_tables(symbols, &suftab, &rank, &tree)?;
    let interval_count = tree.len();
    let max_lcp = tree.max_lcp();
    drop(rank);
    drop(tree);

    Ok(SuffixIndex::from_parts(
        buffer,
        suftab,
        lcptab,
        children,
        links,
        groups,
        config.clone(),
        interval_count,
        max_lcp,
    ))
}
