//! # sfx-index - enhanced suffix arrays over nucleotide fragments
//!
//! Indexes a collection of DNA fragments as one sentinel-separated buffer and
//! answers maximal-match queries against it in time linear in the query.
//! While the index is built, repeated chains in a configurable length window
//! are mined as element groups.
//!
//! ## Architecture
//!
//! - [`index`] - symbol buffer, suffix sorting, LCP, interval tree, child and
//!   suffix-link tables, element groups, batch construction
//! - [`query`] - traversal cursor and maximal-match searcher
//! - [`output`] - terminal and JSON rendering
//! - [`utils`] - nucleotide codec and progress bars
//! - [`error`] - the library error type
//!
//! ## Quick Start
//!
//! ```
//! use sfx_index::index::{IndexConfig, SuffixIndex};
//! use sfx_index::utils::encode;
//!
//! let fragments = vec![encode(b"ATAT").unwrap()];
//! let index = SuffixIndex::from_fragments(&fragments, &IndexConfig::default()).unwrap();
//!
//! let matches = index.search(&encode(b"AT").unwrap(), 2).unwrap();
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].source_position, 0);
//! assert_eq!(matches[1].source_position, 2);
//! ```
//!
//! ## Performance
//!
//! Construction is O(n log n) in the buffer length (prefix doubling with
//! byte-wise radix passes). Searching a query of length m costs O(m) expected
//! table lookups plus the number of reported occurrences.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{IndexError, Result};
pub use index::{ElementGroup, IndexConfig, IndexStats, SuffixIndex};
pub use query::{MatchRecord, Searcher};
