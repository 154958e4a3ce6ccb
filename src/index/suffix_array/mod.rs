//! Suffix array construction
//!
//! ## Architecture
//!
//! - `radix`: prefix-doubling suffix sort
//! - `lcp`: inverse suffix array and LCP array
//! - `builder`: the full pipeline from fragments to a [`SuffixIndex`]
//! - `types`: positions, intervals and table keys
//!
//! [`SuffixIndex`]: crate::index::SuffixIndex

pub mod builder;
pub mod lcp;
pub mod radix;
pub mod types;

// Re-exports for convenience
pub use builder::{SuffixArrayBuilder, build_index};
pub use types::{ChildKey, FragmentBoundary, Interval, LcpNode, SuffixEntry, TextPosition};
