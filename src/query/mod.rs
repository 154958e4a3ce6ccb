//! Matching over a built index
//!
//! - `cursor`: position in the virtual suffix tree, with child descent,
//!   suffix-link following and rescanning
//! - `searcher`: maximal-match search and matching statistics

pub mod cursor;
pub mod searcher;

pub use cursor::Cursor;
pub use searcher::{MatchRecord, Searcher};
