pub mod build;
pub mod groups;
pub mod interval_tree;
pub mod stats;
pub mod suffix_array;
pub mod suffix_index;
pub mod symbols;
pub mod tables;
pub mod types;

pub use build::build_many;
pub use groups::ElementGroup;
pub use suffix_index::SuffixIndex;
pub use symbols::{SymbolBuffer, SymbolBufferBuilder};
pub use types::*;
