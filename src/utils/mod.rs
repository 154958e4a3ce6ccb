//! Shared helpers
//!
//! - [`nucleotide`] - symbol codes, sentinels and the ASCII codec
//! - [`progress`] - progress bars behind the `progress` feature

pub mod nucleotide;
pub mod progress;

pub use nucleotide::{ALPHABET_SIZE, Nucleotide, SENTINEL, TERMINATOR, decode, encode};
