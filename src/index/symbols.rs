//! Symbol buffer builder
//!
//! Concatenates fragments into one buffer:
//! `fragment0 $ fragment1 $ ... fragmentK #` where `$` is [`SENTINEL`] and the
//! final `#` is [`TERMINATOR`], strictly greater than every other symbol. A
//! unique maximal last symbol keeps every suffix comparison inside the buffer.

use crate::error::{IndexError, Result};
use crate::index::suffix_array::types::{FragmentBoundary, MAX_BUFFER_LEN, TextPosition};
use crate::index::types::FragmentId;
use crate::utils::nucleotide::{self, ALPHABET_SIZE, SENTINEL, TERMINATOR};

/// Builder for the concatenated symbol buffer
#[derive(Debug, Default)]
pub struct SymbolBufferBuilder {
    symbols: Vec<u8>,
    boundaries: Vec<FragmentBoundary>,
}

impl SymbolBufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment of raw symbol codes (`0..ALPHABET_SIZE`)
    ///
    /// Returns the id assigned to the fragment.
    pub fn add_fragment(&mut self, fragment: &[u8]) -> Result<FragmentId> {
        if let Some(offset) = fragment.iter().position(|&s| s >= ALPHABET_SIZE) {
            return Err(IndexError::invalid(format!(
                "symbol {} at offset {} is outside the alphabet",
                fragment[offset], offset
            )));
        }

        // Room for the fragment plus its sentinel
        if self.symbols.len() + fragment.len() + 1 > MAX_BUFFER_LEN {
            return Err(IndexError::invalid(format!(
                "buffer would exceed {} symbols",
                MAX_BUFFER_LEN
            )));
        }

        let fragment_id = self.boundaries.len() as FragmentId;
        let start = self.symbols.len() as TextPosition;
        self.symbols.extend_from_slice(fragment);
        let end = self.symbols.len() as TextPosition;
        self.symbols.push(SENTINEL);

        self.boundaries.push(FragmentBoundary {
            fragment_id,
            start,
            end,
        });

        Ok(fragment_id)
    }

    /// Add a fragment written as nucleotide letters
    pub fn add_text(&mut self, text: &[u8]) -> Result<FragmentId> {
        let codes = nucleotide::encode(text)?;
        self.add_fragment(&codes)
    }

    /// Number of fragments added so far
    pub fn fragment_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Current buffer length including sentinels
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Finish the buffer, turning the last sentinel into the terminator
    pub fn build(self) -> Result<SymbolBuffer> {
        let mut symbols = self.symbols;
        match symbols.last_mut() {
            Some(last) => *last = TERMINATOR,
            None => return Err(IndexError::EmptyInput),
        }

        Ok(SymbolBuffer {
            symbols,
            boundaries: self.boundaries,
        })
    }
}

/// Immutable concatenated buffer plus the fragment layout inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolBuffer {
    symbols: Vec<u8>,
    boundaries: Vec<FragmentBoundary>,
}

impl SymbolBuffer {
    /// Build a buffer from a list of fragments in one call
    pub fn from_fragments<F: AsRef<[u8]>>(fragments: &[F]) -> Result<Self> {
        let mut builder = SymbolBufferBuilder::new();
        for fragment in fragments {
            builder.add_fragment(fragment.as_ref())?;
        }
        builder.build()
    }

    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn boundaries(&self) -> &[FragmentBoundary] {
        &self.boundaries
    }

    pub fn fragment_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Symbols of one fragment, without its sentinel
    pub fn fragment(&self, fragment_id: FragmentId) -> Option<&[u8]> {
        let b = self.boundaries.get(fragment_id as usize)?;
        Some(&self.symbols[b.start as usize..b.end as usize])
    }

    /// Map a buffer position to `(fragment_id, offset within fragment)`
    ///
    /// Sentinel positions belong to no fragment.
    pub fn fragment_of(&self, position: TextPosition) -> Option<(FragmentId, u32)> {
        let idx = self
            .boundaries
            .binary_search_by(|b| {
                if position < b.start {
                    std::cmp::Ordering::Greater
                } else if position >= b.end {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .ok()?;

        let b = &self.boundaries[idx];
        Some((b.fragment_id, position - b.start))
    }
}
