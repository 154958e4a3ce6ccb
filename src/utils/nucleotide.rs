//! Two-bit nucleotide codes and their ASCII form.
//!
//! The index works on raw symbol codes `0..ALPHABET_SIZE`. Anything at or above
//! [`ALPHABET_SIZE`] is a sentinel and never part of a fragment.

use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};

/// Number of real symbols in the alphabet
pub const ALPHABET_SIZE: u8 = 4;

/// Sentinel separating two fragments
pub const SENTINEL: u8 = ALPHABET_SIZE;

/// Sentinel closing the last fragment; strictly greater than every other symbol
pub const TERMINATOR: u8 = ALPHABET_SIZE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    T = 1,
    G = 2,
    C = 3,
}

impl Nucleotide {
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Nucleotide::A),
            b'T' | b't' => Some(Nucleotide::T),
            b'G' | b'g' => Some(Nucleotide::G),
            b'C' | b'c' => Some(Nucleotide::C),
            _ => None,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Nucleotide::A),
            1 => Some(Nucleotide::T),
            2 => Some(Nucleotide::G),
            3 => Some(Nucleotide::C),
            _ => None,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn to_ascii(self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::T => b'T',
            Nucleotide::G => b'G',
            Nucleotide::C => b'C',
        }
    }
}

/// Check whether a symbol code is a sentinel
#[inline]
pub fn is_sentinel(symbol: u8) -> bool {
    symbol >= ALPHABET_SIZE
}

/// Encode nucleotide letters (case-insensitive) into symbol codes
///
/// Whitespace is skipped. Any other character, including `N`, is rejected.
pub fn encode(text: &[u8]) -> Result<Vec<u8>> {
    let mut codes = Vec::with_capacity(text.len());
    for (offset, &byte) in text.iter().enumerate() {
        if byte.is_ascii_whitespace() {
            continue;
        }
        match Nucleotide::from_ascii(byte) {
            Some(n) => codes.push(n.code()),
            None => {
                return Err(IndexError::invalid(format!(
                    "unsupported nucleotide {:?} at offset {}",
                    byte as char, offset
                )));
            }
        }
    }
    Ok(codes)
}

/// Render symbol codes as letters; sentinels become `$`
pub fn decode(codes: &[u8]) -> String {
    codes
        .iter()
        .map(|&c| match Nucleotide::from_code(c) {
            Some(n) => n.to_ascii() as char,
            None => '$',
        })
        .collect()
}
