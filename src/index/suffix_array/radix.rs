//! Suffix sorting by prefix doubling
//!
//! Every suffix carries a 32-bit label naming its equivalence class under a
//! `p`-symbol lookahead. Each round stable-sorts by the label at offset `p`,
//! then by the label at offset 0 (byte-wise LSD counting sort), which orders by
//! the pair `(label[i], label[i + p])` without comparing tuples. Relabelling then
//! merges positions that are still indistinguishable, and `p` doubles until every
//! suffix has its own label.
//!
//! Labels start at 1; positions past the end of the buffer read as 0, so a
//! suffix that runs out sorts before every longer suffix sharing its prefix.
//! This keeps the sorter correct on any buffer, with or without a terminator.
//!
//! Time: O(n) per round, O(n log n) overall
//! Space: four `u32` arrays of length n

use super::types::{MAX_BUFFER_LEN, SuffixEntry};
use crate::error::{IndexError, Result};

/// Build the suffix array of `buffer`
pub fn sort(buffer: &[u8]) -> Result<Vec<SuffixEntry>> {
    let n = buffer.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if n > MAX_BUFFER_LEN {
        return Err(IndexError::invalid(format!(
            "buffer of {} symbols exceeds the {} symbol limit",
            n, MAX_BUFFER_LEN
        )));
    }

    let mut sorter = RadixSorter::new(buffer);
    Ok(sorter.run())
}

struct RadixSorter {
    /// Current class label of each position
    labels: Vec<u32>,
    /// Scratch array for the next labels
    next_labels: Vec<u32>,
    /// Positions in sorted order
    order: Vec<SuffixEntry>,
    /// Scratch array for radix passes
    scratch: Vec<SuffixEntry>,
}

impl RadixSorter {
    fn new(buffer: &[u8]) -> Self {
        let n = buffer.len();
        Self {
            labels: buffer.iter().map(|&b| b as u32 + 1).collect(),
            next_labels: vec![0; n],
            order: (0..n as SuffixEntry).collect(),
            scratch: vec![0; n],
        }
    }

    fn run(&mut self) -> Vec<SuffixEntry> {
        let n = self.labels.len();

        // Raw symbols plus one fit in two bytes
        self.radix_pass(0, u8::MAX as u32 + 1);
        let mut max_label = self.relabel(0);

        let mut p = 1usize;
        while (max_label as usize) < n {
            self.radix_pass(p, max_label);
            self.radix_pass(0, max_label);
            max_label = self.relabel(p);
            p *= 2;
        }

        std::mem::take(&mut self.order)
    }

    /// Label of the suffix at `pos + offset`, 0 past the end
    #[inline]
    fn label_at(labels: &[u32], pos: SuffixEntry, offset: usize) -> u32 {
        labels.get(pos as usize + offset).copied().unwrap_or(0)
    }

    /// Stable sort of `order` by the label at `offset`
    ///
    /// Only as many byte passes run as `max_key` needs.
    fn radix_pass(&mut self, offset: usize, max_key: u32) {
        let mut shift = 0u32;
        while shift < u32::BITS && (max_key >> shift) != 0 {
            let mut count = [0usize; 257];
            for &pos in &self.order {
                let byte = (Self::label_at(&self.labels, pos, offset) >> shift) & 0xFF;
                count[byte as usize + 1] += 1;
            }
            for b in 0..256 {
                count[b + 1] += count[b];
            }
            for &pos in &self.order {
                let byte = ((Self::label_at(&self.labels, pos, offset) >> shift) & 0xFF) as usize;
                self.scratch[count[byte]] = pos;
                count[byte] += 1;
            }
            std::mem::swap(&mut self.order, &mut self.scratch);
            shift += 8;
        }
    }

    /// Assign new labels along the sorted order
    ///
    /// Neighbours keep a shared label only if both their label and their label
    /// at `offset` agree. Returns the number of distinct classes.
    fn relabel(&mut self, offset: usize) -> u32 {
        let mut label = 1u32;
        self.next_labels[self.order[0] as usize] = label;

        for w in 1..self.order.len() {
            let prev = self.order[w - 1];
            let cur = self.order[w];
            if self.labels[cur as usize] != self.labels[prev as usize]
                || Self::label_at(&self.labels, cur, offset)
                    != Self::label_at(&self.labels, prev, offset)
            {
                label += 1;
            }
            self.next_labels[cur as usize] = label;
        }

        std::mem::swap(&mut self.labels, &mut self.next_labels);
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_sort(buffer: &[u8]) -> Vec<SuffixEntry> {
        let mut sa: Vec<SuffixEntry> = (0..buffer.len() as SuffixEntry).collect();
        sa.sort_by(|&a, &b| buffer[a as usize..].cmp(&buffer[b as usize..]));
        sa
    }

    #[test]
    fn test_empty_buffer() {
        assert!(sort(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_symbol() {
        assert_eq!(sort(&[5]).unwrap(), vec![0]);
    }

    #[test]
    fn test_atat() {
        // ATAT + terminator
        assert_eq!(sort(&[0, 1, 0, 1, 4]).unwrap(), vec![0, 2, 1, 3, 4]);
    }

    #[test]
    fn test_banana() {
        let text = b"banana\x00";
        assert_eq!(sort(text).unwrap(), vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_without_terminator() {
        // Shorter suffixes sort first when one is a prefix of another
        let text = [0u8, 0, 0, 0];
        assert_eq!(sort(&text).unwrap(), vec![3, 2, 1, 0]);
        let text = b"abab";
        assert_eq!(sort(text).unwrap(), naive_sort(text));
    }

    #[test]
    fn test_wide_labels() {
        // Enough distinct suffixes to need multi-byte labels
        let text: Vec<u8> = (0..2000u32).map(|i| ((i * 7 + i / 13) % 4) as u8).collect();
        assert_eq!(sort(&text).unwrap(), naive_sort(&text));
    }

    #[test]
    fn test_matches_naive_on_repeats() {
        let text: Vec<u8> = b"ACGTACGTTACGACGTACGT$".to_vec();
        assert_eq!(sort(&text).unwrap(), naive_sort(&text));

        let homopolymer = vec![3u8; 300];
        assert_eq!(sort(&homopolymer).unwrap(), naive_sort(&homopolymer));
    }
}
