//! Maximal-match search
//!
//! One left-to-right pass over the query computes, for every start position,
//! the longest prefix of the remaining query that occurs in the buffer. After
//! each start the cursor follows a suffix link and rescans instead of going
//! back to the root, so the pass is linear in the query length. Occurrences
//! are then enumerated from the suffix array around each match interval.

use crate::error::{IndexError, Result};
use crate::index::suffix_array::types::{Interval, TextPosition};
use crate::index::suffix_index::SuffixIndex;
use crate::query::cursor::Cursor;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One occurrence of a query substring in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Where the match starts in the query
    pub query_position: u32,
    /// Where it starts in the symbol buffer
    pub source_position: TextPosition,
    pub length: u32,
}

impl MatchRecord {
    /// Query order, longest first, then buffer order
    pub fn search_order(&self, other: &Self) -> Ordering {
        self.query_position
            .cmp(&other.query_position)
            .then(other.length.cmp(&self.length))
            .then(self.source_position.cmp(&other.source_position))
    }
}

/// Longest match found for one query start
#[derive(Debug, Clone, Copy)]
struct MaximalMatch {
    query_position: u32,
    interval: Interval,
    length: u32,
}

pub struct Searcher<'a> {
    index: &'a SuffixIndex,
    cursor: Cursor<'a>,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a SuffixIndex) -> Self {
        Self {
            index,
            cursor: Cursor::new(index),
        }
    }

    /// Every occurrence of every query substring that is at least `min_len`
    /// long and starts where a maximal match of at least `min_len` starts
    ///
    /// Records are sorted by query position, then by descending length, then
    /// by source position.
    pub fn search(&mut self, query: &[u8], min_len: usize) -> Result<Vec<MatchRecord>> {
        if min_len == 0 {
            return Err(IndexError::invalid("minimum match length must be positive"));
        }
        check_query_len(query)?;

        let mut maximal = Vec::new();
        self.scan(query, |start, interval, matched| {
            if matched >= min_len {
                maximal.push(MaximalMatch {
                    query_position: start as u32,
                    interval,
                    length: matched as u32,
                });
            }
        })?;

        let mut records = Vec::new();
        for m in &maximal {
            self.enumerate(m, min_len as u32, &mut records);
        }
        records.sort_unstable_by(MatchRecord::search_order);
        Ok(records)
    }

    /// Length of the longest match starting at every query position
    pub fn matching_statistics(&mut self, query: &[u8]) -> Result<Vec<u32>> {
        check_query_len(query)?;
        let mut lengths = vec![0u32; query.len()];
        self.scan(query, |start, _, matched| lengths[start] = matched as u32)?;
        Ok(lengths)
    }

    /// Drive the cursor over the query, reporting `(start, interval, length)`
    /// of the longest match at every start
    fn scan<F>(&mut self, query: &[u8], mut visit: F) -> Result<()>
    where
        F: FnMut(usize, Interval, usize),
    {
        self.cursor.reset();
        let m = query.len();
        let mut matched = 0usize;

        for start in 0..m {
            while start + matched < m && self.cursor.descend(query[start + matched], matched) {
                matched += 1;
            }
            visit(start, self.cursor.interval(), matched);

            if matched == 0 {
                continue;
            }
            self.cursor.follow_link()?;
            matched -= 1;
            self.cursor.rescan(query, start + 1, matched)?;
        }

        Ok(())
    }

    /// Emit every occurrence of one maximal match
    ///
    /// Suffixes inside the interval share the full length. Neighbours outside
    /// it share a shorter prefix, bounded by the running minimum of the LCP
    /// values crossed, and are kept while that stays at least `min_len`.
    fn enumerate(&self, m: &MaximalMatch, min_len: u32, out: &mut Vec<MatchRecord>) {
        let suftab = self.index.suftab();
        let lcptab = self.index.lcptab();
        let record = |k: usize, length: u32| MatchRecord {
            query_position: m.query_position,
            source_position: suftab[k],
            length,
        };

        let (left, right) = (m.interval.left as usize, m.interval.right as usize);
        out.extend((left..=right).map(|k| record(k, m.length)));

        let mut run = m.length;
        for k in (0..left).rev() {
            run = run.min(lcptab[k + 1]);
            if run < min_len {
                break;
            }
            out.push(record(k, run));
        }

        let mut run = m.length;
        for k in right + 1..suftab.len() {
            run = run.min(lcptab[k]);
            if run < min_len {
                break;
            }
            out.push(record(k, run));
        }
    }
}

fn check_query_len(query: &[u8]) -> Result<()> {
    if query.len() > u32::MAX as usize {
        return Err(IndexError::invalid(format!(
            "query of {} symbols exceeds the u32 position range",
            query.len()
        )));
    }
    Ok(())
}
