//! LCP array construction (Kasai et al.)

use super::types::SuffixEntry;

/// Inverse of the suffix array: `rank[suftab[i]] == i`
pub fn rank_array(suftab: &[SuffixEntry]) -> Vec<u32> {
    let mut rank = vec![0u32; suftab.len()];
    for (i, &pos) in suftab.iter().enumerate() {
        rank[pos as usize] = i as u32;
    }
    rank
}

/// Build the inverse suffix array and the LCP array
///
/// `lcptab[i]` is the common prefix length of the suffixes at `suftab[i - 1]`
/// and `suftab[i]`; `lcptab[0]` is 0. The shared prefix `h` drops by at most
/// one between consecutive text positions, so the scan does O(n) comparisons.
pub fn build_lcp(buffer: &[u8], suftab: &[SuffixEntry]) -> (Vec<u32>, Vec<u32>) {
    let n = buffer.len();
    let rank = rank_array(suftab);
    let mut lcptab = vec![0u32; n];

    let mut h = 0usize;
    for i in 0..n {
        let r = rank[i] as usize;
        if r > 0 {
            let k = suftab[r - 1] as usize;
            while i + h < n && k + h < n && buffer[i + h] == buffer[k + h] {
                h += 1;
            }
            lcptab[r] = h as u32;
            h = h.saturating_sub(1);
        } else {
            h = 0;
        }
    }

    (rank, lcptab)
}
