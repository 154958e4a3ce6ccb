//! Child and suffix-link tables
//!
//! The child table answers "which node do I reach from interval I by reading
//! symbol s next" in O(1) expected time. The suffix-link table maps the
//! interval of `aW` to the interval of `W`. Together they let a cursor walk
//! the virtual suffix tree without the per-node pointers of a real one.

use super::interval_tree::IntervalTree;
use super::suffix_array::types::{ChildKey, Interval, LcpNode, SuffixEntry};
use crate::error::{IndexError, Result};
use ahash::AHashMap;

/// `(interval, next symbol) -> child interval or leaf`
#[derive(Debug, Clone, Default)]
pub struct ChildTable {
    map: AHashMap<ChildKey, LcpNode>,
}

impl ChildTable {
    #[inline]
    pub fn get(&self, interval: Interval, symbol: u8) -> Option<&LcpNode> {
        self.map.get(&ChildKey::new(interval, symbol))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Interval of `aW` -> interval of `W`
#[derive(Debug, Clone, Default)]
pub struct SuffixLinkTable {
    map: AHashMap<Interval, LcpNode>,
}

impl SuffixLinkTable {
    #[inline]
    pub fn get(&self, interval: &Interval) -> Option<&LcpNode> {
        self.map.get(interval)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Build both tables from a finished interval tree
///
/// `rank` is the inverse suffix array; it is only needed here and may be
/// dropped afterwards.
pub fn build_tables(
    buffer: &[u8],
    suftab: &[SuffixEntry],
    rank: &[u32],
    tree: &IntervalTree,
) -> Result<(ChildTable, SuffixLinkTable)> {
    let n = buffer.len();
    let mut children = AHashMap::with_capacity(n + tree.len());
    let mut by_depth: Vec<Vec<Interval>> = vec![Vec::new(); tree.max_lcp() as usize + 1];

    // Preorder, leftmost child first: each depth list comes out sorted by left
    let mut stack = vec![tree.root_index() as u32];
    while let Some(idx) = stack.pop() {
        let node = tree.node(idx);
        by_depth[node.lcp as usize].push(node.interval());
        add_interval(buffer, suftab, tree, idx, &mut children)?;
        stack.extend(node.children.iter().rev());
    }

    let links = build_suffix_links(suftab, rank, &by_depth, tree.root().interval())?;

    Ok((ChildTable { map: children }, SuffixLinkTable { map: links }))
}

/// Symbol following the first `depth` symbols of the suffix at rank `k`
#[inline]
fn symbol_after(buffer: &[u8], suftab: &[SuffixEntry], k: u32, depth: u32) -> Result<u8> {
    let pos = suftab[k as usize] as usize + depth as usize;
    buffer.get(pos).copied().ok_or_else(|| {
        IndexError::invariant(format!(
            "suffix at rank {} ends inside an interval of depth {}",
            k, depth
        ))
    })
}

/// Entries for one interval: its children, and a leaf for every suffix
/// between them
fn add_interval(
    buffer: &[u8],
    suftab: &[SuffixEntry],
    tree: &IntervalTree,
    idx: u32,
    table: &mut AHashMap<ChildKey, LcpNode>,
) -> Result<()> {
    let node = tree.node(idx);
    let parent = node.interval();
    let n = buffer.len() as u32;

    let add_leaf = |k: u32, table: &mut AHashMap<ChildKey, LcpNode>| -> Result<()> {
        let symbol = symbol_after(buffer, suftab, k, node.lcp)?;
        let remaining = n - suftab[k as usize] - 1;
        table.insert(ChildKey::new(parent, symbol), LcpNode::new(k, k, remaining));
        Ok(())
    };

    let mut k = node.left;
    for &c in &node.children {
        let child = tree.node(c);
        while k < child.left {
            add_leaf(k, table)?;
            k += 1;
        }
        let symbol = symbol_after(buffer, suftab, child.left, node.lcp)?;
        table.insert(
            ChildKey::new(parent, symbol),
            LcpNode::new(child.left, child.right, child.lcp),
        );
        k = child.right + 1;
    }
    while k <= node.right {
        add_leaf(k, table)?;
        k += 1;
    }

    Ok(())
}

/// Resolve the suffix link of every interval by merging depth `d` against
/// depth `d - 1`
///
/// Shifting every suffix of an interval one position right keeps their order,
/// so the shifted interval is bounded by the shifted first and last suffix.
/// Both sides are sorted by left bound and the depth `d - 1` intervals are
/// disjoint, so one forward pass finds every container.
fn build_suffix_links(
    suftab: &[SuffixEntry],
    rank: &[u32],
    by_depth: &[Vec<Interval>],
    root: Interval,
) -> Result<AHashMap<Interval, LcpNode>> {
    let total: usize = by_depth.iter().map(Vec::len).sum();
    let mut links = AHashMap::with_capacity(total);
    links.insert(root, LcpNode::new(root.left, root.right, 0));

    let shifted_rank = |k: u32| -> Result<u32> {
        let pos = suftab[k as usize] as usize + 1;
        rank.get(pos).copied().ok_or_else(|| {
            IndexError::invariant(format!("suffix at rank {} has no shifted suffix", k))
        })
    };

    for depth in 1..by_depth.len() {
        let mut shifted = Vec::with_capacity(by_depth[depth].len());
        for &source in &by_depth[depth] {
            let target = Interval::new(shifted_rank(source.left)?, shifted_rank(source.right)?);
            shifted.push((target, source));
        }
        shifted.sort_unstable_by_key(|(target, _)| target.left);

        let parents = &by_depth[depth - 1];
        let mut j = 0;
        for (target, source) in shifted {
            while j < parents.len() && parents[j].right < target.left {
                j += 1;
            }
            match parents.get(j) {
                Some(parent) if parent.contains(&target) => {
                    links.insert(
                        source,
                        LcpNode::new(parent.left, parent.right, (depth - 1) as u32),
                    );
                }
                _ => {
                    return Err(IndexError::invariant(format!(
                        "no depth {} interval contains [{}, {}], the link target of [{}, {}]",
                        depth - 1,
                        target.left,
                        target.right,
                        source.left,
                        source.right
                    )));
                }
            }
        }
    }

    Ok(links)
}
