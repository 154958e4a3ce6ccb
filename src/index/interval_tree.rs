//! LCP-interval tree (virtual suffix tree)
//!
//! Built bottom-up in a single left-to-right scan over the LCP array with an
//! explicit stack of open intervals. An interval closes when the scan reaches
//! an lcp value below its depth; the closing hook sees every interval exactly
//! once, children before parents, which is where element groups are mined.
//!
//! Nodes live in an arena in closing order (children first, root last).

use super::suffix_array::types::Interval;

/// A closed lcp-interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalNode {
    pub lcp: u32,
    pub left: u32,
    pub right: u32,
    /// Arena indices of child intervals, ordered by left bound
    pub children: Vec<u32>,
}

impl IntervalNode {
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.left, self.right)
    }
}

/// Arena of lcp-intervals with the root stored last
#[derive(Debug, Clone)]
pub struct IntervalTree {
    nodes: Vec<IntervalNode>,
}

struct OpenInterval {
    lcp: u32,
    left: u32,
    children: Vec<u32>,
}

impl IntervalTree {
    /// Build the tree from an LCP array
    ///
    /// `on_close` runs for every interval as it closes, root included.
    pub fn build<F>(lcptab: &[u32], mut on_close: F) -> Self
    where
        F: FnMut(&IntervalNode),
    {
        let n = lcptab.len();
        let mut nodes: Vec<IntervalNode> = Vec::new();
        let mut stack = vec![OpenInterval {
            lcp: 0,
            left: 0,
            children: Vec::new(),
        }];

        // One extra step with lcp 0 closes everything still open
        for i in 1..=n {
            let cur = if i < n { lcptab[i] } else { 0 };
            let mut left = (i - 1) as u32;
            let mut last: Option<u32> = None;

            while stack.len() > 1 && stack.last().is_some_and(|top| cur < top.lcp) {
                let Some(open) = stack.pop() else { break };
                let node = IntervalNode {
                    lcp: open.lcp,
                    left: open.left,
                    right: (i - 1) as u32,
                    children: open.children,
                };
                on_close(&node);
                left = node.left;

                let idx = nodes.len() as u32;
                nodes.push(node);

                match stack.last_mut() {
                    Some(top) if cur <= top.lcp => {
                        top.children.push(idx);
                        last = None;
                    }
                    _ => last = Some(idx),
                }
            }

            if stack.last().is_some_and(|top| cur > top.lcp) {
                stack.push(OpenInterval {
                    lcp: cur,
                    left,
                    children: last.take().into_iter().collect(),
                });
            }
        }

        let children = stack.pop().map(|open| open.children).unwrap_or_default();
        let root = IntervalNode {
            lcp: 0,
            left: 0,
            right: n.saturating_sub(1) as u32,
            children,
        };
        on_close(&root);
        nodes.push(root);

        Self { nodes }
    }

    /// Arena index of the root
    #[inline]
    pub fn root_index(&self) -> usize {
        self.nodes.len() - 1
    }

    #[inline]
    pub fn root(&self) -> &IntervalNode {
        &self.nodes[self.root_index()]
    }

    #[inline]
    pub fn node(&self, idx: u32) -> &IntervalNode {
        &self.nodes[idx as usize]
    }

    pub fn nodes(&self) -> &[IntervalNode] {
        &self.nodes
    }

    /// Number of intervals, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest interval in the tree
    pub fn max_lcp(&self) -> u32 {
        self.nodes.iter().map(|n| n.lcp).max().unwrap_or(0)
    }
}
