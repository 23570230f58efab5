use maze_core::Point;

use crate::path::PairPath;
use crate::search::{NodeRef, PairSearch, SearchNode, SearchStats};
use crate::traits::AstarPather;

impl PairSearch {
    /// Compute the cheapest route from `from` to `to` using A*.
    ///
    /// Returns the route cost and its actions, or `None` if `to` cannot be
    /// reached (or either cell is outside the current range). When
    /// `from == to` the route is empty with cost 0.
    pub fn search<P: AstarPather>(&mut self, pather: &P, from: Point, to: Point) -> Option<PairPath> {
        self.stats = SearchStats::default();
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(PairPath::default());
        }

        // Bump generation to lazily invalidate all cell state.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        self.nodes.clear();
        self.open.clear();
        let mut seq: u64 = 0;

        // Initialise the root.
        let root = SearchNode {
            cell: from,
            action: None,
            parent: None,
            g: 0,
            h: pather.estimate(from, to),
        };
        self.open.push(NodeRef {
            node: 0,
            f: root.f(),
            seq,
        });
        seq += 1;
        self.nodes.push(root);
        self.cells[start_idx].generation = cur_gen;
        self.cells[start_idx].g = 0;
        self.cells[start_idx].closed = false;
        self.stats.generated = 1;

        let mut tbuf = std::mem::take(&mut self.tbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search None;
            };

            let SearchNode { cell, g, .. } = self.nodes[current.node];
            let Some(ci) = self.idx(cell) else {
                continue;
            };

            // Skip entries for cells already closed via a cheaper node.
            if self.cells[ci].closed {
                continue;
            }

            if ci == goal_idx {
                break 'search Some(current.node);
            }

            self.cells[ci].closed = true;
            self.stats.expanded += 1;

            tbuf.clear();
            pather.transitions(cell, &mut tbuf);

            for t in tbuf.iter() {
                let Some(ni) = self.idx(t.to) else {
                    continue;
                };
                let tentative_g = g + t.cost;

                let st = &mut self.cells[ni];
                if st.generation == cur_gen {
                    if st.closed || tentative_g >= st.g {
                        continue;
                    }
                } else {
                    st.generation = cur_gen;
                    st.closed = false;
                }
                st.g = tentative_g;

                let node = SearchNode {
                    cell: t.to,
                    action: Some(t.action),
                    parent: Some(current.node),
                    g: tentative_g,
                    h: pather.estimate(t.to, to),
                };
                self.open.push(NodeRef {
                    node: self.nodes.len(),
                    f: node.f(),
                    seq,
                });
                seq += 1;
                self.nodes.push(node);
                self.stats.generated += 1;
            }
        };

        self.tbuf = tbuf;

        log::trace!(
            "pair search {from} -> {to}: expanded {}, generated {}, {}",
            self.stats.expanded,
            self.stats.generated,
            if found.is_some() { "found" } else { "unreachable" }
        );

        let goal_node = found?;

        // Reconstruct the action sequence by walking parent links.
        let cost = self.nodes[goal_node].g;
        let mut actions = Vec::new();
        let mut cur = Some(goal_node);
        while let Some(ni) = cur {
            let node = &self.nodes[ni];
            if let Some(a) = node.action {
                actions.push(a);
            }
            cur = node.parent;
        }
        actions.reverse();
        Some(PairPath { cost, actions })
    }
}
