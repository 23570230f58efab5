use std::collections::BinaryHeap;

use maze_core::{Action, Point, Range, Transition};

// ---------------------------------------------------------------------------
// Search tree nodes
// ---------------------------------------------------------------------------

/// One step of a search-tree path, stored in the per-search arena.
///
/// `parent` indexes into the same arena; the root has neither a parent nor
/// an action.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode {
    pub(crate) cell: Point,
    pub(crate) action: Option<Action>,
    pub(crate) parent: Option<usize>,
    pub(crate) g: i32,
    pub(crate) h: i32,
}

impl SearchNode {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Frontier entry, ordered by `(f, seq)` for use in `BinaryHeap`.
///
/// `seq` is the insertion counter, so nodes with equal `f` leave the
/// frontier in the order they entered it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) node: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        (other.f, other.seq).cmp(&(self.f, self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-cell bookkeeping, lazily invalidated by generation.
#[derive(Clone, Copy, Default)]
pub(crate) struct CellState {
    pub(crate) generation: u32,
    pub(crate) g: i32,
    pub(crate) closed: bool,
}

/// Counters for the most recent pair search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells closed (expanded).
    pub expanded: usize,
    /// Nodes pushed onto the frontier, the root included.
    pub generated: usize,
}

// ---------------------------------------------------------------------------
// PairSearch
// ---------------------------------------------------------------------------

/// Single-pair A* search over a grid rectangle.
///
/// `PairSearch` owns all scratch storage (node arena, frontier, per-cell
/// closed/best-cost state, transition buffer) so that the many pair queries
/// issued while building a [`CostTable`](crate::CostTable) incur no
/// allocations after the first one.
pub struct PairSearch {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) cells: Vec<CellState>,
    pub(crate) generation: u32,
    pub(crate) tbuf: Vec<Transition>,
    pub(crate) stats: SearchStats,
}

impl PairSearch {
    /// Create a new `PairSearch` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            cells: vec![CellState::default(); rng.len()],
            generation: 0,
            tbuf: Vec::with_capacity(4),
            stats: SearchStats::default(),
        }
    }

    /// Replace the underlying range.
    ///
    /// Cell state is kept when the new range fits in the existing storage;
    /// bumping the generation is enough to invalidate it.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= self.cells.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.cells.clear();
        self.cells.resize(new_len, CellState::default());
        self.generation = 0;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Counters for the last call to [`search`](Self::search).
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }
}
