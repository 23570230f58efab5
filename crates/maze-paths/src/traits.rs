use maze_core::{Point, Transition};

/// Minimal search interface: the outgoing moves of a cell.
///
/// [`CostTable`](crate::CostTable) prices a reversed path by replaying it,
/// so the reversal stays optimal only when a move's cost depends on the
/// cell entered and not on the direction. Moves without an opposite are
/// searched separately.
pub trait Pather {
    /// Append the legal moves out of `p` into `buf`. The caller clears `buf`
    /// before calling. Every cost must be > 0.
    fn transitions(&self, p: Point, buf: &mut Vec<Transition>);
}

/// Pather with an admissible, consistent heuristic for A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
