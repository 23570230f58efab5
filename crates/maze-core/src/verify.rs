//! Replaying an action sequence against a maze.

use std::collections::HashSet;

use crate::action::Action;
use crate::geom::Point;
use crate::maze::Maze;

/// Outcome of replaying a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    /// Sum of the entry costs of every destination cell, or `-1` if the route
    /// walked into a wall.
    pub total_cost: i32,
    /// Whether every goal was visited.
    pub satisfied: bool,
}

impl Verdict {
    /// The route stepped onto an impassable cell.
    pub const BLOCKED: Self = Self {
        total_cost: -1,
        satisfied: false,
    };
}

impl Maze {
    /// Replay `actions` from `start`, accumulating the cost of each cell
    /// entered and tracking which goals were visited.
    ///
    /// Goals form a set: duplicates count once, and a goal equal to `start`
    /// is visited before the first move. The replay stops with
    /// [`Verdict::BLOCKED`] at the first wall (or out-of-bounds cell).
    pub fn verify(&self, actions: &[Action], start: Point, goals: &[Point]) -> Verdict {
        let mut remaining: HashSet<Point> = goals.iter().copied().collect();
        remaining.remove(&start);

        let mut cur = start;
        let mut total_cost = 0;
        for a in actions {
            cur = a.apply(cur);
            if !self.is_passable(cur) {
                return Verdict::BLOCKED;
            }
            total_cost += self.terrain_cost(cur).unwrap_or(1);
            remaining.remove(&cur);
        }

        Verdict {
            total_cost,
            satisfied: remaining.is_empty(),
        }
    }
}
