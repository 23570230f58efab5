//! Entry points for [`Maze`] callers.

use maze_core::{Action, Maze, Point, Transition, Verdict};

use crate::config::PlannerConfig;
use crate::distance::manhattan;
use crate::error::PlanError;
use crate::planner::{Route, RoutePlanner};
use crate::traits::{AstarPather, Pather};

impl Pather for Maze {
    fn transitions(&self, p: Point, buf: &mut Vec<Transition>) {
        buf.extend(Maze::transitions(self, p));
    }
}

/// Every move costs at least 1, so the Manhattan distance never
/// overestimates.
impl AstarPather for Maze {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Plan a minimum-cost route from `start` visiting every goal, with the
/// default [`PlannerConfig`].
///
/// `Ok(None)` means no route exists. Start and goals must be passable cells
/// of the maze.
pub fn plan_route(maze: &Maze, start: Point, goals: &[Point]) -> Result<Option<Route>, PlanError> {
    plan_route_with(maze, start, goals, PlannerConfig::default())
}

/// [`plan_route`] with explicit settings.
pub fn plan_route_with(
    maze: &Maze,
    start: Point,
    goals: &[Point],
    config: PlannerConfig,
) -> Result<Option<Route>, PlanError> {
    for &p in std::iter::once(&start).chain(goals) {
        match maze.terrain(p) {
            None => return Err(PlanError::OutOfBounds(p)),
            Some(t) if !t.is_passable() => return Err(PlanError::Blocked(p)),
            Some(_) => {}
        }
    }
    RoutePlanner::new(maze.bounds(), config).plan(maze, start, goals)
}

/// Replay `actions` from `start` and report the cost and whether every goal
/// was visited. See [`Maze::verify`].
pub fn verify_route(maze: &Maze, actions: &[Action], start: Point, goals: &[Point]) -> Verdict {
    maze.verify(actions, start, goals)
}
