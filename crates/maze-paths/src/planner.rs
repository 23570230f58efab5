use maze_core::{Action, Point, Range};

use crate::config::{OrderStrategy, PlannerConfig};
use crate::error::PlanError;
use crate::order;
use crate::search::PairSearch;
use crate::table::CostTable;
use crate::traits::AstarPather;

/// A minimum-cost route visiting every goal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// The start followed by the goals in visiting order.
    pub order: Vec<Point>,
    /// Every move from the start to the last goal.
    pub actions: Vec<Action>,
    /// Sum of the entry costs of every cell entered.
    pub cost: i32,
}

impl Route {
    /// The actions as a letter string such as `"UURRD"`.
    pub fn action_string(&self) -> String {
        self.actions.iter().map(|a| a.letter()).collect()
    }
}

/// Exact multi-goal planner.
///
/// Builds a [`CostTable`] over `[start, goals...]` with pairwise A*, picks
/// the cheapest visiting order with the configured [`OrderStrategy`], and
/// concatenates the stored pair paths. The [`PairSearch`] scratch space is
/// kept between calls.
pub struct RoutePlanner {
    config: PlannerConfig,
    search: PairSearch,
}

impl RoutePlanner {
    /// Create a planner for mazes covering `bounds`.
    pub fn new(bounds: Range, config: PlannerConfig) -> Self {
        Self {
            config,
            search: PairSearch::new(bounds),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Replace the grid rectangle, e.g. before planning on a different maze.
    pub fn set_range(&mut self, bounds: Range) {
        self.search.set_range(bounds);
    }

    /// Plan a route from `start` through every cell in `goals`.
    ///
    /// Returns `Ok(None)` when some goal cannot be reached from the start;
    /// no partial route is ever returned. Goals may repeat or coincide with
    /// the start; such pairs simply cost nothing.
    ///
    /// Only the range is checked here: a [`Pather`](crate::Pather) cannot
    /// tell whether a cell is itself passable, so a start on a wall is
    /// searched out of like any other cell. [`plan_route`](crate::plan_route)
    /// rejects walls with [`PlanError::Blocked`] before planning.
    ///
    /// The goal count is limited by [`PlannerConfig::goal_limit`].
    pub fn plan<P: AstarPather>(
        &mut self,
        pather: &P,
        start: Point,
        goals: &[Point],
    ) -> Result<Option<Route>, PlanError> {
        if goals.is_empty() {
            return Err(PlanError::NoGoals);
        }
        let limit = self.config.goal_limit();
        if goals.len() > limit {
            return Err(PlanError::TooManyGoals {
                count: goals.len(),
                max: limit,
            });
        }
        let bounds = self.search.range();
        if let Some(&p) = std::iter::once(&start)
            .chain(goals)
            .find(|&&p| !bounds.contains(p))
        {
            return Err(PlanError::OutOfBounds(p));
        }

        let mut vertices = Vec::with_capacity(goals.len() + 1);
        vertices.push(start);
        vertices.extend_from_slice(goals);

        let Some(table) = CostTable::build(&mut self.search, pather, &vertices) else {
            log::debug!("plan from {start}: {} goals, unreachable", goals.len());
            return Ok(None);
        };

        let (order, cost) = match self.config.strategy {
            OrderStrategy::Permutation => order::best_permutation(&table),
            OrderStrategy::HeldKarp => order::held_karp(&table),
        };

        let mut actions = Vec::new();
        for w in order.windows(2) {
            if let Some(leg) = table.path(w[0], w[1]) {
                actions.extend_from_slice(&leg.actions);
            }
        }

        let order: Vec<Point> = order.iter().map(|&i| table.vertex(i)).collect();
        log::debug!(
            "plan from {start}: {} goals, cost {cost}, {} moves",
            goals.len(),
            actions.len()
        );
        Ok(Some(Route {
            order,
            actions,
            cost,
        }))
    }
}
