//! Optimal multi-goal route planning on terrain mazes.
//!
//! Given a start cell and a set of goal cells, this crate finds a
//! minimum-cost sequence of unit moves that visits every goal at least once,
//! in any order. It works in two layers:
//!
//! - **Pair search** ([`PairSearch`]): A\* with the Manhattan estimate
//!   between two cells, returning the optimal cost and action sequence.
//! - **Route planning** ([`RoutePlanner`]): a pairwise [`CostTable`] over
//!   `{start} ∪ goals`, an exact choice of visiting order, and assembly of the
//!   stored pair paths into one route.
//!
//! The two entry points for [`Maze`](maze_core::Maze) callers are
//! [`plan_route`] and [`verify_route`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | transition enumeration |
//! | [`AstarPather`] : [`Pather`] | [`PairSearch`], [`RoutePlanner`] |

mod astar;
mod config;
mod distance;
mod error;
mod maze;
mod order;
mod path;
mod planner;
mod search;
mod table;
mod traits;

pub use config::{DEFAULT_MAX_GOALS, HELD_KARP_MAX_GOALS, OrderStrategy, PlannerConfig};
pub use distance::manhattan;
pub use error::PlanError;
pub use maze::{plan_route, plan_route_with, verify_route};
pub use path::PairPath;
pub use planner::{Route, RoutePlanner};
pub use search::{PairSearch, SearchStats};
pub use table::CostTable;
pub use traits::{AstarPather, Pather};

#[cfg(test)]
pub(crate) mod testutil;
