//! Static terrain mazes for multi-goal route planning.
//!
//! This crate provides the grid model consumed by `maze-paths`: geometry
//! primitives, the four movement actions, terrain classification, the
//! immutable [`Maze`] with its transition function, and the route verifier.

pub mod action;
pub mod error;
pub mod geom;
pub mod maze;
pub mod terrain;
pub mod verify;

pub use action::{Action, parse_actions};
pub use error::MazeError;
pub use geom::{Point, Range};
pub use maze::{Maze, Transition, Transitions};
pub use terrain::Terrain;
pub use verify::Verdict;
