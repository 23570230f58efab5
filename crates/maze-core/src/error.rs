//! Errors raised while building a [`Maze`](crate::Maze) or parsing its inputs.

use std::fmt;

use crate::geom::Point;

/// Errors that can occur when constructing a maze or parsing maze inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The maze has no rows, or its rows are empty.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A border cell is not a wall.
    OpenBorder(Point),
    /// Coordinate text that is not of the form `x,y`.
    InvalidPoint(String),
    /// A character that does not name an action.
    InvalidAction(char),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has width {found}, expected {expected}"
            ),
            Self::OpenBorder(p) => write!(f, "maze: border cell {p} is not a wall"),
            Self::InvalidPoint(s) => write!(f, "invalid point \u{201c}{s}\u{201d}, expected x,y"),
            Self::InvalidAction(ch) => {
                write!(f, "invalid action \u{201c}{ch}\u{201d}, expected one of U, D, L, R")
            }
        }
    }
}

impl std::error::Error for MazeError {}
