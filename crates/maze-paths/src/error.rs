use std::fmt;

use maze_core::Point;

/// Caller-side contract violations detected before planning.
///
/// An unreachable goal is not an error: planners report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// No goal cells were supplied.
    NoGoals,
    /// A start or goal cell lies outside the maze.
    OutOfBounds(Point),
    /// A start or goal cell is a wall.
    Blocked(Point),
    /// More goals than the configured ceiling.
    TooManyGoals { count: usize, max: usize },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGoals => write!(f, "plan: at least one goal is required"),
            Self::OutOfBounds(p) => write!(f, "plan: cell {p} is outside the maze"),
            Self::Blocked(p) => write!(f, "plan: cell {p} is a wall"),
            Self::TooManyGoals { count, max } => {
                write!(f, "plan: {count} goals exceeds the limit of {max}")
            }
        }
    }
}

impl std::error::Error for PlanError {}
