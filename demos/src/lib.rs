//! Shared plumbing for the `mazeroute` command-line tool.
//!
//! Loads a maze file and an optional planner configuration, and formats the
//! planned route together with the verifier's verdict.

use std::fmt;
use std::path::{Path, PathBuf};

use maze_core::{Maze, MazeError, Point, Verdict};
use maze_paths::{PlanError, PlannerConfig, Route};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that can stop the tool before a plan is printed.
#[derive(Debug)]
pub enum DemoError {
    /// A file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The maze file did not describe a valid maze.
    Maze { path: PathBuf, source: MazeError },
    /// The configuration file was not valid JSON for [`PlannerConfig`].
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The planner rejected the request.
    Plan(PlanError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Maze { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Config { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Plan(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Maze { source, .. } => Some(source),
            Self::Config { source, .. } => Some(source),
            Self::Plan(e) => Some(e),
        }
    }
}

impl From<PlanError> for DemoError {
    fn from(e: PlanError) -> Self {
        Self::Plan(e)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

fn read(path: &Path) -> Result<String, DemoError> {
    std::fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a maze file: one row per line, `X` wall, `M` mud.
pub fn load_maze(path: &Path) -> Result<Maze, DemoError> {
    let maze: Maze = read(path)?.parse().map_err(|source| DemoError::Maze {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = maze.width(),
        height = maze.height(),
        "loaded maze"
    );
    Ok(maze)
}

/// Parse a JSON planner configuration. Missing fields take their defaults.
pub fn parse_config(text: &str) -> Result<PlannerConfig, serde_json::Error> {
    serde_json::from_str(text)
}

/// Read a planner configuration file, see [`parse_config`].
pub fn load_config(path: &Path) -> Result<PlannerConfig, DemoError> {
    let config = parse_config(&read(path)?).map_err(|source| DemoError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?config, "loaded planner config");
    Ok(config)
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Human-readable summary of a planned route, followed by the maze with the
/// route drawn over it.
pub struct Report<'a> {
    pub maze: &'a Maze,
    pub start: Point,
    pub goals: &'a [Point],
    pub route: &'a Route,
    pub verdict: Verdict,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let route = self.route;
        write!(f, "order:  ")?;
        for (i, p) in route.order.iter().enumerate() {
            write!(f, "{}{p}", if i == 0 { " " } else { " -> " })?;
        }
        writeln!(f)?;
        writeln!(f, "actions: {}", route.action_string())?;
        writeln!(f, "moves:   {}", route.actions.len())?;
        writeln!(f, "cost:    {}", route.cost)?;
        writeln!(
            f,
            "verdict: cost {}, {}",
            self.verdict.total_cost,
            if self.verdict.satisfied {
                "all goals visited"
            } else {
                "goals missed"
            }
        )?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            self.maze
                .render_route(self.start, &route.actions, self.goals)
        )
    }
}
