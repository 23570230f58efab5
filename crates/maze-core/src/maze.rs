//! The immutable terrain grid and its transition function.
//!
//! A [`Maze`] is parsed once from equal-width text rows (`X` wall, `M` mud,
//! anything else open) and never mutated afterwards. Construction validates
//! the shape and the wall border so that searches can never step outside the
//! bounds.

use std::fmt;
use std::str::FromStr;

use crate::action::Action;
use crate::error::MazeError;
use crate::geom::{Point, Range};
use crate::terrain::Terrain;

/// One move out of a cell: the action taken, the cost of entering the
/// destination, and the destination itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub cost: i32,
    pub to: Point,
}

/// A static, fully-known rectangular maze enclosed by walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Terrain>,
    bounds: Range,
}

impl Maze {
    /// Build a maze from text rows.
    ///
    /// Every row must have the same width and every border cell must be a
    /// wall.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let Some(first) = rows.first() else {
            return Err(MazeError::Empty);
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(line.as_ref().chars().map(Terrain::from_symbol));
            let found = cells.len() - before;
            if found != width {
                return Err(MazeError::InconsistentWidth {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        let maze = Self {
            cells,
            bounds: Range::new(0, 0, width as i32, rows.len() as i32),
        };
        if let Some(p) = maze
            .bounds
            .iter()
            .find(|&p| maze.bounds.on_border(p) && maze.cell(p).is_passable())
        {
            return Err(MazeError::OpenBorder(p));
        }
        Ok(maze)
    }

    /// The rectangle covered by the maze, with `(0, 0)` at the top left.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Terrain at `p`, or `None` if out of bounds.
    pub fn terrain(&self, p: Point) -> Option<Terrain> {
        self.bounds.contains(p).then(|| self.cell(p))
    }

    /// Whether `p` is inside the maze and not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.terrain(p).is_some_and(Terrain::is_passable)
    }

    /// Cost of entering `p`: 3 for mud, 1 otherwise. `None` if `p` is out of
    /// bounds.
    pub fn terrain_cost(&self, p: Point) -> Option<i32> {
        self.terrain(p).map(|t| t.entry_cost().unwrap_or(1))
    }

    /// Legal moves out of `p`, in `U`, `D`, `L`, `R` order. Walls are never
    /// produced as destinations. Out-of-bounds cells have no transitions.
    pub fn transitions(&self, p: Point) -> Transitions<'_> {
        Transitions {
            maze: self,
            from: p,
            next: if self.bounds.contains(p) {
                0
            } else {
                Action::ALL.len()
            },
        }
    }

    /// Draw the maze with a route overlaid: `*` for walked cells, `S` for the
    /// start and `G` for goals.
    pub fn render_route(&self, start: Point, actions: &[Action], goals: &[Point]) -> String {
        let mut glyphs: Vec<char> = self.cells.iter().map(|t| t.symbol()).collect();
        let mut put = |p: Point, ch: char| {
            if let Some(i) = self.index(p) {
                glyphs[i] = ch;
            }
        };
        let mut cur = start;
        for a in actions {
            cur = a.apply(cur);
            put(cur, '*');
        }
        put(start, 'S');
        for &g in goals {
            put(g, 'G');
        }

        let w = self.width() as usize;
        let mut out = String::with_capacity(glyphs.len() + self.height() as usize);
        for row in glyphs.chunks(w) {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.width() + p.x) as usize)
    }

    /// Terrain at an in-bounds point.
    #[inline]
    fn cell(&self, p: Point) -> Terrain {
        self.index(p).map_or(Terrain::Wall, |i| self.cells[i])
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parse newline-separated rows. Leading and trailing whitespace of the
    /// whole text is trimmed, as are trailing carriage returns.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().lines().map(|l| l.trim_end_matches('\r')).collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width() as usize;
        for (y, row) in self.cells.chunks(w).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t.symbol())?;
            }
        }
        Ok(())
    }
}

/// Iterator over the [`Transition`]s out of one cell.
#[derive(Clone, Debug)]
pub struct Transitions<'a> {
    maze: &'a Maze,
    from: Point,
    next: usize,
}

impl Iterator for Transitions<'_> {
    type Item = Transition;

    fn next(&mut self) -> Option<Transition> {
        while let Some(&action) = Action::ALL.get(self.next) {
            self.next += 1;
            let to = action.apply(self.from);
            if let Some(cost) = self.maze.terrain(to).and_then(Terrain::entry_cost) {
                return Some(Transition { action, cost, to });
            }
        }
        None
    }
}
