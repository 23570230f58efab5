//! The four unit moves that label the edges of the maze graph.

use std::fmt;

use crate::error::MazeError;
use crate::geom::Point;

/// A unit move in one of the four cardinal directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions, in the order transitions are generated.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Coordinate delta applied by this action.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Action::Up => Point::new(0, -1),
            Action::Down => Point::new(0, 1),
            Action::Left => Point::new(-1, 0),
            Action::Right => Point::new(1, 0),
        }
    }

    /// The action that undoes this one.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }

    /// Cell reached by applying this action at `p`.
    #[inline]
    pub const fn apply(self, p: Point) -> Point {
        let d = self.delta();
        p.shift(d.x, d.y)
    }

    /// Single-letter form: `U`, `D`, `L` or `R`.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Action::Up => 'U',
            Action::Down => 'D',
            Action::Left => 'L',
            Action::Right => 'R',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Action {
    type Error = MazeError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch.to_ascii_uppercase() {
            'U' => Ok(Action::Up),
            'D' => Ok(Action::Down),
            'L' => Ok(Action::Left),
            'R' => Ok(Action::Right),
            _ => Err(MazeError::InvalidAction(ch)),
        }
    }
}

/// Parse an action string such as `"UURRD"`. Whitespace and commas are
/// ignored so that `"U, U, R"` parses as well.
pub fn parse_actions(s: &str) -> Result<Vec<Action>, MazeError> {
    s.chars()
        .filter(|ch| !ch.is_whitespace() && *ch != ',')
        .map(Action::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        let p = Point::new(3, 3);
        for a in Action::ALL {
            assert_eq!(a.opposite().opposite(), a);
            assert_ne!(a.opposite(), a);
            assert_eq!(a.opposite().apply(a.apply(p)), p);
        }
    }

    #[test]
    fn apply_moves_one_cell() {
        let p = Point::new(2, 2);
        assert_eq!(Action::Up.apply(p), Point::new(2, 1));
        assert_eq!(Action::Down.apply(p), Point::new(2, 3));
        assert_eq!(Action::Left.apply(p), Point::new(1, 2));
        assert_eq!(Action::Right.apply(p), Point::new(3, 2));
    }

    #[test]
    fn letters_parse_back() {
        let s: String = Action::ALL.iter().map(|a| a.letter()).collect();
        assert_eq!(s, "UDLR");
        assert_eq!(parse_actions(&s).unwrap(), Action::ALL.to_vec());
        assert_eq!(
            parse_actions("u, r").unwrap(),
            vec![Action::Up, Action::Right]
        );
    }

    #[test]
    fn bad_letter_is_rejected() {
        assert_eq!(parse_actions("UXD"), Err(MazeError::InvalidAction('X')));
    }
}
