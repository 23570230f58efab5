//! Terrain classification of maze symbols.

/// What occupies a maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Impassable; never a valid state.
    Wall,
    /// Passable at cost 3.
    Mud,
    /// Passable at cost 1.
    #[default]
    Open,
}

impl Terrain {
    pub const WALL_SYMBOL: char = 'X';
    pub const MUD_SYMBOL: char = 'M';
    pub const OPEN_SYMBOL: char = '.';

    /// Classify a maze symbol. Anything that is neither a wall nor mud is open.
    #[inline]
    pub const fn from_symbol(ch: char) -> Self {
        match ch {
            Self::WALL_SYMBOL => Terrain::Wall,
            Self::MUD_SYMBOL => Terrain::Mud,
            _ => Terrain::Open,
        }
    }

    /// Canonical symbol for this terrain.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Terrain::Wall => Self::WALL_SYMBOL,
            Terrain::Mud => Self::MUD_SYMBOL,
            Terrain::Open => Self::OPEN_SYMBOL,
        }
    }

    /// Cost of moving onto a cell of this terrain, `None` for walls.
    #[inline]
    pub const fn entry_cost(self) -> Option<i32> {
        match self {
            Terrain::Wall => None,
            Terrain::Mud => Some(3),
            Terrain::Open => Some(1),
        }
    }

    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Wall)
    }
}
