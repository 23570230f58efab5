use maze_core::{Action, Point, Transition};

use crate::traits::Pather;

/// The optimal route between two cells: its total cost and the actions that
/// realize it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairPath {
    pub cost: i32,
    pub actions: Vec<Action>,
}

impl PairPath {
    /// The same cells walked the other way: actions in reverse order and
    /// each replaced by its opposite. The cost is copied as is; use
    /// [`rescored_reversal`](Self::rescored_reversal) when moves are priced
    /// by the cell entered.
    pub fn reversed(&self) -> Self {
        Self {
            cost: self.cost,
            actions: self.actions.iter().rev().map(|a| a.opposite()).collect(),
        }
    }

    /// Reverse a path that ends at `end` and price the reversed walk on
    /// `pather`.
    ///
    /// With entry costs the reversed walk pays for the original start cell
    /// instead of `end`, so its cost is
    /// `cost - entry(end) + entry(start)`. Returns `None` if `pather` does
    /// not offer one of the reversed moves.
    pub fn rescored_reversal<P: Pather>(
        &self,
        pather: &P,
        end: Point,
        buf: &mut Vec<Transition>,
    ) -> Option<Self> {
        let mut back = self.reversed();
        let mut cur = end;
        let mut cost = 0;
        for &a in &back.actions {
            buf.clear();
            pather.transitions(cur, buf);
            let t = buf.iter().find(|t| t.action == a)?;
            cost += t.cost;
            cur = t.to;
        }
        back.cost = cost;
        Some(back)
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
