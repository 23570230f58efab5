use maze_core::Point;

use crate::path::PairPath;
use crate::search::PairSearch;
use crate::traits::AstarPather;

/// Optimal pairwise routes among a small vertex list `[start, goal1, ...]`.
///
/// Only the upper triangle is searched; each `[j][i]` entry is the reversal
/// of `[i][j]`, so both directions always describe the same physical path.
/// The reversed walk is priced again on the pather, since entering the two
/// endpoints may cost differently. The diagonal holds no entry.
#[derive(Clone, Debug)]
pub struct CostTable {
    pub(crate) vertices: Vec<Point>,
    pub(crate) entries: Vec<Option<PairPath>>,
}

impl CostTable {
    /// Search every pair of `vertices` with `search`.
    ///
    /// Returns `None` as soon as one pair is unreachable; the remaining pairs
    /// are not searched.
    pub fn build<P: AstarPather>(
        search: &mut PairSearch,
        pather: &P,
        vertices: &[Point],
    ) -> Option<Self> {
        let k = vertices.len();
        let mut entries = vec![None; k * k];
        let mut searched = 0;
        let mut buf = Vec::with_capacity(4);

        for i in 0..k {
            for j in (i + 1)..k {
                let Some(path) = search.search(pather, vertices[i], vertices[j]) else {
                    log::debug!(
                        "cost table: {} -> {} unreachable after {searched} searches",
                        vertices[i],
                        vertices[j]
                    );
                    return None;
                };
                let back = match path.rescored_reversal(pather, vertices[j], &mut buf) {
                    Some(back) => back,
                    // The pather has one-way moves; search the other way too.
                    None => {
                        searched += 1;
                        search.search(pather, vertices[j], vertices[i])?
                    }
                };
                entries[j * k + i] = Some(back);
                entries[i * k + j] = Some(path);
                searched += 1;
            }
        }

        log::debug!("cost table: {k} vertices, {searched} searches");
        Some(Self {
            vertices: vertices.to_vec(),
            entries,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertex at index `i`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Route from vertex `i` to vertex `j`; `None` on the diagonal or for an
    /// index past the end.
    pub fn path(&self, i: usize, j: usize) -> Option<&PairPath> {
        let k = self.len();
        if i >= k || j >= k {
            return None;
        }
        self.entries[i * k + j].as_ref()
    }

    /// Cost from vertex `i` to vertex `j`; `None` on the diagonal.
    pub fn cost(&self, i: usize, j: usize) -> Option<i32> {
        self.path(i, j).map(|p| p.cost)
    }

    /// Cost of an off-diagonal pair, 0 on the diagonal.
    #[inline]
    pub(crate) fn leg(&self, i: usize, j: usize) -> i32 {
        self.cost(i, j).unwrap_or(0)
    }

    /// Total cost of visiting vertices in `order`.
    pub(crate) fn order_cost(&self, order: &[usize]) -> i32 {
        order.windows(2).map(|w| self.leg(w[0], w[1])).sum()
    }
}
