//! Choosing the order in which to visit the goals of a [`CostTable`].
//!
//! Vertex 0 of the table is the start and always comes first. Both
//! strategies are exact; they differ only in running time and in which of
//! several equally cheap orders they return.

use crate::table::CostTable;

/// Exhaustive search over every ordering of vertices `1..k`, in
/// lexicographic order. The first ordering reaching the minimum wins.
///
/// `O((k-1)!)` orderings, each summed in `O(k)`.
pub(crate) fn best_permutation(table: &CostTable) -> (Vec<usize>, i32) {
    let k = table.len();
    let mut order: Vec<usize> = (0..k).collect();
    let mut best = order.clone();
    let mut best_cost = table.order_cost(&order);
    let mut evaluated: u64 = 1;

    if k > 2 {
        while next_permutation(&mut order[1..]) {
            evaluated += 1;
            let cost = table.order_cost(&order);
            if cost < best_cost {
                best_cost = cost;
                best.copy_from_slice(&order);
            }
        }
    }

    log::debug!("permutation order: {evaluated} orderings evaluated, best cost {best_cost}");
    (best, best_cost)
}

/// Rearrange `xs` into the next lexicographically greater permutation.
/// Returns `false` (leaving `xs` untouched) when it is already the last.
fn next_permutation(xs: &mut [usize]) -> bool {
    if xs.len() < 2 {
        return false;
    }
    let Some(i) = (0..xs.len() - 1).rev().find(|&i| xs[i] < xs[i + 1]) else {
        return false;
    };
    let Some(j) = (i + 1..xs.len()).rev().find(|&j| xs[j] > xs[i]) else {
        return false;
    };
    xs.swap(i, j);
    xs[i + 1..].reverse();
    true
}

/// Held–Karp dynamic program over subsets of goals.
///
/// `best[mask][last]` is the cheapest walk that starts at vertex 0, visits
/// exactly the goals in `mask` and ends at goal `last`. Goal `g` (vertex
/// `g + 1`) is bit `g`. Ties prefer the lowest predecessor and the lowest
/// final goal. `O(k² · 2^k)` time, `O(k · 2^k)` space.
pub(crate) fn held_karp(table: &CostTable) -> (Vec<usize>, i32) {
    let n = table.len().saturating_sub(1);
    if n == 0 {
        return ((0..table.len()).collect(), 0);
    }

    let full = (1usize << n) - 1;
    let mut best = vec![i32::MAX; (full + 1) * n];
    let mut parent = vec![usize::MAX; (full + 1) * n];
    let at = |mask: usize, last: usize| mask * n + last;

    for g in 0..n {
        best[at(1 << g, g)] = table.leg(0, g + 1);
    }

    for mask in 1..=full {
        for last in 0..n {
            if mask & (1 << last) == 0 {
                continue;
            }
            let prev_mask = mask & !(1 << last);
            if prev_mask == 0 {
                continue;
            }
            let mut cur = i32::MAX;
            let mut from = usize::MAX;
            for prev in 0..n {
                if prev_mask & (1 << prev) == 0 {
                    continue;
                }
                let base = best[at(prev_mask, prev)];
                if base == i32::MAX {
                    continue;
                }
                let cost = base + table.leg(prev + 1, last + 1);
                if cost < cur {
                    cur = cost;
                    from = prev;
                }
            }
            best[at(mask, last)] = cur;
            parent[at(mask, last)] = from;
        }
    }

    let mut last = 0;
    for g in 1..n {
        if best[at(full, g)] < best[at(full, last)] {
            last = g;
        }
    }
    let total = best[at(full, last)];

    let mut order = Vec::with_capacity(n + 1);
    let mut mask = full;
    let mut cur = last;
    while cur != usize::MAX {
        order.push(cur + 1);
        let prev = parent[at(mask, cur)];
        mask &= !(1 << cur);
        cur = prev;
    }
    order.push(0);
    order.reverse();

    log::debug!("held-karp order: {} subsets, best cost {total}", full + 1);
    (order, total)
}

#[cfg(test)]
mod tests {
    use maze_core::Point;

    use super::*;
    use crate::path::PairPath;
    use crate::search::PairSearch;
    use crate::testutil;

    /// A table with the given symmetric costs and no actions.
    fn table(costs: &[&[i32]]) -> CostTable {
        let k = costs.len();
        let mut entries = vec![None; k * k];
        for i in 0..k {
            for j in 0..k {
                if i != j {
                    assert_eq!(costs[i][j], costs[j][i]);
                    entries[i * k + j] = Some(PairPath {
                        cost: costs[i][j],
                        actions: Vec::new(),
                    });
                }
            }
        }
        CostTable {
            vertices: (0..k as i32).map(|x| Point::new(x, 0)).collect(),
            entries,
        }
    }

    fn all_orders(k: usize) -> Vec<Vec<usize>> {
        let mut order: Vec<usize> = (0..k).collect();
        let mut out = vec![order.clone()];
        while next_permutation(&mut order[1..]) {
            out.push(order.clone());
        }
        out
    }

    #[test]
    fn next_permutation_is_lexicographic() {
        let mut xs = [1, 2, 3];
        let mut seen = vec![xs.to_vec()];
        while next_permutation(&mut xs) {
            seen.push(xs.to_vec());
        }
        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
        assert_eq!(xs, [3, 2, 1]);
        assert!(!next_permutation(&mut []));
        assert!(!next_permutation(&mut [7]));
    }

    #[test]
    fn start_stays_first() {
        let orders = all_orders(5);
        assert_eq!(orders.len(), 24);
        assert!(orders.iter().all(|o| o[0] == 0));
    }

    #[test]
    fn single_goal() {
        let t = table(&[&[0, 7], &[7, 0]]);
        assert_eq!(best_permutation(&t), (vec![0, 1], 7));
        assert_eq!(held_karp(&t), (vec![0, 1], 7));
    }

    #[test]
    fn line_is_walked_end_to_end() {
        // Vertices on a line at x = 0, 5, 1, 3.
        let xs: [i32; 4] = [0, 5, 1, 3];
        let rows: Vec<Vec<i32>> = xs
            .iter()
            .map(|a| xs.iter().map(|b| (a - b).abs()).collect())
            .collect();
        let refs: Vec<&[i32]> = rows.iter().map(|r| r.as_slice()).collect();
        let t = table(&refs);
        assert_eq!(best_permutation(&t), (vec![0, 2, 3, 1], 5));
        assert_eq!(held_karp(&t), (vec![0, 2, 3, 1], 5));
    }

    #[test]
    fn first_minimum_wins_ties() {
        // Every goal is 1 from the start and 2 from each other.
        let t = table(&[&[0, 1, 1, 1], &[1, 0, 2, 2], &[1, 2, 0, 2], &[1, 2, 2, 0]]);
        assert_eq!(best_permutation(&t), (vec![0, 1, 2, 3], 5));
        assert_eq!(held_karp(&t).1, 5);
    }

    #[test]
    fn permutation_matches_exhaustive_minimum() {
        let t = table(&[
            &[0, 4, 9, 3, 7],
            &[4, 0, 2, 8, 6],
            &[9, 2, 0, 5, 1],
            &[3, 8, 5, 0, 4],
            &[7, 6, 1, 4, 0],
        ]);
        let min = all_orders(5).iter().map(|o| t.order_cost(o)).min().unwrap();
        let (order, cost) = best_permutation(&t);
        assert_eq!(cost, min);
        assert_eq!(t.order_cost(&order), cost);
        let (hk_order, hk_cost) = held_karp(&t);
        assert_eq!(hk_cost, min);
        assert_eq!(t.order_cost(&hk_order), hk_cost);
    }

    #[test]
    fn strategies_agree_on_random_mazes() {
        for seed in 300..320 {
            let m = testutil::random_maze(seed, 12, 9);
            let cells = testutil::open_cells(&m);
            if cells.len() < 6 {
                continue;
            }
            let step = cells.len() / 6;
            let vertices: Vec<Point> = cells.iter().step_by(step).take(6).copied().collect();
            let mut ps = PairSearch::new(m.bounds());
            let Some(t) = CostTable::build(&mut ps, &m, &vertices) else {
                continue;
            };
            let (p_order, p_cost) = best_permutation(&t);
            let (h_order, h_cost) = held_karp(&t);
            assert_eq!(p_cost, h_cost, "seed {seed}");
            assert_eq!(t.order_cost(&p_order), p_cost);
            assert_eq!(t.order_cost(&h_order), h_cost);
            let mut sorted = h_order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..6).collect::<Vec<_>>());
            assert_eq!(
                Some(p_cost),
                testutil::brute_force_route_cost(&m, vertices[0], &vertices[1..]),
                "seed {seed}"
            );
        }
    }
}
