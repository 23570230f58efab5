//! Shared fixtures and independent oracles for the planner tests.

use std::collections::HashMap;

use maze_core::{Maze, Point, Range};
use rand::{Rng, SeedableRng};

pub(crate) const CORRIDORS: [&str; 5] = ["XXXXXXX", "X.....X", "X.M.M.X", "X.X.X.X", "XXXXXXX"];

pub(crate) const MUDDY: [&str; 5] = ["XXXXXXX", "X.....X", "X.M.MMX", "X...M.X", "XXXXXXX"];

pub(crate) const SEALED: [&str; 5] = ["XXXXXXX", "X.....X", "X.M.XXX", "X...X.X", "XXXXXXX"];

pub(crate) const TERRACES: [&str; 7] = [
    "XXXXXXXXXX",
    "X........X",
    "X..MMMMXXX",
    "X..M..M..X",
    "XXXM..M..X",
    "X..M..M..X",
    "XXXXXXXXXX",
];

pub(crate) const TERRACES_SEALED: [&str; 7] = [
    "XXXXXXXXXX",
    "X........X",
    "X..MMMMXXX",
    "X..M..M..X",
    "XXXM..M..X",
    "X..X..M..X",
    "XXXXXXXXXX",
];

pub(crate) const CAVERN: [&str; 11] = [
    "XXXXXXXXXXXXXXXXXXXXX",
    "X..X....M....X..M.X.X",
    "X...X..M.M..M..MM..MX",
    "XMM..XMMMMM..X....X.X",
    "X..M..X.........M...X",
    "XX.......XX.XXMXXMM.X",
    "X.XXX.MM....X...X...X",
    "X...X.MM....M.XX..XXX",
    "XXM.X..MMMMMX..M..X.X",
    "X.X.........X..M....X",
    "XXXXXXXXXXXXXXXXXXXXX",
];

pub(crate) fn maze(rows: &[&str]) -> Maze {
    Maze::from_rows(rows).unwrap()
}

pub(crate) fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// A walled maze of the given outer size with random walls and mud inside.
pub(crate) fn random_maze(seed: u64, width: i32, height: i32) -> Maze {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let bounds = Range::new(0, 0, width, height);
    let rows: Vec<String> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    if bounds.on_border(Point::new(x, y)) {
                        return 'X';
                    }
                    match rng.random_range(0..10) {
                        0 | 1 => 'X',
                        2 | 3 => 'M',
                        _ => '.',
                    }
                })
                .collect()
        })
        .collect();
    Maze::from_rows(&rows).unwrap()
}

/// Passable cells of a maze, row-major.
pub(crate) fn open_cells(m: &Maze) -> Vec<Point> {
    m.bounds().iter().filter(|&p| m.is_passable(p)).collect()
}

/// Single-source costs by repeated edge relaxation until nothing changes.
pub(crate) fn relaxed_costs(m: &Maze, from: Point) -> HashMap<Point, i32> {
    let mut dist = HashMap::from([(from, 0)]);
    loop {
        let mut changed = false;
        for p in open_cells(m) {
            let Some(&d) = dist.get(&p) else {
                continue;
            };
            for t in m.transitions(p) {
                let nd = d + t.cost;
                if dist.get(&t.to).is_none_or(|&old| nd < old) {
                    dist.insert(t.to, nd);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Cheapest cost over every simple path from `a` to `b`, by exhaustive DFS.
/// Only practical on tiny mazes.
pub(crate) fn enumerated_min_cost(m: &Maze, a: Point, b: Point) -> Option<i32> {
    fn walk(m: &Maze, p: Point, b: Point, cost: i32, seen: &mut Vec<Point>, best: &mut Option<i32>) {
        if p == b {
            *best = Some(best.map_or(cost, |c| c.min(cost)));
            return;
        }
        for t in m.transitions(p) {
            if seen.contains(&t.to) {
                continue;
            }
            seen.push(t.to);
            walk(m, t.to, b, cost + t.cost, seen, best);
            seen.pop();
        }
    }
    let mut best = None;
    walk(m, a, b, 0, &mut vec![a], &mut best);
    best
}

/// Minimum total cost of visiting every goal from `start`, trying every
/// ordering recursively over relaxed pair costs.
pub(crate) fn brute_force_route_cost(m: &Maze, start: Point, goals: &[Point]) -> Option<i32> {
    fn go(
        m: &Maze,
        at: Point,
        left: &mut Vec<Point>,
        cache: &mut HashMap<Point, HashMap<Point, i32>>,
    ) -> Option<i32> {
        if left.is_empty() {
            return Some(0);
        }
        let mut best: Option<i32> = None;
        for i in 0..left.len() {
            let next = left.remove(i);
            let leg = cache
                .entry(at)
                .or_insert_with(|| relaxed_costs(m, at))
                .get(&next)
                .copied();
            if let Some(leg) = leg {
                if let Some(rest) = go(m, next, left, cache) {
                    let total = leg + rest;
                    best = Some(best.map_or(total, |b| b.min(total)));
                }
            } else {
                left.insert(i, next);
                return None;
            }
            left.insert(i, next);
        }
        best
    }
    go(m, start, &mut goals.to_vec(), &mut HashMap::new())
}
