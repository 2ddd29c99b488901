//! Benchmark comparing the grid searches on random mazes.
//!
//! Run with: cargo run --example search_benchmark --release
//!
//! Every maze is searched from the top-left to the bottom-right corner with
//! - `bfs_to` (unit steps)
//! - `astar_to` with a zero heuristic (plain Dijkstra)
//! - `astar_to` with the Manhattan heuristic
//!
//! and the whole batch is run once sequentially and once with `par_iter`.

use aoc_solutions::utils::grid_search::{Grid, Point, astar_to, bfs_to, manhattan};
use rayon::prelude::*;
use std::time::Instant;

const SIZE: usize = 141;
const MAZES: usize = 64;
const WALL_PERCENT: u64 = 28;

/// xorshift64, enough to scatter walls reproducibly
fn next(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

fn random_maze(seed: u64) -> Grid<bool> {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut walls = Grid::new(SIZE, SIZE, false);
    for p in walls.points() {
        if let Some(w) = walls.get_mut(p) {
            *w = next(&mut state) % 100 < WALL_PERCENT;
        }
    }
    for corner in [Point::new(0, 0), Point::new(SIZE as i64 - 1, SIZE as i64 - 1)] {
        if let Some(w) = walls.get_mut(corner) {
            *w = false;
        }
    }
    walls
}

fn open_neighbors(walls: &Grid<bool>, p: Point) -> Vec<Point> {
    walls
        .cardinal_neighbors(p)
        .filter(|&n| walls.get(n) == Some(&false))
        .collect()
}

fn run_bfs(walls: &Grid<bool>) -> Option<u64> {
    let end = Point::new(SIZE as i64 - 1, SIZE as i64 - 1);
    bfs_to(Point::new(0, 0), &end, |p: &Point| open_neighbors(walls, *p)).map(|d| d as u64)
}

fn run_astar(walls: &Grid<bool>, guided: bool) -> Option<u64> {
    let end = Point::new(SIZE as i64 - 1, SIZE as i64 - 1);
    astar_to(
        Point::new(0, 0),
        &end,
        |p: &Point| open_neighbors(walls, *p).into_iter().map(|n| (n, 1)),
        |p: &Point| if guided { manhattan(*p, end) } else { 0 },
    )
}

fn time<T>(label: &str, f: impl FnOnce() -> T) -> (T, std::time::Duration) {
    let start = Instant::now();
    let out = f();
    let elapsed = start.elapsed();
    println!("{:<28} {:?}", label, elapsed);
    (out, elapsed)
}

fn main() {
    println!("=== Grid Search Benchmark ===");
    println!("{} mazes of {}x{}, {}% walls\n", MAZES, SIZE, SIZE, WALL_PERCENT);

    let mazes: Vec<Grid<bool>> = (0..MAZES as u64).map(random_maze).collect();

    let (bfs, _) = time("bfs_to:", || mazes.iter().map(run_bfs).collect::<Vec<_>>());
    let (dijkstra, _) = time("astar_to (zero heuristic):", || {
        mazes.iter().map(|m| run_astar(m, false)).collect::<Vec<_>>()
    });
    let (astar, sequential) = time("astar_to (manhattan):", || {
        mazes.iter().map(|m| run_astar(m, true)).collect::<Vec<_>>()
    });
    let (astar_par, parallel) = time("astar_to + par_iter:", || {
        mazes.par_iter().map(|m| run_astar(m, true)).collect::<Vec<_>>()
    });

    let mismatches = (0..MAZES)
        .filter(|&i| bfs[i] != dijkstra[i] || bfs[i] != astar[i] || bfs[i] != astar_par[i])
        .count();
    let solvable = bfs.iter().filter(|d| d.is_some()).count();

    println!();
    println!("Solvable mazes: {}/{}", solvable, MAZES);
    if mismatches == 0 {
        println!("All searches agree.");
    } else {
        println!("MISMATCH in {} maze(s)!", mismatches);
    }
    if !parallel.is_zero() {
        println!(
            "Parallel speedup: {:.2}x",
            sequential.as_secs_f64() / parallel.as_secs_f64()
        );
    }
}
