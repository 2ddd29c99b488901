//! Breadth-first search over unweighted implicit graphs.
//!
//! Every edge costs one step, so the first time a state is reached is also
//! its shortest distance from the start. Neighbour generation is supplied by
//! the caller, which keeps the grid, its walls and any other validity rules
//! out of this module.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Fewest steps from `start` to any state satisfying `is_goal`.
///
/// Returns `Some(0)` when `start` is itself a goal and `None` when no goal is
/// reachable. When several goals exist only the minimum distance is
/// guaranteed, not which goal produced it.
///
/// ```
/// use aoc_solutions::utils::grid_search::bfs;
///
/// // Count up from 1 by doubling or adding one.
/// let steps = bfs(1u32, |&n| [n + 1, n * 2].into_iter().filter(|&m| m <= 100), |&n| n == 10);
/// assert_eq!(steps, Some(4));
/// ```
pub fn bfs<S, I, N, G>(start: S, mut neighbors: N, mut is_goal: G) -> Option<usize>
where
    S: Eq + Hash + Clone,
    I: IntoIterator<Item = S>,
    N: FnMut(&S) -> I,
    G: FnMut(&S) -> bool,
{
    if is_goal(&start) {
        return Some(0);
    }

    let mut visited = HashMap::new();
    let mut queue = VecDeque::new();
    visited.insert(start.clone(), 0usize);
    queue.push_back((start, 0usize));

    while let Some((state, dist)) = queue.pop_front() {
        if is_goal(&state) {
            log::trace!("bfs: goal at distance {} after {} states", dist, visited.len());
            return Some(dist);
        }
        for next in neighbors(&state) {
            if !visited.contains_key(&next) {
                visited.insert(next.clone(), dist + 1);
                queue.push_back((next, dist + 1));
            }
        }
    }

    log::trace!("bfs: frontier exhausted after {} states", visited.len());
    None
}

/// Fewest steps from `start` to `end`.
pub fn bfs_to<S, I, N>(start: S, end: &S, neighbors: N) -> Option<usize>
where
    S: Eq + Hash + Clone,
    I: IntoIterator<Item = S>,
    N: FnMut(&S) -> I,
{
    bfs(start, neighbors, |s| s == end)
}

/// Number of distinct states reachable from `start` in at most `budget`
/// steps, `start` included.
///
/// States at exactly `budget` steps are counted but never expanded, so a
/// budget of 0 always yields 1.
pub fn bfs_reachable_within<S, I, N>(start: S, budget: usize, mut neighbors: N) -> usize
where
    S: Eq + Hash + Clone,
    I: IntoIterator<Item = S>,
    N: FnMut(&S) -> I,
{
    let mut visited = HashMap::new();
    let mut queue = VecDeque::new();
    visited.insert(start.clone(), 0usize);
    queue.push_back((start, 0usize));

    while let Some((state, dist)) = queue.pop_front() {
        if dist >= budget {
            continue;
        }
        for next in neighbors(&state) {
            if !visited.contains_key(&next) {
                visited.insert(next.clone(), dist + 1);
                queue.push_back((next, dist + 1));
            }
        }
    }

    visited.len()
}

/// Step distance from `start` to every reachable state.
///
/// Runs the search to exhaustion; `start` maps to 0.
pub fn bfs_distances<S, I, N>(start: S, mut neighbors: N) -> HashMap<S, usize>
where
    S: Eq + Hash + Clone,
    I: IntoIterator<Item = S>,
    N: FnMut(&S) -> I,
{
    let mut visited = HashMap::new();
    let mut queue = VecDeque::new();
    visited.insert(start.clone(), 0usize);
    queue.push_back((start, 0usize));

    while let Some((state, dist)) = queue.pop_front() {
        for next in neighbors(&state) {
            if !visited.contains_key(&next) {
                visited.insert(next.clone(), dist + 1);
                queue.push_back((next, dist + 1));
            }
        }
    }

    log::trace!("bfs_distances: {} states reached", visited.len());
    visited
}
