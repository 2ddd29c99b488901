//! Priority-ordered search for graphs with non-negative integer edge costs.
//!
//! The frontier is a [`BinaryHeap`] with lazy deletion: a state may sit in
//! the heap several times with different costs, and every entry after the
//! first one popped is discarded. Costs are therefore final only once a state
//! leaves the heap.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// Heap entry, ordered so the smallest `(priority, state)` pops first.
#[derive(Debug)]
struct Frontier<S> {
    priority: u64,
    cost: u64,
    state: S,
}

impl<S: Ord> PartialEq for Frontier<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Ord> Eq for Frontier<S> {}

impl<S: Ord> PartialOrd for Frontier<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Ord> Ord for Frontier<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap behavior
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.state.cmp(&self.state))
    }
}

/// Cheapest total cost from `start` to any state satisfying `is_goal`.
///
/// `neighbors` yields `(next_state, step_cost)` pairs. `heuristic` must
/// never overestimate the remaining cost, otherwise the returned cost may not
/// be minimal; `|_| 0` turns this into plain Dijkstra. Frontier ties are
/// broken by the state's own ordering, so the search is deterministic.
///
/// ```
/// use aoc_solutions::utils::grid_search::astar;
///
/// // Walking costs 3 per step, teleporting to double costs 5.
/// let cost = astar(
///     1u32,
///     |&n| [(n + 1, 3), (n * 2, 5)].into_iter().filter(|&(m, _)| m <= 64),
///     |_| 0,
///     |&n| n == 9,
/// );
/// assert_eq!(cost, Some(3 + 5 + 5 + 3));
/// ```
pub fn astar<S, I, N, H, G>(start: S, mut neighbors: N, mut heuristic: H, mut is_goal: G) -> Option<u64>
where
    S: Eq + Hash + Ord + Clone,
    I: IntoIterator<Item = (S, u64)>,
    N: FnMut(&S) -> I,
    H: FnMut(&S) -> u64,
    G: FnMut(&S) -> bool,
{
    let mut finalized: HashMap<S, u64> = HashMap::new();
    let mut heap = BinaryHeap::new();
    heap.push(Frontier {
        priority: heuristic(&start),
        cost: 0,
        state: start,
    });

    while let Some(Frontier { cost, state, .. }) = heap.pop() {
        if is_goal(&state) {
            log::trace!("astar: goal at cost {} after {} expansions", cost, finalized.len());
            return Some(cost);
        }
        if finalized.contains_key(&state) {
            continue;
        }
        finalized.insert(state.clone(), cost);

        for (next, step) in neighbors(&state) {
            let next_cost = cost + step;
            heap.push(Frontier {
                priority: next_cost + heuristic(&next),
                cost: next_cost,
                state: next,
            });
        }
    }

    log::trace!("astar: frontier exhausted after {} expansions", finalized.len());
    None
}

/// Cheapest total cost from `start` to `end`.
pub fn astar_to<S, I, N, H>(start: S, end: &S, neighbors: N, heuristic: H) -> Option<u64>
where
    S: Eq + Hash + Ord + Clone,
    I: IntoIterator<Item = (S, u64)>,
    N: FnMut(&S) -> I,
    H: FnMut(&S) -> u64,
{
    astar(start, neighbors, heuristic, |s| s == end)
}

/// Cheapest cost from the nearest of `starts` to every reachable state.
///
/// Same lazy-deletion loop as [`astar`] with no heuristic and no goal, run
/// until the frontier is empty. Every start maps to 0.
pub fn dijkstra_distances<S, T, I, N>(starts: T, mut neighbors: N) -> HashMap<S, u64>
where
    S: Eq + Hash + Ord + Clone,
    T: IntoIterator<Item = S>,
    I: IntoIterator<Item = (S, u64)>,
    N: FnMut(&S) -> I,
{
    let mut finalized: HashMap<S, u64> = HashMap::new();
    let mut heap: BinaryHeap<Frontier<S>> = starts
        .into_iter()
        .map(|state| Frontier {
            priority: 0,
            cost: 0,
            state,
        })
        .collect();

    while let Some(Frontier { cost, state, .. }) = heap.pop() {
        if finalized.contains_key(&state) {
            continue;
        }
        finalized.insert(state.clone(), cost);

        for (next, step) in neighbors(&state) {
            if !finalized.contains_key(&next) {
                let next_cost = cost + step;
                heap.push(Frontier {
                    priority: next_cost,
                    cost: next_cost,
                    state: next,
                });
            }
        }
    }

    log::trace!("dijkstra_distances: {} states finalized", finalized.len());
    finalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontier_pops_lowest_priority_then_lowest_state() {
        let mut heap = BinaryHeap::new();
        for (priority, state) in [(5, 'a'), (3, 'z'), (3, 'b'), (7, 'c')] {
            heap.push(Frontier {
                priority,
                cost: 0,
                state,
            });
        }
        let order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|f| f.state)).collect();
        assert_eq!(order, vec!['b', 'z', 'a', 'c']);
    }

    #[test]
    fn test_cheaper_late_discovery_wins() {
        // a -> c is expensive directly, cheap through b.
        let edges = |s: &char| match s {
            'a' => vec![('c', 10), ('b', 1)],
            'b' => vec![('c', 2)],
            _ => vec![],
        };
        assert_eq!(astar_to('a', &'c', edges, |_| 0), Some(3));
        let all = dijkstra_distances(['a'], edges);
        assert_eq!(all.get(&'c'), Some(&3));
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_multi_source_distances() {
        let line = |&n: &i32| [(n - 1, 1), (n + 1, 1)].into_iter().filter(|&(m, _)| (0..=10).contains(&m));
        let dist = dijkstra_distances([0, 10], line);
        assert_eq!(dist[&5], 5);
        assert_eq!(dist[&8], 2);
        assert_eq!(dist[&0], 0);
    }

    #[test]
    fn test_goal_at_start() {
        assert_eq!(astar(3u8, |_| Vec::new(), |_| 0, |&s| s == 3), Some(0));
        assert_eq!(astar(3u8, |_| Vec::new(), |_| 0, |&s| s == 4), None);
    }
}
