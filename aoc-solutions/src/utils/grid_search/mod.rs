//! Shortest-path search over implicit graphs
//!
//! The searches never see a concrete graph. Callers hand in a start state and
//! a neighbour closure that encodes walls, bounds and move costs; the state
//! type is whatever identifies a position (a [`Point`], a `(Point, Direction)`
//! pair, a number).
//!
//! # Search Functions
//!
//! Unweighted (every step costs 1, distances are `usize`):
//! - [`bfs`] / [`bfs_to`]: fewest steps to a goal
//! - [`bfs_reachable_within`]: how many states lie within a step budget
//! - [`bfs_distances`]: step distance to every reachable state
//!
//! Weighted (non-negative `u64` step costs):
//! - [`astar`] / [`astar_to`]: cheapest cost to a goal, guided by an
//!   admissible heuristic
//! - [`dijkstra_distances`]: cheapest cost from a set of sources to every
//!   reachable state
//!
//! An unreachable goal is reported as `None`. Searches own their frontier and
//! visited map, so independent searches can run on separate threads.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::grid_search::{Grid, Point, astar_to, bfs_to, manhattan};
//!
//! let maze = Grid::parse_with(
//!     "\
//! ..#..
//! ..#..
//! .....
//! ",
//!     |c| Ok(c == '#'),
//! )
//! .unwrap();
//! let open = |p: &Point| {
//!     maze.cardinal_neighbors(*p)
//!         .filter(|n| maze.get(*n) == Some(&false))
//!         .collect::<Vec<_>>()
//! };
//!
//! let start = Point::new(0, 0);
//! let end = Point::new(0, 4);
//! assert_eq!(bfs_to(start, &end, open), Some(8));
//!
//! let weighted = |p: &Point| open(p).into_iter().map(|n| (n, 1));
//! assert_eq!(astar_to(start, &end, weighted, |p| manhattan(*p, end)), Some(8));
//! ```

mod astar;
mod bfs;
mod grid;

pub use astar::{astar, astar_to, dijkstra_distances};
pub use bfs::{bfs, bfs_distances, bfs_reachable_within, bfs_to};
pub use grid::{Direction, Grid, Point, manhattan};
