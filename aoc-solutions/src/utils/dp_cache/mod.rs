//! Dynamic Programming Cache with Lazy Evaluation
//!
//! This module provides a memoization cache for dynamic programming problems
//! where values depend on other values in a directed acyclic graph (DAG). The
//! cache is an ordinary value owned by whoever needs it; nothing is kept in
//! statics, so two puzzles (or two inputs of the same puzzle) never share
//! entries.
//!
//! # Backend Types
//!
//! - [`VecBackend`]: Efficient for dense, sequential `usize` indices (auto-growing)
//! - [`HashMapBackend`]: Supports arbitrary hashable index types
//!
//! # Warning: Cycle Behavior
//!
//! **The cache does NOT support cycle detection.** If the dependency graph
//! contains cycles, `DpCache::get` never returns.
//!
//! # Example: Trait-based API with Builder
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] }
//!         else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 }
//!         else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(VecBackend::new())
//!     .problem(Fibonacci)
//!     .build();
//! assert_eq!(cache.get(&10), 55);
//! ```
//!
//! # Example: Closure-based API with ClosureProblem
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{ClosureProblem, DpCache, HashMapBackend};
//!
//! // Number of monotone lattice paths to (r, c).
//! let paths = ClosureProblem::new(
//!     |&(r, c): &(usize, usize)| {
//!         let mut deps = Vec::new();
//!         if r > 0 { deps.push((r - 1, c)); }
//!         if c > 0 { deps.push((r, c - 1)); }
//!         deps
//!     },
//!     |_: &(usize, usize), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum() },
//! );
//!
//! let cache = DpCache::builder()
//!     .backend(HashMapBackend::new())
//!     .problem(paths)
//!     .build();
//! assert_eq!(cache.get(&(4, 4)), 70);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
