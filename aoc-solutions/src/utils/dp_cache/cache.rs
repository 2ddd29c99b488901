//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// `DpCache` provides memoization for computations where values depend on
/// other values. Dependencies are resolved on an explicit stack rather than
/// by recursion, so long dependency chains cannot overflow the call stack,
/// and each value is computed exactly once.
///
/// # Type Parameters
///
/// - `I`: Index type (must implement `Clone`)
/// - `K`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Warning: No Cycle Detection
///
/// This cache does NOT detect cycles in the dependency graph. A cycle makes
/// [`DpCache::get`] loop forever.
/// **Users MUST ensure dependencies form a DAG.**
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Factorial;
///
/// impl DpProblem<usize, u64> for Factorial {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
///         if *n == 0 { 1 } else { (*n as u64) * deps[0] }
///     }
/// }
///
/// let cache = DpCache::builder()
///     .backend(VecBackend::new())
///     .problem(Factorial)
///     .build();
/// assert_eq!(cache.get(&5), 120);
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

/// One pending index on the resolution stack. `deps` is filled in once the
/// index has been expanded and its unresolved dependencies pushed above it.
struct Frame<I> {
    index: I,
    deps: Option<Vec<I>>,
}

impl<I, K> DpCache<I, K, (), ()> {
    /// Starts building a cache; set a backend and a problem, then `build()`.
    pub fn builder() -> DpCacheBuilder<I, K, (), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
            _phantom: PhantomData,
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for the given index, computing it if necessary.
    ///
    /// A cached value is cloned out directly. Otherwise the index is
    /// expanded into its dependencies, unresolved ones are pushed on a work
    /// stack and resolved first, and the value is computed once every
    /// dependency is available.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        let mut stack = vec![Frame {
            index: index.clone(),
            deps: None,
        }];

        while let Some(frame) = stack.pop() {
            let cached = self.backend.borrow().get(&frame.index).cloned();
            if let Some(value) = cached {
                if stack.is_empty() {
                    return value;
                }
                continue;
            }

            match frame.deps {
                None => {
                    let deps = self.problem.deps(&frame.index);
                    let pending: Vec<I> = {
                        let backend = self.backend.borrow();
                        deps.iter()
                            .filter(|dep| backend.get(dep).is_none())
                            .cloned()
                            .collect()
                    };
                    stack.push(Frame {
                        index: frame.index,
                        deps: Some(deps),
                    });
                    stack.extend(pending.into_iter().map(|dep| Frame {
                        index: dep,
                        deps: None,
                    }));
                }
                Some(deps) => {
                    let values: Option<Vec<K>> = {
                        let backend = self.backend.borrow();
                        deps.iter().map(|dep| backend.get(dep).cloned()).collect()
                    };
                    let Some(values) = values else {
                        // A dependency was skipped as cached when pushed but
                        // is not stored; only reachable through a cycle.
                        stack.push(Frame {
                            index: frame.index,
                            deps: None,
                        });
                        continue;
                    };

                    let value = self
                        .backend
                        .borrow_mut()
                        .get_or_insert(frame.index.clone(), || {
                            self.problem.compute(&frame.index, values)
                        })
                        .clone();
                    if stack.is_empty() {
                        return value;
                    }
                }
            }
        }

        unreachable!("the requested index is resolved before the stack empties")
    }
}

/// Builder returned by [`DpCache::builder`].
pub struct DpCacheBuilder<I, K, B, P> {
    backend: B,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, B, P> DpCacheBuilder<I, K, B, P> {
    /// Storage for computed values.
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<I, K, B2, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
            _phantom: PhantomData,
        }
    }

    /// Dependency structure and per-index computation.
    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<I, K, B, P2> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, B, P> DpCacheBuilder<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn build(self) -> DpCache<I, K, B, P> {
        DpCache::with_problem(self.backend, self.problem)
    }
}
