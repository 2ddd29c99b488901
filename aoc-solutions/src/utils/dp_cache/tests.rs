//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

/// Simple problem with no dependencies for testing
struct NoDeps;

impl DpProblem<usize, i32> for NoDeps {
    fn deps(&self, _n: &usize) -> Vec<usize> {
        vec![]
    }

    fn compute(&self, n: &usize, _deps: Vec<i32>) -> i32 {
        (*n as i32) * 2
    }
}

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

struct Collatz;

impl DpProblem<u64, u64> for Collatz {
    fn deps(&self, n: &u64) -> Vec<u64> {
        if *n <= 1 {
            vec![]
        } else if n % 2 == 0 {
            vec![n / 2]
        } else {
            vec![3 * n + 1]
        }
    }

    fn compute(&self, _n: &u64, deps: Vec<u64>) -> u64 {
        if deps.is_empty() { 0 } else { 1 + deps[0] }
    }
}

fn collatz_steps(mut n: u64) -> u64 {
    let mut steps = 0;
    while n > 1 {
        n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
        steps += 1;
    }
    steps
}

#[test]
fn test_basic_cache_creation_and_single_value() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(NoDeps)
        .build();

    assert_eq!(cache.get(&5), 10);
    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&100), 200);
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Fibonacci)
        .build();

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&2), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&20), 6765);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_dependency_memoization() {
    // Diamond pattern: A(0) depends on B(1) and C(2), both depend on D(3)
    // Verify D is computed only once
    let compute_count = Rc::new(Cell::new(0));

    struct Diamond {
        count: Rc<Cell<usize>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match n {
                3 => 1,
                _ => deps.iter().sum::<i32>() + 1,
            }
        }
    }

    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Diamond {
            count: Rc::clone(&compute_count),
        })
        .build();

    assert_eq!(cache.get(&0), 5);
    assert_eq!(compute_count.get(), 4);

    // Everything is cached now.
    assert_eq!(cache.get(&1), 2);
    assert_eq!(cache.get(&0), 5);
    assert_eq!(compute_count.get(), 4);
}

#[test]
fn test_dependency_order_is_preserved() {
    let cache = DpCache::with_problem(
        HashMapBackend::new(),
        ClosureProblem::new(
            |s: &String| {
                if s.len() <= 1 {
                    vec![]
                } else {
                    vec![s[1..].to_string(), s[..1].to_string()]
                }
            },
            |s: &String, deps: Vec<String>| {
                if deps.is_empty() { s.clone() } else { format!("{}{}", deps[0], deps[1]) }
            },
        ),
    );

    // Each step moves the first char to the end of the reversed rest.
    assert_eq!(cache.get(&"abcd".to_string()), "dcba");
}

#[test]
fn test_deep_chain_does_not_overflow_stack() {
    let cache = DpCache::builder()
        .backend(VecBackend::with_capacity(200_001))
        .problem(ClosureProblem::new(
            |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
            |n: &usize, deps: Vec<u64>| deps.first().map_or(0, |prev| prev + *n as u64),
        ))
        .build();

    assert_eq!(cache.get(&200_000), 200_000 * 200_001 / 2);
}

#[test]
fn test_collatz_known_values() {
    let cache = DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(Collatz)
        .build();

    assert_eq!(cache.get(&1), 0);
    assert_eq!(cache.get(&8), 3);
    assert_eq!(cache.get(&27), 111);
    assert_eq!(cache.get(&97), 118);
}

#[test]
fn test_vec_backend_get_or_insert() {
    let mut backend: VecBackend<i32> = VecBackend::new();

    assert_eq!(backend.get(&3), None);
    assert_eq!(*backend.get_or_insert(3, || 42), 42);
    assert_eq!(*backend.get_or_insert(3, || panic!("must not recompute")), 42);
    assert_eq!(backend.get(&3), Some(&42));
    assert_eq!(backend.get(&0), None);
    assert_eq!(backend.get(&10), None);
}

#[test]
fn test_hashmap_backend_get_or_insert() {
    let mut backend: HashMapBackend<&str, usize> = HashMapBackend::new();

    assert!(backend.is_empty());
    assert_eq!(*backend.get_or_insert("towel", || 5), 5);
    assert_eq!(*backend.get_or_insert("towel", || 0), 5);
    assert_eq!(backend.get(&"towel"), Some(&5));
    assert_eq!(backend.get(&"rug"), None);
    assert_eq!(backend.len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Cached results match a direct computation regardless of query order.
    #[test]
    fn prop_collatz_matches_direct(queries in prop::collection::vec(1u64..5_000, 1..20)) {
        let cache = DpCache::builder()
            .backend(HashMapBackend::new())
            .problem(Collatz)
            .build();

        for n in queries {
            prop_assert_eq!(cache.get(&n), collatz_steps(n));
        }
    }

    /// Every index is computed at most once.
    #[test]
    fn prop_each_index_computed_once(queries in prop::collection::vec(0usize..60, 1..10)) {
        let computed = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&computed);
        let cache = DpCache::builder()
            .backend(VecBackend::new())
            .problem(ClosureProblem::new(
                |n: &usize| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
                move |n: &usize, deps: Vec<u64>| {
                    counter.set(counter.get() + 1);
                    if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
                },
            ))
            .build();

        let max = queries.iter().copied().max().unwrap_or(0);
        for n in &queries {
            cache.get(n);
        }
        prop_assert!(computed.get() <= max + 1);
        prop_assert_eq!(cache.get(&max), {
            let (mut a, mut b) = (0u64, 1u64);
            for _ in 0..max {
                (a, b) = (b, a + b);
            }
            a
        });
    }
}
