//! Linen Layout
//!
//! Counts the ways each design can be split into available towel patterns.
//! The count for a design suffix depends only on where the suffix starts, so
//! each design gets its own [`DpCache`] indexed by byte offset.

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{ClosureProblem, DpCache, VecBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, tags = ["dp"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData<'a> {
    patterns: Vec<&'a str>,
    designs: Vec<&'a str>,
    arrangements: Option<Vec<u64>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().map(str::trim).enumerate();

        let (_, first) = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("towel patterns".to_string()))?;
        let patterns: Vec<&str> = first
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if patterns.is_empty() {
            return Err(ParseError::MissingData("towel patterns".to_string()));
        }

        let designs = lines
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                if line.chars().all(|c| c.is_ascii_lowercase()) {
                    Ok(line)
                } else {
                    Err(anyhow!("(line {}) invalid design {:?}", line_idx + 1, line))
                }
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        Ok(SharedData {
            patterns,
            designs,
            arrangements: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = arrangements_once(shared).iter().filter(|&&ways| ways > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(arrangements_once(shared).iter().sum::<u64>().to_string())
    }
}

fn arrangements_once<'s>(shared: &'s mut SharedData<'_>) -> &'s [u64] {
    let SharedData {
        patterns,
        designs,
        arrangements,
    } = shared;
    arrangements.get_or_insert_with(|| {
        designs
            .iter()
            .map(|design| count_arrangements(design, patterns))
            .collect()
    })
}

/// Number of distinct ways to build `design` by concatenating `patterns`
/// (each usable any number of times). Empty patterns are ignored.
pub fn count_arrangements(design: &str, patterns: &[&str]) -> u64 {
    let design = design.as_bytes();
    let end = design.len();

    let cache = DpCache::builder()
        .backend(VecBackend::with_capacity(end + 1))
        .problem(ClosureProblem::new(
            |&offset: &usize| {
                if offset == end {
                    return Vec::new();
                }
                patterns
                    .iter()
                    .map(|p| p.as_bytes())
                    .filter(|p| !p.is_empty() && design[offset..].starts_with(p))
                    .map(|p| offset + p.len())
                    .collect()
            },
            |&offset: &usize, rest: Vec<u64>| if offset == end { 1 } else { rest.iter().sum() },
        ))
        .build();

    cache.get(&0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.patterns.len(), 8);
        assert_eq!(shared.designs.len(), 8);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "16");
    }

    #[test]
    fn test_individual_designs() {
        let patterns = ["r", "wr", "b", "g", "bwu", "rb", "gb", "br"];
        assert_eq!(count_arrangements("brwrr", &patterns), 2);
        assert_eq!(count_arrangements("rrbgbr", &patterns), 6);
        assert_eq!(count_arrangements("ubwu", &patterns), 0);
        assert_eq!(count_arrangements("", &patterns), 1);
    }

    #[test]
    fn test_long_design_does_not_recurse() {
        let design = "a".repeat(5_000);
        assert_eq!(count_arrangements(&design, &["a"]), 1);
    }

    #[test]
    fn test_missing_patterns() {
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("r, b\n\nrB\n"), Err(ParseError::InvalidFormat(_))));
    }
}
