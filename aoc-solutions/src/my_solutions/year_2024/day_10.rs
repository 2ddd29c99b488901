//! Hoof It
//!
//! A hiking trail climbs from height 0 to height 9 one step at a time.
//! Part 1 scores each trailhead by the summits a BFS can reach from it.
//! Part 2 rates trailheads by the number of distinct trails, which is a
//! path count over the climbing DAG and memoizes per cell.

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{ClosureProblem, DpCache, HashMapBackend};
use crate::utils::grid_search::{Grid, Point, bfs_distances};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["bfs", "dp", "grid"])]
pub struct Solver;

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

/// Heights; `.` marks impassable ground.
pub type TopoMap = Grid<Option<u8>>;

impl AocParser for Solver {
    type SharedData<'a> = TopoMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |c| match c {
            '.' => Ok(None),
            _ => c
                .to_digit(10)
                .map(|h| Some(h as u8))
                .ok_or_else(|| anyhow!("unexpected height {:?}", c)),
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: usize = trailheads(map).map(|p| score(map, p)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_rating(map).to_string())
    }
}

fn height(map: &TopoMap, p: Point) -> Option<u8> {
    map.get(p).copied().flatten()
}

fn trailheads(map: &TopoMap) -> impl Iterator<Item = Point> + '_ {
    map.points().filter(|&p| height(map, p) == Some(TRAILHEAD))
}

/// Neighbours exactly one unit higher than `p`.
fn uphill(map: &TopoMap, p: Point) -> impl Iterator<Item = Point> + '_ {
    let next = height(map, p).map(|h| h + 1);
    map.cardinal_neighbors(p)
        .filter(move |&n| next.is_some() && height(map, n) == next)
}

/// Number of distinct summits reachable from `trailhead`.
pub fn score(map: &TopoMap, trailhead: Point) -> usize {
    bfs_distances(trailhead, |p: &Point| uphill(map, *p))
        .into_keys()
        .filter(|&p| height(map, p) == Some(SUMMIT))
        .count()
}

/// Sum over trailheads of the number of distinct trails to any summit.
pub fn total_rating(map: &TopoMap) -> u64 {
    let trails = DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(ClosureProblem::new(
            |p: &Point| {
                if height(map, *p) == Some(SUMMIT) {
                    vec![]
                } else {
                    uphill(map, *p).collect()
                }
            },
            |p: &Point, deps: Vec<u64>| {
                if height(map, *p) == Some(SUMMIT) {
                    1
                } else {
                    deps.iter().sum()
                }
            },
        ))
        .build();

    let total = trailheads(map).map(|p| trails.get(&p)).sum();
    log::debug!("rated trailheads on a {}x{} map", map.width(), map.height());
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn test_sample() {
        let mut map = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut map, 1).unwrap(), "36");
        assert_eq!(Solver::solve_part(&mut map, 2).unwrap(), "81");
    }

    #[test]
    fn test_impassable_ground() {
        let map = Solver::parse("...0...\n...1...\n...2...\n6543456\n7.....7\n8.....8\n9.....9\n").unwrap();
        assert_eq!(score(&map, Point::new(0, 3)), 2);
        assert_eq!(total_rating(&map), 2);
    }

    #[test]
    fn test_rating_counts_branches() {
        // One summit reached by three different trails.
        let map = Solver::parse(".....0.\n..4321.\n..5..2.\n..6543.\n..7..4.\n..8765.\n..9....\n").unwrap();
        assert_eq!(score(&map, Point::new(0, 5)), 1);
        assert_eq!(total_rating(&map), 3);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Solver::parse("01\n2x\n"), Err(ParseError::InvalidFormat(msg)) if msg.contains("line 2")));
        assert!(matches!(Solver::parse("012\n34\n"), Err(ParseError::InvalidFormat(_))));
    }
}
