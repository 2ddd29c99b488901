//! A Maze of Twisty Little Cubicles
//!
//! The office is an unbounded quarter-plane. Whether `(x, y)` is open space
//! depends only on the puzzle's favourite number, so the maze is never
//! materialized; the neighbour closure evaluates the formula on demand.

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid_search::{Point, bfs_reachable_within, bfs_to};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 13, tags = ["bfs", "implicit-grid"])]
pub struct Solver;

/// Points are `(row, col) = (y, x)`.
const START: Point = Point::new(1, 1);
const TARGET: Point = Point::new(39, 31);
const STEP_BUDGET: usize = 50;

impl AocParser for Solver {
    type SharedData<'a> = u32;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::MissingData("favourite number".to_string()));
        }
        trimmed
            .parse::<u32>()
            .map_err(|e| ParseError::InvalidFormat(format!("(line 1) {}: {:?}", e, trimmed)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(favorite: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shortest_path(*favorite, TARGET)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("{} is walled off from {}", TARGET, START).into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(favorite: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(reachable_within(*favorite, STEP_BUDGET).to_string())
    }
}

/// Open space has an even number of set bits in the office formula.
/// Negative coordinates are outside the building.
pub fn is_open(favorite: u32, p: Point) -> bool {
    if p.row < 0 || p.col < 0 {
        return false;
    }
    let (x, y) = (p.col as u64, p.row as u64);
    (x * x + 3 * x + 2 * x * y + y + y * y + u64::from(favorite)).count_ones() % 2 == 0
}

/// Fewest steps from `(1, 1)` to `target`.
pub fn shortest_path(favorite: u32, target: Point) -> Option<usize> {
    bfs_to(START, &target, |p: &Point| {
        p.cardinal_neighbors()
            .into_iter()
            .filter(move |&n| is_open(favorite, n))
    })
}

/// Distinct locations reachable from `(1, 1)` in at most `budget` steps.
pub fn reachable_within(favorite: u32, budget: usize) -> usize {
    bfs_reachable_within(START, budget, |p: &Point| {
        p.cardinal_neighbors()
            .into_iter()
            .filter(move |&n| is_open(favorite, n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE_FAVORITE: u32 = 10;

    #[test]
    fn test_open_space_formula() {
        // First row of the published sample: .#.####.##
        let row: String = (0..10)
            .map(|x| if is_open(SAMPLE_FAVORITE, Point::new(0, x)) { '.' } else { '#' })
            .collect();
        assert_eq!(row, ".#.####.##");
        assert!(!is_open(SAMPLE_FAVORITE, Point::new(-1, 0)));
    }

    #[test]
    fn test_sample_shortest_path() {
        assert_eq!(shortest_path(SAMPLE_FAVORITE, Point::new(4, 7)), Some(11));
        assert_eq!(shortest_path(SAMPLE_FAVORITE, START), Some(0));
    }

    #[test]
    fn test_sample_reachable_counts() {
        let counts: Vec<usize> = (0..5).map(|b| reachable_within(SAMPLE_FAVORITE, b)).collect();
        assert_eq!(counts, vec![1, 3, 5, 6, 9]);
        assert_eq!(reachable_within(SAMPLE_FAVORITE, STEP_BUDGET), 151);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Solver::parse("1364\n").unwrap(), 1364);
        assert!(matches!(Solver::parse("  "), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("twelve"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("18446744073709551615"), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_largest_favorite_does_not_overflow() {
        assert!(is_open(u32::MAX, Point::new(0, 0)) != is_open(u32::MAX - 1, Point::new(0, 0)));
        let mut favorite = Solver::parse(&u32::MAX.to_string()).unwrap();
        assert!(Solver::solve_part(&mut favorite, 2).is_ok());
    }

    #[test]
    fn test_part_two_through_dispatch() {
        let mut favorite = SAMPLE_FAVORITE;
        assert_eq!(Solver::solve_part(&mut favorite, 2).unwrap(), "151");
    }
}
