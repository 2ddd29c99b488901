//! Hill Climbing Algorithm
//!
//! Each step may climb at most one unit of height but may drop any amount.
//! Part 2 asks for the shortest hike from any lowest square, which is a
//! single search run backwards from the summit.

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid_search::{Grid, Point, bfs, bfs_to};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["bfs", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Heightmap {
    /// Heights with `a` = 0 and `z` = 25.
    heights: Grid<u8>,
    start: Point,
    end: Point,
}

impl AocParser for Solver {
    type SharedData<'a> = Heightmap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut heights = Grid::parse_with(input, |c| match c {
            'a'..='z' | 'S' | 'E' => Ok(c as u8),
            _ => Err(anyhow!("expected a-z, S or E, found {:?}", c)),
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let start = heights
            .find(|&b| b == b'S')
            .ok_or_else(|| ParseError::MissingData("start marker 'S'".to_string()))?;
        let end = heights
            .find(|&b| b == b'E')
            .ok_or_else(|| ParseError::MissingData("summit marker 'E'".to_string()))?;

        for p in heights.points() {
            if let Some(h) = heights.get_mut(p) {
                *h = match *h {
                    b'S' => 0,
                    b'E' => b'z' - b'a',
                    other => other - b'a',
                };
            }
        }

        Ok(Heightmap { heights, start, end })
    }
}

impl PartSolver<1> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fewest_steps_from_start(map)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("summit unreachable from {}", map.start).into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fewest_steps_from_lowest(map)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no lowest square reaches the summit").into()))
    }
}

pub fn fewest_steps_from_start(map: &Heightmap) -> Option<usize> {
    let heights = &map.heights;
    bfs_to(map.start, &map.end, |p: &Point| {
        let here = heights.get(*p).copied().unwrap_or(0);
        heights
            .cardinal_neighbors(*p)
            .filter(|&n| heights.get(n).is_some_and(|&h| h <= here + 1))
            .collect::<Vec<_>>()
    })
}

/// Walks downhill from the summit using the reversed climbing rule until it
/// first touches height 0.
pub fn fewest_steps_from_lowest(map: &Heightmap) -> Option<usize> {
    let heights = &map.heights;
    bfs(
        map.end,
        |p: &Point| {
            let here = heights.get(*p).copied().unwrap_or(0);
            heights
                .cardinal_neighbors(*p)
                .filter(|&n| heights.get(n).is_some_and(|&h| h + 1 >= here))
                .collect::<Vec<_>>()
        },
        |p| heights.get(*p) == Some(&0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn test_sample() {
        let map = Solver::parse(SAMPLE).unwrap();
        assert_eq!(map.start, Point::new(0, 0));
        assert_eq!(map.end, Point::new(2, 5));
        assert_eq!(fewest_steps_from_start(&map), Some(31));
        assert_eq!(fewest_steps_from_lowest(&map), Some(29));
    }

    #[test]
    fn test_cliff_is_unclimbable() {
        let mut map = Solver::parse("SacE\n").unwrap();
        assert_eq!(fewest_steps_from_start(&map), None);
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut map),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_missing_markers() {
        assert!(matches!(Solver::parse("abc\n"), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("Sb1E\n"), Err(ParseError::InvalidFormat(_))));
    }
}
