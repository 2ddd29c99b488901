//! Race Condition
//!
//! The track is a single corridor, but the solution only relies on having the
//! distance from every track cell to the finish. A cheat of `k` picoseconds
//! jumps from track cell `a` to track cell `b` with `manhattan(a, b) == k`
//! and saves `dist(a) - dist(b) - k`.

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::iproduct;

use crate::utils::grid_search::{Grid, Point, bfs_distances};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 20, tags = ["bfs", "grid"])]
pub struct Solver;

const SHORT_CHEAT: i64 = 2;
const LONG_CHEAT: i64 = 20;
const MIN_SAVING: usize = 100;

#[derive(Debug)]
pub struct Racetrack {
    walls: Grid<bool>,
    start: Point,
    end: Point,
}

impl AocParser for Solver {
    type SharedData<'a> = Racetrack;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let cells = Grid::parse_with(input, |c| match c {
            '#' | '.' | 'S' | 'E' => Ok(c),
            _ => Err(anyhow!("unexpected track tile {:?}", c)),
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let start = cells
            .find(|&c| c == 'S')
            .ok_or_else(|| ParseError::MissingData("start tile 'S'".to_string()))?;
        let end = cells
            .find(|&c| c == 'E')
            .ok_or_else(|| ParseError::MissingData("end tile 'E'".to_string()))?;

        let mut walls = Grid::new(cells.width(), cells.height(), false);
        for p in cells.points() {
            if let (Some(wall), Some(&c)) = (walls.get_mut(p), cells.get(p)) {
                *wall = c == '#';
            }
        }

        Ok(Racetrack { walls, start, end })
    }
}

impl PartSolver<1> for Solver {
    fn solve(track: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        track.count_cheats(SHORT_CHEAT, MIN_SAVING).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(track: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        track.count_cheats(LONG_CHEAT, MIN_SAVING).map(|n| n.to_string())
    }
}

impl Racetrack {
    /// Number of distinct cheats lasting at most `max_cheat` picoseconds
    /// that save at least `min_saving`.
    pub fn count_cheats(&self, max_cheat: i64, min_saving: usize) -> Result<usize, SolveError> {
        let walls = &self.walls;
        let to_end = bfs_distances(self.end, |p: &Point| {
            walls
                .cardinal_neighbors(*p)
                .filter(|&n| walls.get(n) == Some(&false))
                .collect::<Vec<_>>()
        });
        if !to_end.contains_key(&self.start) {
            return Err(SolveError::SolveFailed(anyhow!("start is not on the track").into()));
        }

        let count = to_end
            .iter()
            .map(|(&from, &from_dist)| {
                iproduct!(-max_cheat..=max_cheat, -max_cheat..=max_cheat)
                    .filter(|&(dr, dc)| (2..=max_cheat).contains(&(dr.abs() + dc.abs())))
                    .filter(|&(dr, dc)| {
                        let jump = (dr.abs() + dc.abs()) as usize;
                        to_end
                            .get(&(from + Point::new(dr, dc)))
                            .is_some_and(|&to_dist| from_dist >= to_dist + jump + min_saving)
                    })
                    .count()
            })
            .sum();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    #[test]
    fn test_sample_short_cheats() {
        let track = Solver::parse(SAMPLE).unwrap();
        let counts: Vec<usize> = [64, 40, 20, 2]
            .into_iter()
            .map(|saving| track.count_cheats(SHORT_CHEAT, saving).unwrap())
            .collect();
        assert_eq!(counts, vec![1, 2, 5, 44]);
    }

    #[test]
    fn test_sample_long_cheats() {
        let track = Solver::parse(SAMPLE).unwrap();
        let counts: Vec<usize> = [76, 74, 50]
            .into_iter()
            .map(|saving| track.count_cheats(LONG_CHEAT, saving).unwrap())
            .collect();
        assert_eq!(counts, vec![3, 7, 285]);
    }

    #[test]
    fn test_sample_has_no_big_savings() {
        let mut track = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut track).unwrap(), "0");
    }

    #[test]
    fn test_disconnected_start() {
        let track = Solver::parse("#####\n#S#E#\n#####\n").unwrap();
        assert!(matches!(track.count_cheats(2, 1), Err(SolveError::SolveFailed(_))));
    }
}
