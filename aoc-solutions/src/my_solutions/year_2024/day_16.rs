//! Reindeer Maze
//!
//! The search state is a position plus a facing. Stepping forward costs 1,
//! turning 90 degrees in place costs 1000. The reindeer starts facing east
//! and may finish facing any direction.
//!
//! Part 2 counts tiles on any cheapest route: a state lies on one exactly
//! when its cost from the start plus its cost to the end (searched backwards
//! from all four end facings) equals the best score.

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid_search::{Direction, Grid, Point, astar, dijkstra_distances, manhattan};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["astar", "dijkstra", "grid"])]
pub struct Solver;

const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

type Reindeer = (Point, Direction);

#[derive(Debug)]
pub struct SharedData {
    maze: Maze,
    best_score: Option<u64>,
}

#[derive(Debug)]
pub struct Maze {
    walls: Grid<bool>,
    start: Point,
    end: Point,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let cells = Grid::parse_with(input, |c| match c {
            '#' | '.' | 'S' | 'E' => Ok(c),
            _ => Err(anyhow!("unexpected maze tile {:?}", c)),
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

        Ok(SharedData {
            maze: Maze { walls, start, end },
            best_score: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_score_once(shared).map(|score| score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = best_score_once(shared)?;
        Ok(shared.maze.tiles_on_best_paths(best).to_string())
    }
}

fn best_score_once(shared: &mut SharedData) -> Result<u64, SolveError> {
    if let Some(score) = shared.best_score {
        return Ok(score);
    }
    let score = shared
        .maze
        .best_score()
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("end tile is unreachable").into()))?;
    shared.best_score = Some(score);
    Ok(score)
}

impl Maze {
    fn is_open(&self, p: Point) -> bool {
        self.walls.get(p) == Some(&false)
    }

    fn forward_moves(&self, &(p, dir): &Reindeer) -> Vec<(Reindeer, u64)> {
        let mut moves = vec![((p, dir.turn_left()), TURN_COST), ((p, dir.turn_right()), TURN_COST)];
        let ahead = p + dir.delta();
        if self.is_open(ahead) {
            moves.push(((ahead, dir), STEP_COST));
        }
        moves
    }

    /// Moves that lead *into* `(p, dir)`, i.e. the reversed edges.
    fn backward_moves(&self, &(p, dir): &Reindeer) -> Vec<(Reindeer, u64)> {
        let mut moves = vec![((p, dir.turn_left()), TURN_COST), ((p, dir.turn_right()), TURN_COST)];
        let behind = p - dir.delta();
        if self.is_open(behind) {
            moves.push(((behind, dir), STEP_COST));
        }
        moves
    }

    /// Lowest score from the start (facing east) to the end tile.
    pub fn best_score(&self) -> Option<u64> {
        let end = self.end;
        astar(
            (self.start, Direction::East),
            |state| self.forward_moves(state),
            |&(p, _)| manhattan(p, end),
            |&(p, _)| p == end,
        )
    }

    /// Number of distinct tiles lying on at least one route scoring `best`.
    pub fn tiles_on_best_paths(&self, best: u64) -> usize {
        let from_start = dijkstra_distances([(self.start, Direction::East)], |state| self.forward_moves(state));
        let to_end = dijkstra_distances(Direction::ALL.map(|dir| (self.end, dir)), |state| {
            self.backward_moves(state)
        });

        from_start
            .iter()
            .filter(|(state, cost)| to_end.get(*state).is_some_and(|rest| **cost + rest == best))
            .map(|((p, _), _)| *p)
            .unique()
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const FIRST_SAMPLE: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND_SAMPLE: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    fn solve_both(input: &str) -> (String, String) {
        let mut shared = Solver::parse(input).unwrap();
        let part1 = Solver::solve_part(&mut shared, 1).unwrap();
        let part2 = Solver::solve_part(&mut shared, 2).unwrap();
        (part1, part2)
    }

    #[test]
    fn test_first_sample() {
        assert_eq!(solve_both(FIRST_SAMPLE), ("7036".to_string(), "45".to_string()));
    }

    #[test]
    fn test_second_sample() {
        assert_eq!(solve_both(SECOND_SAMPLE), ("11048".to_string(), "64".to_string()));
    }

    #[test]
    fn test_part2_without_part1() {
        let mut shared = Solver::parse(FIRST_SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "45");
        assert_eq!(shared.best_score, Some(7036));
    }

    #[test]
    fn test_straight_corridor_needs_no_turn() {
        let maze = Solver::parse("#####\n#S.E#\n#####\n").unwrap().maze;
        assert_eq!(maze.best_score(), Some(2));
        assert_eq!(maze.tiles_on_best_paths(2), 3);
    }

    #[test]
    fn test_walled_off_end() {
        let mut shared = Solver::parse("#####\n#S#E#\n#####\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
