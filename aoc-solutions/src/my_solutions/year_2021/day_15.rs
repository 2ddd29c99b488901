//! Chiton
//!
//! Entering a cell costs its risk level (1-9). Part 2 tiles the map five
//! times in each direction, raising every tile's risk by its tile distance
//! from the top-left and wrapping 9 back to 1.

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid_search::{Grid, Point, astar_to, manhattan};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 15, tags = ["astar", "grid"])]
pub struct Solver;

const FULL_MAP_TILES: usize = 5;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |c| {
            c.to_digit(10)
                .filter(|d| (1..=9).contains(d))
                .map(|d| d as u8)
                .ok_or_else(|| anyhow!("expected risk level 1-9, found {:?}", c))
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(risk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_total_risk(risk, 1).map(|r| r.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(risk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_total_risk(risk, FULL_MAP_TILES).map(|r| r.to_string())
    }
}

/// Lowest total risk from the top-left to the bottom-right corner of the map
/// tiled `tiles` x `tiles` times. The starting cell is never entered, so its
/// risk does not count.
pub fn lowest_total_risk(risk: &Grid<u8>, tiles: usize) -> Result<u64, SolveError> {
    let (tile_w, tile_h) = (risk.width() as i64, risk.height() as i64);
    let (width, height) = (tile_w * tiles as i64, tile_h * tiles as i64);

    let risk_at = |p: Point| -> Option<u64> {
        if p.row < 0 || p.col < 0 || p.row >= height || p.col >= width {
            return None;
        }
        let base = *risk.get(Point::new(p.row % tile_h, p.col % tile_w))?;
        let shift = (p.row / tile_h + p.col / tile_w) as u64;
        Some((u64::from(base) - 1 + shift) % 9 + 1)
    };

    let start = Point::new(0, 0);
    let end = Point::new(height - 1, width - 1);
    astar_to(
        start,
        &end,
        |p: &Point| {
            p.cardinal_neighbors()
                .into_iter()
                .filter_map(|n| risk_at(n).map(|r| (n, r)))
                .collect::<Vec<_>>()
        },
        // every cell costs at least 1
        |p| manhattan(*p, end),
    )
    .ok_or_else(|| SolveError::SolveFailed(anyhow!("no path to {}", end).into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    #[test]
    fn test_sample_part1() {
        let mut risk = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut risk).unwrap(), "40");
    }

    #[test]
    fn test_sample_part2() {
        let mut risk = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut risk).unwrap(), "315");
    }

    #[test]
    fn test_tiled_risk_wraps() {
        // A single 8 tiled 3x3: 8 9 1 / 9 1 2 / 1 2 3, cheapest is 9+1+2+3.
        let risk = Solver::parse("8").unwrap();
        assert_eq!(lowest_total_risk(&risk, 3).unwrap(), 15);
        assert_eq!(lowest_total_risk(&risk, 1).unwrap(), 0);
    }

    #[test]
    fn test_rejects_zero_risk() {
        assert!(matches!(Solver::parse("12\n30\n"), Err(ParseError::InvalidFormat(_))));
    }
}
