//! RAM Run
//!
//! Bytes fall one at a time onto a square memory grid, each corrupting the
//! cell it lands on. Part 1 is a shortest path after the first kilobyte has
//! fallen. Part 2 wants the first byte after which the exit is cut off.
//!
//! Every prefix of the byte list is an independent search, so part 2
//! re-plans prefixes in parallel and keeps the shortest one that blocks.
//! The prefix of length `n` is the first to block exactly when byte `n - 1`
//! is the culprit.

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::grid_search::{Grid, Point, astar_to, manhattan};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["astar", "grid", "parallel"])]
pub struct Solver;

/// Largest coordinate on the memory grid; the grid is `MAX_COORD + 1` wide.
const MAX_COORD: i64 = 70;
const FIRST_FALLEN: usize = 1024;

impl AocParser for Solver {
    /// Byte positions in fall order, as `(row, col) = (y, x)`.
    type SharedData<'a> = Vec<Point>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                parse_byte(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_byte(line: &str) -> anyhow::Result<Point> {
    let Some((x, y)) = line.split_once(',') else {
        bail!("expected \"x,y\", found {:?}", line);
    };
    let x: i64 = x.trim().parse()?;
    let y: i64 = y.trim().parse()?;
    Ok(Point::new(y, x))
}

impl PartSolver<1> for Solver {
    fn solve(bytes: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fallen = &bytes[..FIRST_FALLEN.min(bytes.len())];
        escape_steps(fallen, MAX_COORD)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("exit blocked after {} bytes", fallen.len()).into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(bytes: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_blocking_byte(bytes, MAX_COORD, FIRST_FALLEN.min(bytes.len()))
            .map(|byte| format!("{},{}", byte.col, byte.row))
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no byte ever blocks the exit").into()))
    }
}

/// Fewest steps from the top-left to the bottom-right corner of a grid with
/// coordinates `0..=max_coord`, after every byte in `fallen` has landed.
/// Bytes outside the grid are ignored.
pub fn escape_steps(fallen: &[Point], max_coord: i64) -> Option<u64> {
    let side = (max_coord + 1) as usize;
    let mut corrupted = Grid::new(side, side, false);
    for &byte in fallen {
        if let Some(cell) = corrupted.get_mut(byte) {
            *cell = true;
        }
    }

    let end = Point::new(max_coord, max_coord);
    astar_to(
        Point::new(0, 0),
        &end,
        |p: &Point| {
            corrupted
                .cardinal_neighbors(*p)
                .filter(|&n| corrupted.get(n) == Some(&false))
                .map(|n| (n, 1))
                .collect::<Vec<_>>()
        },
        |p| manhattan(*p, end),
    )
}

/// The first byte whose fall cuts the exit off.
///
/// `known_open` is a prefix length expected to leave the exit reachable; the
/// search skips the shorter prefixes when that holds and falls back to
/// scanning from the empty prefix when it does not.
pub fn first_blocking_byte(bytes: &[Point], max_coord: i64, known_open: usize) -> Option<Point> {
    let mut from = known_open.min(bytes.len());
    if escape_steps(&bytes[..from], max_coord).is_none() {
        log::debug!("exit already blocked after {} bytes, scanning from the start", from);
        from = 0;
    }
    let blocked_len = (from..=bytes.len())
        .into_par_iter()
        .find_first(|&n| escape_steps(&bytes[..n], max_coord).is_none())?;
    log::debug!("exit first blocked by prefix of {} bytes", blocked_len);
    blocked_len.checked_sub(1).and_then(|i| bytes.get(i)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";
    const SAMPLE_MAX_COORD: i64 = 6;
    const SAMPLE_FALLEN: usize = 12;

    #[test]
    fn test_sample_part1() {
        let bytes = Solver::parse(SAMPLE).unwrap();
        assert_eq!(bytes[0], Point::new(4, 5));
        assert_eq!(escape_steps(&bytes[..SAMPLE_FALLEN], SAMPLE_MAX_COORD), Some(22));
    }

    #[test]
    fn test_sample_part2() {
        let bytes = Solver::parse(SAMPLE).unwrap();
        let byte = first_blocking_byte(&bytes, SAMPLE_MAX_COORD, SAMPLE_FALLEN).unwrap();
        assert_eq!((byte.col, byte.row), (6, 1));
    }

    #[test]
    fn test_prefix_search_agrees_with_sequential_scan() {
        let bytes = Solver::parse(SAMPLE).unwrap();
        let sequential = (0..=bytes.len())
            .find(|&n| escape_steps(&bytes[..n], SAMPLE_MAX_COORD).is_none())
            .map(|n| bytes[n - 1]);
        assert_eq!(first_blocking_byte(&bytes, SAMPLE_MAX_COORD, 0), sequential);
    }

    #[test]
    fn test_blocked_before_known_open_prefix() {
        // 2x2 grid: the first two bytes wall in the start, the rest land outside.
        let bytes = vec![Point::new(0, 1), Point::new(1, 0), Point::new(5, 5), Point::new(5, 4)];
        assert_eq!(first_blocking_byte(&bytes, 1, 3), Some(Point::new(1, 0)));
        assert_eq!(first_blocking_byte(&bytes, 1, 10), Some(Point::new(1, 0)));
    }

    #[test]
    fn test_never_blocked() {
        let bytes = Solver::parse("1,1\n2,2\n").unwrap();
        assert_eq!(first_blocking_byte(&bytes, SAMPLE_MAX_COORD, 0), None);
        assert_eq!(escape_steps(&bytes, SAMPLE_MAX_COORD), Some(12));
    }

    #[test]
    fn test_parse_errors_carry_line() {
        let err = Solver::parse("1,2\n3;4\n").unwrap_err();
        assert!(matches!(&err, ParseError::InvalidFormat(msg) if msg.contains("line 2")), "{}", err);
    }
}
