//! Parsing and per-part solving traits

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle text into the data every part works on.
///
/// The parsed value may borrow from the input, which is why `SharedData`
/// carries a lifetime.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// /// A one-row corridor: `.` floor, `#` wall, `S` the start.
/// struct Corridor;
///
/// impl AocParser for Corridor {
///     type SharedData<'a> = (&'a str, usize);
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let row = input.trim();
///         let start = row
///             .find('S')
///             .ok_or_else(|| ParseError::MissingData("start tile 'S'".to_string()))?;
///         Ok((row, start))
///     }
/// }
///
/// assert_eq!(Corridor::parse("#..S.#\n").unwrap(), ("#..S.#", 3));
/// assert!(Corridor::parse("#..#").is_err());
/// ```
pub trait AocParser {
    /// Parsed input plus anything the parts want to hand each other.
    ///
    /// Borrow from the input (`&'a str`) when no transformation is needed;
    /// otherwise own it.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// One impl per part keeps a missing part a compile error for the derive.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Corridor;
///
/// impl AocParser for Corridor {
///     type SharedData<'a> = Vec<bool>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim().chars().map(|c| c != '#').collect())
///     }
/// }
///
/// /// Longest run of open floor.
/// impl PartSolver<1> for Corridor {
///     fn solve(open: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let longest = open
///             .split(|&o| !o)
///             .map(<[bool]>::len)
///             .max()
///             .unwrap_or(0);
///         Ok(longest.to_string())
///     }
/// }
///
/// let mut open = Corridor::parse("..#....#.").unwrap();
/// assert_eq!(<Corridor as PartSolver<1>>::solve(&mut open).unwrap(), "4");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Dispatches a part number to its solution.
///
/// Usually generated by `#[derive(AocSolver)]`, which forwards part `N` to
/// the matching [`PartSolver`] impl.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Corridor;
///
/// impl AocParser for Corridor {
///     /// Cell row and the index of `S`.
///     type SharedData<'a> = (&'a [u8], usize);
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let row = input.trim().as_bytes();
///         let start = row
///             .iter()
///             .position(|&b| b == b'S')
///             .ok_or_else(|| ParseError::MissingData("start tile 'S'".to_string()))?;
///         Ok((row, start))
///     }
/// }
///
/// impl Solver for Corridor {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         let (row, start) = *shared;
///         let left = row[..start].iter().rev().take_while(|&&b| b != b'#').count();
///         let right = row[start + 1..].iter().take_while(|&&b| b != b'#').count();
///         match part {
///             // Cells reachable from the start, itself included.
///             1 => Ok((left + right + 1).to_string()),
///             // Steps to the nearer wall or edge.
///             2 => Ok((left.min(right) + 1).to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut corridor = Corridor::parse("#.#..S...#").unwrap();
/// assert_eq!(Corridor::solve_part(&mut corridor, 1).unwrap(), "6");
/// assert_eq!(Corridor::solve_part(&mut corridor, 2).unwrap(), "3");
/// ```
pub trait Solver: AocParser {
    const PARTS: u8;

    /// Answer for `part`, or [`SolveError::PartNotImplemented`] for a part
    /// with no solution.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked solving, available on every [`Solver`].
pub trait SolverExt: Solver {
    /// Solve `part`, rejecting 0 and anything above `PARTS` with
    /// [`SolveError::PartOutOfRange`] before delegating to `solve_part`.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
