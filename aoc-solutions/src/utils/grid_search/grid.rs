//! Dense 2D grid model shared by the maze-style puzzles.

use std::fmt;
use std::ops::{Add, Sub};

use anyhow::{anyhow, bail};

/// A grid coordinate. Ordered row-major so it can break priority ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub row: i64,
    pub col: i64,
}

impl Point {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbours, unbounded. Order: N, E, S, W.
    pub fn cardinal_neighbors(self) -> [Point; 4] {
        Direction::ALL.map(|dir| self + dir.delta())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Compass heading on the grid; rows grow southwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Offset of one step in this direction.
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::new(-1, 0),
            Direction::East => Point::new(0, 1),
            Direction::South => Point::new(1, 0),
            Direction::West => Point::new(0, -1),
        }
    }

    pub const fn turn_left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub const fn turn_right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }
}

/// Rectangular grid stored row-major.
///
/// Lookups take [`Point`]s with signed coordinates so callers can probe
/// neighbours of edge cells without underflow checks; anything outside the
/// grid simply reads as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// A `width` x `height` grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Parse a block of text, one row per line, mapping each character with
    /// `cell`. Errors carry the 1-based line and column of the bad character.
    /// Rows must all have the same length and there must be at least one.
    pub fn parse_with<F>(input: &str, mut cell: F) -> anyhow::Result<Self>
    where
        F: FnMut(char) -> anyhow::Result<T>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (line_idx, line) in input.lines().map(str::trim_end).enumerate() {
            if line.is_empty() {
                continue;
            }
            let before = cells.len();
            for (col_idx, c) in line.chars().enumerate() {
                let value =
                    cell(c).map_err(|e| anyhow!("(line {}, col {}) {}", line_idx + 1, col_idx + 1, e))?;
                cells.push(value);
            }
            let row_width = cells.len() - before;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    bail!("(line {}) expected {} columns, found {}", line_idx + 1, w, row_width)
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or_else(|| anyhow!("grid is empty"))?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, p: Point) -> Option<usize> {
        let row = usize::try_from(p.row).ok()?;
        let col = usize::try_from(p.col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Every coordinate in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let width = self.width as i64;
        (0..self.height as i64).flat_map(move |row| (0..width).map(move |col| Point::new(row, col)))
    }

    /// First coordinate (row-major) whose cell matches `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.points().find(|&p| self.get(p).is_some_and(&mut pred))
    }

    /// In-bounds orthogonal neighbours of `p`.
    pub fn cardinal_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.cardinal_neighbors()
            .into_iter()
            .filter(move |&n| self.contains(n))
    }
}
