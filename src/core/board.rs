//! Board geometry: points, adjacency, and mill lines.
//!
//! The 24 points sit on three concentric squares joined by midpoint spokes,
//! numbered row by row from the top:
//!
//! ```text
//! 0----------1----------2
//! |          |          |
//! |  3-------4-------5  |
//! |  |       |       |  |
//! |  |  6----7----8  |  |
//! |  |  |         |  |  |
//! 9--10-11        12-13-14
//! |  |  |         |  |  |
//! |  |  15---16---17 |  |
//! |  |       |       |  |
//! |  18------19------20 |
//! |          |          |
//! 21---------22---------23
//! ```
//!
//! Mill lines are derived from the adjacency graph and point coordinates
//! rather than listed by hand.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Color;

/// Number of points on the board.
pub const POINTS: usize = 24;

/// A line of three points.
pub type Line = [usize; 3];

/// Neighbors of each point, ascending.
pub const ADJACENCY: [&[usize]; POINTS] = [
    &[1, 9],
    &[0, 2, 4],
    &[1, 14],
    &[4, 10],
    &[1, 3, 5, 7],
    &[4, 13],
    &[7, 11],
    &[4, 6, 8],
    &[7, 12],
    &[0, 10, 21],
    &[3, 9, 11, 18],
    &[6, 10, 15],
    &[8, 13, 17],
    &[5, 12, 14, 20],
    &[2, 13, 23],
    &[11, 16],
    &[15, 17, 19],
    &[12, 16],
    &[10, 19],
    &[16, 18, 20, 22],
    &[13, 19],
    &[9, 22],
    &[19, 21, 23],
    &[14, 22],
];

/// Lattice coordinates (column, row) of each point on a 7x7 grid.
#[rustfmt::skip]
const COORDS: [(u8, u8); POINTS] = [
    (0, 0), (3, 0), (6, 0),
    (1, 1), (3, 1), (5, 1),
    (2, 2), (3, 2), (4, 2),
    (0, 3), (1, 3), (2, 3), (4, 3), (5, 3), (6, 3),
    (2, 4), (3, 4), (4, 4),
    (1, 5), (3, 5), (5, 5),
    (0, 6), (3, 6), (6, 6),
];

/// Whether `b` is a direct neighbor of `a`.
#[must_use]
pub fn is_adjacent(a: usize, b: usize) -> bool {
    a < POINTS && ADJACENCY[a].contains(&b)
}

/// The canonical mill lines, sorted.
///
/// A line is a point together with two of its neighbors when all three share
/// a row or a column. Each triple is normalised and deduplicated by membership.
pub fn mills() -> &'static [Line] {
    static MILLS: OnceLock<Vec<Line>> = OnceLock::new();
    MILLS.get_or_init(|| {
        let mut seen: FxHashSet<Line> = FxHashSet::default();
        for middle in 0..POINTS {
            for &a in ADJACENCY[middle] {
                for &c in ADJACENCY[middle] {
                    if a != c && collinear(a, middle, c) {
                        let mut line = [a, middle, c];
                        line.sort_unstable();
                        seen.insert(line);
                    }
                }
            }
        }
        let mut lines: Vec<Line> = seen.into_iter().collect();
        lines.sort_unstable();
        lines
    })
}

fn collinear(a: usize, b: usize, c: usize) -> bool {
    let (pa, pb, pc) = (COORDS[a], COORDS[b], COORDS[c]);
    (pa.0 == pb.0 && pb.0 == pc.0) || (pa.1 == pb.1 && pb.1 == pc.1)
}

/// Mill lines passing through `point` (always two for a valid point).
#[must_use]
pub fn mills_through(point: usize) -> SmallVec<[Line; 2]> {
    mills()
        .iter()
        .filter(|line| line.contains(&point))
        .copied()
        .collect()
}

/// Contents of a single point.
///
/// Serialized as `" "`, `"W"` or `"B"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = " ")]
    Empty,
    #[serde(rename = "W")]
    White,
    #[serde(rename = "B")]
    Black,
}

impl Cell {
    /// The color occupying this cell, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Color::White),
            Cell::Black => Some(Color::Black),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }
}

/// The 24 points of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; POINTS],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from cells, returning `None` unless exactly 24 are given.
    #[must_use]
    pub fn from_cells(cells: &[Cell]) -> Option<Self> {
        let cells: [Cell; POINTS] = cells.try_into().ok()?;
        Some(Self { cells })
    }

    /// Contents of `point`, or `None` if it is off the board.
    #[must_use]
    pub fn get(&self, point: usize) -> Option<Cell> {
        self.cells.get(point).copied()
    }

    pub(crate) fn set(&mut self, point: usize, cell: Cell) {
        self.cells[point] = cell;
    }

    /// All cells in point order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; POINTS] {
        &self.cells
    }

    /// Points holding `color`, ascending.
    pub fn points_of(&self, color: Color) -> impl Iterator<Item = usize> + '_ {
        let cell = Cell::from(color);
        (0..POINTS).filter(move |&p| self.cells[p] == cell)
    }

    /// Empty points, ascending.
    pub fn empty_points(&self) -> impl Iterator<Item = usize> + '_ {
        (0..POINTS).filter(move |&p| self.cells[p].is_empty())
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.points_of(color).count()
    }

    /// Whether the piece on `point` lies on a complete line of its own color.
    ///
    /// Empty points never form mills.
    #[must_use]
    pub fn forms_mill(&self, point: usize) -> bool {
        let Some(color) = self.get(point).and_then(Cell::color) else {
            return false;
        };
        let cell = Cell::from(color);
        mills_through(point)
            .iter()
            .any(|line| line.iter().all(|&p| self.cells[p] == cell))
    }

    /// Number of complete lines held by `color`.
    #[must_use]
    pub fn complete_mills(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        mills()
            .iter()
            .filter(|line| line.iter().all(|&p| self.cells[p] == cell))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: Vec<String> = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell.color() {
                Some(color) => color.symbol().to_string(),
                None => i.to_string(),
            })
            .collect();
        writeln!(f, "{:<2}---------{:^3}---------{:>2}", s[0], s[1], s[2])?;
        writeln!(f, "|           |           |")?;
        writeln!(f, "|  {:<2}------{:^3}------{:>2}  |", s[3], s[4], s[5])?;
        writeln!(f, "|  |        |        |  |")?;
        writeln!(f, "|  |  {:<2}---{:^3}---{:>2}  |  |", s[6], s[7], s[8])?;
        writeln!(f, "|  |  |           |  |  |")?;
        writeln!(
            f,
            "{:<2}-{:^3}-{:>2}        {:<2}-{:^3}-{:>2}",
            s[9], s[10], s[11], s[12], s[13], s[14]
        )?;
        writeln!(f, "|  |  |           |  |  |")?;
        writeln!(f, "|  |  {:<2}---{:^3}---{:>2}  |  |", s[15], s[16], s[17])?;
        writeln!(f, "|  |        |        |  |")?;
        writeln!(f, "|  {:<2}------{:^3}------{:>2}  |", s[18], s[19], s[20])?;
        writeln!(f, "|           |           |")?;
        write!(f, "{:<2}---------{:^3}---------{:>2}", s[21], s[22], s[23])
    }
}
