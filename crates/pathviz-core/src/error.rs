use std::fmt;

use crate::geom::Coord;

/// Errors that can occur when building, parsing or validating a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows or no columns.
    Empty,
    /// Rows have inconsistent widths.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The dimensions exceed [`Grid::MAX_CELLS`](crate::Grid::MAX_CELLS)
    /// or do not fit a [`Coord`].
    TooLarge { rows: usize, cols: usize },
    /// The cell buffer does not match `rows * cols`.
    CellCount { expected: usize, found: usize },
    /// A character outside `.#SE` was found while parsing.
    InvalidChar { ch: char, pos: Coord },
    /// No cell is marked as start.
    MissingStart,
    /// No cell is marked as end.
    MissingEnd,
    /// A second start cell was found at the given coordinate.
    DuplicateStart(Coord),
    /// A second end cell was found at the given coordinate.
    DuplicateEnd(Coord),
    /// A coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// Start and end were placed on the same cell.
    EndpointsCoincide(Coord),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows or no columns"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::TooLarge { rows, cols } => {
                write!(f, "grid: {rows}x{cols} is too large")
            }
            Self::CellCount { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid cell \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "grid: no start cell"),
            Self::MissingEnd => write!(f, "grid: no end cell"),
            Self::DuplicateStart(c) => write!(f, "grid: second start cell at {c}"),
            Self::DuplicateEnd(c) => write!(f, "grid: second end cell at {c}"),
            Self::OutOfBounds(c) => write!(f, "grid: {c} is out of bounds"),
            Self::EndpointsCoincide(c) => write!(f, "grid: start and end both at {c}"),
        }
    }
}

impl std::error::Error for GridError {}
