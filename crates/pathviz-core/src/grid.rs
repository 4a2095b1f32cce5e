//! The [`Grid`] type, a rectangular, row-major array of [`CellState`]s.
//!
//! A `Grid` is a plain value: cloning copies the cells. Search engines only
//! ever borrow it immutably.

use std::fmt;

use crate::cell::CellState;
use crate::error::GridError;
use crate::geom::Coord;

/// A rectangular grid of cell states addressed by [`Coord`].
///
/// Deserialising goes through the same size checks as [`Grid::new`], so a
/// cell buffer that disagrees with `rows * cols` is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    cells: Vec<CellState>,
    rows: usize,
    cols: usize,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<CellState>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        let expected = Grid::checked_len(repr.rows, repr.cols)?;
        if repr.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: repr.cells.len(),
            });
        }
        Ok(Self {
            cells: repr.cells,
            rows: repr.rows,
            cols: repr.cols,
        })
    }
}

impl Grid {
    /// Upper bound on the number of cells in a grid.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Cell count for `rows`×`cols`, if those are usable dimensions: both
    /// non-zero, each addressable by a [`Coord`], and at most
    /// [`MAX_CELLS`](Self::MAX_CELLS) in total.
    fn checked_len(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let too_large = GridError::TooLarge { rows, cols };
        if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
            return Err(too_large);
        }
        match rows.checked_mul(cols) {
            Some(n) if n <= Self::MAX_CELLS => Ok(n),
            _ => Err(too_large),
        }
    }

    /// Create a grid of the given dimensions with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        Ok(Self {
            cells: vec![CellState::Empty; len],
            rows,
            cols,
        })
    }

    /// Build a grid from explicit rows, which must all have the same width.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let len = Self::checked_len(rows.len(), cols)?;
        let mut cells = Vec::with_capacity(len);
        for (r, line) in rows.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend_from_slice(line);
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Parse the `.#SE` text form.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Every line must have the same width. Start
    /// and end markers are not validated here; see
    /// [`endpoints`](Self::endpoints).
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut rows = Vec::new();
        for (r, line) in s.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let state = CellState::from_char(ch).ok_or(GridError::InvalidChar {
                    ch,
                    pos: Coord::new(r as i32, c as i32),
                })?;
                row.push(state);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.row as usize * self.cols + c.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Read the cell at `c`, or `None` if `c` is out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether the cell at `c` is a wall. Out-of-bounds reads as not a wall.
    #[inline]
    pub fn is_wall(&self, c: Coord) -> bool {
        self.at(c).is_some_and(CellState::is_wall)
    }

    /// Write the cell at `c`. Returns `false` (and does nothing) if `c` is
    /// out of bounds.
    pub fn set(&mut self, c: Coord, state: CellState) -> bool {
        match self.index(c) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (self.coord(i), s))
    }

    /// Locate the start and end markers, requiring exactly one of each.
    pub fn endpoints(&self) -> Result<(Coord, Coord), GridError> {
        let mut start = None;
        let mut end = None;
        for (c, s) in self.iter() {
            match s {
                CellState::Start if start.is_some() => return Err(GridError::DuplicateStart(c)),
                CellState::Start => start = Some(c),
                CellState::End if end.is_some() => return Err(GridError::DuplicateEnd(c)),
                CellState::End => end = Some(c),
                _ => {}
            }
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;
        Ok((start, end))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for s in row {
                write!(f, "{s}")?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("S#\n.E").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn deserialize_rejects_short_cell_buffer() {
        let err = serde_json::from_str::<Grid>(r#"{"cells":["start"],"rows":3,"cols":3}"#)
            .unwrap_err();
        assert!(err.to_string().contains("expected 9 cells, found 1"));
    }

    #[test]
    fn deserialize_rejects_bad_dimensions() {
        assert!(serde_json::from_str::<Grid>(r#"{"cells":[],"rows":0,"cols":0}"#).is_err());
        let huge = r#"{"cells":["empty"],"rows":65536,"cols":65536}"#;
        let err = serde_json::from_str::<Grid>(huge).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn cell_state_is_lowercase() {
        let json = serde_json::to_string(&CellState::Wall).unwrap();
        assert_eq!(json, "\"wall\"");
    }
}
