//! The editable [`Board`]: a grid with a pinned start and end.

use crate::cell::CellState;
use crate::error::GridError;
use crate::geom::Coord;
use crate::grid::Grid;

/// A grid whose start and end cells are fixed, with walls painted in
/// between.
///
/// The board upholds the search preconditions at all times: exactly one
/// start, exactly one end, distinct, and never covered by a wall. With the
/// `serde` feature a board is stored as its grid and re-validated through
/// [`Board::from_grid`] when read back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "Grid", try_from = "Grid"))]
pub struct Board {
    grid: Grid,
    start: Coord,
    end: Coord,
}

impl Board {
    /// Create an empty `rows`×`cols` board with the start in the top-left
    /// corner and the end in the bottom-right corner.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let grid = Grid::new(rows, cols)?;
        let end = grid.coord(grid.len() - 1);
        Self::place(grid, Coord::ORIGIN, end)
    }

    /// Create an empty board with explicit endpoints.
    pub fn with_endpoints(
        rows: usize,
        cols: usize,
        start: Coord,
        end: Coord,
    ) -> Result<Self, GridError> {
        Self::place(Grid::new(rows, cols)?, start, end)
    }

    fn place(mut grid: Grid, start: Coord, end: Coord) -> Result<Self, GridError> {
        if !grid.contains(start) {
            return Err(GridError::OutOfBounds(start));
        }
        if !grid.contains(end) {
            return Err(GridError::OutOfBounds(end));
        }
        if start == end {
            return Err(GridError::EndpointsCoincide(start));
        }
        grid.set(start, CellState::Start);
        grid.set(end, CellState::End);
        Ok(Self { grid, start, end })
    }

    /// Adopt an existing grid, which must carry exactly one start and one
    /// end marker.
    pub fn from_grid(grid: Grid) -> Result<Self, GridError> {
        let (start, end) = grid.endpoints()?;
        Ok(Self { grid, start, end })
    }

    /// Parse a board from the `.#SE` text form.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        Self::from_grid(Grid::parse(s)?)
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Flip the cell at `c` between empty and wall.
    ///
    /// Returns `false` without changing anything when `c` is the start,
    /// the end, or out of bounds.
    pub fn toggle_wall(&mut self, c: Coord) -> bool {
        let next = match self.grid.at(c) {
            Some(CellState::Empty) => CellState::Wall,
            Some(CellState::Wall) => CellState::Empty,
            _ => return false,
        };
        self.grid.set(c, next)
    }

    /// Remove every wall, keeping the endpoints.
    pub fn clear(&mut self) {
        self.grid.fill(CellState::Empty);
        self.grid.set(self.start, CellState::Start);
        self.grid.set(self.end, CellState::End);
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.grid.iter().filter(|&(_, s)| s.is_wall()).count()
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board.grid
    }
}

impl TryFrom<Grid> for Board {
    type Error = GridError;

    fn try_from(grid: Grid) -> Result<Self, GridError> {
        Self::from_grid(grid)
    }
}
