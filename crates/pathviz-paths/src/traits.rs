use pathviz_core::{Board, CellState, Coord, Grid};

use crate::error::SearchError;

/// Read-only view of a grid that the search engines walk over.
pub trait Terrain {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Whether the in-bounds cell `c` blocks movement.
    fn is_wall(&self, c: Coord) -> bool;

    /// Check that the terrain is a non-empty rectangle.
    fn check_shape(&self) -> Result<(), SearchError> {
        if self.rows() == 0 || self.cols() == 0 {
            return Err(SearchError::EmptyGrid);
        }
        Ok(())
    }

    /// Whether `c` lies inside the terrain.
    #[inline]
    fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows() && (c.col as usize) < self.cols()
    }

    /// In bounds and not a wall.
    #[inline]
    fn passable(&self, c: Coord) -> bool {
        self.contains(c) && !self.is_wall(c)
    }
}

impl Terrain for Grid {
    fn rows(&self) -> usize {
        Grid::rows(self)
    }

    fn cols(&self) -> usize {
        Grid::cols(self)
    }

    fn is_wall(&self, c: Coord) -> bool {
        Grid::is_wall(self, c)
    }
}

impl Terrain for Board {
    fn rows(&self) -> usize {
        self.grid().rows()
    }

    fn cols(&self) -> usize {
        self.grid().cols()
    }

    fn is_wall(&self, c: Coord) -> bool {
        self.grid().is_wall(c)
    }
}

/// Raw rows as handed over by a caller that never built a [`Grid`]. The
/// width is taken from the first row; ragged rows fail [`check_shape`].
///
/// [`check_shape`]: Terrain::check_shape
impl Terrain for Vec<Vec<CellState>> {
    fn rows(&self) -> usize {
        self.len()
    }

    fn cols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn is_wall(&self, c: Coord) -> bool {
        if c.row < 0 || c.col < 0 {
            return false;
        }
        self.get(c.row as usize)
            .and_then(|row| row.get(c.col as usize))
            .is_some_and(|s| s.is_wall())
    }

    fn check_shape(&self) -> Result<(), SearchError> {
        let expected = Terrain::cols(self);
        if self.is_empty() || expected == 0 {
            return Err(SearchError::EmptyGrid);
        }
        for (row, line) in self.iter().enumerate() {
            if line.len() != expected {
                return Err(SearchError::RaggedRows {
                    row,
                    expected,
                    found: line.len(),
                });
            }
        }
        Ok(())
    }
}
