use std::cmp::Ordering;

use pathviz_core::Coord;

use crate::error::SearchError;
use crate::result::SearchResult;
use crate::traits::Terrain;

/// Parent sentinel for the start cell and for cells never reached.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Heap entry for Dijkstra / A*
// ---------------------------------------------------------------------------

/// Reference into the per-cell arrays, ordered for use in `BinaryHeap`.
///
/// Lowest `cost` pops first; among equal costs, lowest `tie` pops first.
/// Dijkstra uses the row-major index as `tie`, A* the open-set join order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: f64,
    pub(crate) tie: usize,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Validated view of one search: terrain, endpoints and index helpers.
///
/// Built once per call; the engines keep their own scratch vectors of
/// length [`len`](Self::len) indexed by flat row-major position.
pub(crate) struct SearchSpace<'a, T: Terrain + ?Sized> {
    terrain: &'a T,
    cols: usize,
    len: usize,
    pub(crate) start: usize,
    pub(crate) goal: usize,
}

impl<'a, T: Terrain + ?Sized> SearchSpace<'a, T> {
    /// Check the search preconditions and resolve the endpoints.
    pub(crate) fn new(terrain: &'a T, start: Coord, end: Coord) -> Result<Self, SearchError> {
        let checked = Self::check(terrain, start, end);
        if let Err(e) = &checked {
            log::debug!("rejected search {start} -> {end}: {e}");
        }
        checked
    }

    fn check(terrain: &'a T, start: Coord, end: Coord) -> Result<Self, SearchError> {
        terrain.check_shape()?;
        if !terrain.contains(start) {
            return Err(SearchError::StartOutOfBounds(start));
        }
        if !terrain.contains(end) {
            return Err(SearchError::EndOutOfBounds(end));
        }
        if start == end {
            return Err(SearchError::SameEndpoints(start));
        }
        if terrain.is_wall(start) {
            return Err(SearchError::StartOnWall(start));
        }
        if terrain.is_wall(end) {
            return Err(SearchError::EndOnWall(end));
        }
        let cols = terrain.cols();
        let mut space = Self {
            terrain,
            cols,
            len: terrain.rows() * cols,
            start: 0,
            goal: 0,
        };
        space.start = space.flat(start);
        space.goal = space.flat(end);
        Ok(space)
    }

    /// Number of cells.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn flat(&self, c: Coord) -> usize {
        c.row as usize * self.cols + c.col as usize
    }

    /// Flat index of `c` if it can be stepped on.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if self.terrain.passable(c) {
            Some(self.flat(c))
        } else {
            None
        }
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Whether `c` can be stepped on.
    #[inline]
    pub(crate) fn passable(&self, c: Coord) -> bool {
        self.terrain.passable(c)
    }

    /// Finish a search that reached the goal: walk `parents` back from the
    /// goal to rebuild the path.
    pub(crate) fn found(&self, name: &str, parents: &[usize], visited: Vec<Coord>) -> SearchResult {
        let mut path = Vec::new();
        let mut ci = self.goal;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = parents[ci];
        }
        path.reverse();
        log::debug!(
            "{name}: {} -> {} found path of {} cells after {} expansions",
            self.point(self.start),
            self.point(self.goal),
            path.len(),
            visited.len()
        );
        SearchResult { path, visited }
    }

    /// Finish a search whose frontier ran dry.
    pub(crate) fn exhausted(&self, name: &str, visited: Vec<Coord>) -> SearchResult {
        log::debug!(
            "{name}: {} -> {} unreachable after {} expansions",
            self.point(self.start),
            self.point(self.goal),
            visited.len()
        );
        SearchResult {
            path: Vec::new(),
            visited,
        }
    }
}
