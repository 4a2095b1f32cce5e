use std::fmt;

use pathviz_core::Coord;

/// Precondition violations detected before a search starts.
///
/// An unreachable end is not an error: it yields a
/// [`SearchResult`](crate::SearchResult) with an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Zero rows or zero columns.
    EmptyGrid,
    /// Raw rows of differing widths.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    StartOutOfBounds(Coord),
    EndOutOfBounds(Coord),
    /// Start and end are the same cell.
    SameEndpoints(Coord),
    StartOnWall(Coord),
    EndOnWall(Coord),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "search: grid has no cells"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "search: row {row} has {found} cells, expected {expected}"
            ),
            Self::StartOutOfBounds(c) => write!(f, "search: start {c} is out of bounds"),
            Self::EndOutOfBounds(c) => write!(f, "search: end {c} is out of bounds"),
            Self::SameEndpoints(c) => write!(f, "search: start and end are both {c}"),
            Self::StartOnWall(c) => write!(f, "search: start {c} is a wall"),
            Self::EndOnWall(c) => write!(f, "search: end {c} is a wall"),
        }
    }
}

impl std::error::Error for SearchError {}
