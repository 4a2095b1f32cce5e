use std::fmt;
use std::str::FromStr;

use pathviz_core::{Board, Coord};

use crate::error::SearchError;
use crate::result::SearchResult;
use crate::traits::Terrain;

/// The four search engines, selectable at runtime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// All engines in selector order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }

    /// Upper-case label for status messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "DIJKSTRA",
            Self::AStar => "ASTAR",
        }
    }

    /// The next engine in selector order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Run this engine.
    pub fn run<T: Terrain + ?Sized>(
        self,
        terrain: &T,
        start: Coord,
        end: Coord,
    ) -> Result<SearchResult, SearchError> {
        match self {
            Self::Bfs => crate::bfs(terrain, start, end),
            Self::Dfs => crate::dfs(terrain, start, end),
            Self::Dijkstra => crate::dijkstra(terrain, start, end),
            Self::AStar => crate::astar(terrain, start, end),
        }
    }

    /// Run this engine between a board's own start and end.
    pub fn solve(self, board: &Board) -> Result<SearchResult, SearchError> {
        self.run(board, board.start(), board.end())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dfs, dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_uses_lowercase_names() {
        let json = serde_json::to_string(&Algorithm::AStar).unwrap();
        assert_eq!(json, "\"astar\"");
        let back: Algorithm = serde_json::from_str("\"dijkstra\"").unwrap();
        assert_eq!(back, Algorithm::Dijkstra);
    }
}
