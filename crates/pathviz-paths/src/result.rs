use pathviz_core::Coord;

use crate::distance::path_cost;

/// Outcome of one search: the expansion trace and the path found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Start to end inclusive, or empty if the end was not reached.
    pub path: Vec<Coord>,
    /// Every cell in the order it was expanded. Starts with the start cell.
    pub visited: Vec<Coord>,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Path cost with diagonal steps weighted by
    /// [`DIAGONAL_COST`](crate::DIAGONAL_COST).
    pub fn cost(&self) -> f64 {
        path_cost(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_reports_no_path() {
        let r = SearchResult {
            path: Vec::new(),
            visited: vec![Coord::ORIGIN],
        };
        assert!(!r.found());
        assert_eq!(r.steps(), 0);
        assert_eq!(r.cost(), 0.0);
    }

    #[test]
    fn steps_count_moves() {
        let r = SearchResult {
            path: vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)],
            visited: Vec::new(),
        };
        assert!(r.found());
        assert_eq!(r.steps(), 2);
        assert_eq!(r.cost(), 2.0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_round_trip() {
        let r = SearchResult {
            path: vec![Coord::new(0, 0), Coord::new(1, 1)],
            visited: vec![Coord::new(0, 0), Coord::new(1, 1)],
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
