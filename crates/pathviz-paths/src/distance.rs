use pathviz_core::Coord;

/// Cost of a diagonal step. Kept at the literal 1.414 rather than √2 so
/// that A* scores match the visualizer's reference traces bit for bit.
pub const DIAGONAL_COST: f64 = 1.414;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}

/// Cost of one step between adjacent cells: 1 orthogonally,
/// [`DIAGONAL_COST`] diagonally.
#[inline]
pub fn step_cost(from: Coord, to: Coord) -> f64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        1.0
    }
}

/// Total step cost along `path`. Zero for paths shorter than two cells.
pub fn path_cost(path: &[Coord]) -> f64 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn step_costs() {
        let c = Coord::new(2, 2);
        assert_eq!(step_cost(c, Coord::new(2, 3)), 1.0);
        assert_eq!(step_cost(c, Coord::new(3, 3)), DIAGONAL_COST);
    }

    #[test]
    fn path_cost_sums_steps() {
        assert_eq!(path_cost(&[]), 0.0);
        assert_eq!(path_cost(&[Coord::ORIGIN]), 0.0);
        let path = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(1, 2)];
        assert!((path_cost(&path) - 2.414).abs() < 1e-9);
    }
}
