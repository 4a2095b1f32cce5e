use pathviz_core::Coord;

use crate::error::SearchError;
use crate::neighbors::{CARDINAL_REVERSE, Neighbors};
use crate::result::SearchResult;
use crate::space::{NO_PARENT, SearchSpace};
use crate::traits::Terrain;

/// Depth-first search from `start` to `end`.
///
/// Same bookkeeping as [`bfs`](crate::bfs) but with a LIFO stack and the
/// neighbour order left, up, right, down. Returns the first path reached,
/// which is generally not the shortest.
pub fn dfs<T: Terrain + ?Sized>(
    terrain: &T,
    start: Coord,
    end: Coord,
) -> Result<SearchResult, SearchError> {
    let space = SearchSpace::new(terrain, start, end)?;

    let mut seen = vec![false; space.len()];
    let mut parents = vec![NO_PARENT; space.len()];
    let mut stack: Vec<usize> = Vec::new();
    let mut visited = Vec::new();
    let mut nbuf = Neighbors::new();

    seen[space.start] = true;
    stack.push(space.start);

    while let Some(ci) = stack.pop() {
        let cp = space.point(ci);
        visited.push(cp);

        if ci == space.goal {
            return Ok(space.found("dfs", &parents, visited));
        }

        for &np in nbuf.expand(cp, &CARDINAL_REVERSE, |n| space.passable(n)) {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            if seen[ni] {
                continue;
            }
            seen[ni] = true;
            parents[ni] = ci;
            stack.push(ni);
        }
    }

    Ok(space.exhausted("dfs", visited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Grid;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn dives_down_first() {
        let grid = Grid::parse(
            "
S....
.....
..#..
.....
....E",
        )
        .unwrap();
        let r = dfs(&grid, c(0, 0), c(4, 4)).unwrap();
        let expected = vec![c(0, 0), c(1, 0), c(2, 0), c(3, 0), c(4, 0), c(4, 1), c(4, 2), c(4, 3), c(4, 4)];
        assert_eq!(r.visited, expected);
        assert_eq!(r.path, expected);
    }

    #[test]
    fn path_need_not_be_shortest() {
        let grid = Grid::new(3, 4).unwrap();
        let r = dfs(&grid, c(1, 0), c(1, 3)).unwrap();
        assert_eq!(r.visited, vec![c(1, 0), c(2, 0), c(2, 1), c(2, 2), c(2, 3), c(1, 3)]);
        assert_eq!(r.path, vec![c(1, 0), c(2, 0), c(2, 1), c(2, 2), c(2, 3), c(1, 3)]);
        assert_eq!(r.steps(), 5);
    }

    #[test]
    fn blocked_end_visits_component() {
        let grid = Grid::parse(
            "
S.#..
..#..
..#..
..#..
..#.E",
        )
        .unwrap();
        let r = dfs(&grid, c(0, 0), c(4, 4)).unwrap();
        assert!(r.path.is_empty());
        assert_eq!(
            r.visited,
            vec![c(0, 0), c(1, 0), c(2, 0), c(3, 0), c(4, 0), c(4, 1), c(3, 1), c(2, 1), c(1, 1), c(0, 1)]
        );
    }

    #[test]
    fn path_is_connected() {
        let grid = Grid::parse(
            "
S.#...
.##.#.
...#..
.#...#
...#.E",
        )
        .unwrap();
        let r = dfs(&grid, c(0, 0), c(4, 5)).unwrap();
        assert!(r.found());
        assert_eq!(r.path.first(), Some(&c(0, 0)));
        assert_eq!(r.path.last(), Some(&c(4, 5)));
        for w in r.path.windows(2) {
            assert!(w[0].is_orthogonal_to(w[1]));
            assert!(!grid.is_wall(w[1]));
        }
    }
}
