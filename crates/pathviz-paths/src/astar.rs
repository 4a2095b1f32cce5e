use std::collections::BinaryHeap;

use pathviz_core::Coord;

use crate::distance::{manhattan, step_cost};
use crate::error::SearchError;
use crate::neighbors::{Neighbors, OCTILE};
use crate::result::SearchResult;
use crate::space::{NO_PARENT, NodeRef, SearchSpace};
use crate::traits::Terrain;

/// A* search from `start` to `end` over 8-connected cells.
///
/// Orthogonal moves cost 1 and diagonal moves cost
/// [`DIAGONAL_COST`](crate::DIAGONAL_COST); a diagonal move is allowed even
/// when both orthogonal cells beside it are walls. The heuristic is the
/// Manhattan distance to `end`.
///
/// The open cell with the lowest `f = g + h` is expanded next; ties go to
/// the cell that joined the open set earliest. A cell that was expanded and
/// later improved joins the open set again at the back and may appear more
/// than once in the trace.
pub fn astar<T: Terrain + ?Sized>(
    terrain: &T,
    start: Coord,
    end: Coord,
) -> Result<SearchResult, SearchError> {
    let space = SearchSpace::new(terrain, start, end)?;

    let mut g = vec![f64::INFINITY; space.len()];
    let mut f = vec![f64::INFINITY; space.len()];
    let mut parents = vec![NO_PARENT; space.len()];
    let mut in_open = vec![false; space.len()];
    // Position in the open set's join order, valid while `in_open`.
    let mut joined = vec![0usize; space.len()];
    let mut next_join = 0usize;

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut visited = Vec::new();
    let mut nbuf = Neighbors::new();

    g[space.start] = 0.0;
    f[space.start] = f64::from(manhattan(start, end));
    in_open[space.start] = true;
    joined[space.start] = next_join;
    next_join += 1;
    open.push(NodeRef {
        idx: space.start,
        cost: f[space.start],
        tie: joined[space.start],
    });

    loop {
        // An exhausted open set ends the search without a path.
        let Some(current) = open.pop() else {
            break;
        };
        let ci = current.idx;

        // Skip stale entries.
        if !in_open[ci] || joined[ci] != current.tie || f[ci] != current.cost {
            continue;
        }

        let cp = space.point(ci);
        visited.push(cp);

        if ci == space.goal {
            return Ok(space.found("astar", &parents, visited));
        }

        in_open[ci] = false;

        for &np in nbuf.expand(cp, &OCTILE, |n| space.passable(n)) {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            let tentative = g[ci] + step_cost(cp, np);
            if tentative >= g[ni] {
                continue;
            }

            parents[ni] = ci;
            g[ni] = tentative;
            f[ni] = tentative + f64::from(manhattan(np, end));
            if !in_open[ni] {
                in_open[ni] = true;
                joined[ni] = next_join;
                next_join += 1;
            }
            open.push(NodeRef {
                idx: ni,
                cost: f[ni],
                tie: joined[ni],
            });
        }
    }

    Ok(space.exhausted("astar", visited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DIAGONAL_COST;
    use pathviz_core::Grid;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn trace_around_center_wall() {
        let grid = Grid::parse(
            "
S....
.....
..#..
.....
....E",
        )
        .unwrap();
        let r = astar(&grid, c(0, 0), c(4, 4)).unwrap();
        let expected = vec![c(0, 0), c(1, 1), c(2, 1), c(3, 2), c(4, 3), c(4, 4)];
        assert_eq!(r.visited, expected);
        assert_eq!(r.path, expected);
    }

    #[test]
    fn trace_around_single_wall() {
        let grid = Grid::parse("S..\n.#.\n..E").unwrap();
        let r = astar(&grid, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(r.visited, vec![c(0, 0), c(1, 0), c(2, 1), c(2, 2)]);
        assert_eq!(r.path, vec![c(0, 0), c(1, 0), c(2, 1), c(2, 2)]);
    }

    #[test]
    fn cuts_corners_between_walls() {
        let grid = Grid::parse("S#\n#E").unwrap();
        let r = astar(&grid, c(0, 0), c(1, 1)).unwrap();
        assert_eq!(r.visited, vec![c(0, 0), c(1, 1)]);
        assert_eq!(r.path, vec![c(0, 0), c(1, 1)]);
        assert_eq!(r.cost(), DIAGONAL_COST);
    }

    #[test]
    fn reopened_cells_are_expanded_again() {
        let grid = Grid::parse(
            "
S...#.
#.....
...#..
.#.#..
.##.#E",
        )
        .unwrap();
        let r = astar(&grid, c(0, 0), c(4, 5)).unwrap();
        assert_eq!(
            r.visited,
            vec![
                c(0, 0), c(1, 1), c(2, 2), c(3, 2), c(4, 3), c(2, 1), c(3, 2), c(4, 3),
                c(1, 2), c(1, 3), c(2, 4), c(3, 5), c(4, 5),
            ]
        );
        assert_eq!(
            r.path,
            vec![c(0, 0), c(1, 1), c(1, 2), c(1, 3), c(2, 4), c(3, 5), c(4, 5)]
        );
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
        let r = astar(&grid, c(0, 0), c(4, 4)).unwrap();
        assert!(r.path.is_empty());
        assert_eq!(
            r.visited,
            vec![c(0, 0), c(1, 1), c(2, 1), c(3, 1), c(4, 1), c(1, 0), c(0, 1), c(2, 0), c(3, 0), c(4, 0)]
        );
    }

    #[test]
    fn isolated_start_terminates() {
        let grid = Grid::parse("S#.\n##.\n..E").unwrap();
        let r = astar(&grid, c(0, 0), c(2, 2)).unwrap();
        assert!(r.path.is_empty());
        assert_eq!(r.visited, vec![c(0, 0)]);
    }
}
