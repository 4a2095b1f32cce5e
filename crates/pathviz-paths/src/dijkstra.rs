use std::collections::BinaryHeap;

use pathviz_core::Coord;

use crate::error::SearchError;
use crate::neighbors::{CARDINAL_FORWARD, Neighbors};
use crate::result::SearchResult;
use crate::space::{NO_PARENT, NodeRef, SearchSpace};
use crate::traits::Terrain;

/// Edge weight between orthogonal neighbours.
const EDGE_WEIGHT: f64 = 1.0;

/// Dijkstra's algorithm from `start` to `end` over 4-connected cells.
///
/// The unsettled cell with the smallest tentative distance is expanded
/// next; ties go to the cell that comes first in row-major order. Settled
/// cells are never relaxed again. Cells whose distance is still infinite
/// are never expanded, so the trace ends once the reachable region is
/// exhausted.
pub fn dijkstra<T: Terrain + ?Sized>(
    terrain: &T,
    start: Coord,
    end: Coord,
) -> Result<SearchResult, SearchError> {
    let space = SearchSpace::new(terrain, start, end)?;

    let mut dist = vec![f64::INFINITY; space.len()];
    let mut settled = vec![false; space.len()];
    let mut parents = vec![NO_PARENT; space.len()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut visited = Vec::new();
    let mut nbuf = Neighbors::new();

    dist[space.start] = 0.0;
    open.push(NodeRef {
        idx: space.start,
        cost: 0.0,
        tie: space.start,
    });

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip stale entries.
        if settled[ci] || current.cost != dist[ci] {
            continue;
        }
        settled[ci] = true;

        let cp = space.point(ci);
        visited.push(cp);

        if ci == space.goal {
            return Ok(space.found("dijkstra", &parents, visited));
        }

        for &np in nbuf.expand(cp, &CARDINAL_FORWARD, |n| space.passable(n)) {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            if settled[ni] {
                continue;
            }
            let alt = dist[ci] + EDGE_WEIGHT;
            if alt < dist[ni] {
                dist[ni] = alt;
                parents[ni] = ci;
                open.push(NodeRef {
                    idx: ni,
                    cost: alt,
                    tie: ni,
                });
            }
        }
    }

    Ok(space.exhausted("dijkstra", visited))
}

#[cfg(test)]
mod tests {
    use super::*;
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
        let r = dijkstra(&grid, c(0, 0), c(4, 4)).unwrap();
        assert_eq!(
            r.visited,
            vec![
                c(0, 0), c(0, 1), c(1, 0), c(0, 2), c(1, 1), c(2, 0), c(0, 3), c(1, 2),
                c(2, 1), c(3, 0), c(0, 4), c(1, 3), c(3, 1), c(4, 0), c(1, 4), c(2, 3),
                c(3, 2), c(4, 1), c(2, 4), c(3, 3), c(4, 2), c(3, 4), c(4, 3), c(4, 4),
            ]
        );
        assert_eq!(
            r.path,
            vec![c(0, 0), c(0, 1), c(0, 2), c(0, 3), c(0, 4), c(1, 4), c(2, 4), c(3, 4), c(4, 4)]
        );
    }

    #[test]
    fn ties_break_row_major() {
        let grid = Grid::parse("S.#\n.#.\n..E").unwrap();
        let r = dijkstra(&grid, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(r.visited, vec![c(0, 0), c(0, 1), c(1, 0), c(2, 0), c(2, 1), c(2, 2)]);
        assert_eq!(r.path, vec![c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(2, 2)]);
    }

    #[test]
    fn trace_around_single_wall() {
        let grid = Grid::parse("S..\n.#.\n..E").unwrap();
        let r = dijkstra(&grid, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(
            r.visited,
            vec![c(0, 0), c(0, 1), c(1, 0), c(0, 2), c(2, 0), c(1, 2), c(2, 1), c(2, 2)]
        );
        assert_eq!(r.path, vec![c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(2, 2)]);
    }

    #[test]
    fn blocked_end_visits_component_only() {
        let grid = Grid::parse(
            "
S.#..
..#..
..#..
..#..
..#.E",
        )
        .unwrap();
        let r = dijkstra(&grid, c(0, 0), c(4, 4)).unwrap();
        assert!(r.path.is_empty());
        assert_eq!(
            r.visited,
            vec![c(0, 0), c(0, 1), c(1, 0), c(1, 1), c(2, 0), c(2, 1), c(3, 0), c(3, 1), c(4, 0), c(4, 1)]
        );
    }

    #[test]
    fn rejects_walled_endpoints() {
        let grid = Grid::parse("S#\n.E").unwrap();
        assert_eq!(
            dijkstra(&grid, c(0, 1), c(1, 1)),
            Err(SearchError::StartOnWall(c(0, 1)))
        );
        assert_eq!(
            dijkstra(&grid, c(0, 0), c(0, 1)),
            Err(SearchError::EndOnWall(c(0, 1)))
        );
    }
}
