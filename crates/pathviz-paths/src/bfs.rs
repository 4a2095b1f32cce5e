use std::collections::VecDeque;

use pathviz_core::Coord;

use crate::error::SearchError;
use crate::neighbors::{CARDINAL_FORWARD, Neighbors};
use crate::result::SearchResult;
use crate::space::{NO_PARENT, SearchSpace};
use crate::traits::Terrain;

/// Breadth-first search from `start` to `end`.
///
/// Cells are expanded in FIFO order, neighbours taken down, right, up,
/// left. A cell is marked as seen when it is enqueued, so it is expanded at
/// most once. The returned path is shortest in number of moves.
pub fn bfs<T: Terrain + ?Sized>(
    terrain: &T,
    start: Coord,
    end: Coord,
) -> Result<SearchResult, SearchError> {
    let space = SearchSpace::new(terrain, start, end)?;

    let mut seen = vec![false; space.len()];
    let mut parents = vec![NO_PARENT; space.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut visited = Vec::new();
    let mut nbuf = Neighbors::new();

    seen[space.start] = true;
    queue.push_back(space.start);

    while let Some(ci) = queue.pop_front() {
        let cp = space.point(ci);
        visited.push(cp);

        if ci == space.goal {
            return Ok(space.found("bfs", &parents, visited));
        }

        for &np in nbuf.expand(cp, &CARDINAL_FORWARD, |n| space.passable(n)) {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            if seen[ni] {
                continue;
            }
            seen[ni] = true;
            parents[ni] = ci;
            queue.push_back(ni);
        }
    }

    Ok(space.exhausted("bfs", visited))
}
