//! Plain-text rendering of a finished search, for `--print` mode.

use pathviz_core::{Board, CellState};
use pathviz_paths::{Algorithm, SearchResult};

/// Draw the board with the search overlaid: `*` path, `o` visited, and the
/// usual `.#SE` for everything else. Start and end are never overdrawn.
pub fn render(board: &Board, result: &SearchResult) -> String {
    let grid = board.grid();
    let mut chars: Vec<char> = grid.iter().map(|(_, s)| s.to_char()).collect();
    let mut paint = |c, ch| {
        if let Some(i) = grid.index(c) {
            if grid.at(c) == Some(CellState::Empty) {
                chars[i] = ch;
            }
        }
    };
    for &c in &result.visited {
        paint(c, 'o');
    }
    for &c in &result.path {
        paint(c, '*');
    }

    let mut out = String::with_capacity(chars.len() + grid.rows());
    for row in chars.chunks(grid.cols().max(1)) {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// One-line summary of a search.
pub fn summary(algorithm: Algorithm, result: &SearchResult) -> String {
    if result.found() {
        format!(
            "{}: visited {} cells, path of {} cells ({} moves, cost {:.3})",
            algorithm.label(),
            result.visited.len(),
            result.path.len(),
            result.steps(),
            result.cost()
        )
    } else {
        format!(
            "{}: visited {} cells, no path exists",
            algorithm.label(),
            result.visited.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_overlays_trace() {
        let board = Board::parse("S..\n.#.\n..E").unwrap();
        let result = Algorithm::Bfs.solve(&board).unwrap();
        assert_eq!(render(&board, &result), "Soo\n*#o\n**E\n");
    }

    #[test]
    fn summary_lines() {
        let board = Board::parse("S#\n#E").unwrap();
        let astar = Algorithm::AStar.solve(&board).unwrap();
        assert_eq!(
            summary(Algorithm::AStar, &astar),
            "ASTAR: visited 2 cells, path of 2 cells (1 moves, cost 1.414)"
        );
        let bfs = Algorithm::Bfs.solve(&board).unwrap();
        assert_eq!(summary(Algorithm::Bfs, &bfs), "BFS: visited 1 cells, no path exists");
    }
}
