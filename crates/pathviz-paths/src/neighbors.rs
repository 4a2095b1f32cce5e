use pathviz_core::Coord;

/// Down, right, up, left. Used by BFS and Dijkstra.
pub const CARDINAL_FORWARD: [Coord; 4] = [
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(-1, 0),
    Coord::new(0, -1),
];

/// Left, up, right, down. Used by DFS: the last neighbour pushed is popped
/// first, so the traversal leans downward.
pub const CARDINAL_REVERSE: [Coord; 4] = [
    Coord::new(0, -1),
    Coord::new(-1, 0),
    Coord::new(0, 1),
    Coord::new(1, 0),
];

/// The four cardinal offsets of [`CARDINAL_FORWARD`] followed by
/// down-right, down-left, up-right, up-left. Used by A*.
pub const OCTILE: [Coord; 8] = [
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(-1, 0),
    Coord::new(0, -1),
    Coord::new(1, 1),
    Coord::new(1, -1),
    Coord::new(-1, 1),
    Coord::new(-1, -1),
];

/// Cached neighbour computation helper.
///
/// Enumerates the neighbours of a cell in a fixed direction order, keeping
/// only those accepted by a predicate. The order of `dirs` is preserved,
/// which the engines rely on for reproducible traces.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return `p + d` for each `d` in `dirs`, keeping only those for which
    /// `keep` returns `true`.
    pub fn expand(&mut self, p: Coord, dirs: &[Coord], keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for &d in dirs {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
