//! Deterministic grid searches for the pathviz visualizer.
//!
//! Four engines share one contract: given a [`Terrain`], a start and an end
//! coordinate, they return a [`SearchResult`] holding the exact order in
//! which cells were expanded and the path found (empty if the end is
//! unreachable).
//!
//! - **BFS** ([`bfs`]): 4-way, FIFO, shortest in hop count
//! - **DFS** ([`dfs`]): 4-way, LIFO, first path found
//! - **Dijkstra** ([`dijkstra`]): 4-way, unit weights, settled-node rule
//! - **A\*** ([`astar`]): 8-way, diagonal cost 1.414, Manhattan heuristic
//!
//! [`Algorithm`] selects an engine at runtime.
//!
//! Every call allocates its own scratch state, so repeated calls with the
//! same inputs produce identical traces.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod neighbors;
mod result;
mod space;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::{DIAGONAL_COST, manhattan, path_cost, step_cost};
pub use error::SearchError;
pub use neighbors::{CARDINAL_FORWARD, CARDINAL_REVERSE, Neighbors, OCTILE};
pub use result::SearchResult;
pub use traits::Terrain;
