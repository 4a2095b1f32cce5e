//! **pathviz-core**: grid model for the pathviz search visualizer.
//!
//! This crate provides the types shared by the search engines and the
//! front-end: coordinates, cell states, the rectangular [`Grid`], and the
//! editable [`Board`] that pins a start and an end cell.

pub mod board;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use board::Board;
pub use cell::CellState;
pub use error::GridError;
pub use geom::Coord;
pub use grid::Grid;
