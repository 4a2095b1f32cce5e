//! pathviz: watch grid searches unfold in the terminal.
//!
//! The binary wires these pieces together: a [`VisualizerConfig`], the
//! [`Visualizer`] state that owns the board and the running [`Replay`], and
//! the crossterm [`Terminal`] that draws it and turns input into
//! [`Action`]s.

pub mod config;
pub mod model;
pub mod replay;
pub mod report;
pub mod term;

pub use config::{ConfigError, VisualizerConfig};
pub use model::{Action, Effect, Mark, Status, StatusKind, Visualizer};
pub use replay::{Outcome, Replay, Step};
pub use term::Terminal;
