//! Visualizer state: the board, the selected engine and the running replay.
//!
//! Input arrives as [`Action`]s; the caller feeds them to
//! [`Visualizer::update`] and drives the animation with
//! [`Visualizer::tick`], honouring the [`Effect`] each call returns.

use std::time::Duration;

use pathviz_core::{Board, Coord};
use pathviz_paths::Algorithm;

use crate::config::VisualizerConfig;
use crate::replay::{Outcome, Replay, Step};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor by (drow, dcol).
    Move(i32, i32),
    /// Toggle a wall under the cursor.
    ToggleWall,
    /// Toggle a wall at a cell picked with the mouse.
    ToggleAt(Coord),
    NextAlgorithm,
    Select(Algorithm),
    Visualize,
    Clear,
    Quit,
}

/// Side effect requested by the state after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Call [`Visualizer::tick`] again after this long.
    Tick(Duration),
    /// Stop the application.
    End,
}

/// Overlay painted on a cell by the replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    None,
    Visited,
    Path,
}

/// Whether a replay is in progress. While visualizing, edits are ignored.
#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Visualizing(Replay),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Searching,
    Success,
    Error,
}

/// Status line contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

const HELLO: &str = "Toggle walls with space or the mouse, then press Enter to visualize";

/// The visualizer model.
pub struct Visualizer {
    board: Board,
    cursor: Coord,
    algorithm: Algorithm,
    marks: Vec<Mark>,
    phase: Phase,
    status: Status,
    visit_delay: Duration,
    path_delay: Duration,
}

impl Visualizer {
    pub fn new(board: Board, config: &VisualizerConfig) -> Self {
        let marks = vec![Mark::None; board.grid().len()];
        Self {
            cursor: board.start(),
            board,
            algorithm: config.algorithm,
            marks,
            phase: Phase::Idle,
            status: Status::new(HELLO, StatusKind::Info),
            visit_delay: config.visit_delay(),
            path_delay: config.path_delay(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// (emitted, total) steps of the running replay.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match &self.phase {
            Phase::Visualizing(replay) => Some(replay.progress()),
            Phase::Idle => None,
        }
    }

    #[inline]
    pub fn is_visualizing(&self) -> bool {
        matches!(self.phase, Phase::Visualizing(_))
    }

    /// Replay overlay on cell `c`.
    pub fn mark(&self, c: Coord) -> Mark {
        self.board
            .grid()
            .index(c)
            .map_or(Mark::None, |i| self.marks[i])
    }

    /// Process one action.
    pub fn update(&mut self, action: Action) -> Option<Effect> {
        if action == Action::Quit {
            return Some(Effect::End);
        }
        if self.is_visualizing() {
            return None;
        }
        match action {
            Action::Move(dr, dc) => {
                let next = self.cursor.shift(dr, dc);
                if self.board.grid().contains(next) {
                    self.cursor = next;
                }
                None
            }
            Action::ToggleWall => {
                self.toggle(self.cursor);
                None
            }
            Action::ToggleAt(c) => {
                if self.board.grid().contains(c) {
                    self.cursor = c;
                    self.toggle(c);
                }
                None
            }
            Action::NextAlgorithm => {
                self.algorithm = self.algorithm.next();
                None
            }
            Action::Select(a) => {
                self.algorithm = a;
                None
            }
            Action::Visualize => self.visualize(),
            Action::Clear => {
                self.clear();
                None
            }
            Action::Quit => Some(Effect::End),
        }
    }

    /// Advance the running replay by one step.
    pub fn tick(&mut self) -> Option<Effect> {
        let Phase::Visualizing(replay) = &mut self.phase else {
            return None;
        };
        match replay.advance() {
            Some((step, delay)) => {
                let c = step.coord();
                if c != self.board.start() && c != self.board.end() {
                    if let Some(i) = self.board.grid().index(c) {
                        self.marks[i] = match step {
                            Step::Visit(_) => Mark::Visited,
                            Step::Path(_) => Mark::Path,
                        };
                    }
                }
                Some(Effect::Tick(delay))
            }
            None => {
                let outcome = replay.outcome();
                self.finish(outcome);
                None
            }
        }
    }

    fn toggle(&mut self, c: Coord) {
        if self.board.toggle_wall(c) {
            self.status = Status::new(
                "Board modified. Press Enter to visualize.",
                StatusKind::Info,
            );
        }
    }

    fn visualize(&mut self) -> Option<Effect> {
        self.marks.fill(Mark::None);
        let result = match self.algorithm.solve(&self.board) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("cannot visualize {}: {e}", self.algorithm);
                self.status = Status::new(e.to_string(), StatusKind::Error);
                return None;
            }
        };
        let replay = Replay::new(&result, self.visit_delay, self.path_delay);
        log::info!(
            "visualizing {}: {} visited, {} path cells, replay {:?}",
            self.algorithm,
            result.visited.len(),
            result.path.len(),
            replay.total_duration()
        );
        self.status = Status::new(
            format!("Visualizing {}...", self.algorithm.label()),
            StatusKind::Searching,
        );
        self.phase = Phase::Visualizing(replay);
        Some(Effect::Tick(Duration::ZERO))
    }

    fn finish(&mut self, outcome: Outcome) {
        log::debug!("{} replay finished: {outcome:?}", self.algorithm);
        self.status = match outcome {
            Outcome::Found { .. } => Status::new(
                format!("{} found a path!", self.algorithm.label()),
                StatusKind::Success,
            ),
            Outcome::NoPath => Status::new("No path exists!", StatusKind::Error),
        };
        self.phase = Phase::Idle;
    }

    fn clear(&mut self) {
        log::info!("clearing board");
        self.board.clear();
        self.marks.fill(Mark::None);
        self.status = Status::new("Board cleared. Ready for pathfinding.", StatusKind::Info);
    }
}
