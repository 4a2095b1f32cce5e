//! Step-by-step playback of a [`SearchResult`].
//!
//! A [`Replay`] flattens a result into a timeline: every visited cell in
//! expansion order, then every path cell from start to end. Each step
//! carries the pause that follows it, so the caller only needs to sleep
//! (or poll for input) for that long before asking for the next one.

use std::time::Duration;

use pathviz_core::Coord;
use pathviz_paths::SearchResult;

/// One frame of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The engine expanded this cell.
    Visit(Coord),
    /// This cell lies on the final path.
    Path(Coord),
}

impl Step {
    /// The cell this step paints.
    pub fn coord(self) -> Coord {
        match self {
            Self::Visit(c) | Self::Path(c) => c,
        }
    }
}

/// How the replayed search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A path was found, with this many moves.
    Found { steps: usize },
    NoPath,
}

/// Timeline of a single search result.
#[derive(Debug, Clone)]
pub struct Replay {
    steps: Vec<Step>,
    pos: usize,
    visit_delay: Duration,
    path_delay: Duration,
    outcome: Outcome,
}

impl Replay {
    /// Build the timeline for `result`.
    pub fn new(result: &SearchResult, visit_delay: Duration, path_delay: Duration) -> Self {
        let mut steps = Vec::with_capacity(result.visited.len() + result.path.len());
        steps.extend(result.visited.iter().copied().map(Step::Visit));
        steps.extend(result.path.iter().copied().map(Step::Path));
        let outcome = if result.found() {
            Outcome::Found {
                steps: result.steps(),
            }
        } else {
            Outcome::NoPath
        };
        Self {
            steps,
            pos: 0,
            visit_delay,
            path_delay,
            outcome,
        }
    }

    /// Emit the next step and the pause that should follow it, or `None`
    /// once the timeline is exhausted.
    pub fn advance(&mut self) -> Option<(Step, Duration)> {
        let step = *self.steps.get(self.pos)?;
        self.pos += 1;
        let delay = match step {
            Step::Visit(_) => self.visit_delay,
            Step::Path(_) => self.path_delay,
        };
        Some((step, delay))
    }

    /// (emitted, total) step counts.
    #[inline]
    pub fn progress(&self) -> (usize, usize) {
        (self.pos, self.steps.len())
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Sum of all pauses, i.e. the wall-clock length of the animation.
    pub fn total_duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|s| match s {
                Step::Visit(_) => self.visit_delay,
                Step::Path(_) => self.path_delay,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISIT: Duration = Duration::from_millis(10);
    const PATH: Duration = Duration::from_millis(50);

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn visits_then_path() {
        let result = SearchResult {
            path: vec![c(0, 0), c(0, 1)],
            visited: vec![c(0, 0), c(1, 0), c(0, 1)],
        };
        let mut r = Replay::new(&result, VISIT, PATH);
        assert_eq!(r.outcome(), Outcome::Found { steps: 1 });
        assert_eq!(r.progress(), (0, 5));

        let mut emitted = Vec::new();
        while let Some(step) = r.advance() {
            emitted.push(step);
        }
        assert_eq!(
            emitted,
            vec![
                (Step::Visit(c(0, 0)), VISIT),
                (Step::Visit(c(1, 0)), VISIT),
                (Step::Visit(c(0, 1)), VISIT),
                (Step::Path(c(0, 0)), PATH),
                (Step::Path(c(0, 1)), PATH),
            ]
        );
        assert_eq!(r.progress(), (5, 5));
        assert_eq!(r.advance(), None);
    }

    #[test]
    fn no_path_only_visits() {
        let result = SearchResult {
            path: Vec::new(),
            visited: vec![c(0, 0), c(0, 1)],
        };
        let mut r = Replay::new(&result, VISIT, PATH);
        assert_eq!(r.outcome(), Outcome::NoPath);
        assert_eq!(r.total_duration(), VISIT * 2);
        assert_eq!(r.advance().map(|(s, _)| s.coord()), Some(c(0, 0)));
        assert_eq!(r.advance().map(|(s, _)| s.coord()), Some(c(0, 1)));
        assert!(r.advance().is_none());
    }

    #[test]
    fn total_duration_counts_both_phases() {
        let result = SearchResult {
            path: vec![c(0, 0), c(1, 1)],
            visited: vec![c(0, 0), c(1, 1)],
        };
        let r = Replay::new(&result, VISIT, PATH);
        assert_eq!(r.total_duration(), Duration::from_millis(120));
    }
}
