//! Crossterm terminal driver.
//!
//! [`Terminal`] owns raw mode and the alternate screen, draws a
//! [`Visualizer`] and translates key and mouse events into [`Action`]s.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{CellState, Coord};
use pathviz_paths::Algorithm;

use crate::model::{Action, Mark, StatusKind, Visualizer};

/// First screen row of the grid.
const GRID_TOP: u16 = 2;
/// Terminal columns per grid cell, so cells look roughly square.
const CELL_WIDTH: u16 = 2;

const HELP: &str =
    "arrows/hjkl move  space wall  tab/1-4 algorithm  enter visualize  c clear  q quit";

const EMPTY: Color = Color::Rgb { r: 40, g: 42, b: 54 };
const WALL: Color = Color::Rgb { r: 120, g: 120, b: 130 };
const START: Color = Color::Rgb { r: 46, g: 204, b: 113 };
const END: Color = Color::Rgb { r: 231, g: 76, b: 60 };
const VISITED: Color = Color::Rgb { r: 52, g: 152, b: 219 };
const PATH: Color = Color::Rgb { r: 241, g: 196, b: 15 };

/// Maps a crossterm key event to an [`Action`].
fn to_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(-1, 0)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(1, 0)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(0, -1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(0, 1)),
        KeyCode::Char(' ') => Some(Action::ToggleWall),
        KeyCode::Tab => Some(Action::NextAlgorithm),
        KeyCode::Char(d @ '1'..='4') => {
            let i = d as usize - '1' as usize;
            Some(Action::Select(Algorithm::ALL[i]))
        }
        KeyCode::Enter => Some(Action::Visualize),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Clear),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Maps a screen position to the grid cell drawn there.
fn cell_at(column: u16, row: u16) -> Option<Coord> {
    if row < GRID_TOP {
        return None;
    }
    Some(Coord::new(
        (row - GRID_TOP) as i32,
        (column / CELL_WIDTH) as i32,
    ))
}

/// Screen position of grid cell `c`, or `None` if it lies beyond what the
/// terminal can address.
fn screen_pos(c: Coord) -> Option<(u16, u16)> {
    let x = u16::try_from(c.col).ok()?.checked_mul(CELL_WIDTH)?;
    let y = u16::try_from(c.row).ok()?.checked_add(GRID_TOP)?;
    Some((x, y))
}

/// Replay counter shown after the status message.
fn progress_label(progress: Option<(usize, usize)>) -> String {
    match progress {
        Some((done, total)) => format!("  [{done}/{total}]"),
        None => String::new(),
    }
}

fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Info => Color::Reset,
        StatusKind::Searching => PATH,
        StatusKind::Success => START,
        StatusKind::Error => END,
    }
}

/// A terminal back-end using crossterm.
pub struct Terminal {
    mouse_enabled: bool,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
        }
    }

    /// Configure whether mouse clicks toggle walls.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(())
    }

    /// Restore the terminal. Errors are ignored: there is nothing left to
    /// report them to.
    pub fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    /// Wait up to `timeout` for an input event that maps to an action.
    pub fn poll_action(&mut self, timeout: Duration) -> io::Result<Option<Action>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let action = match event::read()? {
            Event::Key(key) => to_action(key),
            Event::Mouse(me) if self.mouse_enabled => match me.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    cell_at(me.column, me.row).map(Action::ToggleAt)
                }
                _ => None,
            },
            Event::Resize(..) => {
                execute!(io::stdout(), terminal::Clear(ClearType::All))?;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    /// Draw the whole visualizer.
    pub fn draw(&mut self, model: &Visualizer) -> io::Result<()> {
        let mut stdout = io::stdout();

        // Algorithm selector.
        queue!(stdout, cursor::MoveTo(0, 0), Print("pathviz  "))?;
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, a.label());
            if *a == model.algorithm() {
                queue!(
                    stdout,
                    SetAttribute(Attribute::Reverse),
                    Print(label),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(stdout, Print(label))?;
            }
        }

        let grid = model.board().grid();
        for (c, state) in grid.iter() {
            let bg = match (state, model.mark(c)) {
                (CellState::Wall, _) => WALL,
                (CellState::Start, _) => START,
                (CellState::End, _) => END,
                (CellState::Empty, Mark::Path) => PATH,
                (CellState::Empty, Mark::Visited) => VISITED,
                (CellState::Empty, Mark::None) => EMPTY,
            };
            let Some((x, y)) = screen_pos(c) else {
                continue;
            };
            let glyph = if c == model.cursor() && !model.is_visualizing() {
                "[]"
            } else {
                "  "
            };
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetBackgroundColor(bg),
                SetForegroundColor(Color::White),
                Print(glyph)
            )?;
        }
        queue!(stdout, ResetColor)?;

        let below = u16::try_from(grid.rows())
            .unwrap_or(u16::MAX)
            .saturating_add(GRID_TOP + 1);
        let status = model.status();
        queue!(
            stdout,
            cursor::MoveTo(0, below),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(status_color(status.kind)),
            Print(&status.message),
            ResetColor,
            Print(progress_label(model.progress())),
            cursor::MoveTo(0, below + 1),
            Print(HELP)
        )?;

        stdout.flush()
    }
}
