//! Terminal front-end for pathviz.
//!
//! Run: cargo run --bin pathviz -- --algorithm astar

use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use pathviz_core::Board;
use pathviz_lib::{Effect, Terminal, Visualizer, VisualizerConfig, report};
use pathviz_paths::Algorithm;

/// How long to wait for input when no replay is running.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Grid search visualizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search algorithm: bfs, dfs, dijkstra or astar
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Side length of the empty starting board
    #[arg(short, long)]
    size: Option<usize>,

    /// Board file in the `.#SE` text form
    #[arg(short, long)]
    grid: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run the search once, print the result and exit
    #[arg(long)]
    print: bool,

    /// Do not capture the mouse (walls are toggled with the keyboard only)
    #[arg(long)]
    no_mouse: bool,
}

fn load_board(path: Option<&Path>, size: usize) -> Result<Board, Box<dyn Error>> {
    let board = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .map_err(|e| format!("cannot read {}: {e}", p.display()))?;
            Board::parse(&text)?
        }
        None => Board::new(size, size)?,
    };
    log::debug!(
        "board {}x{} with {} walls",
        board.grid().rows(),
        board.grid().cols(),
        board.wall_count()
    );
    Ok(board)
}

fn print_once(board: &Board, algorithm: Algorithm) -> Result<(), Box<dyn Error>> {
    let result = algorithm.solve(board)?;
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", report::render(board, &result))?;
    writeln!(stdout, "{}", report::summary(algorithm, &result))?;
    Ok(())
}

fn run_loop(term: &mut Terminal, model: &mut Visualizer) -> Result<(), Box<dyn Error>> {
    let mut deadline: Option<Instant> = None;
    loop {
        term.draw(model)?;

        let timeout = deadline.map_or(IDLE_POLL, |d| d.saturating_duration_since(Instant::now()));
        let effect = match term.poll_action(timeout)? {
            Some(action) => model.update(action),
            None if deadline.is_some_and(|d| Instant::now() >= d) => model.tick(),
            None => None,
        };

        match effect {
            Some(Effect::End) => return Ok(()),
            Some(Effect::Tick(delay)) => deadline = Some(Instant::now() + delay),
            None if !model.is_visualizing() => deadline = None,
            None => {}
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    }
    .with_overrides(args.algorithm, args.size)?;
    let board = load_board(args.grid.as_deref(), config.grid_size)?;

    if args.print {
        return print_once(&board, config.algorithm);
    }

    let mut model = Visualizer::new(board, &config);
    let mut term = Terminal::new().with_mouse(!args.no_mouse);
    term.init()?;
    let res = run_loop(&mut term, &mut model);
    term.close();
    res
}
