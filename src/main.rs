//! Terminal arcade runner (default binary).
//!
//! Picks a game from the command line, then runs a single-threaded loop:
//! poll crossterm for input until the next tick is due, fire the tick, and
//! redraw through the framebuffer renderer when anything changed.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};

use tui_arcade::adapter::ScoreReporter;
use tui_arcade::app::{App, Flow, Frontend};
use tui_arcade::core::{
    MinesweeperConfig, MinesweeperGame, SnakeConfig, SnakeGame, TetrisConfig, TetrisGame,
};
use tui_arcade::term::{TerminalRenderer, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GameArg {
    Tetris,
    Snake,
    Minesweeper,
}

#[derive(Debug, Parser)]
#[command(name = "tui-arcade", version, about = "Tetris, Snake and Minesweeper in the terminal")]
struct Args {
    /// Game to play
    #[arg(value_enum, default_value_t = GameArg::Tetris)]
    game: GameArg,

    /// RNG seed (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Do not submit scores even if a score service is configured
    #[arg(long)]
    offline: bool,
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);
    let reporter = if args.offline {
        None
    } else {
        ScoreReporter::start_from_env()
    };

    match args.game {
        GameArg::Tetris => {
            let game = TetrisGame::new(TetrisConfig::default(), seed)?;
            play(App::new(game, reporter))
        }
        GameArg::Snake => {
            let game = SnakeGame::new(SnakeConfig::default(), seed)?;
            play(App::new(game, reporter))
        }
        GameArg::Minesweeper => {
            let game = MinesweeperGame::new(MinesweeperConfig::default(), seed)?;
            play(App::new(game, reporter))
        }
    }
}

fn play<G: Frontend>(mut app: App<G>) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter(app.wants_mouse())?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<G: Frontend>(term: &mut TerminalRenderer, app: &mut App<G>) -> Result<()> {
    let mut dirty = true;
    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if dirty {
            term.draw_swap(app.render(viewport))?;
            dirty = false;
        }

        if event::poll(app.timeout(Instant::now()))? {
            let flow = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, viewport),
                Event::Resize(..) => {
                    term.invalidate();
                    Flow::Redraw
                }
                _ => Flow::Continue,
            };
            match flow {
                Flow::Quit => return Ok(()),
                Flow::Redraw => dirty = true,
                Flow::Continue => {}
            }
        }

        if app.poll(Instant::now()) == Flow::Redraw {
            dirty = true;
        }
    }
}
