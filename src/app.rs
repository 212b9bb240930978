//! Terminal front end shared by the three games.
//!
//! [`App`] owns a [`Session`] driven by an [`IntervalScheduler`], the per-game
//! view state, and the high-score name prompt. It performs no terminal I/O
//! itself: the binary feeds it crossterm events and flushes the framebuffer
//! it renders, which keeps the whole front end testable.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseEvent};

use crate::adapter::{Qualified, ScoreReporter};
use crate::core::{MinesweeperGame, SnakeGame, TetrisGame, TetrisSnapshot};
use crate::engine::{ArcadeGame, IntervalScheduler, Session, Step};
use crate::input::{
    minesweeper_key, mouse_action, snake_key, tetris_key, Command, EntryEvent, GridArea,
    GridCursor, NameEntry,
};
use crate::term::{
    draw_name_prompt, FrameBuffer, MinesweeperView, SnakeView, TetrisView, Viewport,
};
use crate::types::PlayState;

/// How long the loop may block on input while no timer is running
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Per-game glue between terminal events, the session and a view.
pub trait Frontend: ArcadeGame + Sized {
    /// View state that lives next to the game (cursor, reused snapshot)
    type Ui;

    /// Whether the game takes mouse clicks
    const MOUSE: bool = false;

    fn new_ui(&self) -> Self::Ui;

    fn map_key(ui: &mut Self::Ui, key: KeyEvent) -> Option<Command<Self::Action>>;

    fn map_mouse(
        &self,
        _ui: &mut Self::Ui,
        _event: MouseEvent,
        _viewport: Viewport,
    ) -> Option<Self::Action> {
        None
    }

    fn draw(&self, ui: &mut Self::Ui, viewport: Viewport, fb: &mut FrameBuffer);
}

pub struct TetrisUi {
    view: TetrisView,
    snapshot: TetrisSnapshot,
}

impl Frontend for TetrisGame {
    type Ui = TetrisUi;

    fn new_ui(&self) -> Self::Ui {
        TetrisUi {
            view: TetrisView::default(),
            snapshot: self.snapshot(),
        }
    }

    fn map_key(_ui: &mut Self::Ui, key: KeyEvent) -> Option<Command<Self::Action>> {
        tetris_key(key)
    }

    fn draw(&self, ui: &mut Self::Ui, viewport: Viewport, fb: &mut FrameBuffer) {
        self.snapshot_into(&mut ui.snapshot);
        ui.view.render_into(&ui.snapshot, viewport, fb);
    }
}

impl Frontend for SnakeGame {
    type Ui = SnakeView;

    fn new_ui(&self) -> Self::Ui {
        SnakeView::default()
    }

    fn map_key(_ui: &mut Self::Ui, key: KeyEvent) -> Option<Command<Self::Action>> {
        snake_key(key)
    }

    fn draw(&self, ui: &mut Self::Ui, viewport: Viewport, fb: &mut FrameBuffer) {
        ui.render_into(self, viewport, fb);
    }
}

pub struct MinesweeperUi {
    view: MinesweeperView,
    cursor: GridCursor,
}

impl MinesweeperUi {
    pub fn cursor(&self) -> &GridCursor {
        &self.cursor
    }
}

impl Frontend for MinesweeperGame {
    type Ui = MinesweeperUi;
    const MOUSE: bool = true;

    fn new_ui(&self) -> Self::Ui {
        MinesweeperUi {
            view: MinesweeperView::default(),
            cursor: GridCursor::new(self.config().cols, self.config().rows),
        }
    }

    fn map_key(ui: &mut Self::Ui, key: KeyEvent) -> Option<Command<Self::Action>> {
        minesweeper_key(key, &mut ui.cursor)
    }

    fn map_mouse(
        &self,
        ui: &mut Self::Ui,
        event: MouseEvent,
        viewport: Viewport,
    ) -> Option<Self::Action> {
        let (left, top) = ui.view.grid_origin(self, viewport);
        let area = GridArea {
            left,
            top,
            cols: self.config().cols,
            rows: self.config().rows,
        };
        if let Some(pos) = area.cell_at(event.column, event.row) {
            ui.cursor.set(pos);
        }
        mouse_action(event, area)
    }

    fn draw(&self, ui: &mut Self::Ui, viewport: Viewport, fb: &mut FrameBuffer) {
        ui.view
            .render_into(self, Some(ui.cursor.position()), viewport, fb);
    }
}

/// What the loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Redraw,
    Quit,
}

pub struct App<G: Frontend> {
    session: Session<G, IntervalScheduler>,
    ui: G::Ui,
    reporter: Option<ScoreReporter>,
    prompt: Option<(Qualified, NameEntry)>,
    fb: FrameBuffer,
}

impl<G: Frontend> App<G> {
    /// A reporter, when present, receives every final score.
    pub fn new(game: G, reporter: Option<ScoreReporter>) -> Self {
        let ui = game.new_ui();
        let mut session = Session::new(game, IntervalScheduler::new());
        if let Some(r) = reporter.as_ref() {
            session = session.with_sink(Box::new(r.submitter()));
        }
        Self {
            session,
            ui,
            reporter,
            prompt: None,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn session(&self) -> &Session<G, IntervalScheduler> {
        &self.session
    }

    pub fn ui(&self) -> &G::Ui {
        &self.ui
    }

    pub fn wants_mouse(&self) -> bool {
        G::MOUSE
    }

    pub fn prompting(&self) -> bool {
        self.prompt.is_some()
    }

    /// Show the name prompt for `qualified` (normally fed from the reporter).
    pub fn open_prompt(&mut self, qualified: Qualified) {
        self.prompt = Some((qualified, NameEntry::new()));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if let Some((qualified, entry)) = self.prompt.as_mut() {
            return match entry.handle_key(key) {
                EntryEvent::Submitted(name) => {
                    if let Some(r) = self.reporter.as_ref() {
                        r.submit_record(*qualified, &name);
                    }
                    self.prompt = None;
                    Flow::Redraw
                }
                EntryEvent::Cancelled => {
                    self.prompt = None;
                    Flow::Redraw
                }
                EntryEvent::Edited => Flow::Redraw,
                EntryEvent::Ignored => Flow::Continue,
            };
        }

        match G::map_key(&mut self.ui, key) {
            Some(Command::Quit) => Flow::Quit,
            Some(Command::Start) => {
                if self.session.status() == PlayState::Ended {
                    self.session.reset();
                }
                self.session.start();
                Flow::Redraw
            }
            Some(Command::Reset) => {
                self.session.reset();
                Flow::Redraw
            }
            Some(Command::Play(action)) => {
                self.session.on_input(action);
                Flow::Redraw
            }
            // Cursor movement changes the view only.
            None => Flow::Redraw,
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, viewport: Viewport) -> Flow {
        if self.prompt.is_some() {
            return Flow::Continue;
        }
        match self
            .session
            .game()
            .map_mouse(&mut self.ui, event, viewport)
        {
            Some(action) => {
                self.session.on_input(action);
                Flow::Redraw
            }
            None => Flow::Continue,
        }
    }

    /// Fire a due tick and pick up qualified scores.
    pub fn poll(&mut self, now: Instant) -> Flow {
        let mut flow = Flow::Continue;
        if self.session.scheduler_mut().poll_due(now) && self.session.on_tick() != Step::Ignored {
            flow = Flow::Redraw;
        }
        if self.prompt.is_none() {
            if let Some(q) = self.reporter.as_mut().and_then(|r| r.poll_qualified()) {
                self.open_prompt(q);
                flow = Flow::Redraw;
            }
        }
        flow
    }

    /// How long to wait for input before the next `poll`.
    pub fn timeout(&self, now: Instant) -> Duration {
        let idle = if self.reporter.is_some() {
            Duration::from_millis(50)
        } else {
            IDLE_POLL
        };
        self.session.scheduler().timeout(now, idle).min(idle)
    }

    pub fn render(&mut self, viewport: Viewport) -> &mut FrameBuffer {
        self.session.game().draw(&mut self.ui, viewport, &mut self.fb);
        if let Some((qualified, entry)) = self.prompt.as_ref() {
            draw_name_prompt(&mut self.fb, viewport, qualified.score, entry.text());
        }
        &mut self.fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SnakeConfig, TetrisConfig};
    use crate::engine::Scheduler;
    use crate::types::{FinalScore, GameKind};
    use crossterm::event::KeyCode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn enter_starts_and_q_quits() {
        let game = TetrisGame::new(TetrisConfig::default(), 5).unwrap();
        let mut app = App::new(game, None);
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Flow::Redraw);
        assert_eq!(app.session().status(), PlayState::Running);
        assert!(app.session().scheduler().is_running());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Quit);
    }

    #[test]
    fn prompt_swallows_keys_until_done() {
        let game = SnakeGame::new(SnakeConfig::default(), 5).unwrap();
        let mut app = App::new(game, None);
        app.open_prompt(Qualified {
            game: GameKind::Snake,
            score: FinalScore::Points(30),
        });
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Redraw);
        assert!(app.prompting());
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Flow::Redraw);
        assert!(!app.prompting());
        assert_eq!(app.session().status(), PlayState::Idle);
    }
}
