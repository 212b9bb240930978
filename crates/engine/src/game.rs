//! The `ArcadeGame` seam: one shape for Tetris, Snake and Minesweeper so a
//! single session loop can drive any of them.

use std::time::Duration;

use tui_arcade_core::{
    BoardEvent, MinesweeperGame, Outcome, SnakeEvent, SnakeGame, TetrisGame, TickEvent,
};
use tui_arcade_types::{
    Direction, FinalScore, GameKind, MinesweeperAction, PlayState, TetrisAction,
    MINESWEEPER_CLOCK_MS,
};

/// What a tick or an input did, as far as the loop is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Ignored: not running, or rejected by the rules
    Ignored,
    /// State changed; redraw
    Advanced,
    /// State changed and the tick period should shrink
    Accelerated,
    /// The game ended; `Some` when the result is worth submitting
    Ended(Option<FinalScore>),
}

impl Step {
    pub fn changed(&self) -> bool {
        !matches!(self, Step::Ignored)
    }
}

pub trait ArcadeGame {
    type Action: Copy;

    fn kind(&self) -> GameKind;
    fn status(&self) -> PlayState;

    /// Tick period right after `start`
    fn initial_period(&self) -> Duration;

    /// Fraction removed from the period on every `Step::Accelerated`
    fn speedup_ratio(&self) -> f64;

    /// `idle -> running`; false from any other state
    fn start(&mut self) -> bool;
    fn reset(&mut self);
    fn tick(&mut self) -> Step;
    fn apply(&mut self, action: Self::Action) -> Step;
    fn final_score(&self) -> Option<FinalScore>;
}

impl From<TickEvent> for Step {
    fn from(event: TickEvent) -> Self {
        match event {
            TickEvent::Idle => Step::Ignored,
            TickEvent::Fell | TickEvent::Shifted | TickEvent::Placed => Step::Advanced,
            TickEvent::RowCleared { .. } => Step::Accelerated,
            TickEvent::GameOver { points } => Step::Ended(Some(FinalScore::Points(points))),
        }
    }
}

impl ArcadeGame for TetrisGame {
    type Action = TetrisAction;

    fn kind(&self) -> GameKind {
        GameKind::Tetris
    }

    fn status(&self) -> PlayState {
        TetrisGame::status(self)
    }

    fn initial_period(&self) -> Duration {
        Duration::from_millis(self.config().initial_tick_ms as u64)
    }

    fn speedup_ratio(&self) -> f64 {
        self.config().speedup_ratio
    }

    fn start(&mut self) -> bool {
        TetrisGame::start(self)
    }

    fn reset(&mut self) {
        TetrisGame::reset(self)
    }

    fn tick(&mut self) -> Step {
        TetrisGame::tick(self).into()
    }

    fn apply(&mut self, action: TetrisAction) -> Step {
        self.apply_action(action).map_or(Step::Ignored, Step::from)
    }

    fn final_score(&self) -> Option<FinalScore> {
        TetrisGame::final_score(self)
    }
}

impl From<SnakeEvent> for Step {
    fn from(event: SnakeEvent) -> Self {
        match event {
            SnakeEvent::Idle => Step::Ignored,
            SnakeEvent::Moved => Step::Advanced,
            SnakeEvent::Ate { .. } => Step::Accelerated,
            SnakeEvent::Crashed { points } => Step::Ended(Some(FinalScore::Points(points))),
        }
    }
}

impl ArcadeGame for SnakeGame {
    type Action = Direction;

    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn status(&self) -> PlayState {
        SnakeGame::status(self)
    }

    fn initial_period(&self) -> Duration {
        Duration::from_millis(self.config().initial_tick_ms as u64)
    }

    fn speedup_ratio(&self) -> f64 {
        self.config().speedup_ratio
    }

    fn start(&mut self) -> bool {
        SnakeGame::start(self)
    }

    fn reset(&mut self) {
        SnakeGame::reset(self)
    }

    fn tick(&mut self) -> Step {
        SnakeGame::tick(self).into()
    }

    fn apply(&mut self, direction: Direction) -> Step {
        if self.change_direction(direction) {
            Step::Advanced
        } else {
            Step::Ignored
        }
    }

    fn final_score(&self) -> Option<FinalScore> {
        SnakeGame::final_score(self)
    }
}

impl ArcadeGame for MinesweeperGame {
    type Action = MinesweeperAction;

    fn kind(&self) -> GameKind {
        GameKind::Minesweeper
    }

    fn status(&self) -> PlayState {
        MinesweeperGame::status(self)
    }

    fn initial_period(&self) -> Duration {
        Duration::from_millis(MINESWEEPER_CLOCK_MS as u64)
    }

    /// The clock never speeds up.
    fn speedup_ratio(&self) -> f64 {
        0.0
    }

    fn start(&mut self) -> bool {
        MinesweeperGame::start(self)
    }

    fn reset(&mut self) {
        MinesweeperGame::reset(self)
    }

    fn tick(&mut self) -> Step {
        if MinesweeperGame::tick(self) {
            Step::Advanced
        } else {
            Step::Ignored
        }
    }

    fn apply(&mut self, action: MinesweeperAction) -> Step {
        match self.apply_action(action) {
            BoardEvent::Ignored => Step::Ignored,
            BoardEvent::Revealed { .. } | BoardEvent::Flagged | BoardEvent::Unflagged => {
                Step::Advanced
            }
            BoardEvent::Finished(Outcome::Won) => Step::Ended(MinesweeperGame::final_score(self)),
            BoardEvent::Finished(Outcome::Lost) => Step::Ended(None),
        }
    }

    fn final_score(&self) -> Option<FinalScore> {
        MinesweeperGame::final_score(self)
    }
}
