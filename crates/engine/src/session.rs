//! Session module - one game, one scheduler, one optional score sink
//!
//! The session owns the tick period. It starts the scheduler on `start`,
//! shrinks the period on every accelerating step (`period -= period * ratio`),
//! stops the scheduler when the game ends or resets, and hands the final score
//! to the sink exactly once per game.

use std::time::Duration;

use tui_arcade_types::{FinalScore, PlayState, ScoreSink};

use crate::game::{ArcadeGame, Step};
use crate::scheduler::Scheduler;

pub struct Session<G: ArcadeGame, S: Scheduler> {
    game: G,
    scheduler: S,
    period_ms: f64,
    sink: Option<Box<dyn ScoreSink>>,
    last_score: Option<FinalScore>,
}

impl<G: ArcadeGame, S: Scheduler> Session<G, S> {
    pub fn new(game: G, scheduler: S) -> Self {
        let period_ms = game.initial_period().as_secs_f64() * 1000.0;
        Self {
            game,
            scheduler,
            period_ms,
            sink: None,
            last_score: None,
        }
    }

    /// Forward final scores to `sink`
    pub fn with_sink(mut self, sink: Box<dyn ScoreSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn status(&self) -> PlayState {
        self.game.status()
    }

    /// Current tick period
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(self.period_ms / 1000.0)
    }

    /// Score of the last finished game, if it produced one
    pub fn last_score(&self) -> Option<FinalScore> {
        self.last_score
    }

    /// Start the game and its timer at the initial period. No-op unless idle.
    pub fn start(&mut self) -> bool {
        if !self.game.start() {
            return false;
        }
        self.period_ms = self.game.initial_period().as_secs_f64() * 1000.0;
        self.scheduler.start(self.period());
        true
    }

    /// Stop the timer and return the game to a fresh idle state.
    pub fn reset(&mut self) {
        self.scheduler.stop();
        self.game.reset();
        self.period_ms = self.game.initial_period().as_secs_f64() * 1000.0;
        self.last_score = None;
    }

    /// Called by the loop whenever the scheduler fires.
    pub fn on_tick(&mut self) -> Step {
        if !self.scheduler.is_running() {
            return Step::Ignored;
        }
        let step = self.game.tick();
        self.handle(step);
        step
    }

    /// Player input; ignored by the game unless running.
    pub fn on_input(&mut self, action: G::Action) -> Step {
        let step = self.game.apply(action);
        self.handle(step);
        step
    }

    fn handle(&mut self, step: Step) {
        match step {
            Step::Accelerated => {
                let ratio = self.game.speedup_ratio();
                self.period_ms -= self.period_ms * ratio;
                self.scheduler.reschedule(self.period());
            }
            Step::Ended(score) => {
                self.scheduler.stop();
                self.last_score = score;
                if let (Some(score), Some(sink)) = (score, self.sink.as_mut()) {
                    sink.submit(self.game.kind(), score);
                }
            }
            Step::Ignored | Step::Advanced => {}
        }
    }
}
