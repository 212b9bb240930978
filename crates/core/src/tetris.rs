//! Tetris module - the state machine driven by gravity ticks
//!
//! One tick resolves exactly one of these, in priority order:
//!
//! 1. the landscape touches the ceiling: the game ends;
//! 2. the piece would complete its origin row: score, replace or shrink the
//!    piece, clear the row and cascade;
//! 3. the piece is on the floor or resting on the landscape: merge it and spawn;
//! 4. otherwise the piece moves down one row.
//!
//! The piece is never merged before the completion check; a completing piece
//! contributes its cells to the row count without being written.

use crate::cascade::CascadeReport;
use crate::config::TetrisConfig;
use crate::landscape::{Landscape, Scene};
use crate::oracle;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::{PieceSnapshot, TetrisSnapshot};
use crate::types::*;

/// What one tick (or one accepted input) did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickEvent {
    /// Nothing happened (not running)
    Idle,
    /// The piece moved down one row
    Fell,
    /// The piece moved sideways or rotated
    Shifted,
    /// The piece merged into the landscape and a new piece spawned
    Placed,
    /// The origin row completed and the cascade ran; the tick period should shrink
    RowCleared { row: i32, cascade: CascadeReport },
    /// The landscape reached the ceiling
    GameOver { points: u32 },
}

/// Complete Tetris state: piece, landscape, points and lifecycle.
#[derive(Debug, Clone)]
pub struct TetrisGame {
    config: TetrisConfig,
    scene: Scene,
    piece: Piece,
    landscape: Landscape,
    points: u32,
    rows_cleared: u32,
    status: PlayState,
    rng: SimpleRng,
    last_event: Option<TickEvent>,
}

impl TetrisGame {
    /// Create an idle game with a random first piece
    pub fn new(config: TetrisConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let scene = Scene::new(config.width, config.height);
        let mut rng = SimpleRng::new(seed);
        let piece = Piece::random(&mut rng, &config);

        Ok(Self {
            config,
            scene,
            piece,
            landscape: Landscape::new(scene),
            points: 0,
            rows_cleared: 0,
            status: PlayState::Idle,
            rng,
            last_event: None,
        })
    }

    /// Build a game from explicit parts (scenario setups and replays).
    ///
    /// Landscape cells outside the configured scene are dropped.
    pub fn with_state(
        config: TetrisConfig,
        seed: u32,
        piece: Piece,
        landscape: Landscape,
    ) -> Result<Self, ConfigError> {
        let mut game = Self::new(config, seed)?;
        game.piece = piece;
        game.landscape = if landscape.scene() == game.scene {
            landscape
        } else {
            Landscape::with_cells(game.scene, landscape.cells())
        };
        Ok(game)
    }

    pub fn config(&self) -> &TetrisConfig {
        &self.config
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn landscape(&self) -> &Landscape {
        &self.landscape
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Rows completed by the falling piece (cascade clears not counted)
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn status(&self) -> PlayState {
        self.status
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// `idle -> running`; returns false (and does nothing) from any other state.
    pub fn start(&mut self) -> bool {
        if self.status != PlayState::Idle {
            return false;
        }
        self.status = PlayState::Running;
        true
    }

    /// Fresh landscape, fresh random piece, zero points, idle.
    pub fn reset(&mut self) {
        self.landscape = Landscape::new(self.scene);
        self.piece = Piece::random(&mut self.rng, &self.config);
        self.points = 0;
        self.rows_cleared = 0;
        self.status = PlayState::Idle;
        self.last_event = None;
    }

    fn spawn_piece(&mut self) {
        self.piece = Piece::random(&mut self.rng, &self.config);
    }

    /// One gravity step.
    pub fn tick(&mut self) -> TickEvent {
        if self.status != PlayState::Running {
            return TickEvent::Idle;
        }

        let event = if oracle::touches_ceiling(&self.landscape) {
            self.status = PlayState::Ended;
            TickEvent::GameOver {
                points: self.points,
            }
        } else if oracle::completes_row(&self.piece, &self.landscape) {
            self.complete_row()
        } else if oracle::is_on_ground(&self.piece, self.scene)
            || oracle::is_resting_on_landscape(&self.piece, &self.landscape)
        {
            self.landscape.merge(self.piece.occupied_cells());
            self.spawn_piece();
            TickEvent::Placed
        } else {
            self.piece.move_down();
            TickEvent::Fell
        };

        self.last_event = Some(event);
        event
    }

    fn complete_row(&mut self) -> TickEvent {
        let row = self.piece.origin.y;
        self.points = self.points.saturating_add(self.config.points_for_full_row);
        self.rows_cleared += 1;

        if self.piece.orientation == Orientation::Horizontal || self.piece.length == 1 {
            self.spawn_piece();
        } else {
            // The bottom cell filled the row; the rest of the piece keeps falling.
            self.piece.shrink_from_anchor();
        }

        let cascade = self.landscape.clear_and_cascade(row);
        TickEvent::RowCleared { row, cascade }
    }

    /// Apply a player request. Returns `None` when the request was ignored
    /// (not running, or the oracle rejected it).
    pub fn apply_action(&mut self, action: TetrisAction) -> Option<TickEvent> {
        if self.status != PlayState::Running {
            return None;
        }

        match action {
            TetrisAction::MoveLeft => {
                if !oracle::can_move_left(&self.piece, &self.landscape) {
                    return None;
                }
                self.piece.move_left();
            }
            TetrisAction::MoveRight => {
                if !oracle::can_move_right(&self.piece, &self.landscape) {
                    return None;
                }
                self.piece.move_right();
            }
            TetrisAction::Rotate => {
                if !oracle::can_rotate(&self.piece, &self.landscape) {
                    return None;
                }
                self.piece.rotate();
            }
            TetrisAction::SoftDrop => return Some(self.tick()),
        }

        self.last_event = Some(TickEvent::Shifted);
        Some(TickEvent::Shifted)
    }

    /// Take and clear the last event (for renderers that flash on clears).
    pub fn take_last_event(&mut self) -> Option<TickEvent> {
        self.last_event.take()
    }

    /// Final score once the game has ended
    pub fn final_score(&self) -> Option<FinalScore> {
        (self.status == PlayState::Ended).then_some(FinalScore::Points(self.points))
    }

    pub fn snapshot_into(&self, out: &mut TetrisSnapshot) {
        out.width = self.scene.width();
        out.height = self.scene.height();
        out.rows.clear();
        out.rows.extend_from_slice(self.landscape.row_masks());
        out.piece = Some(PieceSnapshot::from(self.piece));
        out.points = self.points;
        out.rows_cleared = self.rows_cleared;
        out.status = self.status;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> TetrisSnapshot {
        let mut s = TetrisSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
