//! Minesweeper module - mine placement, flood-fill reveal, flags and clock
//!
//! Cells live in a flat row-major vector addressed by `row * cols + col`.
//! Reveal is iterative: a worklist of indices replaces recursive descent, so
//! large empty regions never grow the call stack.

use crate::config::MinesweeperConfig;
use crate::rng::{sample_without_replacement, SimpleRng};
use crate::types::*;

/// Visible state of a cell. `Revealed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Covered,
    Flagged,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub index: usize,
    pub position: Position,
    pub is_bomb: bool,
    /// Bombs among the (up to 8) in-grid neighbors
    pub bomb_neighbors: u8,
    pub state: CellState,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

/// Minutes and seconds since start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Clock {
    pub minutes: u32,
    pub seconds: u32,
}

impl Clock {
    /// Advance one second; 59 seconds roll over into the next minute.
    pub fn advance(&mut self) {
        if self.seconds < 59 {
            self.seconds += 1;
        } else {
            self.minutes += 1;
            self.seconds = 0;
        }
    }

    /// `MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Result of a reveal or flag request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardEvent {
    /// Request ignored (not running, off-grid, or wrong cell state)
    Ignored,
    /// `count` cells were revealed
    Revealed { count: u32 },
    Flagged,
    Unflagged,
    /// The reveal ended the game
    Finished(Outcome),
}

#[derive(Debug, Clone)]
pub struct MinesweeperGame {
    config: MinesweeperConfig,
    cells: Vec<Cell>,
    clock: Clock,
    revealed: usize,
    flags: u16,
    status: PlayState,
    outcome: Option<Outcome>,
    rng: SimpleRng,
}

/// In-grid indices of the 8 neighbors of `pos`
pub fn neighbors(pos: Position, rows: u8, cols: u8) -> impl Iterator<Item = usize> {
    const OFFSETS: [(i32, i32); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];
    OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let n = pos.offset(dx, dy);
        if n.y >= rows as i32 {
            return None;
        }
        n.to_index(cols as usize)
    })
}

/// Fresh covered grid with `config.mines` bombs placed by `rng`.
pub fn generate_cells(config: &MinesweeperConfig, rng: &mut SimpleRng) -> Vec<Cell> {
    let cols = config.cols as usize;
    let mut cells: Vec<Cell> = (0..config.cell_count())
        .map(|index| Cell {
            index,
            position: Position::new((index % cols) as i32, (index / cols) as i32),
            is_bomb: false,
            bomb_neighbors: 0,
            state: CellState::Covered,
        })
        .collect();

    for mine in sample_without_replacement(rng, config.mines as usize, config.cell_count()) {
        cells[mine].is_bomb = true;
        let pos = cells[mine].position;
        for n in neighbors(pos, config.rows, config.cols) {
            cells[n].bomb_neighbors += 1;
        }
    }

    cells
}

impl MinesweeperGame {
    pub fn new(config: MinesweeperConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SimpleRng::new(seed);
        let cells = generate_cells(&config, &mut rng);
        Ok(Self {
            config,
            cells,
            clock: Clock::default(),
            revealed: 0,
            flags: 0,
            status: PlayState::Idle,
            outcome: None,
            rng,
        })
    }

    /// Game over a hand-placed mine layout (scenario setups).
    pub fn with_mines(
        config: MinesweeperConfig,
        mines: &[Position],
    ) -> Result<Self, ConfigError> {
        let mut game = Self::new(config, 1)?;
        for cell in game.cells.iter_mut() {
            cell.is_bomb = false;
            cell.bomb_neighbors = 0;
        }
        let cols = config.cols as usize;
        let mut placed = 0usize;
        for &pos in mines {
            let Some(i) = pos.to_index(cols).filter(|&i| i < game.cells.len()) else {
                continue;
            };
            if game.cells[i].is_bomb {
                continue;
            }
            game.cells[i].is_bomb = true;
            placed += 1;
            for n in neighbors(pos, config.rows, config.cols) {
                game.cells[n].bomb_neighbors += 1;
            }
        }
        if placed != config.mines as usize {
            return Err(ConfigError::TooManyMines);
        }
        Ok(game)
    }

    pub fn config(&self) -> &MinesweeperConfig {
        &self.config
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn flag_count(&self) -> u16 {
        self.flags
    }

    pub fn status(&self) -> PlayState {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// `Mines Secured: n/total`
    pub fn flags_display(&self) -> String {
        format!("Mines Secured: {}/{}", self.flags, self.config.mines)
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if pos.y >= self.config.rows as i32 {
            return None;
        }
        pos.to_index(self.config.cols as usize)
    }

    pub fn start(&mut self) -> bool {
        if self.status != PlayState::Idle {
            return false;
        }
        self.status = PlayState::Running;
        true
    }

    /// New mine layout, clock 00:00, counters zero, idle.
    pub fn reset(&mut self) {
        self.cells = generate_cells(&self.config, &mut self.rng);
        self.clock = Clock::default();
        self.revealed = 0;
        self.flags = 0;
        self.status = PlayState::Idle;
        self.outcome = None;
    }

    /// Clock tick; returns false when not running.
    pub fn tick(&mut self) -> bool {
        if self.status != PlayState::Running {
            return false;
        }
        self.clock.advance();
        true
    }

    pub fn apply_action(&mut self, action: MinesweeperAction) -> BoardEvent {
        match action {
            MinesweeperAction::Reveal(pos) => self.reveal(pos),
            MinesweeperAction::ToggleFlag(pos) => self.toggle_flag(pos),
        }
    }

    /// Reveal a covered cell and flood outward from zero-neighbor cells.
    pub fn reveal(&mut self, pos: Position) -> BoardEvent {
        if self.status != PlayState::Running {
            return BoardEvent::Ignored;
        }
        let Some(start) = self.index_of(pos) else {
            return BoardEvent::Ignored;
        };
        if self.cells[start].state != CellState::Covered {
            return BoardEvent::Ignored;
        }

        let mut count = 0u32;
        let mut stack = vec![start];
        while let Some(i) = stack.pop() {
            if self.cells[i].state != CellState::Covered {
                continue;
            }
            self.cells[i].state = CellState::Revealed;
            self.revealed += 1;
            count += 1;

            let cell = self.cells[i];
            if cell.is_bomb {
                return self.finish(Outcome::Lost);
            }
            if self.revealed == self.config.cells_to_reveal() {
                return self.finish(Outcome::Won);
            }
            if cell.bomb_neighbors == 0 {
                stack.extend(
                    neighbors(cell.position, self.config.rows, self.config.cols).filter(|&n| {
                        !self.cells[n].is_bomb && self.cells[n].state == CellState::Covered
                    }),
                );
            }
        }

        BoardEvent::Revealed { count }
    }

    /// Covered -> flagged (while flags remain), flagged -> covered.
    pub fn toggle_flag(&mut self, pos: Position) -> BoardEvent {
        if self.status != PlayState::Running {
            return BoardEvent::Ignored;
        }
        let Some(i) = self.index_of(pos) else {
            return BoardEvent::Ignored;
        };

        match self.cells[i].state {
            CellState::Covered if self.flags < self.config.mines => {
                self.cells[i].state = CellState::Flagged;
                self.flags += 1;
                BoardEvent::Flagged
            }
            CellState::Flagged => {
                self.cells[i].state = CellState::Covered;
                self.flags = self.flags.saturating_sub(1);
                BoardEvent::Unflagged
            }
            _ => BoardEvent::Ignored,
        }
    }

    fn finish(&mut self, outcome: Outcome) -> BoardEvent {
        self.status = PlayState::Ended;
        self.outcome = Some(outcome);
        BoardEvent::Finished(outcome)
    }

    /// Elapsed time of a won game; lost or unfinished games have no score.
    pub fn final_score(&self) -> Option<FinalScore> {
        match self.outcome {
            Some(Outcome::Won) => Some(FinalScore::Elapsed {
                minutes: self.clock.minutes,
                seconds: self.clock.seconds,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_counts_match_mines() {
        let config = MinesweeperConfig::default();
        let mut rng = SimpleRng::new(99);
        let cells = generate_cells(&config, &mut rng);

        assert_eq!(cells.len(), 100);
        assert_eq!(cells.iter().filter(|c| c.is_bomb).count(), 15);
        for cell in &cells {
            let expected = neighbors(cell.position, config.rows, config.cols)
                .filter(|&n| cells[n].is_bomb)
                .count();
            assert_eq!(cell.bomb_neighbors as usize, expected);
        }
    }

    #[test]
    fn test_corner_has_three_neighbors() {
        assert_eq!(neighbors(Position::new(0, 0), 10, 10).count(), 3);
        assert_eq!(neighbors(Position::new(9, 4), 10, 10).count(), 5);
        assert_eq!(neighbors(Position::new(4, 4), 10, 10).count(), 8);
    }

    #[test]
    fn test_clock_rolls_over() {
        let mut clock = Clock {
            minutes: 0,
            seconds: 59,
        };
        clock.advance();
        assert_eq!(clock, Clock { minutes: 1, seconds: 0 });
        assert_eq!(clock.display(), "01:00");
    }

    #[test]
    fn test_input_ignored_while_idle() {
        let mut game = MinesweeperGame::new(MinesweeperConfig::default(), 5).unwrap();
        assert_eq!(game.reveal(Position::new(0, 0)), BoardEvent::Ignored);
        assert_eq!(game.toggle_flag(Position::new(0, 0)), BoardEvent::Ignored);
        assert!(!game.tick());
    }

    #[test]
    fn test_revealing_bomb_loses_without_score() {
        let config = MinesweeperConfig {
            rows: 3,
            cols: 3,
            mines: 1,
        };
        let mut game = MinesweeperGame::with_mines(config, &[Position::new(1, 1)]).unwrap();
        game.start();
        assert_eq!(game.reveal(Position::new(1, 1)), BoardEvent::Finished(Outcome::Lost));
        assert_eq!(game.status(), PlayState::Ended);
        assert_eq!(game.final_score(), None);
    }

    #[test]
    fn test_last_safe_cell_wins_with_clock() {
        let config = MinesweeperConfig {
            rows: 1,
            cols: 2,
            mines: 1,
        };
        let mut game = MinesweeperGame::with_mines(config, &[Position::new(0, 0)]).unwrap();
        game.start();
        game.tick();
        game.tick();
        assert_eq!(game.reveal(Position::new(1, 0)), BoardEvent::Finished(Outcome::Won));
        assert_eq!(
            game.final_score(),
            Some(FinalScore::Elapsed {
                minutes: 0,
                seconds: 2
            })
        );
    }

    #[test]
    fn test_reset_restores_initial_counters() {
        let mut game = MinesweeperGame::new(MinesweeperConfig::default(), 8).unwrap();
        game.start();
        game.tick();
        game.toggle_flag(Position::new(3, 3));
        game.reset();

        assert_eq!(game.status(), PlayState::Idle);
        assert_eq!(game.flag_count(), 0);
        assert_eq!(game.clock(), Clock::default());
        assert!(game.cells().iter().all(|c| c.state == CellState::Covered));
    }
}
