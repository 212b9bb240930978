//! Session pacing and score hand-off across all three games

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tui_arcade::core::{
    Landscape, MinesweeperConfig, MinesweeperGame, Piece, Scene, TetrisConfig, TetrisGame,
};
use tui_arcade::engine::{ManualScheduler, Scheduler, SchedulerCall, Session, Step};
use tui_arcade::types::{
    FinalScore, GameKind, MinesweeperAction, Orientation, PlayState, Position, ScoreSink,
};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(GameKind, FinalScore)>>>);

impl ScoreSink for Recorder {
    fn submit(&mut self, game: GameKind, score: FinalScore) {
        self.0.lock().unwrap().push((game, score));
    }
}

impl Recorder {
    fn taken(&self) -> Vec<(GameKind, FinalScore)> {
        self.0.lock().unwrap().clone()
    }
}

fn clearing_tetris() -> TetrisGame {
    let config = TetrisConfig::default();
    let landscape = Landscape::with_cells(
        Scene::new(config.width, config.height),
        (0..9).map(|x| Position::new(x, 9)),
    );
    let piece = Piece::new(Position::new(9, 9), 1, Orientation::Horizontal);
    TetrisGame::with_state(config, 7, piece, landscape).unwrap()
}

#[test]
fn test_row_clear_shrinks_tetris_period() {
    let mut session = Session::new(clearing_tetris(), ManualScheduler::new());
    assert!(session.start());
    assert_eq!(session.period(), Duration::from_millis(400));

    assert_eq!(session.on_tick(), Step::Accelerated);
    let ms = session.period().as_secs_f64() * 1000.0;
    assert!((ms - 392.0).abs() < 1e-6, "period was {}", ms);

    match session.scheduler().calls() {
        [SchedulerCall::Start(_), SchedulerCall::Reschedule(p)] => {
            assert!((p.as_secs_f64() * 1000.0 - 392.0).abs() < 1e-6);
        }
        other => panic!("unexpected scheduler calls {:?}", other),
    }
}

#[test]
fn test_tetris_game_over_stops_and_submits() {
    let recorder = Recorder::default();
    let config = TetrisConfig::default();
    let landscape =
        Landscape::with_cells(Scene::new(config.width, config.height), [Position::new(3, 0)]);
    let piece = Piece::new(Position::new(0, 0), 1, Orientation::Vertical);
    let game = TetrisGame::with_state(config, 7, piece, landscape).unwrap();
    let mut session =
        Session::new(game, ManualScheduler::new()).with_sink(Box::new(recorder.clone()));

    session.start();
    assert_eq!(session.on_tick(), Step::Ended(Some(FinalScore::Points(0))));
    assert!(!session.scheduler().is_running());
    assert_eq!(session.scheduler().calls().last(), Some(&SchedulerCall::Stop));
    assert_eq!(recorder.taken(), vec![(GameKind::Tetris, FinalScore::Points(0))]);
    assert_eq!(session.last_score(), Some(FinalScore::Points(0)));
}

#[test]
fn test_reset_restores_initial_period() {
    let mut session = Session::new(clearing_tetris(), ManualScheduler::new());
    session.start();
    session.on_tick();
    session.reset();

    assert_eq!(session.status(), PlayState::Idle);
    assert_eq!(session.period(), Duration::from_millis(400));
    assert!(!session.scheduler().is_running());
}

fn mine_session(recorder: &Recorder) -> Session<MinesweeperGame, ManualScheduler> {
    let config = MinesweeperConfig {
        rows: 2,
        cols: 2,
        mines: 1,
    };
    let game = MinesweeperGame::with_mines(config, &[Position::new(1, 1)]).unwrap();
    Session::new(game, ManualScheduler::new()).with_sink(Box::new(recorder.clone()))
}

#[test]
fn test_minesweeper_win_submits_elapsed_time() {
    let recorder = Recorder::default();
    let mut session = mine_session(&recorder);
    session.start();
    assert_eq!(session.period(), Duration::from_secs(1));

    for _ in 0..2 {
        assert_eq!(session.on_tick(), Step::Advanced);
    }
    for pos in [Position::new(0, 0), Position::new(1, 0)] {
        assert_eq!(
            session.on_input(MinesweeperAction::Reveal(pos)),
            Step::Advanced
        );
    }
    let elapsed = FinalScore::Elapsed {
        minutes: 0,
        seconds: 2,
    };
    assert_eq!(
        session.on_input(MinesweeperAction::Reveal(Position::new(0, 1))),
        Step::Ended(Some(elapsed))
    );
    assert_eq!(recorder.taken(), vec![(GameKind::Minesweeper, elapsed)]);

    // The clock is frozen once the timer stops.
    assert_eq!(session.on_tick(), Step::Ignored);
}

#[test]
fn test_minesweeper_loss_submits_nothing() {
    let recorder = Recorder::default();
    let mut session = mine_session(&recorder);
    session.start();

    assert_eq!(
        session.on_input(MinesweeperAction::Reveal(Position::new(1, 1))),
        Step::Ended(None)
    );
    assert!(!session.scheduler().is_running());
    assert!(recorder.taken().is_empty());
    assert_eq!(session.last_score(), None);
}

#[test]
fn test_input_before_start_is_ignored() {
    let recorder = Recorder::default();
    let mut session = mine_session(&recorder);
    assert_eq!(
        session.on_input(MinesweeperAction::ToggleFlag(Position::new(0, 0))),
        Step::Ignored
    );
    assert!(session.scheduler().calls().is_empty());
}
