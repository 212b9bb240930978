//! Front end: key and mouse handling through `App`, checked on the rendered frame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_arcade::adapter::Qualified;
use tui_arcade::app::{App, Flow};
use tui_arcade::core::{
    CellState, MinesweeperConfig, MinesweeperGame, SnakeConfig, SnakeGame, TetrisConfig,
    TetrisGame,
};
use tui_arcade::term::{MinesweeperView, Viewport, WON_MESSAGE};
use tui_arcade::types::{FinalScore, GameKind, PlayState, Position};

const VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn click(button: MouseButton, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(button),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn mine_app() -> App<MinesweeperGame> {
    let config = MinesweeperConfig {
        rows: 3,
        cols: 3,
        mines: 1,
    };
    let game = MinesweeperGame::with_mines(config, &[Position::new(2, 2)]).unwrap();
    App::new(game, None)
}

#[test]
fn tetris_idle_prompt_then_score_panel() {
    let game = TetrisGame::new(TetrisConfig::default(), 9).unwrap();
    let mut app = App::new(game, None);

    assert!(app.render(VIEWPORT).contains_text("PRESS ENTER"));
    app.handle_key(key(KeyCode::Enter));
    let fb = app.render(VIEWPORT);
    assert!(!fb.contains_text("PRESS ENTER"));
    assert!(fb.contains_text("SCORE"));
}

#[test]
fn snake_reset_returns_to_idle() {
    let game = SnakeGame::new(SnakeConfig::default(), 9).unwrap();
    let mut app = App::new(game, None);
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.session().status(), PlayState::Running);

    assert_eq!(app.handle_key(key(KeyCode::Char('r'))), Flow::Redraw);
    assert_eq!(app.session().status(), PlayState::Idle);
    assert!(app.render(VIEWPORT).contains_text("PRESS ENTER"));
}

#[test]
fn minesweeper_clicks_flag_and_reveal() {
    let mut app = mine_app();
    assert!(app.wants_mouse());
    app.handle_key(key(KeyCode::Enter));

    let (left, top) = MinesweeperView::default().grid_origin(app.session().game(), VIEWPORT);

    // Right click on the mine (column 2 is four terminal columns in).
    let flow = app.handle_mouse(click(MouseButton::Right, left + 4, top + 2), VIEWPORT);
    assert_eq!(flow, Flow::Redraw);
    let game = app.session().game();
    assert_eq!(game.cell(Position::new(2, 2)).unwrap().state, CellState::Flagged);

    // Clicks outside the grid do nothing.
    let flow = app.handle_mouse(click(MouseButton::Left, left + 6, top), VIEWPORT);
    assert_eq!(flow, Flow::Continue);

    // Left click on the corner floods the whole safe area.
    app.handle_mouse(click(MouseButton::Left, left + 1, top), VIEWPORT);
    assert_eq!(app.session().status(), PlayState::Ended);
    assert_eq!(
        app.session().last_score(),
        Some(FinalScore::Elapsed {
            minutes: 0,
            seconds: 0
        })
    );
    assert!(app.render(VIEWPORT).contains_text(WON_MESSAGE));
}

#[test]
fn minesweeper_keyboard_cursor_reveals() {
    let mut app = mine_app();
    app.handle_key(key(KeyCode::Enter));

    app.handle_key(key(KeyCode::Right));
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.ui().cursor().position(), Position::new(1, 1));

    app.handle_key(key(KeyCode::Char(' ')));
    let game = app.session().game();
    assert_eq!(game.revealed_count(), 1);
    assert_eq!(game.cell(Position::new(1, 1)).unwrap().bomb_neighbors, 1);
    assert!(app.render(VIEWPORT).contains_text("1"));
}

#[test]
fn name_prompt_collects_text() {
    let game = SnakeGame::new(SnakeConfig::default(), 9).unwrap();
    let mut app = App::new(game, None);
    app.open_prompt(Qualified {
        game: GameKind::Snake,
        score: FinalScore::Points(40),
    });

    for ch in "zoe".chars() {
        app.handle_key(key(KeyCode::Char(ch)));
    }
    let fb = app.render(VIEWPORT);
    assert!(fb.contains_text("NEW HIGH SCORE"));
    assert!(fb.contains_text("zoe"));

    // Mouse input is swallowed while the prompt is open.
    assert_eq!(
        app.handle_mouse(click(MouseButton::Left, 0, 0), VIEWPORT),
        Flow::Continue
    );
    assert_eq!(app.handle_key(key(KeyCode::Esc)), Flow::Redraw);
    assert!(!app.prompting());
}
