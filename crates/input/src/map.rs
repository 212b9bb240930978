//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pointer::GridCursor;
use crate::types::{Direction, MinesweeperAction, TetrisAction};

/// Session-level request or an in-game action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<A> {
    Start,
    Reset,
    Quit,
    Play(A),
}

/// Keys shared by every game: Enter starts, `r` resets, `q`/Ctrl-C quits.
fn session_key<A>(key: KeyEvent) -> Option<Command<A>> {
    if should_quit(key) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        _ => None,
    }
}

/// Arrow keys, vim keys and WASD as a heading
pub fn direction_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Direction::Right)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Direction::Down)
        }
        _ => None,
    }
}

/// Tetris: left/right move, up or space rotates, down soft-drops.
pub fn tetris_key(key: KeyEvent) -> Option<Command<TetrisAction>> {
    if let Some(cmd) = session_key(key) {
        return Some(cmd);
    }
    if key.code == KeyCode::Char(' ') {
        return Some(Command::Play(TetrisAction::Rotate));
    }
    let action = match direction_key(key.code)? {
        Direction::Left => TetrisAction::MoveLeft,
        Direction::Right => TetrisAction::MoveRight,
        Direction::Up => TetrisAction::Rotate,
        Direction::Down => TetrisAction::SoftDrop,
    };
    Some(Command::Play(action))
}

/// Snake: any direction key turns.
pub fn snake_key(key: KeyEvent) -> Option<Command<Direction>> {
    if let Some(cmd) = session_key(key) {
        return Some(cmd);
    }
    direction_key(key.code).map(Command::Play)
}

/// Minesweeper keyboard play: direction keys move the cursor (no command),
/// space reveals and `f` toggles a flag under the cursor.
pub fn minesweeper_key(key: KeyEvent, cursor: &mut GridCursor) -> Option<Command<MinesweeperAction>> {
    if let Some(cmd) = session_key(key) {
        return Some(cmd);
    }
    match key.code {
        KeyCode::Char(' ') => Some(Command::Play(MinesweeperAction::Reveal(cursor.position()))),
        KeyCode::Char('f') | KeyCode::Char('F') => {
            Some(Command::Play(MinesweeperAction::ToggleFlag(cursor.position())))
        }
        code => {
            if let Some(dir) = direction_key(code) {
                cursor.step(dir);
            }
            None
        }
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
