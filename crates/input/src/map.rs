//! Key mapping from terminal events to game actions.

use crate::types::{CalcKey, Direction, Operator, SnakeAction, TicTacToeAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to Snake actions.
pub fn snake_key_event(key: KeyEvent) -> Option<SnakeAction> {
    match key.code {
        // Steering
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(SnakeAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(SnakeAction::Turn(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(SnakeAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(SnakeAction::Turn(Direction::Down))
        }

        // Pause menu
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(SnakeAction::TogglePause),
        KeyCode::Enter => Some(SnakeAction::Resume),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SnakeAction::Restart),

        _ => None,
    }
}

/// Map keyboard input to calculator buttons.
pub fn calculator_key_event(key: KeyEvent) -> Option<CalcKey> {
    match key.code {
        KeyCode::Char(c @ '0'..='9') => Some(CalcKey::Digit(c as u8 - b'0')),
        KeyCode::Char('.') | KeyCode::Char(',') => Some(CalcKey::Decimal),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('~') => Some(CalcKey::ToggleSign),
        KeyCode::Char('%') => Some(CalcKey::Percent),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc | KeyCode::Delete => Some(CalcKey::Clear),
        KeyCode::Char('=') | KeyCode::Enter => Some(CalcKey::Equals),
        KeyCode::Char(c) => Operator::from_char(c).map(CalcKey::Operator),
        _ => None,
    }
}

/// Map keyboard input to Tic-Tac-Toe actions.
///
/// Squares follow the keypad of a phone: `1` is top-left, `9` bottom-right.
pub fn tictactoe_key_event(key: KeyEvent) -> Option<TicTacToeAction> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => Some(TicTacToeAction::Play((c as u8 - b'1') as usize)),
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('u') | KeyCode::Char('U') => Some(TicTacToeAction::Back),
        KeyCode::Right => Some(TicTacToeAction::Forward),
        KeyCode::Home | KeyCode::Char('0') => Some(TicTacToeAction::JumpStart),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(TicTacToeAction::ToggleOrder),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
