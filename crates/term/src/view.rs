//! Text views: map engine state into frame lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CalcState, SnakeState, Status, TicTacToe, MAX_DISPLAY_LEN};
use crate::types::{CALC_LAYOUT, TTT_SIDE};

const SNAKE_CELL: &str = "[]";
const FRUIT_CELL: &str = "()";
const EMPTY_CELL: &str = " .";

/// Board with a border, then the pause menu when paused.
pub fn snake_lines(state: &SnakeState, board_size: usize) -> Vec<String> {
    let border = format!("+{}+", "-".repeat(board_size * 2));
    let mut lines = Vec::with_capacity(board_size + 6);

    lines.push(border.clone());
    for row in 0..board_size {
        let mut line = String::with_capacity(board_size * 2 + 2);
        line.push('|');
        for col in 0..board_size {
            let cell = row * board_size + col;
            line.push_str(if state.is_snake_cell(cell) {
                SNAKE_CELL
            } else if state.is_fruit_cell(cell) {
                FRUIT_CELL
            } else {
                EMPTY_CELL
            });
        }
        line.push('|');
        lines.push(line);
    }
    lines.push(border);

    lines.push(format!("Length: {}", state.len()));
    if state.paused() {
        lines.push("PAUSED  [Enter] Resume  [r] Restart".to_string());
    } else {
        lines.push("[arrows] Steer  [space] Pause  [q] Quit".to_string());
    }
    lines
}

/// Display, then the keypad.
pub fn calculator_lines(state: &CalcState) -> Vec<String> {
    let mut lines = Vec::with_capacity(CALC_LAYOUT.len() + 4);
    lines.push(format!("[{:>width$}]", state.display(), width = MAX_DISPLAY_LEN));
    lines.push(String::new());
    for row in CALC_LAYOUT {
        let labels: Vec<String> = row.iter().map(|k| format!("{:^5}", k.label())).collect();
        lines.push(labels.join(" "));
    }
    lines.push(String::new());
    lines.push("[n] +/-  [c] Clear  [Enter] =  [q] Quit".to_string());
    lines
}

/// Board, status line, then the move list.
pub fn tictactoe_lines(game: &TicTacToe) -> Vec<String> {
    let status = game.status();
    let winning_line = match status {
        Status::Winner { line, .. } => Some(line),
        _ => None,
    };
    let squares = &game.current().squares;

    let mut lines = Vec::new();
    for row in 0..TTT_SIDE {
        let cells: Vec<String> = (0..TTT_SIDE)
            .map(|col| {
                let i = row * TTT_SIDE + col;
                let highlight = winning_line.is_some_and(|line| line.contains(&i));
                if highlight {
                    format!("*{}*", squares[i].as_char())
                } else {
                    format!(" {} ", squares[i].as_char())
                }
            })
            .collect();
        lines.push(cells.join("|"));
        if row + 1 < TTT_SIDE {
            lines.push("---+---+---".to_string());
        }
    }

    lines.push(String::new());
    lines.push(status.describe());
    lines.push(format!(
        "Order: {}",
        if game.ascending() { "Ascending" } else { "Descending" }
    ));
    for entry in game.moves() {
        let marker = if entry.active { '>' } else { ' ' };
        lines.push(format!("{} {}", marker, entry.label()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Segment;
    use crate::types::{CalcKey, Direction, Operator};

    #[test]
    fn test_snake_view_marks_cells() {
        let state = SnakeState::from_parts(
            vec![Segment::new(0, Direction::Right)],
            Some(3),
            false,
            2,
        )
        .unwrap();
        let lines = snake_lines(&state, 2);
        assert_eq!(lines[0], "+----+");
        assert_eq!(lines[1], "|[] .|");
        assert_eq!(lines[2], "| .()|");
        assert_eq!(lines[3], "+----+");
        assert_eq!(lines[4], "Length: 1");
    }

    #[test]
    fn test_snake_view_shows_pause_menu() {
        let state =
            SnakeState::from_parts(vec![Segment::new(0, Direction::Up)], Some(1), true, 3).unwrap();
        let lines = snake_lines(&state, 3);
        assert!(lines.last().unwrap().starts_with("PAUSED"));
    }

    #[test]
    fn test_calculator_view_shows_display() {
        let mut calc = CalcState::new();
        calc.press(CalcKey::Digit(4));
        calc.press(CalcKey::Digit(2));
        let lines = calculator_lines(&calc);
        assert!(lines[0].ends_with("42]"));
        assert!(lines.iter().any(|l| l.contains('÷')));
    }

    #[test]
    fn test_calculator_view_keeps_huge_results_in_the_box() {
        let mut calc = CalcState::new();
        for _ in 0..3 {
            for _ in 0..8 {
                calc.press(CalcKey::Digit(9));
            }
            calc.press(CalcKey::Operator(Operator::Mul));
        }
        calc.press(CalcKey::Equals);
        assert!(calc.display().contains('e'));
        let lines = calculator_lines(&calc);
        assert_eq!(lines[0].chars().count(), MAX_DISPLAY_LEN + 2);
    }

    #[test]
    fn test_tictactoe_view_highlights_win() {
        let mut game = TicTacToe::new();
        for i in [0, 1, 3, 4, 6] {
            game.apply_move(i);
        }
        let lines = tictactoe_lines(&game);
        assert_eq!(lines[0], "*X*| O |   ");
        assert!(lines.contains(&"Winner: X".to_string()));
        assert!(lines.iter().any(|l| l == "> Go to move #5 (1, 3)"));
    }
}
