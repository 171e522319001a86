//! Tic-Tac-Toe with move history and time travel
//!
//! Every accepted move appends a full board snapshot. Jumping back only moves
//! the cursor; redo history is dropped once a new move is made from an
//! earlier step.

use crate::types::{Mark, TicTacToeAction, TTT_CELLS, TTT_SIDE};

/// Squares in row-major order.
pub type Squares = [Mark; TTT_CELLS];

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 1-based board coordinates, as shown in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: u8,
    pub col: u8,
}

impl Location {
    /// Location of a square index. `None` when off the board.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= TTT_CELLS {
            return None;
        }
        Some(Self {
            row: (index / TTT_SIDE) as u8 + 1,
            col: (index % TTT_SIDE) as u8 + 1,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub squares: Squares,
    /// Move that produced this board; `None` for the empty start board.
    pub location: Option<Location>,
}

impl BoardSnapshot {
    pub fn empty() -> Self {
        Self {
            squares: [Mark::Empty; TTT_CELLS],
            location: None,
        }
    }

    pub fn free_squares(&self) -> usize {
        self.squares.iter().filter(|m| m.is_empty()).count()
    }
}

/// First completed line, checked in [`LINES`] order.
pub fn winner(squares: &Squares) -> Option<(Mark, [usize; 3])> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = squares[a];
        (!mark.is_empty() && mark == squares[b] && mark == squares[c]).then_some((mark, line))
    })
}

/// Mark to play at a given history step.
pub fn mark_for_step(step: usize) -> Mark {
    if step % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner { mark: Mark, line: [usize; 3] },
    Next(Mark),
    Draw,
}

impl Status {
    pub fn describe(&self) -> String {
        match self {
            Status::Winner { mark, .. } => format!("Winner: {}", mark.as_char()),
            Status::Next(mark) => format!("Next player: {}", mark.as_char()),
            Status::Draw => "Draw".to_string(),
        }
    }
}

/// One entry in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    pub step: usize,
    pub location: Option<Location>,
    /// This is the step currently shown.
    pub active: bool,
}

impl MoveEntry {
    pub fn label(&self) -> String {
        let base = if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        };
        match self.location {
            Some(loc) => format!("{} ({}, {})", base, loc.col, loc.row),
            None => base,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    history: Vec<BoardSnapshot>,
    step: usize,
    ascending: bool,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            history: vec![BoardSnapshot::empty()],
            step: 0,
            ascending: true,
        }
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[BoardSnapshot] {
        &self.history
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> &BoardSnapshot {
        &self.history[self.step]
    }

    pub fn next_mark(&self) -> Mark {
        mark_for_step(self.step)
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn status(&self) -> Status {
        let current = self.current();
        if let Some((mark, line)) = winner(&current.squares) {
            Status::Winner { mark, line }
        } else if current.free_squares() > 0 {
            Status::Next(self.next_mark())
        } else {
            Status::Draw
        }
    }

    /// Place the next mark at `index`. Returns false if the move is rejected.
    pub fn apply_move(&mut self, index: usize) -> bool {
        let Some(location) = Location::from_index(index) else {
            return false;
        };

        let current = *self.current();
        if winner(&current.squares).is_some() || !current.squares[index].is_empty() {
            return false;
        }

        let mut squares = current.squares;
        squares[index] = self.next_mark();

        self.history.truncate(self.step + 1);
        self.history.push(BoardSnapshot {
            squares,
            location: Some(location),
        });
        self.step = self.history.len() - 1;
        true
    }

    /// Show an earlier (or later) step without touching history.
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            return false;
        }
        self.step = step;
        true
    }

    /// Apply a player action. Returns false when it was rejected.
    pub fn apply_action(&mut self, action: TicTacToeAction) -> bool {
        match action {
            TicTacToeAction::Play(index) => self.apply_move(index),
            TicTacToeAction::Back => match self.step.checked_sub(1) {
                Some(step) => self.jump_to(step),
                None => false,
            },
            TicTacToeAction::Forward => self.jump_to(self.step + 1),
            TicTacToeAction::JumpStart => {
                let moved = self.step != 0;
                self.step = 0;
                moved
            }
            TicTacToeAction::ToggleOrder => {
                self.toggle_order();
                true
            }
        }
    }

    /// Flip the move list between ascending and descending order.
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// Move list in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut moves: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                location: snapshot.location,
                active: step == self.step,
            })
            .collect();
        if !self.ascending {
            moves.reverse();
        }
        moves
    }
}
