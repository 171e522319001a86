//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Snake board defaults
pub const DEFAULT_BOARD_SIZE: usize = 15;
pub const MIN_BOARD_SIZE: usize = 2;
/// Upper bound keeps `N * N` comfortably inside `usize` on every target.
pub const MAX_BOARD_SIZE: usize = 4096;

/// Snake timing (in milliseconds)
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 200;

/// Tic-Tac-Toe board is always 3x3
pub const TTT_CELLS: usize = 9;
pub const TTT_SIDE: usize = 3;

/// Snake heading on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Snake inputs. `Tick` comes from the timer, the rest from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeAction {
    Tick,
    Turn(Direction),
    TogglePause,
    Resume,
    Restart,
}

impl SnakeAction {
    /// Name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            SnakeAction::Tick => "tick",
            SnakeAction::Turn(direction) => direction.as_str(),
            SnakeAction::TogglePause => "togglePause",
            SnakeAction::Resume => "resume",
            SnakeAction::Restart => "restart",
        }
    }
}

/// Binary calculator operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Apply with plain IEEE-754 double semantics
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }

    /// Button label
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => 'x',
            Operator::Div => '÷',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' | 'x' | 'X' => Some(Operator::Mul),
            '/' | '÷' => Some(Operator::Div),
            _ => None,
        }
    }
}

/// One calculator button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcKey {
    /// Always in `0..=9`
    Digit(u8),
    Decimal,
    ToggleSign,
    Percent,
    Clear,
    Operator(Operator),
    Equals,
}

impl CalcKey {
    /// Button label, as printed on the keypad
    pub fn label(&self) -> String {
        match self {
            CalcKey::Digit(d) => d.to_string(),
            CalcKey::Decimal => ",".to_string(),
            CalcKey::ToggleSign => "+/-".to_string(),
            CalcKey::Percent => "%".to_string(),
            CalcKey::Clear => "C".to_string(),
            CalcKey::Operator(op) => op.symbol().to_string(),
            CalcKey::Equals => "=".to_string(),
        }
    }
}

/// Keypad rows, top to bottom
pub const CALC_LAYOUT: [&[CalcKey]; 5] = [
    &[
        CalcKey::Clear,
        CalcKey::ToggleSign,
        CalcKey::Percent,
        CalcKey::Operator(Operator::Div),
    ],
    &[
        CalcKey::Digit(7),
        CalcKey::Digit(8),
        CalcKey::Digit(9),
        CalcKey::Operator(Operator::Mul),
    ],
    &[
        CalcKey::Digit(4),
        CalcKey::Digit(5),
        CalcKey::Digit(6),
        CalcKey::Operator(Operator::Sub),
    ],
    &[
        CalcKey::Digit(1),
        CalcKey::Digit(2),
        CalcKey::Digit(3),
        CalcKey::Operator(Operator::Add),
    ],
    &[CalcKey::Digit(0), CalcKey::Decimal, CalcKey::Equals],
];

/// Tic-Tac-Toe square contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        matches!(self, Mark::Empty)
    }

    pub fn as_char(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Tic-Tac-Toe inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeAction {
    /// Place the next mark on a square (row-major `0..9`)
    Play(usize),
    /// Show the previous step
    Back,
    /// Show the next recorded step
    Forward,
    /// Show the empty start board
    JumpStart,
    /// Flip the move list order
    ToggleOrder,
}
