//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and state of the three toys. It has **no
//! dependencies** on UI, terminals, or clocks, making it:
//!
//! - **Deterministic**: randomness comes from an injected `rand::Rng`
//! - **Testable**: every transition is a plain method on a plain value
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`snake`]: Snake on an `N x N` toroidal grid, fruit and growth
//! - [`calculator`]: four-function calculator with IEEE-754 results
//! - [`tictactoe`]: 3x3 board, win/draw detection, move history
//! - [`config`]: Snake construction options
//! - [`error`]: configuration errors
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tui_toys_core::{SnakeConfig, SnakeGame};
//! use tui_toys_core::types::Direction;
//!
//! let mut game = SnakeGame::new(SnakeConfig::default(), StdRng::seed_from_u64(42));
//! game.turn(Direction::Right);
//! game.tick();
//! assert_eq!(game.state().head().direction, Direction::Right);
//! ```
//!
//! # Timing
//!
//! Nothing here reads the clock. Call [`SnakeGame::tick`] once per update
//! interval (200ms by default); the `engine` crate owns that timer.

pub mod calculator;
pub mod config;
pub mod error;
pub mod snake;
pub mod tictactoe;

pub use tui_toys_types as types;

// Re-export commonly used types for convenience
pub use calculator::{format_number, CalcState, MAX_DISPLAY_LEN};
pub use config::SnakeConfig;
pub use error::ConfigError;
pub use snake::{step, Segment, SnakeGame, SnakeState};
pub use tictactoe::{
    mark_for_step, winner, BoardSnapshot, Location, MoveEntry, Squares, Status, TicTacToe, LINES,
};
