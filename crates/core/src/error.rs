//! Construction-time errors.
//!
//! Engine operations never fail: illegal moves and malformed input are
//! silently ignored. Only building an engine from bad configuration errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least {min}, got {got}")]
    BoardTooSmall { got: usize, min: usize },

    #[error("board size must be at most {max}, got {got}")]
    BoardTooLarge { got: usize, max: usize },

    #[error("update interval must be greater than zero")]
    ZeroInterval,

    #[error("snake state does not fit a {board_size}x{board_size} board")]
    StateOffBoard { board_size: usize },
}
