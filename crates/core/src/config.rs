//! Snake engine configuration.

use std::time::Duration;

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_BOARD_SIZE, DEFAULT_UPDATE_INTERVAL_MS, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

/// Construction-time options for the Snake engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeConfig {
    board_size: usize,
    update_interval_ms: u64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
        }
    }
}

impl SnakeConfig {
    /// Build a validated config.
    pub fn new(board_size: usize, update_interval_ms: u64) -> Result<Self, ConfigError> {
        if board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                got: board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        if board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                got: board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if update_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self {
            board_size,
            update_interval_ms,
        })
    }

    /// Create from environment variables.
    ///
    /// - `TOYS_SNAKE_BOARD_SIZE` (default 15)
    /// - `TOYS_SNAKE_UPDATE_MS` (default 200)
    ///
    /// Values that do not parse fall back to the defaults; values that parse
    /// but are out of range are reported.
    pub fn from_env() -> Result<Self, ConfigError> {
        use std::env;

        let board_size = env::var("TOYS_SNAKE_BOARD_SIZE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_BOARD_SIZE);

        let update_interval_ms = env::var("TOYS_SNAKE_UPDATE_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_UPDATE_INTERVAL_MS);

        Self::new(board_size, update_interval_ms)
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Total number of cells (`N * N`).
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }

    pub fn update_interval_ms(&self) -> u64 {
        self.update_interval_ms
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}
