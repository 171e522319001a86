//! Command-line interface for the `tui-toys` binary.

use clap::{Parser, Subcommand};

use crate::core::{ConfigError, SnakeConfig};

/// TUI Toys - Snake, a pocket calculator and Tic-Tac-Toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tui-toys")]
#[command(about = "Small terminal games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Toy to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available toys
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play Snake
    Snake {
        /// Cells per side (overrides TOYS_SNAKE_BOARD_SIZE)
        #[arg(long)]
        board_size: Option<usize>,

        /// Milliseconds between moves (overrides TOYS_SNAKE_UPDATE_MS)
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Use the calculator
    Calculator,

    /// Play Tic-Tac-Toe
    Tictactoe,
}

/// Merge flags over an environment-derived config.
pub fn snake_config(
    base: SnakeConfig,
    board_size: Option<usize>,
    interval_ms: Option<u64>,
) -> Result<SnakeConfig, ConfigError> {
    SnakeConfig::new(
        board_size.unwrap_or(base.board_size()),
        interval_ms.unwrap_or(base.update_interval_ms()),
    )
}
