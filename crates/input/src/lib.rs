//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events. Each toy gets its own mapping into the action types
//! from [`crate::types`]; quitting is shared.

pub mod map;

pub use tui_toys_types as types;

pub use map::{calculator_key_event, should_quit, snake_key_event, tictactoe_key_event};
