//! Terminal front-end for the toys.
//!
//! This is a small presentation layer: views turn engine state into plain
//! text lines, and the renderer flushes those lines to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so they can be unit-tested without a terminal

pub mod renderer;
pub mod view;

pub use tui_toys_core as core;
pub use tui_toys_types as types;

pub use renderer::{changed_lines, encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{calculator_lines, snake_lines, tictactoe_lines};
