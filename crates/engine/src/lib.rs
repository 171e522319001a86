//! Snake lifecycle layer.
//!
//! The core crate only knows how to apply one tick. This crate owns the
//! repeating timer that produces those ticks and ties its lifetime to the
//! game's running/paused state.
//!
//! Single-threaded and cooperative: the caller polls with the current time
//! between input events (see the `tui-toys` binary for the loop).

pub mod session;
pub mod ticker;

pub use tui_toys_core as core;
pub use tui_toys_types as types;

pub use session::SnakeSession;
pub use ticker::Ticker;
