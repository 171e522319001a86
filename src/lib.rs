//! TUI Toys (workspace facade crate).
//!
//! Re-exports `tui_toys::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub mod cli;

pub use tui_toys_core as core;
pub use tui_toys_engine as engine;
pub use tui_toys_input as input;
pub use tui_toys_term as term;
pub use tui_toys_types as types;
