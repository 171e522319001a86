//! Terminal toys runner (default binary).
//!
//! Uses crossterm for input and a line-diffing text renderer. Snake ticks
//! come from a `SnakeSession` polled between key events.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_toys::cli::{snake_config, Cli, Command};
use tui_toys::core::{CalcState, SnakeConfig, SnakeGame, TicTacToe};
use tui_toys::engine::SnakeSession;
use tui_toys::input::{calculator_key_event, should_quit, snake_key_event, tictactoe_key_event};
use tui_toys::term::{calculator_lines, snake_lines, tictactoe_lines, TerminalRenderer};

/// Upper bound on input waits when no timer is live.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// A toy with its validated options.
enum Toy {
    Snake(SnakeConfig, Option<u64>),
    Calculator,
    TicTacToe,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Validate config before touching the terminal.
    let toy = match cli.command {
        Command::Snake {
            board_size,
            interval_ms,
            seed,
        } => {
            let base = SnakeConfig::from_env().context("invalid snake environment config")?;
            let config =
                snake_config(base, board_size, interval_ms).context("invalid snake options")?;
            log::info!(
                "snake: {}x{} board, {}ms interval",
                config.board_size(),
                config.board_size(),
                config.update_interval_ms()
            );
            Toy::Snake(config, seed)
        }
        Command::Calculator => Toy::Calculator,
        Command::Tictactoe => Toy::TicTacToe,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match toy {
        Toy::Snake(config, seed) => run_snake(&mut term, config, seed),
        Toy::Calculator => run_calculator(&mut term),
        Toy::TicTacToe => run_tictactoe(&mut term),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Wait up to `timeout` for a key press. Resize forces a full redraw.
fn next_key(term: &mut TerminalRenderer, timeout: Duration) -> Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        Event::Resize(_, _) => {
            term.invalidate();
            Ok(None)
        }
        _ => Ok(None),
    }
}

fn run_snake(term: &mut TerminalRenderer, config: SnakeConfig, seed: Option<u64>) -> Result<()> {
    let game = match seed {
        Some(seed) => SnakeGame::with_seed(config, seed),
        None => SnakeGame::from_entropy(config),
    };
    let mut session = SnakeSession::new(game);
    session.start(Instant::now());

    loop {
        term.draw(snake_lines(session.game().state(), config.board_size()))?;

        let timeout = session.timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if let Some(key) = next_key(term, timeout)? {
            if should_quit(key) {
                break;
            }
            if let Some(action) = snake_key_event(key) {
                session.handle(action, Instant::now());
            }
        }

        session.poll(Instant::now());
    }

    session.stop();
    Ok(())
}

fn run_calculator(term: &mut TerminalRenderer) -> Result<()> {
    let mut calc = CalcState::new();
    loop {
        term.draw(calculator_lines(&calc))?;
        let Some(key) = next_key(term, IDLE_POLL)? else {
            continue;
        };
        if should_quit(key) {
            return Ok(());
        }
        if let Some(button) = calculator_key_event(key) {
            calc.press(button);
        }
    }
}

fn run_tictactoe(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = TicTacToe::new();
    loop {
        term.draw(tictactoe_lines(&game))?;
        let Some(key) = next_key(term, IDLE_POLL)? else {
            continue;
        };
        if should_quit(key) {
            return Ok(());
        }
        if let Some(action) = tictactoe_key_event(key) {
            game.apply_action(action);
        }
    }
}
