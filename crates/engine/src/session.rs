//! Snake session: a [`SnakeGame`] plus the one timer that drives it.
//!
//! The session is "active" while it is started and the game is not paused.
//! Exactly then it holds a [`Ticker`]; every way out of the active state
//! (pause, restart, stop, drop) releases it, and every way back in starts a
//! fresh one.
//!
//! Time is passed in by the caller. A tick runs to completion inside
//! [`SnakeSession::poll`], so ticks and player input never interleave.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;

use crate::core::SnakeGame;
use crate::types::SnakeAction;
use crate::ticker::Ticker;

#[derive(Debug)]
pub struct SnakeSession<R = StdRng> {
    game: SnakeGame<R>,
    ticker: Option<Ticker>,
    started: bool,
}

impl<R: Rng> SnakeSession<R> {
    /// Wrap a game. No timer exists until [`start`](Self::start).
    pub fn new(game: SnakeGame<R>) -> Self {
        Self {
            game,
            ticker: None,
            started: false,
        }
    }

    pub fn game(&self) -> &SnakeGame<R> {
        &self.game
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Whether a timer is currently live.
    pub fn has_timer(&self) -> bool {
        self.ticker.is_some()
    }

    /// Begin ticking (unless the game is paused).
    pub fn start(&mut self, now: Instant) {
        if self.started {
            return;
        }
        self.started = true;
        self.sync_timer(now);
    }

    /// Stop ticking and release the timer. The game state is kept.
    pub fn stop(&mut self) {
        self.started = false;
        self.release_timer();
    }

    /// Apply a player action, then acquire or release the timer to match.
    pub fn handle(&mut self, action: SnakeAction, now: Instant) -> bool {
        let changed = self.game.apply_action(action);

        if action == SnakeAction::Restart {
            // A restart always leaves the old interval behind.
            self.release_timer();
        }
        self.sync_timer(now);
        changed
    }

    /// Run the tick if one is due. Returns whether a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(ticker) = self.ticker.as_mut() else {
            return false;
        };
        if !ticker.fire(now) {
            return false;
        }
        self.game.tick()
    }

    /// Time until the next tick, or `None` when no timer is live.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.ticker.as_ref().map(|t| t.remaining(now))
    }

    fn sync_timer(&mut self, now: Instant) {
        let active = self.started && !self.game.paused();
        match (active, self.ticker.is_some()) {
            (true, false) => {
                let period = self.game.config().update_interval();
                log::debug!("snake timer started ({:?})", period);
                self.ticker = Some(Ticker::start(now, period));
            }
            (false, true) => self.release_timer(),
            _ => {}
        }
    }

    fn release_timer(&mut self) {
        if self.ticker.take().is_some() {
            log::debug!("snake timer released");
        }
    }
}

impl<R> Drop for SnakeSession<R> {
    fn drop(&mut self) {
        if self.ticker.take().is_some() {
            log::debug!("snake timer released on drop");
        }
    }
}
