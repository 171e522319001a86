//! Timer ownership through the facade crate

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use tui_toys::core::{Segment, SnakeConfig, SnakeGame, SnakeState};
use tui_toys::engine::SnakeSession;
use tui_toys::types::{Direction, SnakeAction};

fn session(interval_ms: u64) -> SnakeSession<Pcg32> {
    let config = SnakeConfig::new(15, interval_ms).unwrap();
    let state =
        SnakeState::from_parts(vec![Segment::new(37, Direction::Down)], Some(0), false, 15).unwrap();
    SnakeSession::new(SnakeGame::with_state(config, state, Pcg32::seed_from_u64(8)).unwrap())
}

#[test]
fn test_session_lifecycle() {
    let t0 = Instant::now();
    let mut s = session(100);
    assert!(!s.has_timer());

    s.start(t0);
    assert!(s.has_timer());
    assert_eq!(s.timeout(t0), Some(Duration::from_millis(100)));

    // 5 ticks at 100ms steps: 37 -> 52 -> 67 -> 82 -> 97 -> 112.
    let mut now = t0;
    for _ in 0..5 {
        now += Duration::from_millis(100);
        assert!(s.poll(now));
    }
    assert_eq!(s.game().state().head().position, 112);

    s.handle(SnakeAction::TogglePause, now);
    assert!(!s.has_timer());
    for _ in 0..3 {
        now += Duration::from_millis(100);
        assert!(!s.poll(now));
    }
    assert_eq!(s.game().state().head().position, 112);

    s.handle(SnakeAction::Resume, now);
    assert!(s.has_timer());
    assert!(s.poll(now + Duration::from_millis(100)));
    assert_eq!(s.game().state().head().position, 127);

    s.stop();
    assert!(!s.has_timer());
}

#[test]
fn test_dropping_session_is_clean() {
    let t0 = Instant::now();
    let mut s = session(50);
    s.start(t0);
    drop(s);
}

#[test]
fn test_input_between_ticks_applies_on_next_tick() {
    let t0 = Instant::now();
    let mut s = session(200);
    s.start(t0);
    s.handle(SnakeAction::Turn(Direction::Right), t0 + Duration::from_millis(10));
    assert_eq!(s.game().state().head().position, 37);
    assert!(s.poll(t0 + Duration::from_millis(200)));
    assert_eq!(s.game().state().head().position, 38);
}
