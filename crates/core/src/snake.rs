//! Snake state module - movement, growth and pause on a toroidal grid
//!
//! The board is an `N x N` grid addressed by row-major cell index in
//! `[0, N²)`. Motion past an edge re-enters on the opposite edge of the same
//! row or column.
//!
//! [`SnakeState`] is a plain value with a transition function; [`SnakeGame`]
//! owns the board size and the random source and applies actions in place.
//! Neither knows anything about time: ticks are delivered by the caller (see
//! the `engine` crate for the timer-owning session).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SnakeConfig;
use crate::error::ConfigError;
use crate::types::{Direction, SnakeAction};

/// One body part of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub position: usize,
    pub direction: Direction,
}

impl Segment {
    pub fn new(position: usize, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// Move one cell from `position` towards `direction`, wrapping at the edges.
///
/// `position` must be in `[0, board_size²)`.
pub fn step(position: usize, direction: Direction, board_size: usize) -> usize {
    let n = board_size;
    match direction {
        Direction::Up => {
            if position < n {
                position + n * (n - 1)
            } else {
                position - n
            }
        }
        Direction::Down => {
            if position + n >= n * n {
                position - n * (n - 1)
            } else {
                position + n
            }
        }
        Direction::Left => {
            if position % n == 0 {
                position + n - 1
            } else {
                position - 1
            }
        }
        Direction::Right => {
            if (position + 1) % n == 0 {
                position + 1 - n
            } else {
                position + 1
            }
        }
    }
}

/// Snake, fruit and pause flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeState {
    snake: Vec<Segment>,
    /// `None` only once the snake covers every cell.
    fruit: Option<usize>,
    paused: bool,
}

impl SnakeState {
    /// Fresh game: random single-segment snake, random heading, fruit elsewhere.
    pub fn random<R: Rng + ?Sized>(board_size: usize, rng: &mut R) -> Self {
        let cells = board_size * board_size;
        let head = Segment::new(
            rng.random_range(0..cells),
            Direction::ALL[rng.random_range(0..Direction::ALL.len())],
        );

        let mut state = Self {
            snake: vec![head],
            fruit: None,
            paused: false,
        };
        state.relocate_fruit(board_size, rng);
        state
    }

    /// Build a specific position.
    ///
    /// Returns `None` if the snake is empty, any cell is off the board, or the
    /// fruit sits on the snake.
    pub fn from_parts(
        snake: Vec<Segment>,
        fruit: Option<usize>,
        paused: bool,
        board_size: usize,
    ) -> Option<Self> {
        let state = Self {
            snake,
            fruit,
            paused,
        };
        if state.snake.is_empty() || !state.fits(board_size * board_size) {
            return None;
        }
        if let Some(f) = fruit {
            if state.is_snake_cell(f) {
                return None;
            }
        }
        Some(state)
    }

    /// Every segment and the fruit lie in `[0, cells)`.
    pub fn fits(&self, cells: usize) -> bool {
        self.snake.iter().all(|s| s.position < cells) && !matches!(self.fruit, Some(f) if f >= cells)
    }

    pub fn snake(&self) -> &[Segment] {
        &self.snake
    }

    pub fn head(&self) -> Segment {
        self.snake[0]
    }

    pub fn tail(&self) -> Segment {
        self.snake[self.snake.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always false; a snake has at least a head.
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn fruit(&self) -> Option<usize> {
        self.fruit
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn is_snake_cell(&self, cell: usize) -> bool {
        self.snake.iter().any(|s| s.position == cell)
    }

    pub fn is_fruit_cell(&self, cell: usize) -> bool {
        self.fruit == Some(cell)
    }

    /// Pure transition: the state after `action`.
    ///
    /// `Restart` draws a fresh state from `rng`; every other action only
    /// touches the random source when the snake eats.
    pub fn next<R: Rng + ?Sized>(
        &self,
        action: SnakeAction,
        board_size: usize,
        rng: &mut R,
    ) -> Self {
        let mut next = self.clone();
        next.apply(action, board_size, rng);
        next
    }

    /// In-place transition. Returns whether anything changed.
    pub(crate) fn apply<R: Rng + ?Sized>(
        &mut self,
        action: SnakeAction,
        board_size: usize,
        rng: &mut R,
    ) -> bool {
        match action {
            SnakeAction::Tick => self.tick(board_size, rng),
            SnakeAction::Turn(direction) => {
                // 180° turns are allowed: the head may reverse into its neck.
                let changed = self.snake[0].direction != direction;
                self.snake[0].direction = direction;
                changed
            }
            SnakeAction::TogglePause => {
                self.paused = !self.paused;
                true
            }
            SnakeAction::Resume => {
                let changed = self.paused;
                self.paused = false;
                changed
            }
            SnakeAction::Restart => {
                *self = Self::random(board_size, rng);
                true
            }
        }
    }

    fn tick<R: Rng + ?Sized>(&mut self, board_size: usize, rng: &mut R) -> bool {
        if self.paused {
            return false;
        }

        for segment in self.snake.iter_mut() {
            segment.position = step(segment.position, segment.direction, board_size);
        }

        // Walk from the tail so each segment reads its leader's pre-tick heading.
        for i in (1..self.snake.len()).rev() {
            self.snake[i].direction = self.snake[i - 1].direction;
        }

        if self.fruit == Some(self.snake[0].position) {
            self.grow(board_size, rng);
        }

        true
    }

    fn grow<R: Rng + ?Sized>(&mut self, board_size: usize, rng: &mut R) {
        let tail = self.tail();
        let position = step(tail.position, tail.direction.opposite(), board_size);
        self.snake.push(Segment::new(position, tail.direction));
        log::debug!("snake grew to {} at cell {}", self.snake.len(), position);
        self.relocate_fruit(board_size, rng);
    }

    /// Rejection-sample an unoccupied cell for the fruit.
    fn relocate_fruit<R: Rng + ?Sized>(&mut self, board_size: usize, rng: &mut R) {
        let cells = board_size * board_size;

        // Only a snake at least as long as the board can cover it completely.
        if self.snake.len() >= cells && (0..cells).all(|c| self.is_snake_cell(c)) {
            log::warn!("board is full, no cell left for fruit");
            self.fruit = None;
            return;
        }

        let fruit = loop {
            let candidate = rng.random_range(0..cells);
            if !self.is_snake_cell(candidate) {
                break candidate;
            }
        };
        self.fruit = Some(fruit);
    }
}

/// Snake state bound to a board size and a random source.
#[derive(Debug, Clone)]
pub struct SnakeGame<R = StdRng> {
    config: SnakeConfig,
    state: SnakeState,
    rng: R,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl SnakeGame<StdRng> {
    /// Game seeded from the operating system.
    pub fn from_entropy(config: SnakeConfig) -> Self {
        Self::new(config, StdRng::from_os_rng())
    }

    /// Deterministic game for the given seed.
    pub fn with_seed(config: SnakeConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(config: SnakeConfig, mut rng: R) -> Self {
        let state = SnakeState::random(config.board_size(), &mut rng);
        Self {
            config,
            state,
            rng,
            episode_id: 0,
        }
    }

    /// Start from a prepared state instead of a random one.
    ///
    /// Fails if the state was built for a larger board than `config`.
    pub fn with_state(config: SnakeConfig, state: SnakeState, rng: R) -> Result<Self, ConfigError> {
        if !state.fits(config.cell_count()) {
            return Err(ConfigError::StateOffBoard {
                board_size: config.board_size(),
            });
        }
        Ok(Self {
            config,
            state,
            rng,
            episode_id: 0,
        })
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn board_size(&self) -> usize {
        self.config.board_size()
    }

    pub fn state(&self) -> &SnakeState {
        &self.state
    }

    pub fn paused(&self) -> bool {
        self.state.paused()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Apply a game action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: SnakeAction) -> bool {
        let changed = self
            .state
            .apply(action, self.config.board_size(), &mut self.rng);

        match action {
            SnakeAction::Restart => {
                self.episode_id = self.episode_id.wrapping_add(1);
                log::debug!("snake restarted, episode {}", self.episode_id);
            }
            SnakeAction::Tick => log::trace!("tick: head at {}", self.state.head().position),
            _ if changed => log::debug!("snake action: {}", action.as_str()),
            _ => {}
        }

        changed
    }

    pub fn tick(&mut self) -> bool {
        self.apply_action(SnakeAction::Tick)
    }

    pub fn turn(&mut self, direction: Direction) -> bool {
        self.apply_action(SnakeAction::Turn(direction))
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.apply_action(SnakeAction::TogglePause)
    }

    pub fn resume(&mut self) -> bool {
        self.apply_action(SnakeAction::Resume)
    }

    pub fn restart(&mut self) -> bool {
        self.apply_action(SnakeAction::Restart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const N: usize = 15;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(12345)
    }

    fn state(snake: Vec<Segment>, fruit: Option<usize>) -> SnakeState {
        SnakeState::from_parts(snake, fruit, false, N).unwrap()
    }

    #[test]
    fn test_step_interior() {
        assert_eq!(step(37, Direction::Up, N), 22);
        assert_eq!(step(37, Direction::Down, N), 52);
        assert_eq!(step(37, Direction::Left, N), 36);
        assert_eq!(step(37, Direction::Right, N), 38);
    }

    #[test]
    fn test_step_wraps_every_edge() {
        // Top row -> bottom row, same column.
        assert_eq!(step(3, Direction::Up, N), 213);
        // Bottom row -> top row, same column.
        assert_eq!(step(213, Direction::Down, N), 3);
        // Left column -> right column, same row.
        assert_eq!(step(30, Direction::Left, N), 44);
        // Right column -> left column, same row.
        assert_eq!(step(44, Direction::Right, N), 30);
        // Corners.
        assert_eq!(step(0, Direction::Up, N), 210);
        assert_eq!(step(224, Direction::Right, N), 210);
        assert_eq!(step(224, Direction::Down, N), 14);
    }

    #[test]
    fn test_step_last_cell_down_stays_on_board() {
        assert_eq!(step(N * N - 1, Direction::Down, N), N - 1);
    }

    #[test]
    fn test_random_state_is_valid() {
        let mut rng = rng();
        for _ in 0..200 {
            let s = SnakeState::random(N, &mut rng);
            assert_eq!(s.len(), 1);
            assert!(s.head().position < N * N);
            let fruit = s.fruit().unwrap();
            assert!(fruit < N * N);
            assert_ne!(fruit, s.head().position);
            assert!(!s.paused());
        }
    }

    #[test]
    fn test_random_state_uses_all_directions() {
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(SnakeState::random(N, &mut rng).head().direction);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_from_parts_rejects_bad_input() {
        assert!(SnakeState::from_parts(vec![], Some(1), false, N).is_none());
        assert!(SnakeState::from_parts(vec![Segment::new(225, Direction::Up)], None, false, N).is_none());
        assert!(SnakeState::from_parts(vec![Segment::new(5, Direction::Up)], Some(5), false, N).is_none());
        assert!(SnakeState::from_parts(vec![Segment::new(5, Direction::Up)], Some(225), false, N).is_none());
    }

    #[test]
    fn test_tick_moves_head() {
        let mut rng = rng();
        let s = state(vec![Segment::new(37, Direction::Right)], Some(0));
        let next = s.next(SnakeAction::Tick, N, &mut rng);
        assert_eq!(next.head().position, 38);
        assert_eq!(next.head().direction, Direction::Right);
        // Original is untouched.
        assert_eq!(s.head().position, 37);
    }

    #[test]
    fn test_direction_propagation() {
        let mut rng = rng();
        let s = state(
            vec![
                Segment::new(37, Direction::Up),
                Segment::new(38, Direction::Left),
                Segment::new(53, Direction::Up),
            ],
            Some(0),
        );
        let next = s.next(SnakeAction::Tick, N, &mut rng);
        assert_eq!(next.snake()[0].direction, Direction::Up);
        assert_eq!(next.snake()[1].direction, Direction::Up);
        assert_eq!(next.snake()[2].direction, Direction::Left);

        assert_eq!(next.snake()[0].position, 22);
        assert_eq!(next.snake()[1].position, 37);
        assert_eq!(next.snake()[2].position, 38);
    }

    #[test]
    fn test_turn_sets_head_only() {
        let mut rng = rng();
        let s = state(
            vec![
                Segment::new(37, Direction::Right),
                Segment::new(36, Direction::Right),
            ],
            Some(0),
        );
        let next = s.next(SnakeAction::Turn(Direction::Down), N, &mut rng);
        assert_eq!(next.snake()[0].direction, Direction::Down);
        assert_eq!(next.snake()[1].direction, Direction::Right);
        assert_eq!(next.head().position, 37);
    }

    #[test]
    fn test_reversal_is_permitted() {
        let mut rng = rng();
        let s = state(
            vec![
                Segment::new(37, Direction::Right),
                Segment::new(36, Direction::Right),
            ],
            Some(0),
        );
        let turned = s.next(SnakeAction::Turn(Direction::Left), N, &mut rng);
        assert_eq!(turned.head().direction, Direction::Left);

        let moved = turned.next(SnakeAction::Tick, N, &mut rng);
        // Head walks back onto the neck's old cell while the neck moves on.
        assert_eq!(moved.snake()[0].position, 36);
        assert_eq!(moved.snake()[1].position, 37);
    }

    #[test]
    fn test_growth_on_fruit() {
        let mut rng = rng();
        let s = state(
            vec![
                Segment::new(37, Direction::Right),
                Segment::new(36, Direction::Right),
            ],
            Some(38),
        );
        let next = s.next(SnakeAction::Tick, N, &mut rng);

        assert_eq!(next.len(), 3);
        assert_eq!(next.head().position, 38);
        // New tail one cell behind the moved tail (37), same heading.
        assert_eq!(next.tail(), Segment::new(36, Direction::Right));

        let fruit = next.fruit().unwrap();
        assert!(!next.is_snake_cell(fruit));
    }

    #[test]
    fn test_growth_wraps_behind_tail() {
        let mut rng = rng();
        // Tail moves onto column 0 heading right; the new segment lands in column 14.
        let s = state(vec![Segment::new(44, Direction::Right)], Some(30));
        let next = s.next(SnakeAction::Tick, N, &mut rng);
        assert_eq!(next.head().position, 30);
        assert_eq!(next.len(), 2);
        assert_eq!(next.tail().position, 44);
    }

    #[test]
    fn test_no_growth_without_fruit() {
        let mut rng = rng();
        let s = state(vec![Segment::new(37, Direction::Right)], Some(100));
        let next = s.next(SnakeAction::Tick, N, &mut rng);
        assert_eq!(next.len(), 1);
        assert_eq!(next.fruit(), Some(100));
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut rng = rng();
        let s = SnakeState::from_parts(vec![Segment::new(37, Direction::Up)], Some(0), true, N)
            .unwrap();
        let next = s
            .next(SnakeAction::Tick, N, &mut rng)
            .next(SnakeAction::Tick, N, &mut rng);
        assert_eq!(next, s);
        assert_eq!(next.head().position, 37);
    }

    #[test]
    fn test_toggle_and_resume() {
        let mut rng = rng();
        let s = state(vec![Segment::new(37, Direction::Up)], Some(0));
        let paused = s.next(SnakeAction::TogglePause, N, &mut rng);
        assert!(paused.paused());
        assert!(!paused.next(SnakeAction::TogglePause, N, &mut rng).paused());
        assert!(!paused.next(SnakeAction::Resume, N, &mut rng).paused());
        // Resume on a running game is harmless.
        assert!(!s.next(SnakeAction::Resume, N, &mut rng).paused());
    }

    #[test]
    fn test_turn_while_paused_is_accepted() {
        let mut rng = rng();
        let s = SnakeState::from_parts(vec![Segment::new(37, Direction::Up)], Some(0), true, N)
            .unwrap();
        let next = s.next(SnakeAction::Turn(Direction::Left), N, &mut rng);
        assert_eq!(next.head().direction, Direction::Left);
        assert_eq!(next.head().position, 37);
    }

    #[test]
    fn test_full_board_has_no_fruit() {
        let mut rng = rng();
        let mut s = SnakeState::from_parts(
            vec![
                Segment::new(0, Direction::Right),
                Segment::new(1, Direction::Down),
                Segment::new(3, Direction::Left),
                Segment::new(2, Direction::Up),
            ],
            None,
            false,
            2,
        )
        .unwrap();
        s.relocate_fruit(2, &mut rng);
        assert_eq!(s.fruit(), None);
    }

    #[test]
    fn test_long_snake_with_overlap_still_gets_fruit() {
        let mut rng = rng();
        // Four segments on a 2x2 board, but two share a cell.
        let mut s = SnakeState::from_parts(
            vec![
                Segment::new(0, Direction::Right),
                Segment::new(1, Direction::Down),
                Segment::new(3, Direction::Left),
                Segment::new(3, Direction::Left),
            ],
            None,
            false,
            2,
        )
        .unwrap();
        s.relocate_fruit(2, &mut rng);
        assert_eq!(s.fruit(), Some(2));
    }

    #[test]
    fn test_game_restart_increments_episode_id() {
        let mut game = SnakeGame::new(SnakeConfig::default(), rng());
        assert_eq!(game.episode_id(), 0);
        game.toggle_pause();
        assert!(game.paused());

        assert!(game.restart());
        assert_eq!(game.episode_id(), 1);
        assert!(!game.paused());
        assert_eq!(game.state().len(), 1);
    }

    #[test]
    fn test_game_with_seed_is_deterministic() {
        let a = SnakeGame::with_seed(SnakeConfig::default(), 7);
        let b = SnakeGame::with_seed(SnakeConfig::default(), 7);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_game_tick_and_turn() {
        let config = SnakeConfig::default();
        let s = state(vec![Segment::new(37, Direction::Up)], Some(0));
        let mut game = SnakeGame::with_state(config, s, rng()).unwrap();

        assert!(game.turn(Direction::Right));
        assert!(!game.turn(Direction::Right));
        assert!(game.tick());
        assert_eq!(game.state().head().position, 38);
    }

    #[test]
    fn test_game_rejects_state_from_larger_board() {
        // Cell 37 exists on 15x15 but not on 5x5.
        let s = state(vec![Segment::new(37, Direction::Up)], Some(0));
        let small = SnakeConfig::new(5, 200).unwrap();
        assert_eq!(
            SnakeGame::with_state(small, s.clone(), rng()).unwrap_err(),
            ConfigError::StateOffBoard { board_size: 5 }
        );

        let fruit_off = state(vec![Segment::new(3, Direction::Up)], Some(100));
        assert!(SnakeGame::with_state(small, fruit_off, rng()).is_err());
        assert!(SnakeGame::with_state(SnakeConfig::default(), s, rng()).is_ok());
    }
}
