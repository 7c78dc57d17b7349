use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock;
use crate::config::{
    GridSize, FOOD_REWARD, INITIAL_BASE_SPEED_MS, MIN_BASE_SPEED_MS, SPEED_DECREMENT_MS,
};
use crate::error::GameError;
use crate::food::place_food;
use crate::input::{direction_change_is_valid, Direction};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What a single call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was already over; nothing changed.
    Ignored,
    /// The snake moved one cell with constant length.
    Moved,
    /// The snake moved onto the food and grew by one.
    Ate,
    /// The move hit a wall or the body and ended the game.
    Collided(DeathReason),
}

/// Complete mutable game state for one session.
///
/// `R` is the random source used for food placement. Production code uses a
/// [`StdRng`]; tests may inject any deterministic generator.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    pub snake: Snake,
    pub food: Option<Position>,
    pub direction: Direction,
    pub score: u32,
    /// Milliseconds between horizontal moves.
    pub base_speed: f64,
    pub status: GameStatus,
    direction_changed: bool,
    death_reason: Option<DeathReason>,
    tick_count: u64,
    bounds: GridSize,
    rng: R,
}

impl GameState<StdRng> {
    /// Creates a game on a `height` x `width` grid with an entropy-seeded RNG.
    pub fn initialize(height: u16, width: u16) -> Result<Self, GameError> {
        Self::with_rng(height, width, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    pub fn initialize_with_seed(height: u16, width: u16, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(height, width, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Creates a game that draws food positions from `rng`.
    ///
    /// The snake starts as one cell at the grid center heading right, and the
    /// first food is placed immediately.
    pub fn with_rng(height: u16, width: u16, mut rng: R) -> Result<Self, GameError> {
        let bounds = GridSize { height, width };
        if !bounds.has_interior() {
            return Err(GameError::InvalidDimension { height, width });
        }

        let snake = Snake::new(bounds.center());
        let food = place_food(&mut rng, bounds, &snake);

        tracing::debug!(height, width, ?food, "new game");

        Ok(Self {
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            base_speed: INITIAL_BASE_SPEED_MS,
            status: GameStatus::Running,
            direction_changed: false,
            death_reason: None,
            tick_count: 0,
            bounds,
            rng,
        })
    }

    /// Advances the simulation by one move.
    ///
    /// Collision is checked against the body as it stands before the tail
    /// moves, so stepping into the current tail cell ends the game.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Ignored;
        }
        debug_assert!(!self.snake.is_empty());

        self.direction_changed = false;
        self.tick_count += 1;

        let new_head = self.snake.head().step(self.direction);

        if !self.bounds.interior_contains(new_head) {
            return self.end(DeathReason::WallCollision);
        }

        if self.snake.occupies(new_head) {
            return self.end(DeathReason::SelfCollision);
        }

        self.snake.push_head(new_head);

        if self.food == Some(new_head) {
            self.score += FOOD_REWARD;
            self.food = place_food(&mut self.rng, self.bounds, &self.snake);
            self.base_speed = (self.base_speed - SPEED_DECREMENT_MS).max(MIN_BASE_SPEED_MS);

            tracing::debug!(
                score = self.score,
                length = self.snake.len(),
                base_speed = self.base_speed,
                food = ?self.food,
                "food eaten"
            );
            return TickOutcome::Ate;
        }

        let _ = self.snake.pop_tail();
        TickOutcome::Moved
    }

    /// Requests a new heading, applied on the next tick.
    ///
    /// Only the first accepted request between two ticks counts. Reversals
    /// and requests after game over are dropped. Returns whether the request
    /// was accepted.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.is_over() || self.direction_changed {
            return false;
        }

        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        tracing::debug!(from = ?self.direction, to = ?direction, "direction changed");
        self.direction = direction;
        self.direction_changed = true;
        true
    }

    fn end(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);

        tracing::info!(
            ?reason,
            score = self.score,
            length = self.snake.len(),
            ticks = self.tick_count,
            "game over"
        );
        TickOutcome::Collided(reason)
    }
}

impl<R> GameState<R> {
    /// Returns true once the snake has hit a wall or itself.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// Returns true when a direction change was already accepted this tick.
    #[must_use]
    pub fn direction_changed(&self) -> bool {
        self.direction_changed
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Milliseconds until the next move at the current heading.
    #[must_use]
    pub fn current_speed(&self) -> f64 {
        clock::current_speed(self.direction, self.base_speed)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        clock::tick_interval(self.direction, self.base_speed)
    }

    /// Returns a read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            bounds: self.bounds,
            snake: &self.snake,
            food: self.food,
            direction: self.direction,
            score: self.score,
            game_over: self.is_over(),
            death_reason: self.death_reason,
        }
    }
}

/// Immutable view of a game handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub bounds: GridSize,
    pub snake: &'a Snake,
    pub food: Option<Position>,
    pub direction: Direction,
    pub score: u32,
    pub game_over: bool,
    pub death_reason: Option<DeathReason>,
}

impl GameSnapshot<'_> {
    /// Body cells from head to tail.
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.segments().copied()
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.snake.len()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::{DeathReason, GameState, GameStatus, TickOutcome};
    use crate::config::{FOOD_REWARD, INITIAL_BASE_SPEED_MS, MIN_BASE_SPEED_MS};
    use crate::error::GameError;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    fn segments(cells: &[(i32, i32)]) -> Snake {
        Snake::from_segments(
            cells
                .iter()
                .map(|&(row, col)| Position { row, col })
                .collect(),
        )
        .expect("non-empty segments")
    }

    #[test]
    fn new_game_starts_centered_heading_right() {
        let state = GameState::initialize_with_seed(15, 30, 1).expect("valid grid");

        assert_eq!(state.snake.head(), Position { row: 7, col: 15 });
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score(), 0);
        assert!(!state.is_over());
        assert!(!state.direction_changed());
        assert!((state.base_speed - INITIAL_BASE_SPEED_MS).abs() < f64::EPSILON);

        let food = state.food.expect("food placed on a fresh grid");
        assert!(!state.snake.occupies(food));
        assert!(state.bounds().interior_contains(food));
    }

    #[test]
    fn too_small_grid_is_rejected() {
        assert_eq!(
            GameState::initialize(2, 10).err(),
            Some(GameError::InvalidDimension {
                height: 2,
                width: 10
            })
        );
        assert!(GameState::initialize(10, 0).is_err());
        assert!(GameState::initialize(3, 3).is_ok());
    }

    #[test]
    fn one_cell_interior_has_no_room_for_food() {
        let state = GameState::initialize_with_seed(3, 3, 9).expect("valid grid");

        assert_eq!(state.snake.head(), Position { row: 1, col: 1 });
        assert_eq!(state.food, None);
    }

    #[test]
    fn tick_moves_head_and_pops_tail() {
        let mut state = GameState::initialize_with_seed(12, 12, 2).expect("valid grid");
        state.snake = segments(&[(5, 5), (5, 4)]);
        state.food = Some(Position { row: 1, col: 1 });

        assert_eq!(state.tick(), TickOutcome::Moved);

        let body: Vec<_> = state.snake.segments().copied().collect();
        assert_eq!(
            body,
            vec![Position { row: 5, col: 6 }, Position { row: 5, col: 5 }]
        );
        assert_eq!(state.tick_count(), 1);
    }

    #[test]
    fn eating_grows_scores_and_speeds_up() {
        let mut state = GameState::with_rng(12, 12, StepRng::new(0, 0)).expect("valid grid");
        state.snake = segments(&[(1, 2)]);
        state.food = Some(Position { row: 1, col: 3 });

        assert_eq!(state.tick(), TickOutcome::Ate);

        assert_eq!(state.score(), FOOD_REWARD);
        assert_eq!(state.snake.len(), 2);
        // First free interior cell in row-major order.
        assert_eq!(state.food, Some(Position { row: 1, col: 1 }));
        assert!((state.base_speed - 117.0).abs() < 1e-9);
    }

    #[test]
    fn base_speed_never_drops_below_floor() {
        let mut state = GameState::initialize_with_seed(12, 12, 5).expect("valid grid");
        state.base_speed = 41.0;
        state.snake = segments(&[(5, 5)]);
        state.food = Some(Position { row: 5, col: 6 });

        state.tick();

        assert!((state.base_speed - MIN_BASE_SPEED_MS).abs() < f64::EPSILON);
    }

    #[test]
    fn speed_stops_at_the_floor_instead_of_overshooting() {
        let mut state = GameState::with_rng(12, 12, StepRng::new(0, 0)).expect("valid grid");
        state.base_speed = 42.0;
        state.snake = segments(&[(5, 5)]);
        state.food = Some(Position { row: 5, col: 6 });

        assert_eq!(state.tick(), TickOutcome::Ate);
        // 42 - 3 would be 39; the floor holds it at 40.
        assert!((state.base_speed - 40.0).abs() < f64::EPSILON);

        state.food = Some(Position { row: 5, col: 7 });
        assert_eq!(state.tick(), TickOutcome::Ate);
        assert!((state.base_speed - MIN_BASE_SPEED_MS).abs() < f64::EPSILON);
    }

    #[test]
    fn wall_collision_freezes_state() {
        let mut state = GameState::initialize_with_seed(6, 6, 3).expect("valid grid");
        state.snake = segments(&[(2, 4), (2, 3)]);
        state.food = Some(Position { row: 4, col: 1 });

        assert_eq!(
            state.tick(),
            TickOutcome::Collided(DeathReason::WallCollision)
        );
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.snake.head(), Position { row: 2, col: 4 });
        assert_eq!(state.snake.len(), 2);

        assert_eq!(state.tick(), TickOutcome::Ignored);
        assert!(!state.change_direction(Direction::Up));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.tick_count(), 1);
    }

    #[test]
    fn moving_into_the_tail_cell_is_a_collision() {
        let mut state = GameState::initialize_with_seed(8, 8, 4).expect("valid grid");
        state.snake = segments(&[(1, 1), (1, 2), (2, 2), (2, 1)]);
        state.direction = Direction::Down;
        state.food = Some(Position { row: 5, col: 5 });

        assert_eq!(
            state.tick(),
            TickOutcome::Collided(DeathReason::SelfCollision)
        );
        assert_eq!(state.death_reason(), Some(DeathReason::SelfCollision));
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn body_collision_sets_game_over() {
        let mut state = GameState::initialize_with_seed(8, 8, 6).expect("valid grid");
        state.snake = segments(&[(2, 2), (2, 3), (3, 3), (3, 2), (3, 1)]);
        state.direction = Direction::Down;

        state.tick();

        assert!(state.is_over());
    }

    #[test]
    fn only_first_direction_request_per_tick_counts() {
        let mut state = GameState::initialize_with_seed(12, 12, 7).expect("valid grid");

        assert!(state.change_direction(Direction::Up));
        assert!(!state.change_direction(Direction::Left));
        assert_eq!(state.direction, Direction::Up);

        state.tick();
        assert!(!state.direction_changed());
        assert!(state.change_direction(Direction::Left));
    }

    #[test]
    fn reversal_does_not_consume_the_tick_change() {
        let mut state = GameState::initialize_with_seed(12, 12, 8).expect("valid grid");

        assert!(!state.change_direction(Direction::Left));
        assert!(!state.direction_changed());
        assert!(state.change_direction(Direction::Down));
        assert_eq!(state.direction, Direction::Down);
    }

    #[test]
    fn vertical_heading_stretches_tick_interval() {
        let mut state = GameState::initialize_with_seed(12, 12, 10).expect("valid grid");
        let horizontal = state.current_speed();

        state.change_direction(Direction::Up);

        assert!((state.current_speed() - horizontal * 1.8).abs() < 1e-9);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut state = GameState::initialize_with_seed(10, 10, 12).expect("valid grid");
        state.snake = segments(&[(4, 4), (4, 3)]);

        let snapshot = state.snapshot();

        assert_eq!(snapshot.length(), 2);
        assert_eq!(snapshot.body().next(), Some(Position { row: 4, col: 4 }));
        assert_eq!(snapshot.direction, Direction::Right);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.death_reason, None);
    }
}
