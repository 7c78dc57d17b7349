use std::time::Duration;

use crate::config::VERTICAL_SPEED_FACTOR;
use crate::input::Direction;

/// Returns the milliseconds between moves for `direction`.
///
/// Vertical moves wait longer so that a row step, which is visually taller
/// than a column step, reads as the same speed on screen.
#[must_use]
pub fn current_speed(direction: Direction, base_speed: f64) -> f64 {
    if direction.is_vertical() {
        base_speed * VERTICAL_SPEED_FACTOR
    } else {
        base_speed
    }
}

/// Same as [`current_speed`], as a `Duration`.
#[must_use]
pub fn tick_interval(direction: Direction, base_speed: f64) -> Duration {
    let micros = (current_speed(direction, base_speed).max(0.0) * 1000.0).round();
    Duration::from_micros(micros as u64)
}

/// Accumulates frame time and decides when the next tick fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    accumulated: Duration,
}

impl Clock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `elapsed` and returns true when a tick is due.
    ///
    /// On firing the accumulator goes back to zero, dropping any overshoot,
    /// so at most one tick fires per call.
    pub fn advance(&mut self, elapsed: Duration, interval: Duration) -> bool {
        self.accumulated += elapsed;
        if self.accumulated >= interval {
            self.accumulated = Duration::ZERO;
            return true;
        }
        false
    }

    /// Time gathered since the last tick.
    #[must_use]
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }
}
