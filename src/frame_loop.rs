use std::io;
use std::time::Duration;

use rand::Rng;

use crate::clock::Clock;
use crate::game::GameState;
use crate::input::{GameInput, InputSource};

/// What the outer loop should do after one frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FrameOutcome {
    Continue,
    Quit,
    GameOver,
}

/// Runs the input and clock half of one frame.
///
/// At most one input event is consumed. A direction only records the request;
/// the state moves only when the clock, fed with `elapsed`, says a tick is due.
/// Quit returns before the clock is consulted.
pub fn advance_frame<R: Rng, I: InputSource + ?Sized>(
    state: &mut GameState<R>,
    clock: &mut Clock,
    input: &mut I,
    elapsed: Duration,
) -> io::Result<FrameOutcome> {
    match input.poll_input()? {
        Some(GameInput::Quit) => {
            tracing::info!(score = state.score(), "quit requested");
            return Ok(FrameOutcome::Quit);
        }
        Some(GameInput::Direction(direction)) => {
            if !state.change_direction(direction) {
                tracing::trace!(?direction, "direction request dropped");
            }
        }
        None => {}
    }

    if clock.advance(elapsed, state.tick_interval()) {
        state.tick();
    }

    if state.is_over() {
        Ok(FrameOutcome::GameOver)
    } else {
        Ok(FrameOutcome::Continue)
    }
}
