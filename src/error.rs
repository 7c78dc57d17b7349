use thiserror::Error;

use crate::config::MIN_GRID_SIDE;

/// Errors raised while constructing a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    /// The grid has no interior cell once the wall border is removed.
    #[error(
        "grid {height}x{width} has no interior; both sides must be at least {min}",
        min = MIN_GRID_SIDE
    )]
    InvalidDimension { height: u16, width: u16 },
}
