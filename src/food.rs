use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a food cell uniformly among interior cells the snake does not cover.
///
/// Candidates are gathered in row-major order before sampling. Returns `None`
/// when the snake fills the whole interior.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let candidates: Vec<Position> = bounds
        .interior_cells()
        .filter(|position| !snake.occupies(*position))
        .collect();

    if candidates.is_empty() {
        tracing::debug!(
            height = bounds.height,
            width = bounds.width,
            "no free interior cell for food"
        );
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
