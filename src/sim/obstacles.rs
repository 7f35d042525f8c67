//! Obstacle lifecycle: spawn at the right edge, scroll left, cull off-field
//!
//! The live list is kept in spawn order. Every obstacle moves at the same
//! speed, so spawn order is also left-to-right order and never changes.

use rand::Rng;

use super::state::Obstacle;

/// Draw a gap top uniformly from the inclusive range `[min, max]`
pub fn draw_gap_top<R: Rng>(rng: &mut R, (min, max): (f32, f32)) -> f32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}

/// True on ticks where a new obstacle is due
#[inline]
pub fn spawn_due(tick_count: u64, interval: u32) -> bool {
    tick_count > 0 && tick_count.is_multiple_of(u64::from(interval))
}

/// Scroll an obstacle left by one tick's worth of movement
#[inline]
pub fn advance(obstacle: &mut Obstacle, speed: f32) {
    obstacle.x -= speed;
}

/// Drop every obstacle whose trailing edge is at or past the field's left edge.
/// Returns the number removed.
pub fn cull(obstacles: &mut Vec<Obstacle>, width: f32) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| o.right(width) > 0.0);
    before - obstacles.len()
}
