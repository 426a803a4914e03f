//! Laser and meteor spawning

use glam::IVec2;
use rand::Rng;

use super::rect::Rect;
use crate::consts::{METEOR_JITTER, METEOR_SPAWN_BOTTOM, METEOR_SPAWN_MARGIN_X, METEOR_SPAWN_TOP};

/// Laser launched from the ship's nose: ship origin shifted by `offset_x`
pub fn spawn_laser(ship: &Rect, offset_x: i32, size: IVec2) -> Rect {
    Rect::from_size(IVec2::new(ship.x.saturating_add(offset_x), ship.y), size)
}

/// One meteor shower trial.
///
/// Succeeds with probability `1 / frequency` and returns a meteor placed in
/// the band above the screen, with x in `[-margin, screen_width + margin]`
/// plus a small jitter scaled by `delta`.
pub fn roll_meteor<R: Rng>(
    rng: &mut R,
    frequency: u32,
    screen_width: i32,
    size: IVec2,
    delta: f32,
) -> Option<Rect> {
    if frequency == 0 || !rng.random_ratio(1, frequency) {
        return None;
    }

    let x = rng.random_range(-METEOR_SPAWN_MARGIN_X..=screen_width as f32 + METEOR_SPAWN_MARGIN_X);
    let y = rng.random_range(METEOR_SPAWN_TOP..=METEOR_SPAWN_BOTTOM);
    let jitter = rng.random_range(-METEOR_JITTER..=METEOR_JITTER) * delta;

    Some(Rect::from_size(
        IVec2::new((x + jitter) as i32, y as i32),
        size,
    ))
}
