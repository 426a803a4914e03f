//! Entity movement and off-screen pruning
//!
//! The ship is placed, not integrated: it snaps to the pointer every frame.
//! Lasers and meteors move by `round(speed * delta)` pixels and are dropped
//! the same frame they leave the vertical play range.

use glam::IVec2;

use super::rect::Rect;

/// Pixel step for a speed over a frame delta
#[inline]
pub fn step_pixels(speed: f32, delta: f32) -> i32 {
    (speed * delta).round() as i32
}

/// Snap the ship to `pointer - pivot`
pub fn follow_pointer(ship: &mut Rect, pointer: IVec2, pivot: IVec2) {
    let origin = pointer.saturating_sub(pivot);
    ship.x = origin.x;
    ship.y = origin.y;
}

/// Move lasers up; drop any whose y goes negative
pub fn advance_lasers(lasers: &mut Vec<Rect>, speed: f32, delta: f32) {
    let step = step_pixels(speed, delta);
    lasers.retain_mut(|laser| {
        laser.y = laser.y.saturating_sub(step);
        laser.y >= 0
    });
}

/// Move meteors down; drop any whose y passes the screen bottom
pub fn advance_meteors(meteors: &mut Vec<Rect>, speed: f32, delta: f32, screen_height: i32) {
    let step = step_pixels(speed, delta);
    meteors.retain_mut(|meteor| {
        meteor.y = meteor.y.saturating_add(step);
        meteor.y <= screen_height
    });
}
