//! Collision resolution between meteors, lasers and the ship
//!
//! Meteor/laser pairs destroy each other. For each meteor in list order the
//! first intersecting laser in list order wins; that laser is consumed, so
//! a meteor hit by several lasers at once only takes one with it.

use super::rect::Rect;

/// Remove every meteor that intersects a laser, together with that laser.
///
/// Returns the destroyed meteors in list order. Surviving entries of both
/// lists keep their relative order.
pub fn resolve_laser_hits(meteors: &mut Vec<Rect>, lasers: &mut Vec<Rect>) -> Vec<Rect> {
    let mut destroyed = Vec::new();

    meteors.retain(|meteor| match lasers.iter().position(|l| l.intersects(meteor)) {
        Some(hit) => {
            lasers.remove(hit);
            destroyed.push(*meteor);
            false
        }
        None => true,
    });

    destroyed
}

/// First meteor (in list order) that intersects the ship
pub fn ship_hit<'a>(meteors: &'a [Rect], ship: &Rect) -> Option<&'a Rect> {
    meteors.iter().find(|m| m.intersects(ship))
}
