//! Circle-vs-rectangle collision detection
//!
//! The one geometric question this game asks: does a coin's circle overlap
//! the player's rectangle? Clamp the circle center per axis onto the rect,
//! then compare the distance to that nearest point against the radius.

use glam::Vec2;

use super::rect::Rect;

/// Check whether a circle overlaps an axis-aligned rectangle.
///
/// Returns true iff the distance from `center` to the nearest point of
/// `rect` is strictly less than `radius`. A circle that merely touches the
/// rectangle (distance exactly equal to the radius) does not collide. A
/// center inside the rectangle is distance zero and always collides.
/// Pure function, no side effects.
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance(closest) < radius
}
