//! Overlap queries between the frog and the rest of the play field
//!
//! All queries are first-match in list order. There is no ranking by overlap
//! beyond the threshold test.

use super::entity::MovingEntity;
use super::layout::ZoneLayout;
use super::rect::Rect;

/// Index of the first obstacle intersecting `frog` that covers at least
/// `min_percent` of the frog's area
pub fn find_collided_obstacle(frog: &Rect, obstacles: &[MovingEntity], min_percent: f32) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| frog.intersects(&obstacle.rect) && frog.overlap_percent(&obstacle.rect) >= min_percent)
}

/// Index of the first landing pad whose area is covered by `frog` at least
/// `min_percent`. Measured relative to the pad.
pub fn find_collided_pad(zones: &ZoneLayout, frog: &Rect, min_percent: f32) -> Option<usize> {
    zones
        .pads
        .iter()
        .position(|pad| pad.overlap_percent(frog) >= min_percent)
}

/// Whether `frog` touches any of the `others`
pub fn overlaps_any<'a>(frog: &Rect, others: impl IntoIterator<Item = &'a Rect>) -> bool {
    others.into_iter().any(|other| frog.intersects(other))
}
