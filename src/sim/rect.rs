//! Axis-aligned rectangle geometry
//!
//! Every collidable thing in the play field (frogs, obstacles, zones, landing
//! pads) is an axis-aligned rectangle anchored at its top-left corner.

use serde::{Deserialize, Serialize};

use crate::Vector2i;

/// An axis-aligned rectangle in panel pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vector2i,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: Vector2i::new(x, y),
            width,
            height,
        }
    }

    pub const fn at(pos: Vector2i, width: i32, height: i32) -> Self {
        Self { pos, width, height }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.height
    }

    /// Area in square pixels (widened so large panels cannot overflow)
    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.width.max(0)) * i64::from(self.height.max(0))
    }

    /// Center point, rounded toward the top-left
    pub fn center(&self) -> Vector2i {
        Vector2i::new(self.pos.x + self.width / 2, self.pos.y + self.height / 2)
    }

    /// Copy of this rectangle moved by `delta`
    pub fn translated(&self, delta: Vector2i) -> Self {
        Self::at(self.pos + delta, self.width, self.height)
    }

    /// Standard AABB test. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Area shared with `other`, zero when disjoint
    pub fn intersection_area(&self, other: &Rect) -> i64 {
        if !self.intersects(other) {
            return 0;
        }
        let w = self.right().min(other.right()) - self.left().max(other.left());
        let h = self.bottom().min(other.bottom()) - self.top().max(other.top());
        i64::from(w) * i64::from(h)
    }

    /// Share of *this* rectangle's area covered by `other`, from 0 to 100.
    ///
    /// Not symmetric: a small rectangle fully inside a large one reports 100,
    /// the large one reports the ratio of the two areas.
    pub fn overlap_percent(&self, other: &Rect) -> f32 {
        let area = self.area();
        if area == 0 {
            return 0.0;
        }
        (self.intersection_area(other) as f64 * 100.0 / area as f64) as f32
    }

    /// True when `other` lies entirely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}
