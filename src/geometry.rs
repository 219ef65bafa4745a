// Axis-aligned rectangle primitives shared by the placement pass.
// Pure f32 math, no rendering or DOM dependency.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Flat rectangle value: top-left corner plus extents. Zero or negative
/// extents are legal; such a rect intersects nothing, itself included.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn inflate(&self, pad: f32) -> Rect {
        if pad <= 0.0 {
            return *self;
        }
        Rect {
            left: self.left - pad,
            top: self.top - pad,
            width: self.width + pad * 2.0,
            height: self.height + pad * 2.0,
        }
    }

    pub fn overlap_area(&self, other: &Rect) -> f32 {
        let x0 = self.left.max(other.left);
        let y0 = self.top.max(other.top);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        let w = (x1 - x0).max(0.0);
        let h = (y1 - y0).max(0.0);
        w * h
    }

    /// Closed containment: `other` may sit flush against this rect's edges.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Do two rectangles overlap with positive shared area? Edges that merely
/// touch do not count, so the comparisons are exclusive on both axes.
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    // A rect without positive extent has no area to share, even when its
    // outline sits inside the other rect.
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.left < b.right() && a.right() > b.left && a.top < b.bottom() && a.bottom() > b.top
}

/// Is `point` inside `rect`, edges included? Inclusive on all four sides,
/// unlike `rects_intersect`: a point on the border is inside, two rects
/// sharing only a border are not overlapping.
pub fn point_in_rect(point: Point, rect: Rect) -> bool {
    point.x >= rect.left
        && point.x <= rect.right()
        && point.y >= rect.top
        && point.y <= rect.bottom()
}
