use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::Point;
use anyhow::{Result, ensure};

/// Axis-aligned rectangle, anchored at its top-left corner `(x, y)`.
/// The y-axis points downward, so "above" means a smaller `y`.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Like [`Rect::new`], but rejects non-finite values and negative extents.
    pub fn try_new(x: f32, y: f32, w: f32, h: f32) -> Result<Self> {
        ensure!(
            x.is_finite() && y.is_finite(),
            "invalid rectangle corner: ({x}, {y})"
        );
        ensure!(
            w.is_finite() && h.is_finite() && w >= 0.0 && h >= 0.0,
            "invalid rectangle extents: {w}x{h}"
        );
        Ok(Rect { x, y, w, h })
    }

    /// Rectangle of size `w` x `h` with its top-left corner at `corner`.
    pub fn at(corner: Point, w: f32, h: f32) -> Self {
        Rect::new(corner.x(), corner.y(), w, h)
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.w
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.h
    }

    pub fn top_left(&self) -> Point {
        Point(self.x, self.y)
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// True if the open interiors of `self` and `other` overlap.
    /// Rectangles which only share (part of) an edge or a corner do not intersect.
    #[inline(always)]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.x >= self.x_max()
            || other.x_max() <= self.x
            || other.y >= self.y_max()
            || other.y_max() <= self.y)
    }

    /// True if `other` lies entirely within `self`, boundary included.
    #[inline(always)]
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x_max() <= self.x_max()
            && other.y_max() <= self.y_max()
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// Containment is checked first, so two equal rectangles are `Surrounding`.
    pub fn relation_to(&self, other: &Rect) -> GeoRelation {
        if self.contains(other) {
            return GeoRelation::Surrounding;
        }
        if other.contains(self) {
            return GeoRelation::Enclosed;
        }
        match self.intersects(other) {
            true => GeoRelation::Intersecting,
            false => GeoRelation::Disjoint,
        }
    }

    /// True if `w` x `h` fits inside `self` without rotation.
    pub fn fits(&self, w: f32, h: f32) -> bool {
        w <= self.w && h <= self.h
    }
}
