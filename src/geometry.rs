//! Point, vector and rectangle primitives in normalized stage space.
//!
//! Everything here works in the unit square: `x` runs 0..1 across the
//! viewport width and `y` runs 0..1 down its height.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Mul, Sub};

/// A position or a displacement vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamp both axes into `[0, 1]`.
    #[must_use]
    pub fn clamp_unit(self) -> Point {
        Point {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
        }
    }

    /// Wrap both axes into `[0, 1)`, so leaving one edge re-enters at the opposite one.
    #[must_use]
    pub fn wrap_unit(self) -> Point {
        Point {
            x: wrap_axis(self.x),
            y: wrap_axis(self.y),
        }
    }

    /// True when both components are strictly smaller than `epsilon` in magnitude.
    #[must_use]
    pub fn is_negligible(self, epsilon: f64) -> bool {
        self.x.abs() < epsilon && self.y.abs() < epsilon
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

// rem_euclid rounds tiny negatives up to exactly 1.0
fn wrap_axis(v: f64) -> f64 {
    let w = v.rem_euclid(1.0);
    if w >= 1.0 { 0.0 } else { w }
}

/// Cartesian vector of the line running from `from` to `to`.
#[must_use]
pub fn vector_between(from: Point, to: Point) -> Point {
    to - from
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Distance from the center to the origin corner.
    #[must_use]
    pub fn half_diagonal(&self) -> f64 {
        self.center().distance(self.origin())
    }

    /// Whether a circle overlaps this rectangle (edges touching counts).
    #[must_use]
    pub fn intersects_circle(&self, center: Point, radius: f64) -> bool {
        let nearest = Point::new(
            center.x.clamp(self.x, self.x + self.width),
            center.y.clamp(self.y, self.y + self.height),
        );
        nearest.distance(center) <= radius
    }
}

/// Bounding box of a point set; `None` when the set is empty.
///
/// A single point yields a zero-area rectangle at that point.
pub fn bbox(points: impl IntoIterator<Item = Point>) -> Option<Rect> {
    let mut it = points.into_iter();
    let first = it.next()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in it {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
