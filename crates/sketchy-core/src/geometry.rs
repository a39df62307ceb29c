//! Geometric primitives.
//!
//! Angles are in degrees everywhere. Screen coordinates grow downwards, so a
//! positive angle turns a shape clockwise on screen.

use std::ops::{Add, Sub};

/// Tolerance used when comparing derived floating point values.
pub const EPSILON: f64 = 1e-9;

/// A point (or displacement) on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Direction of this point as seen from `center`, in degrees (atan2 convention).
    pub fn angle_from(&self, center: Point) -> f64 {
        (self.y - center.y).atan2(self.x - center.x).to_degrees()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
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

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Rotates `point` about `pivot` by `-angle_degrees`.
///
/// This is the inverse of the on-screen rotation of a shape turned by
/// `angle_degrees`, so it maps a canvas point into the shape's unrotated
/// local frame. The matrix applied after translating to the origin is
/// `[cos θ, sin θ; -sin θ, cos θ]`.
pub fn rotate_point(point: Point, pivot: Point, angle_degrees: f64) -> Point {
    let (sine, cosine) = angle_degrees.to_radians().sin_cos();

    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;

    Point::new(
        dx * cosine + dy * sine + pivot.x,
        -dx * sine + dy * cosine + pivot.y,
    )
}
