//! Screen-space geometry helpers
//!
//! All coordinates are image/screen pixels with y growing downward.

use serde::{Deserialize, Serialize};

/// A single observed or interpolated screen-space location.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: Point2D) -> f32 {
        distance(*self, other)
    }

    /// Component along one axis.
    #[inline]
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Point2D, b: Point2D) -> f32 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-6);
        assert!((b.distance_to(a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_along_axis() {
        let p = Point2D::from((12.0, -7.5));
        assert_eq!(p.along(Axis::X), 12.0);
        assert_eq!(p.along(Axis::Y), -7.5);
    }
}
