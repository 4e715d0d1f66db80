//! Lightweight 2‑D point type used by the refinement rule.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// An ordered sequence of points making up one approximation of the curve.
pub type Path = Vec<Point>;

/// A point (or displacement) in the plane.
///
/// The same type doubles as a 2‑D vector so the refinement rule can be
/// written as plain arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sum of absolute coordinate differences.
    pub fn manhattan(&self, other: &Self) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether both coordinates lie in the closed unit interval.
    pub fn in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Point::new(0.25, 0.75);
        let b = Point::new(0.75, 0.25);
        assert_eq!(a + b, Point::new(1.0, 1.0));
        assert_eq!(b - a, Point::new(0.5, -0.5));
        assert_eq!(-a, Point::new(-0.25, -0.75));
        assert_eq!(a * 2.0, Point::new(0.5, 1.5));
        assert_eq!(b / 2.0, Point::new(0.375, 0.125));
    }

    #[test]
    fn distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.manhattan(&b), 7.0);
        assert_eq!(b.distance(&b), 0.0);
    }

    #[test]
    fn conversions() {
        let p: Point = [0.5, 0.25].into();
        assert_eq!(p, Point::from((0.5, 0.25)));
        assert_eq!(<[f64; 2]>::from(p), [0.5, 0.25]);
    }

    #[test]
    fn unit_square() {
        assert!(Point::new(0.0, 1.0).in_unit_square());
        assert!(!Point::new(-0.1, 0.5).in_unit_square());
        assert!(!Point::new(0.5, 1.5).in_unit_square());
    }
}
