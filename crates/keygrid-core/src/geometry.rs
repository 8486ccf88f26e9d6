//! Geometric primitives for key placement.
//!
//! This module provides the integer geometry shared by the grid model (where
//! one unit is one character cell of the source diagram) and the rendered
//! output (where one unit is one pixel).
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate
//! - [`Bounds`] - A rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin is the top-left corner, X grows rightward and Y grows downward,
//! matching both the row/column order of a text file and SVG.

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use keygrid_core::geometry::Point;
/// let p = Point::new(10, 20);
/// assert_eq!(p.x(), 10);
/// assert_eq!(p.y(), 20);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i64 {
        self.y
    }
}

/// A rectangle with inclusive minimum and exclusive maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Creates bounds spanning from `min` (top-left) to `max` (bottom-right)
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Returns the top-left corner
    pub fn min_point(self) -> Point {
        self.min
    }

    /// Returns the bottom-right corner
    pub fn max_point(self) -> Point {
        self.max
    }

    pub fn min_x(self) -> i64 {
        self.min.x
    }

    pub fn min_y(self) -> i64 {
        self.min.y
    }

    pub fn max_x(self) -> i64 {
        self.max.x
    }

    pub fn max_y(self) -> i64 {
        self.max.y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> i64 {
        self.max.x - self.min.x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> i64 {
        self.max.y - self.min.y
    }

    /// Returns the center point, rounded toward the top-left
    pub fn center(self) -> Point {
        Point::new(
            (self.min.x + self.max.x).div_euclid(2),
            (self.min.y + self.max.y).div_euclid(2),
        )
    }

    /// Merges two bounds into the smallest bounds containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use keygrid_core::geometry::{Bounds, Point};
    /// let left = Bounds::new(Point::new(0, 0), Point::new(7, 2));
    /// let right = Bounds::new(Point::new(7, 2), Point::new(21, 4));
    ///
    /// let combined = left.merge(&right);
    /// assert_eq!(combined.min_point(), Point::new(0, 0));
    /// assert_eq!(combined.max_point(), Point::new(21, 4));
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Shrinks the bounds by `amount` on every side.
    ///
    /// A negative amount grows the bounds instead.
    pub fn inset(&self, amount: i64) -> Self {
        Self {
            min: Point::new(self.min.x + amount, self.min.y + amount),
            max: Point::new(self.max.x - amount, self.max.y - amount),
        }
    }
}
