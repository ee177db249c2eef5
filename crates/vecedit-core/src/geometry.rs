//! Integer geometry primitives for the canvas.
//!
//! Coordinates follow the screen convention: the origin sits at the
//! top-left, x grows right, y grows down. Hit-testing treats a shape's
//! bounding box as closed-open, `[location, location + size)`.

use std::ops::{Add, AddAssign, Sub};

/// A 2D point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a shape's bounding box.
///
/// Both dimensions are non-negative for every committed shape. The type
/// does not enforce this: the creation-time gesture filter is the single
/// enforcement point (see [`crate::constants::MIN_SHAPE_DIMENSION`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Creates a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding box with `location` as its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub location: Point,
    pub size: Size,
}

impl Rect {
    /// Creates a rect from its top-left corner and size.
    pub const fn new(location: Point, size: Size) -> Self {
        Self { location, size }
    }

    /// Normalizes an arbitrary drag gesture into a rect: the top-left
    /// corner is the component-wise minimum and the dimensions are the
    /// absolute differences, so dragging in any direction works.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            location: Point::new(a.x.min(b.x), a.y.min(b.y)),
            size: Size::new((a.x - b.x).abs(), (a.y - b.y).abs()),
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.location.x + self.size.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.location.y + self.size.height
    }

    /// Closed-open containment test: the left and top edges are inside,
    /// the right and bottom edges are not.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.location.x && p.x < self.right() && p.y >= self.location.y && p.y < self.bottom()
    }
}
