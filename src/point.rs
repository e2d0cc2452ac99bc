//! Points, directions and array sizes for addressing a flat square grid

use std::fmt;
use std::ops::{Add, Mul, Neg};

/// A position (or a step) on a 2D grid. `x` grows to the right and `y` grows downwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const LEFT: Point = Point::new(-1, 0);
    pub const UP_LEFT: Point = Point::new(-1, -1);
    pub const UP: Point = Point::new(0, -1);
    pub const UP_RIGHT: Point = Point::new(1, -1);
    pub const RIGHT: Point = Point::new(1, 0);
    pub const DOWN_RIGHT: Point = Point::new(1, 1);
    pub const DOWN: Point = Point::new(0, 1);
    pub const DOWN_LEFT: Point = Point::new(-1, 1);

    pub const ZERO: Point = Point::new(0, 0);
    /// Always out of bounds, used where a caller needs a "no move yet" position
    pub const NONE: Point = Point::new(-1, -1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Index of the point in a row-major array of the given width
    ///
    /// Returns `None` for points left of, above or right of the array, as these have no index.
    pub fn to_index(self, width: usize) -> Option<usize> {
        if self.x < 0 || self.y < 0 || self.x as usize >= width {
            return None;
        }
        Some(self.y as usize * width + self.x as usize)
    }

    /// The point stored at `index` of a row-major array of the given size
    pub fn from_index(index: usize, size: Size) -> Self {
        if size.width == 0 {
            return Point::NONE;
        }
        Self::new((index % size.width) as i32, (index / size.width) as i32)
    }

    pub fn is_out_of_bounds(self, size: Size) -> bool {
        let smaller_than_range = self.x < 0 || self.y < 0;
        let bigger_than_range =
            self.x as i64 > size.width as i64 - 1 || self.y as i64 > size.height as i64 - 1;
        smaller_than_range || bigger_than_range
    }

    /// Index of the point in an array of the given size, or `None` if it lies outside
    pub fn index_in(self, size: Size) -> Option<usize> {
        if self.is_out_of_bounds(size) {
            None
        } else {
            self.to_index(size.width)
        }
    }

    pub const fn inverted(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.inverted()
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, scale: i32) -> Point {
        Point::new(self.x * scale, self.y * scale)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One direction per independent line through a cell: horizontal, both diagonals and vertical.
///
/// Each axis is walked in both senses by the callers, so the other four directions are redundant.
pub const AXES: [Point; 4] = [Point::LEFT, Point::UP_LEFT, Point::UP, Point::UP_RIGHT];

/// Dimensions of a 2D array
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Shorthand for a `side` by `side` array
    pub const fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}
