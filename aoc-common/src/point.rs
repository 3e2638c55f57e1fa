//! Two-dimensional integer points.
//!
//! [`Point`] doubles as a position and a direction. Coordinates follow screen
//! conventions: `x` grows to the right, `y` grows downwards, so [`Point::UP`]
//! is `(0, -1)`.
//!
//! Arithmetic uses native `i64` operators: overflow panics in debug builds and
//! wraps in release builds. Puzzle coordinates stay far away from either limit.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::rectangle::Rectangle;

/// A 2-D integer coordinate or displacement.
///
/// # Example
///
/// ```rust
/// use aoc_common::Point;
///
/// let p = Point::new(2, 3) + Point::new(-1, 4);
/// assert_eq!(p, Point::new(1, 7));
/// assert_eq!(Point::RIGHT.turn_right(), Point::DOWN);
/// assert_eq!(Point::new(3, -4).manhattan_distance(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);
    pub const UP: Point = Point::new(0, -1);
    pub const DOWN: Point = Point::new(0, 1);
    pub const LEFT: Point = Point::new(-1, 0);
    pub const RIGHT: Point = Point::new(1, 0);

    /// Unit directions in neighbour enumeration order.
    pub const DIRECTIONS: [Point; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    /// Diagonal unit directions, in the order used by [`Point::diagonal_neighbours`].
    pub const DIAGONALS: [Point; 4] = [
        Point::new(-1, -1),
        Point::new(1, -1),
        Point::new(-1, 1),
        Point::new(1, 1),
    ];

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rotates a direction 90° clockwise: `(x, y) -> (-y, x)`.
    pub const fn turn_right(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates a direction 90° counter-clockwise: `(x, y) -> (y, -x)`.
    pub const fn turn_left(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Manhattan distance from the origin.
    pub const fn manhattan_distance(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    pub const fn manhattan_distance_to(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Componentwise sign, turning an axis-aligned delta into a unit step.
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// The four orthogonal neighbours in `UP, DOWN, LEFT, RIGHT` order.
    ///
    /// Callers rely on this order for deterministic searches.
    pub fn neighbours(self) -> [Point; 4] {
        Self::DIRECTIONS.map(|direction| self + direction)
    }

    /// The four diagonal neighbours: up-left, up-right, down-left, down-right.
    pub fn diagonal_neighbours(self) -> [Point; 4] {
        Self::DIAGONALS.map(|direction| self + direction)
    }

    /// The full 8-neighbourhood, orthogonal neighbours first.
    pub fn all_neighbours(self) -> [Point; 8] {
        let [up, down, left, right] = self.neighbours();
        let [up_left, up_right, down_left, down_right] = self.diagonal_neighbours();
        [
            up, down, left, right, up_left, up_right, down_left, down_right,
        ]
    }

    /// Builds the half-open rectangle spanned by two arbitrary corners.
    ///
    /// The corners are normalized with a componentwise min/max, so the result
    /// is always well formed.
    pub fn range_to(self, other: Point) -> Rectangle {
        Rectangle::from_corners(self, other)
    }

    /// Converts into unsigned grid coordinates, `None` if either is negative.
    pub fn to_grid_index(self) -> Option<(usize, usize)> {
        Some((usize::try_from(self.x).ok()?, usize::try_from(self.y).ok()?))
    }

    /// Converts from unsigned grid coordinates, clamping each at `i64::MAX`.
    pub fn saturating_from_grid_index(x: usize, y: usize) -> Point {
        let clamp = |value: usize| i64::try_from(value).unwrap_or(i64::MAX);
        Point::new(clamp(x), clamp(y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i64, i64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl TryFrom<(usize, usize)> for Point {
    type Error = std::num::TryFromIntError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        Ok(Self::new(i64::try_from(x)?, i64::try_from(y)?))
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

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(Point::new(2, 3) + Point::new(-1, 4), Point::new(1, 7));
        assert_eq!(Point::new(2, 3) - Point::new(-1, 4), Point::new(3, -1));
        assert_eq!(Point::new(2, -3) * 4, Point::new(8, -12));
        assert_eq!(-Point::new(2, -3), Point::new(-2, 3));
    }

    #[test]
    fn test_turns() {
        assert_eq!(Point::new(1, 0).turn_right(), Point::new(0, 1));
        assert_eq!(Point::new(1, 0).turn_left(), Point::new(0, -1));
        assert_eq!(Point::UP.turn_right(), Point::RIGHT);
        assert_eq!(Point::UP.turn_left(), Point::LEFT);
        assert_eq!(Point::LEFT.turn_left().turn_left(), Point::RIGHT);
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Point::new(3, -4).manhattan_distance(), 7);
        assert_eq!(Point::new(1, 1).manhattan_distance_to(Point::new(-2, 5)), 7);
        assert_eq!(Point::ORIGIN.manhattan_distance(), 0);
    }

    #[test]
    fn test_neighbour_order_is_fixed() {
        let p = Point::new(5, 5);
        assert_eq!(
            p.neighbours(),
            [
                Point::new(5, 4),
                Point::new(5, 6),
                Point::new(4, 5),
                Point::new(6, 5)
            ]
        );
        let all = p.all_neighbours();
        assert_eq!(&all[..4], &p.neighbours());
        assert_eq!(all[4], Point::new(4, 4));
        assert_eq!(all[7], Point::new(6, 6));
    }

    #[test]
    fn test_signum() {
        assert_eq!(Point::new(0, -17).signum(), Point::UP);
        assert_eq!(Point::new(9, 0).signum(), Point::RIGHT);
    }

    #[test]
    fn test_grid_index_conversion() {
        assert_eq!(Point::new(3, 4).to_grid_index(), Some((3, 4)));
        assert_eq!(Point::new(-1, 4).to_grid_index(), None);
        assert_eq!(Point::try_from((3usize, 4usize)), Ok(Point::new(3, 4)));
        assert_eq!(Point::saturating_from_grid_index(3, 4), Point::new(3, 4));
        assert_eq!(
            Point::saturating_from_grid_index(usize::MAX, 1),
            Point::new(i64::MAX, 1)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(-1, 2).to_string(), "(-1, 2)");
    }
}
