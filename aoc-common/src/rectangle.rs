//! Axis-aligned half-open rectangles.

use crate::error::GeometryError;
use crate::point::Point;
use crate::progression::PointProgression;

/// The region `[top_left, bottom_right)` on both axes.
///
/// Corners are private so a `Rectangle` is always well formed:
/// `top_left <= bottom_right` componentwise.
///
/// # Example
///
/// ```rust
/// use aoc_common::{Point, Rectangle};
///
/// let area = Point::new(3, 3).range_to(Point::new(0, 0));
/// assert!(area.contains(Point::new(2, 2)));
/// assert!(!area.contains(Point::new(3, 3)));
/// assert_eq!(area.width(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRectangle"))]
pub struct Rectangle {
    top_left: Point,
    bottom_right: Point,
}

/// Unchecked wire form of [`Rectangle`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRectangle {
    top_left: Point,
    bottom_right: Point,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRectangle> for Rectangle {
    type Error = GeometryError;

    fn try_from(raw: RawRectangle) -> Result<Self, GeometryError> {
        Rectangle::new(raw.top_left, raw.bottom_right)
    }
}

impl Rectangle {
    /// Creates a rectangle from ordered corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvertedRectangle`] if `top_left` lies right of or
    /// below `bottom_right`.
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, GeometryError> {
        if top_left.x > bottom_right.x || top_left.y > bottom_right.y {
            return Err(GeometryError::InvertedRectangle {
                top_left,
                bottom_right,
            });
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Creates the rectangle spanned by two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            top_left: Point::new(a.x.min(b.x), a.y.min(b.y)),
            bottom_right: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// A `width x height` rectangle anchored at the origin.
    ///
    /// Sizes above `i64::MAX` are clamped to it.
    pub fn from_size(width: usize, height: usize) -> Self {
        Self {
            top_left: Point::ORIGIN,
            bottom_right: Point::saturating_from_grid_index(width, height),
        }
    }

    /// Smallest rectangle containing every point, `None` for no points.
    ///
    /// The result is half-open, so the maximum coordinates are extended by one.
    pub fn bounding<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self {
            top_left: min,
            bottom_right: max + Point::new(1, 1),
        })
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn width(&self) -> i64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> i64 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn area(&self) -> i64 {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Whether `point` lies inside; the bottom and right edges are excluded.
    pub fn contains(&self, point: Point) -> bool {
        (self.top_left.x..self.bottom_right.x).contains(&point.x)
            && (self.top_left.y..self.bottom_right.y).contains(&point.y)
    }

    /// Every contained point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let origin = self.top_left;
        PointProgression::new(self.width() as usize, self.height() as usize)
            .into_iter()
            .map(move |offset| origin + offset)
    }
}
