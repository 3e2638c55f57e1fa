//! Lazy row-major point sequences over a `width x height` region.
//!
//! A [`PointProgression`] only describes the shape and the traversal; each
//! call to [`PointProgression::iter`] starts a fresh [`PointIter`]. Keeping the
//! stride separate from the shape lets callers derive offset/step traversals
//! (a diagonal is `stride = width + 1`) without repeating bounds logic.

use std::iter::FusedIterator;

use crate::point::Point;

/// Row-major sequence of the points in `[0, width) x [0, height)`.
///
/// # Example
///
/// ```rust
/// use aoc_common::{Point, PointProgression};
///
/// let progression = PointProgression::new(3, 2);
/// let points: Vec<Point> = progression.iter().collect();
/// assert_eq!(points.len(), 6);
/// assert_eq!(points[4], Point::new(1, 1));
///
/// // Every other point, starting from the second one.
/// let odd: Vec<Point> = progression.step(2).starting_at(1).into_iter().collect();
/// assert_eq!(odd, vec![Point::new(1, 0), Point::new(0, 1), Point::new(2, 1)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointProgression {
    width: usize,
    height: usize,
    stride: usize,
    start: usize,
}

impl PointProgression {
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride: 1,
            start: 0,
        }
    }

    /// Returns a copy with the stride replaced.
    ///
    /// A stride of zero repeats the start point forever.
    pub const fn step(self, stride: usize) -> Self {
        Self { stride, ..self }
    }

    /// Returns a copy that begins at the given flattened index.
    pub const fn starting_at(self, start: usize) -> Self {
        Self { start, ..self }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of points a traversal yields, `None` if it never ends.
    pub const fn len(&self) -> Option<usize> {
        let total = self.width * self.height;
        if self.start >= total {
            Some(0)
        } else if self.stride == 0 {
            None
        } else {
            Some((total - self.start).div_ceil(self.stride))
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.len(), Some(0))
    }

    /// Starts a new traversal at the configured start index.
    pub const fn iter(&self) -> PointIter {
        PointIter {
            width: self.width,
            total: self.width * self.height,
            stride: self.stride,
            index: self.start,
        }
    }
}

impl IntoIterator for PointProgression {
    type Item = Point;
    type IntoIter = PointIter;

    fn into_iter(self) -> PointIter {
        self.iter()
    }
}

impl IntoIterator for &PointProgression {
    type Item = Point;
    type IntoIter = PointIter;

    fn into_iter(self) -> PointIter {
        self.iter()
    }
}

/// Iterator over the points of a [`PointProgression`].
#[derive(Debug, Clone)]
pub struct PointIter {
    width: usize,
    total: usize,
    stride: usize,
    index: usize,
}

impl PointIter {
    pub const fn has_next(&self) -> bool {
        self.index < self.total
    }

    /// Yields the next point, panicking if the progression is exhausted.
    ///
    /// Use this where running off the end is a logic error in the caller.
    pub fn next_point(&mut self) -> Point {
        match self.next() {
            Some(point) => point,
            None => panic!(
                "point progression exhausted at index {} of {}",
                self.index, self.total
            ),
        }
    }

    fn point_at(&self, index: usize) -> Point {
        Point::saturating_from_grid_index(index % self.width, index / self.width)
    }
}

impl Iterator for PointIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if !self.has_next() {
            return None;
        }
        let point = self.point_at(self.index);
        // Saturate so a huge stride parks the index past the end instead of wrapping.
        self.index = self.index.saturating_add(self.stride);
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.has_next() {
            (0, Some(0))
        } else if self.stride == 0 {
            (usize::MAX, None)
        } else {
            let remaining = (self.total - self.index).div_ceil(self.stride);
            (remaining, Some(remaining))
        }
    }
}

impl FusedIterator for PointIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_order() {
        let points: Vec<Point> = PointProgression::new(2, 2).iter().collect();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_restartable() {
        let progression = PointProgression::new(4, 3);
        let mut first = progression.iter();
        first.next();
        first.next();
        assert_eq!(progression.iter().next(), Some(Point::ORIGIN));
        assert_eq!(progression.iter().count(), 12);
        assert_eq!(first.count(), 10);
    }

    #[test]
    fn test_step_does_not_mutate_receiver() {
        let progression = PointProgression::new(3, 3);
        let diagonal = progression.step(4);
        assert_eq!(progression.stride(), 1);
        assert_eq!(
            diagonal.iter().collect::<Vec<_>>(),
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
        );
    }

    #[test]
    fn test_len_and_size_hint() {
        let progression = PointProgression::new(5, 3).step(4);
        assert_eq!(progression.len(), Some(4));
        assert_eq!(progression.iter().size_hint(), (4, Some(4)));
        assert_eq!(progression.iter().count(), 4);
        assert_eq!(PointProgression::new(5, 3).starting_at(15).len(), Some(0));
        assert!(PointProgression::new(0, 3).is_empty());
    }

    #[test]
    fn test_zero_stride_is_infinite() {
        let progression = PointProgression::new(2, 2).step(0).starting_at(3);
        assert_eq!(progression.len(), None);
        let points: Vec<Point> = progression.iter().take(5).collect();
        assert!(points.iter().all(|p| *p == Point::new(1, 1)));
    }

    #[test]
    fn test_has_next() {
        let mut iter = PointProgression::new(1, 1).iter();
        assert!(iter.has_next());
        assert_eq!(iter.next_point(), Point::ORIGIN);
        assert!(!iter.has_next());
        assert_eq!(iter.next(), None);
    }

    #[test]
    #[should_panic(expected = "point progression exhausted")]
    fn test_next_point_past_end_panics() {
        let mut iter = PointProgression::new(1, 1).iter();
        iter.next_point();
        iter.next_point();
    }
}
