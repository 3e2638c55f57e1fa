//! Property-based tests for points, rectangles and progressions
//!
//! **Feature: geometry**

use aoc_common::{Point, PointProgression, Rectangle};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point> {
    (-1_000i64..1_000, -1_000i64..1_000).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Feature: geometry, Property 1: Four right turns are the identity**
    #[test]
    fn prop_turns(p in point()) {
        prop_assert_eq!(p.turn_right().turn_right().turn_right().turn_right(), p);
        prop_assert_eq!(p.turn_left().turn_right(), p);
        prop_assert_eq!(p.turn_right().turn_right(), -p);
        prop_assert_eq!(p.turn_right().manhattan_distance(), p.manhattan_distance());
    }

    /// **Feature: geometry, Property 2: Neighbours are one step away**
    #[test]
    fn prop_neighbours(p in point()) {
        for n in p.neighbours() {
            prop_assert_eq!(n.manhattan_distance_to(p), 1);
        }
        for n in p.diagonal_neighbours() {
            prop_assert_eq!(n.manhattan_distance_to(p), 2);
        }
    }

    /// **Feature: geometry, Property 3: range_to always yields a well-formed rectangle**
    /// *For any* two points, the normalized rectangle contains its top-left
    /// corner (when non-empty) and never its bottom-right corner.
    #[test]
    fn prop_range_to_normalizes(a in point(), b in point()) {
        let rect = a.range_to(b);
        prop_assert!(rect.width() >= 0 && rect.height() >= 0);
        prop_assert_eq!(Rectangle::new(rect.top_left(), rect.bottom_right()), Ok(rect));
        prop_assert!(!rect.contains(rect.bottom_right()));
        prop_assert_eq!(rect.contains(rect.top_left()), !rect.is_empty());
    }

    /// **Feature: geometry, Property 4: Rectangle points are exactly the contained points**
    #[test]
    fn prop_rectangle_points(origin in point(), w in 0i64..8, h in 0i64..8) {
        let rect = origin.range_to(origin + Point::new(w, h));
        let points: Vec<Point> = rect.points().collect();
        prop_assert_eq!(points.len() as i64, rect.area());
        prop_assert!(points.iter().all(|p| rect.contains(*p)));
    }

    /// **Feature: geometry, Property 5: Progressions visit every stride-th index**
    #[test]
    fn prop_progression_stride(width in 1usize..10, height in 1usize..10, stride in 1usize..12, start in 0usize..20) {
        let progression = PointProgression::new(width, height).step(stride).starting_at(start);
        let points: Vec<Point> = progression.iter().collect();
        let expected: Vec<Point> = (start..width * height)
            .step_by(stride)
            .map(|i| Point::new((i % width) as i64, (i / width) as i64))
            .collect();
        prop_assert_eq!(progression.len(), Some(expected.len()));
        prop_assert_eq!(points, expected);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_point_examples() {
        assert_eq!(Point::new(2, 3) + Point::new(-1, 4), Point::new(1, 7));
        assert_eq!(Point::new(1, 0).turn_right(), Point::new(0, 1));
        assert_eq!(Point::new(1, 0).turn_left(), Point::new(0, -1));
        assert_eq!(Point::new(3, -4).manhattan_distance(), 7);
    }

    #[test]
    fn test_rectangle_boundary() {
        let rect = Rectangle::new(Point::new(0, 0), Point::new(3, 3)).unwrap();
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(2, 2)));
        assert!(!rect.contains(Point::new(3, 3)));
        assert!(!rect.contains(Point::new(-1, 0)));
    }
}
