//! Coordinates and inclusive rectangles
//!
//! Points are signed so a rectangle may start left of or above the
//! surface; the surface clips such references instead of rejecting them.

use serde::{Deserialize, Serialize};

/// A cell coordinate: `x` is the column, `y` the row, both 0-based
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `(dx, dy)`, saturating at the `i32` limits
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A rectangle whose two corners are both part of the region.
///
/// When `bottom_right` is `None` the rectangle extends to the
/// bottom-right corner of whatever surface it is applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Option<Point>,
}

impl Rect {
    /// Rectangle spanning `top_left..=bottom_right`
    pub fn new(top_left: impl Into<Point>, bottom_right: impl Into<Point>) -> Self {
        Self {
            top_left: top_left.into(),
            bottom_right: Some(bottom_right.into()),
        }
    }

    /// Rectangle from `top_left` to the bottom-right corner of the surface
    pub fn from_corner(top_left: impl Into<Point>) -> Self {
        Self {
            top_left: top_left.into(),
            bottom_right: None,
        }
    }

    /// The whole surface
    pub fn full() -> Self {
        Self::from_corner(Point::ORIGIN)
    }

    /// Both corners, substituting `max` for an omitted bottom-right
    pub fn resolve(&self, max: Point) -> (Point, Point) {
        (self.top_left, self.bottom_right.unwrap_or(max))
    }

    /// Whether the corners are out of natural order on either axis
    pub fn is_reversed(&self, max: Point) -> bool {
        let (tl, br) = self.resolve(max);
        tl.x > br.x || tl.y > br.y
    }

    /// A copy with the corners swapped into natural order.
    ///
    /// The surface never does this on its own: reversed rectangles cover
    /// nothing there. Callers that want the forgiving reading opt in here.
    pub fn normalized(&self, max: Point) -> Self {
        let (tl, br) = self.resolve(max);
        Self::new(
            (tl.x.min(br.x), tl.y.min(br.y)),
            (tl.x.max(br.x), tl.y.max(br.y)),
        )
    }

    /// Inclusive width and height; zero or negative when reversed
    pub fn extent(&self, max: Point) -> (i64, i64) {
        let (tl, br) = self.resolve(max);
        (
            i64::from(br.x) - i64::from(tl.x) + 1,
            i64::from(br.y) - i64::from(tl.y) + 1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_to_max() {
        let rect = Rect::from_corner((2, 3));
        assert_eq!(rect.resolve(Point::new(9, 9)), (Point::new(2, 3), Point::new(9, 9)));

        let full = Rect::full();
        assert_eq!(full.resolve(Point::new(4, 1)), (Point::ORIGIN, Point::new(4, 1)));
    }

    #[test]
    fn test_reversed_and_normalized() {
        let max = Point::new(9, 9);
        let rect = Rect::new((5, 1), (2, 4));
        assert!(rect.is_reversed(max));

        let fixed = rect.normalized(max);
        assert!(!fixed.is_reversed(max));
        assert_eq!(fixed, Rect::new((2, 1), (5, 4)));
    }

    #[test]
    fn test_extent_is_inclusive() {
        let max = Point::new(9, 9);
        assert_eq!(Rect::new((1, 1), (1, 1)).extent(max), (1, 1));
        assert_eq!(Rect::new((0, 0), (3, 1)).extent(max), (4, 2));
        assert_eq!(Rect::new((3, 0), (1, 0)).extent(max), (-1, 1));
    }

    #[test]
    fn test_offset_saturates() {
        let p = Point::new(i32::MAX, 0).offset(1, -1);
        assert_eq!(p, Point::new(i32::MAX, -1));
    }
}
