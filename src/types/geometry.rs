//! Integer geometry in canvas pixel space.

use serde::{Deserialize, Serialize};

/// A point in canvas pixel coordinates. May lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box with inclusive corners, as used for ellipse bounds.
///
/// `BoundingBox::new(Point::new(-150, -150), Point::new(150, 150))` covers
/// 301×301 pixels, most of which are clipped away by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Box reaching `radius` pixels from `centre` on every side.
    pub const fn around(centre: Point, radius: i32) -> Self {
        Self::new(
            Point::new(centre.x - radius, centre.y - radius),
            Point::new(centre.x + radius, centre.y + radius),
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_around() {
        let b = BoundingBox::around(Point::new(600, 400), 100);
        assert_eq!(b.min, Point::new(500, 300));
        assert_eq!(b.max, Point::new(700, 500));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = BoundingBox::new(Point::new(0, 0), Point::new(10, 10));
        assert!(b.contains(Point::new(10, 10)));
        assert!(b.contains(Point::new(0, 5)));
        assert!(!b.contains(Point::new(11, 5)));
    }
}
