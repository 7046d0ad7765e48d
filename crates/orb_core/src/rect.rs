//! Screen-space geometry
//!
//! Rectangles are absolute screen coordinates as reported by clients. The
//! registry stores them without validation, so zero or negative sizes are
//! representable and downstream math must tolerate them.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in absolute screen-space coordinates
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Placeholder bounds assigned at registration, before the first heartbeat
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Geometric center of the rectangle
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Top-left corner
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Containment test with inclusive bounds on all four edges
    ///
    /// A point on a shared edge between two adjacent windows is contained by
    /// both; routing resolves the tie by registry order.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_midpoint() {
        let r = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(r.center(), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn contains_is_inclusive_on_edges() {
        let r = Rect::new(800.0, 0.0, 800.0, 600.0);
        assert!(r.contains(DVec2::new(800.0, 300.0))); // left edge
        assert!(r.contains(DVec2::new(1600.0, 600.0))); // bottom-right corner
        assert!(!r.contains(DVec2::new(799.9, 300.0)));
    }

    #[test]
    fn zero_rect_contains_only_its_origin() {
        let r = Rect::new(10.0, 20.0, 0.0, 0.0);
        assert!(r.contains(DVec2::new(10.0, 20.0)));
        assert!(!r.contains(DVec2::new(10.0, 20.1)));
    }

    #[test]
    fn negative_size_contains_nothing() {
        let r = Rect::new(0.0, 0.0, -100.0, 50.0);
        assert!(!r.contains(DVec2::new(-50.0, 25.0)));
        assert!(!r.contains(DVec2::new(50.0, 25.0)));
    }
}
