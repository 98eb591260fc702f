//! Planar points and extents in screen space.

use serde::{Deserialize, Serialize};

/// A projected point, serialized as `{ "x": .., "y": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal screen coordinate.
    pub x: f64,
    /// Vertical screen coordinate.
    pub y: f64,
}

impl Point2D {
    /// Point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<nalgebra::Point2<f64>> for Point2D {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Axis-aligned extent of a set of primitives.
///
/// Starts inverted (min = +inf, max = -inf) so the first included point
/// collapses it onto that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// Left edge.
    pub min_x: f64,
    /// Bottom edge.
    pub min_y: f64,
    /// Right edge.
    pub max_x: f64,
    /// Top edge.
    pub max_y: f64,
}

impl BoundingBox2D {
    /// Box containing nothing yet.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Grow to cover `p`.
    pub fn include_point(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Midpoint, where a plotting surface would center its viewport.
    pub fn center(&self) -> Point2D {
        Point2D::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// False until at least one point has been included.
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_nalgebra() {
        let p = Point2D::from(nalgebra::Point2::new(1.5, -2.0));
        assert_eq!(p, Point2D::new(1.5, -2.0));
    }

    #[test]
    fn test_box_over_projected_ground_face() {
        let mut bb = BoundingBox2D::empty();
        assert!(!bb.is_valid());

        // Ground face of a cabinet-projected unit cube.
        for p in [(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)] {
            bb.include_point(Point2D::new(p.0, p.1));
        }
        // Receding front corner.
        bb.include_point(Point2D::new(1.35, 1.35));

        assert!(bb.is_valid());
        assert_relative_eq!(bb.width(), 1.35);
        assert_relative_eq!(bb.height(), 1.35);
        assert_eq!(bb.center(), Point2D::new(0.675, 0.675));
    }

    #[test]
    fn test_single_point_box_is_degenerate_but_valid() {
        let mut bb = BoundingBox2D::empty();
        bb.include_point(Point2D::new(-3.0, 4.0));
        assert!(bb.is_valid());
        assert_relative_eq!(bb.width(), 0.0);
        assert_eq!(bb.center(), Point2D::new(-3.0, 4.0));
    }

    #[test]
    fn test_point_serializes_as_object() {
        let json = serde_json::to_string(&Point2D::new(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);
    }
}
