//! Projected cube geometry for one render pass.

use std::path::Path;

use cubeplot_ir::Point2D;
use serde::{Deserialize, Serialize};

use crate::error::{read_file, Result};
use crate::topology::{CROSS_POINT_COUNT, VERTEX_COUNT};

/// Source of already-projected cube geometry.
///
/// Implemented by whatever owns the 3D cube and its camera. The renderer
/// only ever reads these values through a [`CubeSnapshot`] taken at
/// construction, so an implementor is free to change between frames.
pub trait CubeProjection {
    /// The 8 projected vertices, labeled A0..H7.
    fn vertex_points_2d(&self) -> [Point2D; VERTEX_COUNT];
    /// The 6 projected cross-section points.
    fn cross_points_2d(&self) -> [Point2D; CROSS_POINT_COUNT];
    /// Projected cube center.
    fn center_2d(&self) -> Point2D;
    /// Projected tips of the cube-local x, y and z axes.
    fn axes_2d(&self) -> [Point2D; 3];
    /// Projected world origin.
    fn world_origin_2d(&self) -> Point2D;
    /// Projected tips of the world x, y and z axes.
    fn world_axes_2d(&self) -> [Point2D; 3];
}

/// Owned copy of one frame's projected cube points.
///
/// Fixed-size arrays make the point counts part of the type: a JSON
/// snapshot with seven vertices fails to deserialize instead of reaching
/// the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeSnapshot {
    /// Projected vertices, indexed per the topology labeling.
    pub vertices: [Point2D; VERTEX_COUNT],
    /// Projected cross-section points.
    pub cross_points: [Point2D; CROSS_POINT_COUNT],
    /// Projected cube center (origin of the cube axes).
    pub center: Point2D,
    /// Projected cube-local axis tips.
    pub axes: [Point2D; 3],
    /// Projected world origin.
    pub world_origin: Point2D,
    /// Projected world axis tips.
    pub world_axes: [Point2D; 3],
}

impl CubeSnapshot {
    /// Copy the current state of a projection source.
    pub fn capture(source: &impl CubeProjection) -> Self {
        Self {
            vertices: source.vertex_points_2d(),
            cross_points: source.cross_points_2d(),
            center: source.center_2d(),
            axes: source.axes_2d(),
            world_origin: source.world_origin_2d(),
            world_axes: source.world_axes_2d(),
        }
    }

    /// Parse a snapshot from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let snapshot = Self::from_json_str(&read_file(path)?)?;
        log::debug!("loaded cube snapshot from {}", path.display());
        Ok(snapshot)
    }
}

impl CubeProjection for CubeSnapshot {
    fn vertex_points_2d(&self) -> [Point2D; VERTEX_COUNT] {
        self.vertices
    }

    fn cross_points_2d(&self) -> [Point2D; CROSS_POINT_COUNT] {
        self.cross_points
    }

    fn center_2d(&self) -> Point2D {
        self.center
    }

    fn axes_2d(&self) -> [Point2D; 3] {
        self.axes
    }

    fn world_origin_2d(&self) -> Point2D {
        self.world_origin
    }

    fn world_axes_2d(&self) -> [Point2D; 3] {
        self.world_axes
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::LoadError;

    /// Unit cube seen slightly from above: back face at y = 0, front face
    /// shifted by (0.5, 0.5).
    pub(crate) fn sample_snapshot() -> CubeSnapshot {
        let p = Point2D::new;
        CubeSnapshot {
            vertices: [
                p(0.5, 1.5),
                p(1.5, 1.5),
                p(0.5, 0.5),
                p(1.5, 0.5),
                p(0.0, 1.0),
                p(1.0, 1.0),
                p(0.0, 0.0),
                p(1.0, 0.0),
            ],
            cross_points: [
                p(0.25, 0.75),
                p(0.75, 1.25),
                p(0.75, 0.25),
                p(1.25, 0.75),
                p(0.5, 0.5),
                p(1.0, 1.0),
            ],
            center: p(0.75, 0.75),
            axes: [p(1.25, 0.75), p(0.75, 1.25), p(1.0, 1.0)],
            world_origin: p(0.0, 0.0),
            world_axes: [p(1.0, 0.0), p(0.0, 1.0), p(0.5, 0.5)],
        }
    }

    struct Moving {
        frame: f64,
    }

    impl CubeProjection for Moving {
        fn vertex_points_2d(&self) -> [Point2D; VERTEX_COUNT] {
            [Point2D::new(self.frame, 0.0); VERTEX_COUNT]
        }
        fn cross_points_2d(&self) -> [Point2D; CROSS_POINT_COUNT] {
            [Point2D::new(0.0, self.frame); CROSS_POINT_COUNT]
        }
        fn center_2d(&self) -> Point2D {
            Point2D::new(self.frame, self.frame)
        }
        fn axes_2d(&self) -> [Point2D; 3] {
            [Point2D::new(0.0, 0.0); 3]
        }
        fn world_origin_2d(&self) -> Point2D {
            Point2D::new(0.0, 0.0)
        }
        fn world_axes_2d(&self) -> [Point2D; 3] {
            [Point2D::new(0.0, 0.0); 3]
        }
    }

    #[test]
    fn test_capture_copies_source() {
        let mut source = Moving { frame: 1.0 };
        let snap = CubeSnapshot::capture(&source);
        source.frame = 2.0;

        assert_eq!(snap.center, Point2D::new(1.0, 1.0));
        assert_eq!(snap.vertices[7], Point2D::new(1.0, 0.0));
        assert_ne!(CubeSnapshot::capture(&source), snap);
    }

    #[test]
    fn test_snapshot_is_a_projection() {
        let snap = sample_snapshot();
        assert_eq!(CubeSnapshot::capture(&snap), snap);
    }

    #[test]
    fn test_json_roundtrip() {
        let snap = sample_snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(CubeSnapshot::from_json_str(&json).unwrap(), snap);
    }

    #[test]
    fn test_wrong_vertex_count_rejected() {
        let mut value = serde_json::to_value(sample_snapshot()).unwrap();
        value["vertices"].as_array_mut().unwrap().pop();

        let err = CubeSnapshot::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CubeSnapshot::load("/nonexistent/snapshot.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
