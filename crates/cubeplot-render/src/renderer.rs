//! Feature selection and primitive assembly for one cube snapshot.

use cubeplot_ir::{BoundingBox2D, LineBundleSpec, Point2D, PolygonSpec, Primitive};

use crate::axes::draw_axes;
use crate::options::{AxisTripleStyle, RenderOptions};
use crate::snapshot::{CubeProjection, CubeSnapshot};
use crate::tags;
use crate::topology::{
    CROSS_POINT_PAIRS, EDGE_AXIS_ORIGIN, EDGE_AXIS_TARGETS, FACES, GROUND_FACE, GROUND_LOOP,
};

/// Ground plane fill and border color.
pub const XY_PLANE_COLOR: &str = "#0e2845";
/// Ground plane fill opacity.
pub const XY_PLANE_FILL_OPACITY: f64 = 0.5;
/// Cross-section guide line color.
pub const CROSS_LINE_COLOR: &str = "#079992";
/// Cross-section guide line opacity.
pub const CROSS_LINE_OPACITY: f64 = 0.5;

/// Name of the edge axis triple.
pub const EDGE_AXES_NAME: &str = "edge";
/// Name of the world axis triple.
pub const WORLD_AXES_NAME: &str = "worldAxes";
/// Name of the cube axis triple.
pub const CUBE_AXES_NAME: &str = "axes";

/// Turns a cube snapshot into a flat list of 2D primitives.
///
/// The renderer owns its snapshot and options, so it is immutable after
/// construction and [`render`](Self::render) always returns the same list.
/// Build a new renderer per frame.
#[derive(Debug, Clone)]
pub struct Renderer {
    snapshot: CubeSnapshot,
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer over an owned snapshot.
    pub fn new(snapshot: CubeSnapshot, options: RenderOptions) -> Self {
        Self { snapshot, options }
    }

    /// Snapshot `source` and create a renderer over the copy.
    pub fn capture(source: &impl CubeProjection, options: RenderOptions) -> Self {
        Self::new(CubeSnapshot::capture(source), options)
    }

    /// The snapshot being rendered.
    pub fn snapshot(&self) -> &CubeSnapshot {
        &self.snapshot
    }

    /// The resolved options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render every feature in draw order: box, ground plane, edge axes,
    /// ground plane again, cross-section lines, world axes, cube axes.
    ///
    /// Later primitives paint over earlier ones. The ground plane is emitted
    /// twice to keep the established output layout.
    pub fn render(&self) -> Vec<Primitive> {
        let mut out = Vec::new();
        out.extend(self.draw_box());
        out.extend(self.draw_xy_plane());
        out.extend(self.draw_edge_axes());
        out.extend(self.draw_xy_plane());
        out.extend(self.draw_cross_lines());
        out.extend(self.draw_world_axes());
        out.extend(self.draw_cube_axes());
        log::debug!("rendered {} primitives", out.len());
        out
    }

    /// Bounding box of everything [`render`](Self::render) emits.
    pub fn render_bounds(&self) -> BoundingBox2D {
        cubeplot_ir::bounds(&self.render())
    }

    /// One unfilled outline per face, tagged `plane-<i>`.
    pub fn draw_box(&self) -> Vec<Primitive> {
        let Some(style) = &self.options.scene_edges else {
            log::trace!("scene edges disabled");
            return Vec::new();
        };

        FACES
            .iter()
            .enumerate()
            .map(|(i, face)| {
                let points = face.map(|v| self.snapshot.vertices[v]);
                let outline = PolygonSpec::outline(&points, tags::plane(i))
                    .with_border(style.color.as_str(), style.opacity)
                    .with_border_width(1.0);
                Primitive::from(outline)
            })
            .collect()
    }

    /// The filled ground plane under the cube.
    pub fn draw_xy_plane(&self) -> Vec<Primitive> {
        let points = GROUND_FACE.map(|v| self.snapshot.vertices[v]);
        let plane = PolygonSpec::outline(&points, tags::XY_PLANE)
            .with_fill(XY_PLANE_COLOR, XY_PLANE_FILL_OPACITY)
            .with_border(XY_PLANE_COLOR, 1.0)
            .with_border_width(1.0);
        vec![plane.into()]
    }

    /// Axes along the three cube edges leaving the ground corner.
    pub fn draw_edge_axes(&self) -> Vec<Primitive> {
        let vertices = &self.snapshot.vertices;
        self.draw_triple(
            self.options.edge_axes.as_ref(),
            vertices[EDGE_AXIS_ORIGIN],
            EDGE_AXIS_TARGETS.map(|v| vertices[v]),
            EDGE_AXES_NAME,
        )
    }

    /// World coordinate axes at the world origin.
    pub fn draw_world_axes(&self) -> Vec<Primitive> {
        self.draw_triple(
            self.options.world_axes.as_ref(),
            self.snapshot.world_origin,
            self.snapshot.world_axes,
            WORLD_AXES_NAME,
        )
    }

    /// Cube-local axes at the cube center.
    pub fn draw_cube_axes(&self) -> Vec<Primitive> {
        self.draw_triple(
            self.options.cube_axes.as_ref(),
            self.snapshot.center,
            self.snapshot.axes,
            CUBE_AXES_NAME,
        )
    }

    /// One bundle of eight guide lines: four between cross-section points,
    /// then a loop around the ground face.
    pub fn draw_cross_lines(&self) -> Vec<Primitive> {
        let cross = &self.snapshot.cross_points;
        let vertices = &self.snapshot.vertices;

        let segments: Vec<(Point2D, Point2D)> = CROSS_POINT_PAIRS
            .iter()
            .map(|&(a, b)| (cross[a], cross[b]))
            .chain(GROUND_LOOP.iter().map(|&(a, b)| (vertices[a], vertices[b])))
            .collect();

        let lines = LineBundleSpec::from_segments(&segments, tags::CROSS_SECTION_LINES)
            .with_color(CROSS_LINE_COLOR)
            .with_opacity(CROSS_LINE_OPACITY)
            .with_size(1.0);
        vec![lines.into()]
    }

    fn draw_triple(
        &self,
        style: Option<&AxisTripleStyle>,
        origin: Point2D,
        targets: [Point2D; 3],
        name: &str,
    ) -> Vec<Primitive> {
        match style {
            Some(style) => draw_axes(origin, targets, style, name, self.options.axis_tags),
            None => {
                log::trace!("axis triple {name} disabled");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axes::AXIS_PRIMITIVES;
    use crate::options::{EdgeStyle, SceneOptions};
    use crate::snapshot::tests::sample_snapshot;
    use crate::tags::AxisTagScheme;
    use approx::assert_relative_eq;
    use cubeplot_ir::PrimitiveKind;

    fn all_enabled() -> RenderOptions {
        RenderOptions::resolve(&SceneOptions::example())
    }

    fn tags_of(prims: &[Primitive]) -> Vec<&str> {
        prims.iter().map(Primitive::tag).collect()
    }

    #[test]
    fn test_all_features_absent() {
        let renderer = Renderer::new(sample_snapshot(), RenderOptions::default());
        let prims = renderer.render();

        assert_eq!(prims.len(), 3);
        assert_eq!(
            tags_of(&prims),
            ["xy-plane", "xy-plane", "cross-section-lines"]
        );
        assert_eq!(prims[0], prims[1]);
    }

    #[test]
    fn test_plane_and_cross_toggles_do_not_gate() {
        let options = RenderOptions::resolve(&SceneOptions {
            xy_plane: Some(false),
            cross_lines: Some(false),
            ..Default::default()
        });
        let prims = Renderer::new(sample_snapshot(), options).render();

        assert_eq!(
            tags_of(&prims),
            ["xy-plane", "xy-plane", "cross-section-lines"]
        );
        assert_eq!(prims[2].as_lines().unwrap().len(), 8);
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = Renderer::new(sample_snapshot(), all_enabled());
        let first = renderer.render();
        let second = renderer.render();
        assert_eq!(first, second);
        assert_eq!(tags_of(&first), tags_of(&second));
    }

    #[test]
    fn test_full_render_order() {
        let renderer = Renderer::new(sample_snapshot(), all_enabled());
        let prims = renderer.render();

        assert_eq!(prims.len(), 6 + 1 + AXIS_PRIMITIVES + 1 + 1 + 2 * AXIS_PRIMITIVES);
        assert_eq!(
            tags_of(&prims),
            [
                "plane-0",
                "plane-1",
                "plane-2",
                "plane-3",
                "plane-4",
                "plane-5",
                "xy-plane",
                "x-edge",
                "x-edge",
                "x-edge",
                "point-edge",
                "xy-plane",
                "cross-section-lines",
                "x-worldAxes",
                "x-worldAxes",
                "x-worldAxes",
                "point-worldAxes",
                "x-axes",
                "x-axes",
                "x-axes",
                "point-axes",
            ]
        );
        assert!(prims.iter().all(Primitive::is_well_formed));
    }

    #[test]
    fn test_draw_box() {
        let options = RenderOptions {
            scene_edges: Some(EdgeStyle {
                color: "#fff".into(),
                opacity: 0.8,
            }),
            ..Default::default()
        };
        let renderer = Renderer::new(sample_snapshot(), options);
        let faces = renderer.draw_box();

        assert_eq!(faces.len(), 6);
        for (i, prim) in faces.iter().enumerate() {
            let poly = prim.as_polygon().unwrap();
            assert_eq!(poly.tag, format!("plane-{i}"));
            assert_eq!(poly.border_color, "#fff");
            assert_relative_eq!(poly.border_opacity, 0.8);
            assert_relative_eq!(poly.border_width, 1.0);
            assert_relative_eq!(poly.fill_opacity, 0.0);
            assert_eq!(poly.len(), 4);
        }

        let snap = sample_snapshot();
        let front = faces[0].as_polygon().unwrap();
        let expected: Vec<_> = FACES[0].iter().map(|&v| snap.vertices[v]).collect();
        assert_eq!(front.points().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_draw_box_disabled() {
        let renderer = Renderer::new(sample_snapshot(), RenderOptions::default());
        assert!(renderer.draw_box().is_empty());
    }

    #[test]
    fn test_xy_plane_style() {
        let renderer = Renderer::new(sample_snapshot(), RenderOptions::default());
        let prims = renderer.draw_xy_plane();
        assert_eq!(prims.len(), 1);

        let plane = prims[0].as_polygon().unwrap();
        let snap = sample_snapshot();
        assert_eq!(
            plane.points().collect::<Vec<_>>(),
            [4, 5, 7, 6].map(|v| snap.vertices[v]).to_vec()
        );
        assert_eq!(plane.fill_color.as_deref(), Some("#0e2845"));
        assert_relative_eq!(plane.fill_opacity, 0.5);
        assert_eq!(plane.border_color, "#0e2845");
        assert_relative_eq!(plane.border_opacity, 1.0);
        assert_relative_eq!(plane.border_width, 1.0);
    }

    #[test]
    fn test_cross_lines_always_eight_segments() {
        for options in [RenderOptions::default(), all_enabled()] {
            let renderer = Renderer::new(sample_snapshot(), options);
            let prims = renderer.draw_cross_lines();
            assert_eq!(prims.len(), 1);

            let lines = prims[0].as_lines().unwrap();
            assert_eq!(lines.len(), 8);
            assert!(lines.is_well_formed());
            assert_eq!(lines.tag, "cross-section-lines");
            assert_eq!(lines.color, "#079992");
            assert_relative_eq!(lines.opacity, 0.5);
            assert_relative_eq!(lines.size, 1.0);
        }
    }

    #[test]
    fn test_cross_line_pairing() {
        let snap = sample_snapshot();
        let renderer = Renderer::new(snap.clone(), RenderOptions::default());
        let prims = renderer.draw_cross_lines();
        let segments: Vec<_> = prims[0].as_lines().unwrap().segments().collect();

        let c = &snap.cross_points;
        let v = &snap.vertices;
        assert_eq!(
            segments,
            vec![
                (c[0], c[3]),
                (c[1], c[2]),
                (c[1], c[4]),
                (c[3], c[5]),
                (v[6], v[4]),
                (v[4], v[5]),
                (v[5], v[7]),
                (v[7], v[6]),
            ]
        );
    }

    #[test]
    fn test_edge_axes_anchor() {
        let snap = sample_snapshot();
        let renderer = Renderer::new(snap.clone(), all_enabled());
        let prims = renderer.draw_edge_axes();
        assert_eq!(prims.len(), AXIS_PRIMITIVES);

        for (prim, target) in prims.iter().zip([5, 6, 0]) {
            let line = prim.as_lines().unwrap();
            assert_eq!(
                line.segments().next(),
                Some((snap.vertices[4], snap.vertices[target]))
            );
        }
        let marker = prims[3].as_points().unwrap();
        assert_eq!(marker.points().next(), Some(snap.vertices[4]));
    }

    #[test]
    fn test_world_and_cube_axes_origins() {
        let snap = sample_snapshot();
        let renderer = Renderer::new(snap.clone(), all_enabled());

        let world = renderer.draw_world_axes();
        assert_eq!(world[3].as_points().unwrap().points().next(), Some(snap.world_origin));
        assert_eq!(
            world[2].as_lines().unwrap().segments().next(),
            Some((snap.world_origin, snap.world_axes[2]))
        );

        let cube = renderer.draw_cube_axes();
        assert_eq!(cube[3].as_points().unwrap().points().next(), Some(snap.center));
        assert_eq!(
            cube[0].as_lines().unwrap().segments().next(),
            Some((snap.center, snap.axes[0]))
        );
    }

    #[test]
    fn test_axis_triples_gated_independently() {
        let mut options = all_enabled();
        options.world_axes = None;
        let renderer = Renderer::new(sample_snapshot(), options);

        assert_eq!(renderer.draw_edge_axes().len(), AXIS_PRIMITIVES);
        assert!(renderer.draw_world_axes().is_empty());
        assert_eq!(renderer.draw_cube_axes().len(), AXIS_PRIMITIVES);
    }

    #[test]
    fn test_per_axis_tags_in_render() {
        let mut options = all_enabled();
        options.axis_tags = AxisTagScheme::PerAxis;
        let renderer = Renderer::new(sample_snapshot(), options);
        let tags = tags_of(&renderer.draw_cube_axes()).join(",");
        assert_eq!(tags, "x-axes,y-axes,z-axes,point-axes");
    }

    #[test]
    fn test_render_bounds_cover_snapshot() {
        let renderer = Renderer::new(sample_snapshot(), all_enabled());
        let bb = renderer.render_bounds();
        assert!(bb.is_valid());
        assert_relative_eq!(bb.min_x, 0.0);
        assert_relative_eq!(bb.min_y, 0.0);
        assert_relative_eq!(bb.max_x, 1.5);
        assert_relative_eq!(bb.max_y, 1.5);
        assert_eq!(bb.center(), Point2D::new(0.75, 0.75));
    }

    #[test]
    fn test_capture_from_projection() {
        let snap = sample_snapshot();
        let renderer = Renderer::capture(&snap, RenderOptions::default());
        assert_eq!(renderer.snapshot(), &snap);
        assert_eq!(renderer.options(), &RenderOptions::default());
        assert_eq!(
            renderer
                .render()
                .iter()
                .map(Primitive::kind)
                .collect::<Vec<_>>(),
            [PrimitiveKind::Polygon, PrimitiveKind::Polygon, PrimitiveKind::Lines]
        );
    }
}
