//! Axis triple drawing shared by the edge, world and cube axes.

use cubeplot_ir::{LineBundleSpec, Point2D, PointMarkerSpec, Primitive};

use crate::options::{AxisTripleStyle, POINT_OPACITY};
use crate::tags::{self, Axis, AxisTagScheme};

/// Number of primitives [`draw_axes`] always returns.
pub const AXIS_PRIMITIVES: usize = 4;

/// Draw an axis triple: one single-segment line bundle from `origin` to each
/// of `targets` (x, y, z order), then an origin marker tagged `point-<name>`.
///
/// The marker is always fully opaque; `style.opacity` only applies to the
/// lines.
pub fn draw_axes(
    origin: Point2D,
    targets: [Point2D; 3],
    style: &AxisTripleStyle,
    name: &str,
    tag_scheme: AxisTagScheme,
) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(AXIS_PRIMITIVES);

    for ((axis, target), color) in Axis::ALL.into_iter().zip(targets).zip(&style.colors) {
        let line = LineBundleSpec::from_segments(&[(origin, target)], tag_scheme.tag(axis, name))
            .with_color(color.as_str())
            .with_opacity(style.opacity)
            .with_size(style.line_size);
        out.push(line.into());
    }

    let marker = PointMarkerSpec::from_points(&[origin], tags::point(name))
        .with_color(style.point_color.as_str())
        .with_opacity(POINT_OPACITY)
        .with_size(style.point_size);
    out.push(marker.into());

    out
}
