//! Polygon, line-bundle and point-marker specifications.
//!
//! Each spec stores its coordinates as parallel sequences (`xs`/`ys`,
//! or `x0`/`y0`/`x1`/`y1` for segments), which is the layout 2D plotting
//! surfaces consume directly. The constructors take points and split them,
//! so a spec built through them always has equal-length sequences.

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox2D, Point2D};

/// Color used when a spec is built without an explicit one.
const DEFAULT_COLOR: &str = "#000000";

/// A closed polygon; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonSpec {
    /// X coordinates of the vertices, in winding order.
    pub xs: Vec<f64>,
    /// Y coordinates of the vertices, parallel to `xs`.
    pub ys: Vec<f64>,
    /// Border stroke color.
    pub border_color: String,
    /// Border stroke opacity in `[0, 1]`.
    pub border_opacity: f64,
    /// Border stroke width.
    pub border_width: f64,
    /// Fill color, `None` for outline-only polygons.
    pub fill_color: Option<String>,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Identifying tag.
    pub tag: String,
}

impl PolygonSpec {
    /// Create an unfilled outline through `points` with a 1px black border.
    pub fn outline(points: &[Point2D], tag: impl Into<String>) -> Self {
        Self {
            xs: points.iter().map(|p| p.x).collect(),
            ys: points.iter().map(|p| p.y).collect(),
            border_color: DEFAULT_COLOR.to_string(),
            border_opacity: 1.0,
            border_width: 1.0,
            fill_color: None,
            fill_opacity: 0.0,
            tag: tag.into(),
        }
    }

    /// Set border color and opacity.
    pub fn with_border(mut self, color: impl Into<String>, opacity: f64) -> Self {
        self.border_color = color.into();
        self.border_opacity = opacity;
        self
    }

    /// Set border width.
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    /// Set fill color and opacity.
    pub fn with_fill(mut self, color: impl Into<String>, opacity: f64) -> Self {
        self.fill_color = Some(color.into());
        self.fill_opacity = opacity;
        self
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True when the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Vertices in winding order.
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Point2D::new(x, y))
    }

    /// Parallel sequences agree and there are enough vertices to enclose an area.
    pub fn is_well_formed(&self) -> bool {
        self.xs.len() == self.ys.len() && self.xs.len() >= 3
    }
}

/// N independent line segments sharing one style.
///
/// Segment `i` runs from `(x0[i], y0[i])` to `(x1[i], y1[i])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBundleSpec {
    /// Start X coordinates.
    pub x0: Vec<f64>,
    /// Start Y coordinates.
    pub y0: Vec<f64>,
    /// End X coordinates.
    pub x1: Vec<f64>,
    /// End Y coordinates.
    pub y1: Vec<f64>,
    /// Stroke color.
    pub color: String,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f64,
    /// Stroke width.
    pub size: f64,
    /// Identifying tag.
    pub tag: String,
}

impl LineBundleSpec {
    /// Create a bundle from `(start, end)` pairs with a 1px opaque black stroke.
    pub fn from_segments(segments: &[(Point2D, Point2D)], tag: impl Into<String>) -> Self {
        Self {
            x0: segments.iter().map(|(a, _)| a.x).collect(),
            y0: segments.iter().map(|(a, _)| a.y).collect(),
            x1: segments.iter().map(|(_, b)| b.x).collect(),
            y1: segments.iter().map(|(_, b)| b.y).collect(),
            color: DEFAULT_COLOR.to_string(),
            opacity: 1.0,
            size: 1.0,
            tag: tag.into(),
        }
    }

    /// Set stroke color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set stroke opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set stroke width.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.x0.len()
    }

    /// True when the bundle has no segments.
    pub fn is_empty(&self) -> bool {
        self.x0.is_empty()
    }

    /// Segments as `(start, end)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let starts = self.x0.iter().zip(&self.y0);
        let ends = self.x1.iter().zip(&self.y1);
        starts
            .zip(ends)
            .map(|((&x0, &y0), (&x1, &y1))| (Point2D::new(x0, y0), Point2D::new(x1, y1)))
    }

    /// All four sequences have the same length and there is at least one segment.
    pub fn is_well_formed(&self) -> bool {
        let n = self.x0.len();
        n >= 1 && self.y0.len() == n && self.x1.len() == n && self.y1.len() == n
    }
}

/// A set of point markers sharing one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMarkerSpec {
    /// X coordinates.
    pub xs: Vec<f64>,
    /// Y coordinates, parallel to `xs`.
    pub ys: Vec<f64>,
    /// Marker color.
    pub color: String,
    /// Marker opacity in `[0, 1]`.
    pub opacity: f64,
    /// Marker size.
    pub size: f64,
    /// Identifying tag.
    pub tag: String,
}

impl PointMarkerSpec {
    /// Create opaque black size-3 markers at `points`.
    pub fn from_points(points: &[Point2D], tag: impl Into<String>) -> Self {
        Self {
            xs: points.iter().map(|p| p.x).collect(),
            ys: points.iter().map(|p| p.y).collect(),
            color: DEFAULT_COLOR.to_string(),
            opacity: 1.0,
            size: 3.0,
            tag: tag.into(),
        }
    }

    /// Set marker color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set marker opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set marker size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True when there are no markers.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Marker positions.
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Point2D::new(x, y))
    }
}

/// Discriminant of a [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// Closed polygon.
    Polygon,
    /// Line-segment bundle.
    Lines,
    /// Point markers.
    Points,
}

/// One drawable shape for the plotting surface.
///
/// Serialized internally tagged, e.g. `{"type": "lines", "x0": [..], ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Closed polygon.
    Polygon(PolygonSpec),
    /// Line-segment bundle.
    Lines(LineBundleSpec),
    /// Point markers.
    Points(PointMarkerSpec),
}

impl Primitive {
    /// The identifying tag.
    pub fn tag(&self) -> &str {
        match self {
            Primitive::Polygon(p) => &p.tag,
            Primitive::Lines(l) => &l.tag,
            Primitive::Points(p) => &p.tag,
        }
    }

    /// Which shape this is.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Polygon(_) => PrimitiveKind::Polygon,
            Primitive::Lines(_) => PrimitiveKind::Lines,
            Primitive::Points(_) => PrimitiveKind::Points,
        }
    }

    /// Every coordinate the primitive references.
    pub fn points(&self) -> Vec<Point2D> {
        match self {
            Primitive::Polygon(p) => p.points().collect(),
            Primitive::Lines(l) => l.segments().flat_map(|(a, b)| [a, b]).collect(),
            Primitive::Points(p) => p.points().collect(),
        }
    }

    /// Whether the parallel sequences of the underlying spec agree in length.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Primitive::Polygon(p) => p.is_well_formed(),
            Primitive::Lines(l) => l.is_well_formed(),
            Primitive::Points(p) => p.xs.len() == p.ys.len(),
        }
    }

    /// Borrow the polygon spec, if this is one.
    pub fn as_polygon(&self) -> Option<&PolygonSpec> {
        match self {
            Primitive::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// Borrow the line bundle spec, if this is one.
    pub fn as_lines(&self) -> Option<&LineBundleSpec> {
        match self {
            Primitive::Lines(l) => Some(l),
            _ => None,
        }
    }

    /// Borrow the point marker spec, if this is one.
    pub fn as_points(&self) -> Option<&PointMarkerSpec> {
        match self {
            Primitive::Points(p) => Some(p),
            _ => None,
        }
    }
}

impl From<PolygonSpec> for Primitive {
    fn from(spec: PolygonSpec) -> Self {
        Primitive::Polygon(spec)
    }
}

impl From<LineBundleSpec> for Primitive {
    fn from(spec: LineBundleSpec) -> Self {
        Primitive::Lines(spec)
    }
}

impl From<PointMarkerSpec> for Primitive {
    fn from(spec: PointMarkerSpec) -> Self {
        Primitive::Points(spec)
    }
}

/// Bounding box over every coordinate in `primitives`.
///
/// Returns an invalid (empty) box for an empty slice.
pub fn bounds(primitives: &[Primitive]) -> BoundingBox2D {
    let mut bb = BoundingBox2D::empty();
    for p in primitives.iter().flat_map(Primitive::points) {
        bb.include_point(p);
    }
    bb
}
