#![warn(missing_docs)]

//! Primitive assembly for projected cube scenes.
//!
//! Given a [`CubeSnapshot`] (a cube's vertices, cross-section points and
//! axis vectors, already projected to 2D) and a set of [`RenderOptions`],
//! the [`Renderer`] decides which features to draw and emits them as a flat,
//! ordered list of [`Primitive`]s for a 2D plotting surface:
//!
//! - **Box**: the six faces as unfilled outlines
//! - **Ground plane**: the filled back face
//! - **Axis triples**: edge, world and cube-local axes with origin markers
//! - **Cross-section lines**: guide lines between cross-section points
//!
//! Rendering is a pure function of snapshot and options. No projection,
//! camera handling or picking happens here.
//!
//! # Example
//!
//! ```no_run
//! use cubeplot_render::{CubeSnapshot, RenderOptions, Renderer, SceneOptions};
//!
//! let snapshot = CubeSnapshot::load("frame.json")?;
//! let options = RenderOptions::from(SceneOptions::load("options.toml")?);
//!
//! for prim in Renderer::new(snapshot, options).render() {
//!     println!("{}", prim.tag());
//! }
//! # Ok::<(), cubeplot_render::LoadError>(())
//! ```

pub mod axes;
pub mod error;
pub mod options;
pub mod renderer;
pub mod snapshot;
pub mod tags;
pub mod topology;

pub use axes::draw_axes;
pub use cubeplot_ir::{
    BoundingBox2D, LineBundleSpec, Point2D, PointMarkerSpec, PolygonSpec, Primitive,
    PrimitiveKind,
};
pub use error::{LoadError, Result};
pub use options::{
    AxisTripleConfig, AxisTripleStyle, EdgeStyle, RenderOptions, SceneEdgesConfig, SceneOptions,
};
pub use renderer::Renderer;
pub use snapshot::{CubeProjection, CubeSnapshot};
pub use tags::{Axis, AxisTagScheme};
pub use topology::FACES;
