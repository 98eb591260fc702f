#![warn(missing_docs)]

//! Drawable 2D primitive specifications for the cubeplot renderer.
//!
//! This crate defines the output vocabulary handed to a plotting surface:
//! polygon outlines, bundles of independent line segments, and point
//! markers. Every primitive carries a deterministic string tag so the
//! consumer can diff, update or remove individual shapes across re-renders.
//!
//! The types are purely declarative: coordinates are already in 2D screen
//! space and nothing here performs projection or rasterization.
//!
//! # Example
//!
//! ```
//! use cubeplot_ir::{LineBundleSpec, Point2D, Primitive};
//!
//! let spec = LineBundleSpec::from_segments(
//!     &[(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0))],
//!     "diagonal",
//! )
//! .with_color("#079992");
//! let prim = Primitive::Lines(spec);
//! assert_eq!(prim.tag(), "diagonal");
//! assert!(prim.is_well_formed());
//! ```

pub mod geometry;
pub mod primitive;

pub use geometry::{BoundingBox2D, Point2D};
pub use primitive::{
    bounds, LineBundleSpec, PointMarkerSpec, PolygonSpec, Primitive, PrimitiveKind,
};
