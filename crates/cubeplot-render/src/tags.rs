//! Tag strings attached to rendered primitives.
//!
//! Tags are deterministic functions of feature and index so a plotting
//! surface can match primitives across re-renders.

use serde::{Deserialize, Serialize};

/// Tag of the ground plane polygon.
pub const XY_PLANE: &str = "xy-plane";

/// Tag of the cross-section guide-line bundle.
pub const CROSS_SECTION_LINES: &str = "cross-section-lines";

/// Tag of box face `index`.
pub fn plane(index: usize) -> String {
    format!("plane-{index}")
}

/// Tag of the origin marker of the axis triple `name`.
pub fn point(name: &str) -> String {
    format!("point-{name}")
}

/// One axis of a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// All axes in drawing order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase axis letter.
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// How the three line bundles of an axis triple are tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisTagScheme {
    /// All three axes share `x-<name>`.
    #[default]
    Shared,
    /// Each axis gets its own `<letter>-<name>`.
    PerAxis,
}

impl AxisTagScheme {
    /// Tag for `axis` of the triple called `name`.
    pub fn tag(self, axis: Axis, name: &str) -> String {
        let letter = match self {
            AxisTagScheme::Shared => 'x',
            AxisTagScheme::PerAxis => axis.letter(),
        };
        format!("{letter}-{name}")
    }
}
