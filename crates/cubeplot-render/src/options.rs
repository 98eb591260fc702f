//! Rendering options.
//!
//! [`SceneOptions`] is the configuration surface as written in a TOML or
//! JSON file: each optional feature is either present or absent, and
//! absence is the only way to disable it. [`RenderOptions`] is the same
//! thing with every fallback filled in, resolved once so the renderers
//! never apply defaults themselves.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{read_file, LoadError, Result};
use crate::tags::AxisTagScheme;

/// Scene-edge opacity when the config omits it.
pub const DEFAULT_EDGE_OPACITY: f64 = 1.0;
/// Axis line opacity when the config omits it.
pub const DEFAULT_AXIS_OPACITY: f64 = 1.0;
/// Axis line width when the config omits it.
pub const DEFAULT_LINE_SIZE: f64 = 1.0;
/// Origin marker size when the config omits it.
pub const DEFAULT_POINT_SIZE: f64 = 3.0;
/// Origin marker color when the config omits it.
pub const DEFAULT_POINT_COLOR: &str = "#ffffff";
/// Origin marker opacity; not configurable.
pub const POINT_OPACITY: f64 = 1.0;

/// Box outline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneEdgesConfig {
    /// Border color.
    pub color: String,
    /// Border opacity (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Configuration of one axis triple (edge, world or cube axes).
///
/// Keys are snake_case; the camelCase spellings used by plotting front ends
/// are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisTripleConfig {
    /// Color of the x axis line.
    #[serde(alias = "xColor")]
    pub x_color: String,
    /// Color of the y axis line.
    #[serde(alias = "yColor")]
    pub y_color: String,
    /// Color of the z axis line.
    #[serde(alias = "zColor")]
    pub z_color: String,
    /// Line width (default 1).
    #[serde(default, alias = "lineSize", skip_serializing_if = "Option::is_none")]
    pub line_size: Option<f64>,
    /// Line opacity (default 1).
    #[serde(default, alias = "edgeOpacity", skip_serializing_if = "Option::is_none")]
    pub edge_opacity: Option<f64>,
    /// Origin marker color (default white).
    #[serde(default, alias = "intersectionPointColor", skip_serializing_if = "Option::is_none")]
    pub intersection_point_color: Option<String>,
    /// Origin marker size (default 3).
    #[serde(default, alias = "intersectionPointSize", skip_serializing_if = "Option::is_none")]
    pub intersection_point_size: Option<f64>,
}

/// Options as loaded from a file.
///
/// Scalars come before the feature tables so the struct serializes to valid TOML.
/// Unknown keys are rejected: a misspelled feature would otherwise read as
/// absent and silently disable it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneOptions {
    /// Axis line tagging.
    #[serde(alias = "axisTags")]
    pub axis_tags: AxisTagScheme,
    /// Ground plane toggle. Accepted but not honored: the plane is always drawn.
    #[serde(alias = "xyPlane", skip_serializing_if = "Option::is_none")]
    pub xy_plane: Option<bool>,
    /// Cross-section toggle. Accepted but not honored: the lines are always drawn.
    #[serde(alias = "crossLines", skip_serializing_if = "Option::is_none")]
    pub cross_lines: Option<bool>,
    /// Box face outlines.
    #[serde(alias = "sceneEdges", skip_serializing_if = "Option::is_none")]
    pub scene_edges: Option<SceneEdgesConfig>,
    /// Axes along three cube edges.
    #[serde(alias = "edgeAxes", skip_serializing_if = "Option::is_none")]
    pub edge_axes: Option<AxisTripleConfig>,
    /// World coordinate axes.
    #[serde(alias = "worldAxes", skip_serializing_if = "Option::is_none")]
    pub world_axes: Option<AxisTripleConfig>,
    /// Cube-local axes.
    #[serde(alias = "cubeAxes", skip_serializing_if = "Option::is_none")]
    pub cube_axes: Option<AxisTripleConfig>,
}

impl SceneOptions {
    /// Parse options from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse options from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load options from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let options = match ext.as_deref() {
            Some("toml") => Self::from_toml_str(&read_file(path)?)?,
            Some("json") => Self::from_json_str(&read_file(path)?)?,
            _ => return Err(LoadError::UnsupportedFormat(path.display().to_string())),
        };
        log::debug!("loaded render options from {}", path.display());
        Ok(options)
    }

    /// Every feature enabled with all fallbacks written out.
    pub fn example() -> Self {
        let triple = |x: &str, y: &str, z: &str| AxisTripleConfig {
            x_color: x.to_string(),
            y_color: y.to_string(),
            z_color: z.to_string(),
            line_size: Some(DEFAULT_LINE_SIZE),
            edge_opacity: Some(DEFAULT_AXIS_OPACITY),
            intersection_point_color: Some(DEFAULT_POINT_COLOR.to_string()),
            intersection_point_size: Some(DEFAULT_POINT_SIZE),
        };
        Self {
            scene_edges: Some(SceneEdgesConfig {
                color: "#ffffff".to_string(),
                opacity: Some(DEFAULT_EDGE_OPACITY),
            }),
            xy_plane: Some(true),
            cross_lines: Some(true),
            edge_axes: Some(triple("#e55039", "#78e08f", "#4a69bd")),
            world_axes: Some(triple("#eb2f06", "#38ada9", "#1e3799")),
            cube_axes: Some(triple("#fa983a", "#b8e994", "#6a89cc")),
            axis_tags: AxisTagScheme::Shared,
        }
    }
}

/// Resolved box outline style.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    /// Border color.
    pub color: String,
    /// Border opacity.
    pub opacity: f64,
}

impl From<&SceneEdgesConfig> for EdgeStyle {
    fn from(cfg: &SceneEdgesConfig) -> Self {
        Self {
            color: cfg.color.clone(),
            opacity: cfg.opacity.unwrap_or(DEFAULT_EDGE_OPACITY),
        }
    }
}

/// Resolved style of one axis triple.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTripleStyle {
    /// Line colors for x, y and z.
    pub colors: [String; 3],
    /// Line opacity shared by the three axes.
    pub opacity: f64,
    /// Line width shared by the three axes.
    pub line_size: f64,
    /// Origin marker color.
    pub point_color: String,
    /// Origin marker size.
    pub point_size: f64,
}

impl AxisTripleStyle {
    /// Style with the given axis colors and every other field at its default.
    pub fn with_colors(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            colors: [x.into(), y.into(), z.into()],
            opacity: DEFAULT_AXIS_OPACITY,
            line_size: DEFAULT_LINE_SIZE,
            point_color: DEFAULT_POINT_COLOR.to_string(),
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

impl From<&AxisTripleConfig> for AxisTripleStyle {
    fn from(cfg: &AxisTripleConfig) -> Self {
        Self {
            colors: [
                cfg.x_color.clone(),
                cfg.y_color.clone(),
                cfg.z_color.clone(),
            ],
            opacity: cfg.edge_opacity.unwrap_or(DEFAULT_AXIS_OPACITY),
            line_size: cfg.line_size.unwrap_or(DEFAULT_LINE_SIZE),
            point_color: cfg
                .intersection_point_color
                .clone()
                .unwrap_or_else(|| DEFAULT_POINT_COLOR.to_string()),
            point_size: cfg.intersection_point_size.unwrap_or(DEFAULT_POINT_SIZE),
        }
    }
}

/// Options with every fallback applied. `None` disables a feature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Box face outlines.
    pub scene_edges: Option<EdgeStyle>,
    /// Axes along three cube edges.
    pub edge_axes: Option<AxisTripleStyle>,
    /// World coordinate axes.
    pub world_axes: Option<AxisTripleStyle>,
    /// Cube-local axes.
    pub cube_axes: Option<AxisTripleStyle>,
    /// Axis line tagging.
    pub axis_tags: AxisTagScheme,
}

impl RenderOptions {
    /// Apply fallbacks to loaded options.
    pub fn resolve(options: &SceneOptions) -> Self {
        if options.xy_plane == Some(false) {
            log::warn!("xy_plane = false is ignored; the ground plane is always drawn");
        }
        if options.cross_lines == Some(false) {
            log::warn!("cross_lines = false is ignored; cross-section lines are always drawn");
        }
        Self {
            scene_edges: options.scene_edges.as_ref().map(EdgeStyle::from),
            edge_axes: options.edge_axes.as_ref().map(AxisTripleStyle::from),
            world_axes: options.world_axes.as_ref().map(AxisTripleStyle::from),
            cube_axes: options.cube_axes.as_ref().map(AxisTripleStyle::from),
            axis_tags: options.axis_tags,
        }
    }
}

impl From<SceneOptions> for RenderOptions {
    fn from(options: SceneOptions) -> Self {
        Self::resolve(&options)
    }
}
