use std::collections::BTreeSet;

use crate::animation::ease::Ease;
use crate::effects::fx::parse_effect;
use crate::foundation::core::{Canvas, Rect, Rgba8Premul, UnitPoint, Vec2};
use crate::foundation::error::{CurlicueError, CurlicueResult};
use crate::layout::juxtapose::{Alignment, Edge};
use crate::shapes::ShapeKind;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete renderable scene.
///
/// A scene is a pure data model that can be built programmatically (see
/// [`crate::SceneBuilder`]) or serialized via Serde (JSON). Rendering is
/// performed by [`crate::render_scene`]; the scene itself never mutates.
pub struct Scene {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Optional opaque background color; transparent when absent.
    pub background: Option<Rgba8Premul>,
    /// Nodes in declaration order; painter's order is `(z, index)`.
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One shape instance in a scene.
pub struct Node {
    /// Node identifier (stable within a scene).
    pub id: String,
    /// The shape drawn by this node.
    pub shape: ShapeKind,
    /// How the node's rectangle is derived from the canvas and siblings.
    pub placement: Placement,
    /// Fill paint, if any.
    #[serde(default)]
    pub fill: Option<Paint>,
    /// Stroke, if any.
    #[serde(default)]
    pub stroke: Option<Stroke>,
    /// Where the node's progress scalar comes from.
    #[serde(default)]
    pub progress: ProgressBinding,
    /// Animated translation lerped by the node's eased progress.
    #[serde(default)]
    pub offset: Option<OffsetSpec>,
    /// Intrinsic opacity; clamped to `[0, 1]` at evaluation time.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Per-node effect stack.
    #[serde(default)]
    pub effects: Vec<EffectInstance>,
    /// Z-order; ties break by declaration order.
    #[serde(default)]
    pub z: i32,
}

fn default_opacity() -> f64 {
    1.0
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// How a node's rectangle is derived.
pub enum Placement {
    /// The full canvas.
    Fill,
    /// A centered box.
    Centered {
        /// Box width in pixels.
        width: f64,
        /// Box height in pixels.
        height: f64,
    },
    /// An absolute rectangle.
    Rect(Rect),
    /// A box placed against an earlier node at a compass alignment.
    Juxtaposed {
        /// Id of an earlier node to place against.
        anchor: String,
        /// Compass alignment.
        alignment: Alignment,
        /// Outward spacing per axis.
        spacing: Vec2,
        /// Box width in pixels.
        width: f64,
        /// Box height in pixels.
        height: f64,
    },
    /// A box placed against an earlier node's cardinal edge with uniform
    /// spacing.
    JuxtaposedEdge {
        /// Id of an earlier node to place against.
        anchor: String,
        /// Cardinal edge.
        edge: Edge,
        /// Outward spacing.
        spacing: f64,
        /// Box width in pixels.
        width: f64,
        /// Box height in pixels.
        height: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Where a node's progress scalar comes from.
pub enum ProgressSource {
    /// A constant scalar, clamped to `[0, 1]`.
    Fixed(f64),
    /// The scene's toggle state.
    Toggle,
}

impl Default for ProgressSource {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Progress source plus the easing applied on top of it.
pub struct ProgressBinding {
    /// Raw scalar source.
    pub source: ProgressSource,
    /// Easing applied to the raw scalar.
    pub ease: Ease,
}

impl ProgressBinding {
    /// Bind to the toggle state with an easing curve.
    pub fn toggle(ease: Ease) -> Self {
        Self {
            source: ProgressSource::Toggle,
            ease,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Animated translation between two resting offsets.
pub struct OffsetSpec {
    /// Offset at progress 0.
    pub off: Vec2,
    /// Offset at progress 1.
    pub on: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Stroke styling.
pub struct Stroke {
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Rgba8Premul,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fill paint in unit space relative to the node rectangle.
pub enum Paint {
    /// Flat color.
    Solid(Rgba8Premul),
    /// Linear gradient between two unit points.
    Linear {
        /// Gradient start in unit space.
        start: UnitPoint,
        /// Gradient end in unit space.
        end: UnitPoint,
        /// Color stops sorted by offset.
        stops: Vec<GradientStop>,
    },
    /// Radial gradient around a unit-space center.
    Radial {
        /// Gradient center in unit space.
        center: UnitPoint,
        /// Start radius as a fraction of the rect width.
        start_radius: f64,
        /// End radius as a fraction of the rect width.
        end_radius: f64,
        /// Color stops sorted by offset.
        stops: Vec<GradientStop>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One gradient color stop.
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Rgba8Premul,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A JSON-parameterized effect attached to a node.
pub struct EffectInstance {
    /// Canonical effect kind identifier.
    pub kind: String,
    /// Raw effect parameters.
    #[serde(default)]
    pub params: serde_json::Value,
}

impl Scene {
    /// Validate scene structure.
    ///
    /// Checks canvas dimensions, node id uniqueness, juxtapose anchors
    /// (which must reference an earlier node), stroke and gradient data, and
    /// parseability of every effect instance.
    pub fn validate(&self) -> CurlicueResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(CurlicueError::validation("canvas must be non-degenerate"));
        }

        let mut seen = BTreeSet::<&str>::new();
        for node in &self.nodes {
            if node.id.trim().is_empty() {
                return Err(CurlicueError::validation("node id must be non-empty"));
            }
            match &node.placement {
                Placement::Juxtaposed { anchor, .. } | Placement::JuxtaposedEdge { anchor, .. } => {
                    if !seen.contains(anchor.as_str()) {
                        return Err(CurlicueError::validation(format!(
                            "node '{}' juxtaposes unknown or later node '{anchor}'",
                            node.id
                        )));
                    }
                }
                _ => {}
            }
            if !seen.insert(&node.id) {
                return Err(CurlicueError::validation(format!(
                    "duplicate node id '{}'",
                    node.id
                )));
            }

            if let Some(stroke) = &node.stroke {
                if !stroke.width.is_finite() || stroke.width <= 0.0 {
                    return Err(CurlicueError::validation(format!(
                        "node '{}' stroke width must be > 0",
                        node.id
                    )));
                }
            }
            if let Some(paint) = &node.fill {
                paint.validate(&node.id)?;
            }
            if !node.opacity.is_finite() {
                return Err(CurlicueError::validation(format!(
                    "node '{}' opacity must be finite",
                    node.id
                )));
            }
            for effect in &node.effects {
                parse_effect(effect)?;
            }
        }
        Ok(())
    }
}

impl Paint {
    fn validate(&self, node_id: &str) -> CurlicueResult<()> {
        let stops = match self {
            Self::Solid(_) => return Ok(()),
            Self::Linear { stops, .. } => stops,
            Self::Radial {
                start_radius,
                end_radius,
                stops,
                ..
            } => {
                if !start_radius.is_finite() || !end_radius.is_finite() || end_radius <= start_radius
                {
                    return Err(CurlicueError::validation(format!(
                        "node '{node_id}' radial gradient radii must satisfy start < end"
                    )));
                }
                stops
            }
        };
        if stops.is_empty() {
            return Err(CurlicueError::validation(format!(
                "node '{node_id}' gradient must have at least one stop"
            )));
        }
        if stops.iter().any(|s| !s.offset.is_finite()) {
            return Err(CurlicueError::validation(format!(
                "node '{node_id}' gradient stop offsets must be finite"
            )));
        }
        if !stops.windows(2).all(|w| w[0].offset <= w[1].offset) {
            return Err(CurlicueError::validation(format!(
                "node '{node_id}' gradient stops must be sorted by offset"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
