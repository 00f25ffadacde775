use std::collections::BTreeMap;

use crate::animation::lerp::Lerp;
use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgba8Premul, Size, Vec2};
use crate::foundation::error::{CurlicueError, CurlicueResult};
use crate::foundation::math::lerp_u8;
use crate::layout::juxtapose::{juxtaposed_rect, juxtaposed_rect_edge};
use crate::path::outline::Outline;
use crate::scene::model::{EffectInstance, GradientStop, Paint, Placement, ProgressSource, Scene, Stroke};
use crate::scene::state::ToggleState;
use crate::shapes::PathShape;

#[derive(Clone, Debug)]
/// Fully evaluated scene ready for compilation.
pub struct EvaluatedScene {
    /// Canvas dimensions.
    pub canvas: Canvas,
    /// Background color, if any.
    pub background: Option<Rgba8Premul>,
    /// Nodes in painter's order.
    pub nodes: Vec<EvaluatedNode>,
}

#[derive(Clone, Debug)]
/// One evaluated node: resolved geometry, outline, and styling.
pub struct EvaluatedNode {
    /// Node identifier.
    pub id: String,
    /// Laid-out rectangle before the animated offset.
    pub rect: Rect,
    /// Animated offset as a canvas-space transform.
    pub transform: Affine,
    /// Outline built at the node's eased progress.
    pub outline: Outline,
    /// Fill resolved to absolute geometry.
    pub fill: Option<ResolvedPaint>,
    /// Stroke styling.
    pub stroke: Option<Stroke>,
    /// Intrinsic opacity clamped to `[0, 1]`.
    pub opacity: f64,
    /// Effects copied from the node for the compiler.
    pub effects: Vec<EffectInstance>,
    /// Z-order.
    pub z: i32,
}

#[derive(Clone, Debug, PartialEq)]
/// A paint resolved against a node rectangle, sampleable per pixel.
pub enum ResolvedPaint {
    /// Flat color.
    Solid(Rgba8Premul),
    /// Linear gradient between two absolute points.
    Linear {
        /// Gradient start.
        start: Point,
        /// Gradient end.
        end: Point,
        /// Color stops sorted by offset.
        stops: Vec<GradientStop>,
    },
    /// Radial gradient around an absolute center.
    Radial {
        /// Gradient center.
        center: Point,
        /// Start radius in pixels.
        start_radius: f64,
        /// End radius in pixels.
        end_radius: f64,
        /// Color stops sorted by offset.
        stops: Vec<GradientStop>,
    },
}

impl ResolvedPaint {
    /// Sample the paint at an absolute position.
    pub fn sample(&self, x: f64, y: f64) -> Rgba8Premul {
        match self {
            Self::Solid(color) => *color,
            Self::Linear { start, end, stops } => {
                let d = *end - *start;
                let len2 = d.hypot2();
                let t = if len2 <= 0.0 {
                    0.0
                } else {
                    (Vec2::new(x - start.x, y - start.y).dot(d) / len2).clamp(0.0, 1.0)
                };
                sample_stops(stops, t)
            }
            Self::Radial {
                center,
                start_radius,
                end_radius,
                stops,
            } => {
                let dist = Vec2::new(x - center.x, y - center.y).hypot();
                let span = end_radius - start_radius;
                let t = if span <= 0.0 {
                    0.0
                } else {
                    ((dist - start_radius) / span).clamp(0.0, 1.0)
                };
                sample_stops(stops, t)
            }
        }
    }
}

fn sample_stops(stops: &[GradientStop], t: f64) -> Rgba8Premul {
    match stops {
        [] => Rgba8Premul::transparent(),
        [only] => only.color,
        _ => {
            if t <= stops[0].offset {
                return stops[0].color;
            }
            let last = &stops[stops.len() - 1];
            if t >= last.offset {
                return last.color;
            }
            for pair in stops.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                if t <= b.offset {
                    let span = b.offset - a.offset;
                    let local = if span <= 0.0 { 0.0 } else { (t - a.offset) / span };
                    return Rgba8Premul {
                        r: lerp_u8(a.color.r, b.color.r, local),
                        g: lerp_u8(a.color.g, b.color.g, local),
                        b: lerp_u8(a.color.b, b.color.b, local),
                        a: lerp_u8(a.color.a, b.color.a, local),
                    };
                }
            }
            last.color
        }
    }
}

fn resolve_paint(paint: &Paint, rect: Rect) -> ResolvedPaint {
    match paint {
        Paint::Solid(color) => ResolvedPaint::Solid(*color),
        Paint::Linear { start, end, stops } => ResolvedPaint::Linear {
            start: start.resolve(rect),
            end: end.resolve(rect),
            stops: stops.clone(),
        },
        Paint::Radial {
            center,
            start_radius,
            end_radius,
            stops,
        } => ResolvedPaint::Radial {
            center: center.resolve(rect),
            start_radius: start_radius * rect.width(),
            end_radius: end_radius * rect.width(),
            stops: stops.clone(),
        },
    }
}

/// Stateless evaluator from scene + state + time to an evaluated frame.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one frame.
    ///
    /// Pure: the same scene, state, and timestamp always produce the same
    /// evaluated nodes. Rectangles are resolved in declaration order, so a
    /// juxtaposed node can anchor to any earlier node (including another
    /// juxtaposed one); anchoring uses the laid-out rect, not the animated
    /// offset.
    #[tracing::instrument(skip(scene, state))]
    pub fn eval_scene(
        scene: &Scene,
        state: &ToggleState,
        now_s: f64,
    ) -> CurlicueResult<EvaluatedScene> {
        scene.validate()?;

        let raw = state.progress(now_s).clamp(0.0, 1.0);
        let canvas_rect = scene.canvas.rect();

        let mut rects = BTreeMap::<&str, Rect>::new();
        let mut nodes = Vec::<EvaluatedNode>::with_capacity(scene.nodes.len());

        for node in &scene.nodes {
            let rect = match &node.placement {
                Placement::Fill => canvas_rect,
                Placement::Centered { width, height } => {
                    Rect::from_center_size(canvas_rect.center(), Size::new(*width, *height))
                }
                Placement::Rect(r) => *r,
                Placement::Juxtaposed {
                    anchor,
                    alignment,
                    spacing,
                    width,
                    height,
                } => {
                    let primary = anchor_rect(&rects, anchor)?;
                    juxtaposed_rect(primary, Size::new(*width, *height), *alignment, *spacing)
                }
                Placement::JuxtaposedEdge {
                    anchor,
                    edge,
                    spacing,
                    width,
                    height,
                } => {
                    let primary = anchor_rect(&rects, anchor)?;
                    juxtaposed_rect_edge(primary, Size::new(*width, *height), *edge, *spacing)
                }
            };
            rects.insert(&node.id, rect);

            let source = match node.progress.source {
                ProgressSource::Fixed(v) => v.clamp(0.0, 1.0),
                ProgressSource::Toggle => raw,
            };
            let eased = node.progress.ease.apply(source);

            let transform = match &node.offset {
                Some(spec) => {
                    Affine::translate(<Vec2 as Lerp>::lerp(&spec.off, &spec.on, eased))
                }
                None => Affine::IDENTITY,
            };

            nodes.push(EvaluatedNode {
                id: node.id.clone(),
                rect,
                transform,
                outline: node.shape.outline(rect, eased),
                fill: node.fill.as_ref().map(|p| resolve_paint(p, rect)),
                stroke: node.stroke,
                opacity: node.opacity.clamp(0.0, 1.0),
                effects: node.effects.clone(),
                z: node.z,
            });
        }

        // Stable by z; declaration order breaks ties.
        nodes.sort_by_key(|n| n.z);

        Ok(EvaluatedScene {
            canvas: scene.canvas,
            background: scene.background,
            nodes,
        })
    }
}

fn anchor_rect(rects: &BTreeMap<&str, Rect>, anchor: &str) -> CurlicueResult<Rect> {
    rects
        .get(anchor)
        .copied()
        .ok_or_else(|| CurlicueError::evaluation(format!("unresolved juxtapose anchor '{anchor}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
