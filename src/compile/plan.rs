use crate::effects::fx::{PassFx, normalize_effects, parse_effect};
use crate::eval::evaluator::{EvaluatedNode, EvaluatedScene, ResolvedPaint};
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8Premul};
use crate::foundation::error::CurlicueResult;
use crate::path::outline::{MarkerKind, Outline};
use crate::shapes::toggle::ellipse_curves;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Identifier for a render surface declared in [`RenderPlan::surfaces`].
pub struct SurfaceId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Supported pixel formats for render surfaces.
pub enum PixelFormat {
    /// Premultiplied RGBA, 8 bits per channel.
    Rgba8Premul,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Surface declaration: dimensions plus pixel format.
pub struct SurfaceDesc {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Pixel format.
    pub format: PixelFormat,
}

#[derive(Clone, Debug)]
/// Backend-agnostic render plan for a single frame.
///
/// A plan consists of surface declarations, a sequence of passes, and a
/// declared final surface. Surface 0 is always the canvas.
pub struct RenderPlan {
    /// Canvas dimensions.
    pub canvas: Canvas,
    /// Surface declarations, indexed by [`SurfaceId`].
    pub surfaces: Vec<SurfaceDesc>,
    /// Passes in execution order.
    pub passes: Vec<Pass>,
    /// Surface holding the finished frame.
    pub final_surface: SurfaceId,
}

#[derive(Clone, Debug)]
/// A single pass in a [`RenderPlan`].
pub enum Pass {
    /// Draw operations into a surface.
    Scene(ScenePass),
    /// Post-processing producing a new surface from an input surface.
    Offscreen(OffscreenPass),
    /// Composite surfaces into a target surface.
    Composite(CompositePass),
}

#[derive(Clone, Debug)]
/// Draw operations into a surface.
pub struct ScenePass {
    /// Target surface.
    pub target: SurfaceId,
    /// Ordered draw operations.
    pub ops: Vec<DrawOp>,
    /// Clear the target to transparent before drawing.
    pub clear_to_transparent: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Post-processing effect executable by a backend.
pub enum OffscreenFx {
    /// Separable gaussian blur.
    Blur {
        /// Kernel radius in pixels.
        radius_px: u32,
        /// Gaussian sigma.
        sigma: f32,
    },
}

#[derive(Clone, Debug)]
/// Run a post-processing effect producing a new surface.
pub struct OffscreenPass {
    /// Input surface.
    pub input: SurfaceId,
    /// Output surface.
    pub output: SurfaceId,
    /// The effect to run.
    pub fx: OffscreenFx,
}

#[derive(Clone, Debug)]
/// Composite multiple surfaces into a target surface.
pub struct CompositePass {
    /// Target surface.
    pub target: SurfaceId,
    /// Ordered composite operations.
    pub ops: Vec<CompositeOp>,
}

#[derive(Clone, Debug)]
/// A compositing operation between surfaces.
pub enum CompositeOp {
    /// Source-over with an opacity factor.
    Over {
        /// Source surface.
        src: SurfaceId,
        /// Opacity factor in `[0, 1]`.
        opacity: f32,
    },
    /// Draw `content` over the target, darkened toward its own edges.
    ///
    /// The shade at a pixel is `1 - opacity * (1 - blurred_alpha)` sampled at
    /// the pixel minus the offset, masked by the silhouette's coverage.
    InnerShadow {
        /// Rendered node content.
        content: SurfaceId,
        /// Full-coverage silhouette of the node's fill path.
        silhouette: SurfaceId,
        /// Blurred silhouette.
        blurred: SurfaceId,
        /// Shadow strength in `[0, 1]`.
        opacity: f32,
        /// Horizontal shadow offset in pixels.
        dx: i32,
        /// Vertical shadow offset in pixels.
        dy: i32,
    },
}

#[derive(Clone, Debug)]
/// Draw operation emitted by the compiler.
pub enum DrawOp {
    /// Fill a closed path.
    FillPath {
        /// Path in canvas coordinates.
        path: BezPath,
        /// Transform applied before rasterization.
        transform: Affine,
        /// Resolved paint.
        paint: ResolvedPaint,
        /// Opacity factor in `[0, 1]`.
        opacity: f32,
        /// Ordering within the pass.
        z: i32,
    },
    /// Stroke a path centerline.
    StrokePath {
        /// Path in canvas coordinates.
        path: BezPath,
        /// Transform applied before rasterization.
        transform: Affine,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Rgba8Premul,
        /// Opacity factor in `[0, 1]`.
        opacity: f32,
        /// Ordering within the pass.
        z: i32,
    },
}

const WHITE: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

const MARKER_ANCHOR: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 59,
    b: 48,
    a: 255,
};

const MARKER_CONTROL: Rgba8Premul = Rgba8Premul {
    r: 10,
    g: 132,
    b: 255,
    a: 255,
};

/// Compile an evaluated scene into a render plan.
///
/// Every visible node renders into its own surface and is composited onto
/// surface 0 in painter's order; blur runs as an offscreen pass over the node
/// surface, and inner shadow expands into silhouette + blur + composite.
pub fn compile_scene(eval: &EvaluatedScene) -> CurlicueResult<RenderPlan> {
    let canvas_desc = SurfaceDesc {
        width: eval.canvas.width,
        height: eval.canvas.height,
        format: PixelFormat::Rgba8Premul,
    };

    let mut surfaces = vec![canvas_desc.clone()];
    let mut passes = Vec::<Pass>::new();

    if let Some(bg) = eval.background {
        passes.push(Pass::Scene(ScenePass {
            target: SurfaceId(0),
            ops: vec![DrawOp::FillPath {
                path: canvas_path(eval.canvas),
                transform: Affine::IDENTITY,
                paint: ResolvedPaint::Solid(bg),
                opacity: 1.0,
                z: 0,
            }],
            clear_to_transparent: true,
        }));
    }

    struct ShadowSpec {
        silhouette: SurfaceId,
        blurred: SurfaceId,
        opacity: f32,
        dx: i32,
        dy: i32,
    }

    let mut composite_ops = Vec::<CompositeOp>::new();

    for node in &eval.nodes {
        let mut parsed = Vec::with_capacity(node.effects.len());
        for e in &node.effects {
            parsed.push(parse_effect(e)?);
        }
        let fx = normalize_effects(&parsed);

        let opacity = ((node.opacity as f32) * fx.inline.opacity_mul).clamp(0.0, 1.0);
        if opacity <= 0.0 {
            continue;
        }

        let ops = node_draw_ops(node, opacity);
        if ops.is_empty() {
            continue;
        }

        let node_surface = push_surface(&mut surfaces, &canvas_desc);
        passes.push(Pass::Scene(ScenePass {
            target: node_surface,
            ops,
            clear_to_transparent: true,
        }));

        let mut current = node_surface;
        let mut shadows = Vec::<ShadowSpec>::new();

        for pass_fx in &fx.passes {
            match *pass_fx {
                PassFx::Blur { radius_px, sigma } => {
                    let out = push_surface(&mut surfaces, &canvas_desc);
                    passes.push(Pass::Offscreen(OffscreenPass {
                        input: current,
                        output: out,
                        fx: OffscreenFx::Blur { radius_px, sigma },
                    }));
                    current = out;
                }
                PassFx::InnerShadow {
                    radius_px,
                    sigma,
                    opacity,
                    dx,
                    dy,
                } => {
                    let silhouette = push_surface(&mut surfaces, &canvas_desc);
                    passes.push(Pass::Scene(ScenePass {
                        target: silhouette,
                        ops: vec![DrawOp::FillPath {
                            path: node.outline.path.clone(),
                            transform: node.transform,
                            paint: ResolvedPaint::Solid(WHITE),
                            opacity: 1.0,
                            z: 0,
                        }],
                        clear_to_transparent: true,
                    }));

                    let blurred = push_surface(&mut surfaces, &canvas_desc);
                    passes.push(Pass::Offscreen(OffscreenPass {
                        input: silhouette,
                        output: blurred,
                        fx: OffscreenFx::Blur { radius_px, sigma },
                    }));

                    shadows.push(ShadowSpec {
                        silhouette,
                        blurred,
                        opacity,
                        dx,
                        dy,
                    });
                }
            }
        }

        if shadows.is_empty() {
            composite_ops.push(CompositeOp::Over {
                src: current,
                opacity: 1.0,
            });
        } else {
            for shadow in shadows {
                composite_ops.push(CompositeOp::InnerShadow {
                    content: current,
                    silhouette: shadow.silhouette,
                    blurred: shadow.blurred,
                    opacity: shadow.opacity,
                    dx: shadow.dx,
                    dy: shadow.dy,
                });
            }
        }
    }

    passes.push(Pass::Composite(CompositePass {
        target: SurfaceId(0),
        ops: composite_ops,
    }));

    Ok(RenderPlan {
        canvas: eval.canvas,
        surfaces,
        passes,
        final_surface: SurfaceId(0),
    })
}

fn push_surface(surfaces: &mut Vec<SurfaceDesc>, desc: &SurfaceDesc) -> SurfaceId {
    let id = SurfaceId(surfaces.len() as u32);
    surfaces.push(desc.clone());
    id
}

fn node_draw_ops(node: &EvaluatedNode, opacity: f32) -> Vec<DrawOp> {
    let mut ops = Vec::new();

    if let Some(paint) = &node.fill {
        ops.push(DrawOp::FillPath {
            path: node.outline.path.clone(),
            transform: node.transform,
            paint: paint.clone(),
            opacity,
            z: 0,
        });
    }
    if let Some(stroke) = &node.stroke {
        ops.push(DrawOp::StrokePath {
            path: node.outline.path.clone(),
            transform: node.transform,
            width: stroke.width,
            color: stroke.color,
            opacity,
            z: 1,
        });
    }

    if !node.outline.markers.is_empty() {
        let radius = 3.5;
        for (kind, color) in [
            (MarkerKind::Anchor, MARKER_ANCHOR),
            (MarkerKind::Control, MARKER_CONTROL),
        ] {
            let mut dots = BezPath::new();
            for marker in node.outline.markers.iter().filter(|m| m.kind == kind) {
                append_circle(&mut dots, marker.at, radius);
            }
            if !dots.elements().is_empty() {
                ops.push(DrawOp::FillPath {
                    path: dots,
                    transform: node.transform,
                    paint: ResolvedPaint::Solid(color),
                    opacity,
                    z: 2,
                });
            }
        }
    }

    ops
}

fn append_circle(path: &mut BezPath, center: Point, radius: f64) {
    let circle = Outline::closed(&ellipse_curves(center, radius, radius), false);
    for el in circle.path.elements() {
        path.push(*el);
    }
}

fn canvas_path(canvas: Canvas) -> BezPath {
    let rect = canvas.rect();
    let mut path = BezPath::new();
    path.move_to(Point::new(rect.x0, rect.y0));
    path.line_to(Point::new(rect.x1, rect.y0));
    path.line_to(Point::new(rect.x1, rect.y1));
    path.line_to(Point::new(rect.x0, rect.y1));
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
