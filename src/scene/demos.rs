//! Named demo scenes, one per harness view of the original exploration.
//!
//! Each demo is a plain function of the canvas size; the binary entry point
//! selects one of these as the root content.

use crate::animation::ease::Ease;
use crate::effects::fx::inner_shadow;
use crate::foundation::core::{Canvas, Rect, Rgba8Premul, UnitPoint, Vec2};
use crate::foundation::error::CurlicueResult;
use crate::layout::juxtapose::{Alignment, Edge};
use crate::scene::dsl::{NodeBuilder, SceneBuilder};
use crate::scene::model::{GradientStop, Paint, Placement, ProgressBinding, Scene};
use crate::shapes::ShapeKind;

const HEART_RED: Rgba8Premul = Rgba8Premul {
    r: 225,
    g: 40,
    b: 48,
    a: 255,
};

const TOGGLE_GREEN: Rgba8Premul = Rgba8Premul {
    r: 52,
    g: 199,
    b: 89,
    a: 255,
};

const STROKE_GREEN: Rgba8Premul = Rgba8Premul {
    r: 27,
    g: 94,
    b: 32,
    a: 255,
};

fn white(level: f64) -> Rgba8Premul {
    let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba8Premul {
        r: v,
        g: v,
        b: v,
        a: 255,
    }
}

fn red_yellow_gradient() -> Paint {
    Paint::Linear {
        start: UnitPoint::TOP_LEADING,
        end: UnitPoint::BOTTOM_TRAILING,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: Rgba8Premul {
                    r: 255,
                    g: 59,
                    b: 48,
                    a: 255,
                },
            },
            GradientStop {
                offset: 1.0,
                color: Rgba8Premul {
                    r: 255,
                    g: 204,
                    b: 0,
                    a: 255,
                },
            },
        ],
    }
}

/// A filled and stroked heart centered on the canvas.
pub fn heart(canvas: Canvas, debug: bool) -> CurlicueResult<Scene> {
    let min = f64::from(canvas.width.min(canvas.height));
    let side = min * 0.7;

    SceneBuilder::new(canvas)
        .background(white(1.0))
        .node(
            NodeBuilder::new("heart", ShapeKind::Heart { debug })
                .placement(Placement::Centered {
                    width: side,
                    height: side,
                })
                .fill(Paint::Solid(HEART_RED))
                .stroke(3.0, TOGGLE_GREEN)
                .build()?,
        )?
        .build()
}

/// The squishy toggle: morphing capsule frame, gradient knob, morphing state
/// icon. All animated nodes bind to the scene's toggle state; the frame eases
/// linearly while the knob and icon ease in-out, as in the original.
pub fn squishy_toggle(canvas: Canvas) -> CurlicueResult<Scene> {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    // Fit a 2:1 assembly into the canvas.
    let (fw, fh) = if w < h * 2.0 {
        (w, w * 0.5)
    } else {
        (h * 2.0, h)
    };
    let travel = fh * 0.5;
    let knob = fh * 0.9;

    let slide = ProgressBinding::toggle(Ease::InOutCubic);

    SceneBuilder::new(canvas)
        .background(white(0.92))
        .node(
            NodeBuilder::new("frame", ShapeKind::ToggleFrame { debug: false })
                .placement(Placement::Centered {
                    width: fw,
                    height: fh,
                })
                .fill(Paint::Solid(TOGGLE_GREEN))
                .progress(ProgressBinding::toggle(Ease::Linear))
                .build()?,
        )?
        .node(
            NodeBuilder::new("knob", ShapeKind::Circle { inset: 0.0 })
                .placement(Placement::Centered {
                    width: knob,
                    height: knob,
                })
                .fill(Paint::Linear {
                    start: UnitPoint::BOTTOM_TRAILING,
                    end: UnitPoint::TOP_LEADING,
                    stops: vec![
                        GradientStop {
                            offset: 0.0,
                            color: white(0.45),
                        },
                        GradientStop {
                            offset: 1.0,
                            color: white(0.95),
                        },
                    ],
                })
                .progress(slide)
                .offset(Vec2::new(-travel, 0.0), Vec2::new(travel, 0.0))
                .z(1)
                .build()?,
        )?
        .node(
            NodeBuilder::new("knob-highlight", ShapeKind::Circle { inset: 0.1 })
                .placement(Placement::Centered {
                    width: knob,
                    height: knob,
                })
                .fill(Paint::Radial {
                    center: UnitPoint::BOTTOM_TRAILING,
                    start_radius: 0.2,
                    end_radius: 1.5,
                    stops: vec![
                        GradientStop {
                            offset: 0.0,
                            color: white(0.9),
                        },
                        GradientStop {
                            offset: 1.0,
                            color: white(0.3),
                        },
                    ],
                })
                .progress(slide)
                .offset(Vec2::new(-travel, 0.0), Vec2::new(travel, 0.0))
                .z(2)
                .build()?,
        )?
        .node(
            NodeBuilder::new("state-icon", ShapeKind::ToggleStateIcon { debug: false })
                .placement(Placement::Centered {
                    width: knob * 0.45,
                    height: knob * 0.45,
                })
                .stroke(2.0, STROKE_GREEN)
                .progress(slide)
                .offset(Vec2::new(-travel, 0.0), Vec2::new(travel, 0.0))
                .z(3)
                .build()?,
        )?
        .build()
}

/// Inner-shadow gallery: a gradient card, a layered card, and a heart, each
/// carved by the silhouette-blur-multiply recipe.
pub fn inner_shadow_gallery(canvas: Canvas) -> CurlicueResult<Scene> {
    let min = f64::from(canvas.width.min(canvas.height));
    let cx = f64::from(canvas.width) * 0.5;
    let cy = f64::from(canvas.height) * 0.5;
    let item = min * 0.35;
    let pad = min * 0.08;
    let corner = item * 0.2;

    let top = cy - item - pad * 0.5;
    let left = cx - item - pad * 0.5;
    let right = cx + pad * 0.5;

    let mut scene = SceneBuilder::new(canvas)
        .background(white(0.1))
        .node(
            NodeBuilder::new("card", ShapeKind::RoundedRect {
                corner_radius: corner,
            })
            .placement(Placement::Rect(Rect::new(left, top, left + item, top + item)))
            .fill(red_yellow_gradient())
            .effect(inner_shadow(5, 0.8, 2, 2))
            .build()?,
        )?
        .node(
            NodeBuilder::new("layered-base", ShapeKind::RoundedRect {
                corner_radius: corner,
            })
            .placement(Placement::Rect(Rect::new(right, top, right + item, top + item)))
            .fill(red_yellow_gradient())
            .effect(inner_shadow(5, 0.8, 2, 2))
            .build()?,
        )?;

    // Concentric layers over the base card, scaled about its center.
    for (i, scale) in [0.8f64, 0.6, 0.4].into_iter().enumerate() {
        let inset = item * (1.0 - scale) * 0.5;
        let rect = Rect::new(
            right + inset,
            top + inset,
            right + item - inset,
            top + item - inset,
        );
        scene = scene.node(
            NodeBuilder::new(format!("layer-{i}"), ShapeKind::RoundedRect {
                corner_radius: corner * scale,
            })
            .placement(Placement::Rect(rect))
            .fill(red_yellow_gradient())
            .z(1 + i as i32)
            .build()?,
        )?;
    }

    let heart_x = cx - item * 0.5;
    let heart_y = cy + pad * 0.5;
    scene
        .node(
            NodeBuilder::new("heart", ShapeKind::Heart { debug: false })
                .placement(Placement::Rect(Rect::new(
                    heart_x,
                    heart_y,
                    heart_x + item,
                    heart_y + item,
                )))
                .fill(red_yellow_gradient())
                .effect(inner_shadow(3, 0.5, 5, 5))
                .build()?,
        )?
        .build()
}

/// A stroked card with shape ornaments juxtaposed on its edges and corners,
/// including a chained juxtaposition and a negative trailing spacing.
pub fn juxtaposed(canvas: Canvas) -> CurlicueResult<Scene> {
    let min = f64::from(canvas.width.min(canvas.height));
    let card_w = min * 0.36;
    let card_h = min * 0.18;
    let orn = min * 0.12;
    let gap = min * 0.02;

    SceneBuilder::new(canvas)
        .background(white(1.0))
        .node(
            NodeBuilder::new("card", ShapeKind::RoundedRect {
                corner_radius: min * 0.03,
            })
            .placement(Placement::Centered {
                width: card_w,
                height: card_h,
            })
            .stroke(2.0, white(0.2))
            .build()?,
        )?
        .node(
            NodeBuilder::new("top-pip", ShapeKind::Circle { inset: 0.0 })
                .placement(Placement::JuxtaposedEdge {
                    anchor: "card".to_string(),
                    edge: Edge::Top,
                    spacing: gap,
                    width: orn,
                    height: orn,
                })
                .fill(Paint::Solid(white(0.2)))
                .build()?,
        )?
        .node(
            NodeBuilder::new("bottom-pip", ShapeKind::Sash { debug: false })
                .placement(Placement::JuxtaposedEdge {
                    anchor: "card".to_string(),
                    edge: Edge::Bottom,
                    spacing: gap,
                    width: orn,
                    height: orn,
                })
                .fill(Paint::Solid(white(0.2)))
                .build()?,
        )?
        .node(
            NodeBuilder::new("tag", ShapeKind::RoundedRect {
                corner_radius: orn * 0.15,
            })
            .placement(Placement::Juxtaposed {
                anchor: "bottom-pip".to_string(),
                alignment: Alignment::TopTrailing,
                spacing: Vec2::new(0.0, 0.0),
                width: orn * 0.8,
                height: orn * 0.4,
            })
            .fill(Paint::Solid(white(0.6)))
            .build()?,
        )?
        .node(
            NodeBuilder::new("badge", ShapeKind::Circle { inset: 0.0 })
                .placement(Placement::Juxtaposed {
                    anchor: "tag".to_string(),
                    alignment: Alignment::Bottom,
                    spacing: Vec2::new(0.0, 0.0),
                    width: orn * 0.3,
                    height: orn * 0.3,
                })
                .fill(Paint::Solid(HEART_RED))
                .build()?,
        )?
        .node(
            NodeBuilder::new("leading-heart", ShapeKind::Heart { debug: false })
                .placement(Placement::JuxtaposedEdge {
                    anchor: "card".to_string(),
                    edge: Edge::Leading,
                    spacing: min * 0.1,
                    width: orn,
                    height: orn,
                })
                .fill(Paint::Solid(HEART_RED))
                .build()?,
        )?
        .node(
            NodeBuilder::new("trailing-heart", ShapeKind::Heart { debug: false })
                .placement(Placement::JuxtaposedEdge {
                    anchor: "card".to_string(),
                    edge: Edge::Trailing,
                    // Negative spacing tucks the ornament over the card edge.
                    spacing: -min * 0.03,
                    width: orn,
                    height: orn,
                })
                .fill(Paint::Solid(HEART_RED))
                .z(1)
                .build()?,
        )?
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/demos.rs"]
mod tests;
