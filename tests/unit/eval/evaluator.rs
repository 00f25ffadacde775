use super::*;

use crate::animation::ease::Ease;
use crate::layout::juxtapose::Edge;
use crate::scene::dsl::{NodeBuilder, SceneBuilder};
use crate::scene::model::{Paint, Placement, ProgressBinding};
use crate::scene::state::Event;
use crate::shapes::ShapeKind;

fn canvas() -> Canvas {
    Canvas {
        width: 100,
        height: 100,
    }
}

fn white() -> Rgba8Premul {
    Rgba8Premul::from_straight_rgba(255, 255, 255, 255)
}

#[test]
fn centered_placement_resolves_about_the_canvas_center() {
    let scene = SceneBuilder::new(canvas())
        .node(
            NodeBuilder::new("dot", ShapeKind::Circle { inset: 0.0 })
                .placement(Placement::Centered {
                    width: 20.0,
                    height: 10.0,
                })
                .fill(Paint::Solid(white()))
                .build()
                .unwrap(),
        )
        .unwrap()
        .build()
        .unwrap();

    let eval = Evaluator::eval_scene(&scene, &ToggleState::new(false), 0.0).unwrap();
    assert_eq!(eval.nodes[0].rect, Rect::new(40.0, 45.0, 60.0, 55.0));
}

#[test]
fn juxtaposed_placement_matches_the_solver() {
    let scene = SceneBuilder::new(canvas())
        .node(
            NodeBuilder::new("card", ShapeKind::RoundedRect { corner_radius: 2.0 })
                .placement(Placement::Rect(Rect::new(40.0, 40.0, 60.0, 60.0)))
                .fill(Paint::Solid(white()))
                .build()
                .unwrap(),
        )
        .unwrap()
        .node(
            NodeBuilder::new("pip", ShapeKind::Circle { inset: 0.0 })
                .placement(Placement::JuxtaposedEdge {
                    anchor: "card".to_string(),
                    edge: Edge::Top,
                    spacing: 4.0,
                    width: 10.0,
                    height: 10.0,
                })
                .fill(Paint::Solid(white()))
                .build()
                .unwrap(),
        )
        .unwrap()
        .build()
        .unwrap();

    let eval = Evaluator::eval_scene(&scene, &ToggleState::new(false), 0.0).unwrap();
    let pip = eval.nodes.iter().find(|n| n.id == "pip").unwrap();
    let expected = crate::layout::juxtapose::juxtaposed_rect_edge(
        Rect::new(40.0, 40.0, 60.0, 60.0),
        Size::new(10.0, 10.0),
        Edge::Top,
        4.0,
    );
    assert_eq!(pip.rect, expected);
}

#[test]
fn toggle_progress_drives_the_animated_offset() {
    let scene = SceneBuilder::new(canvas())
        .node(
            NodeBuilder::new("knob", ShapeKind::Circle { inset: 0.0 })
                .placement(Placement::Centered {
                    width: 10.0,
                    height: 10.0,
                })
                .fill(Paint::Solid(white()))
                .progress(ProgressBinding::toggle(Ease::Linear))
                .offset(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0))
                .build()
                .unwrap(),
        )
        .unwrap()
        .build()
        .unwrap();

    let mut state = ToggleState::new(false);
    state.apply(Event::Tap { now_s: 0.0 }).unwrap();

    let origin = Point::new(0.0, 0.0);
    let at = |now_s: f64| {
        let eval = Evaluator::eval_scene(&scene, &state, now_s).unwrap();
        eval.nodes[0].transform * origin
    };

    assert_eq!(at(0.0), Point::new(-10.0, 0.0));
    assert_eq!(at(0.5), Point::new(0.0, 0.0));
    assert_eq!(at(1.0), Point::new(10.0, 0.0));
}

#[test]
fn fixed_progress_is_eased_per_node() {
    let scene = SceneBuilder::new(canvas())
        .node(
            NodeBuilder::new("icon", ShapeKind::ToggleStateIcon { debug: false })
                .placement(Placement::Fill)
                .fill(Paint::Solid(white()))
                .progress(ProgressBinding {
                    source: ProgressSource::Fixed(1.0),
                    ease: Ease::InQuad,
                })
                .build()
                .unwrap(),
        )
        .unwrap()
        .build()
        .unwrap();

    // Fixed progress 1.0 stays 1.0 under any ease: the on-state outline.
    let eval = Evaluator::eval_scene(&scene, &ToggleState::new(false), 0.0).unwrap();
    let on = crate::shapes::ToggleStateIcon::new(false).outline(canvas().rect(), 1.0);
    assert_eq!(eval.nodes[0].outline.path.elements(), on.path.elements());
}

#[test]
fn painter_order_sorts_by_z_then_declaration() {
    let scene = SceneBuilder::new(canvas())
        .node(
            NodeBuilder::new("top", ShapeKind::Circle { inset: 0.0 })
                .fill(Paint::Solid(white()))
                .z(5)
                .build()
                .unwrap(),
        )
        .unwrap()
        .node(
            NodeBuilder::new("bottom", ShapeKind::Circle { inset: 0.0 })
                .fill(Paint::Solid(white()))
                .z(-1)
                .build()
                .unwrap(),
        )
        .unwrap()
        .node(
            NodeBuilder::new("middle", ShapeKind::Circle { inset: 0.0 })
                .fill(Paint::Solid(white()))
                .z(-1)
                .build()
                .unwrap(),
        )
        .unwrap()
        .build()
        .unwrap();

    let eval = Evaluator::eval_scene(&scene, &ToggleState::new(false), 0.0).unwrap();
    let order: Vec<&str> = eval.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order, vec!["bottom", "middle", "top"]);
}

#[test]
fn gradient_paints_resolve_to_absolute_geometry() {
    let stops = vec![
        crate::scene::model::GradientStop {
            offset: 0.0,
            color: Rgba8Premul::from_straight_rgba(0, 0, 0, 255),
        },
        crate::scene::model::GradientStop {
            offset: 1.0,
            color: white(),
        },
    ];
    let scene = SceneBuilder::new(canvas())
        .node(
            NodeBuilder::new("grad", ShapeKind::RoundedRect { corner_radius: 0.0 })
                .placement(Placement::Rect(Rect::new(10.0, 10.0, 30.0, 30.0)))
                .fill(Paint::Linear {
                    start: crate::foundation::core::UnitPoint::TOP_LEADING,
                    end: crate::foundation::core::UnitPoint::BOTTOM_TRAILING,
                    stops,
                })
                .build()
                .unwrap(),
        )
        .unwrap()
        .build()
        .unwrap();

    let eval = Evaluator::eval_scene(&scene, &ToggleState::new(false), 0.0).unwrap();
    let ResolvedPaint::Linear { start, end, .. } = eval.nodes[0].fill.as_ref().unwrap() else {
        panic!("expected linear paint");
    };
    assert_eq!(*start, Point::new(10.0, 10.0));
    assert_eq!(*end, Point::new(30.0, 30.0));
}

#[test]
fn evaluation_is_deterministic() {
    let scene = crate::scene::demos::squishy_toggle(canvas()).unwrap();
    let mut state = ToggleState::new(false);
    state.apply(Event::Tap { now_s: 0.0 }).unwrap();

    let a = Evaluator::eval_scene(&scene, &state, 0.4).unwrap();
    let b = Evaluator::eval_scene(&scene, &state, 0.4).unwrap();
    assert_eq!(a.nodes.len(), b.nodes.len());
    for (na, nb) in a.nodes.iter().zip(&b.nodes) {
        assert_eq!(na.rect, nb.rect);
        assert_eq!(na.outline.path.elements(), nb.outline.path.elements());
    }
}

#[test]
fn gradient_stop_sampling_clamps_and_interpolates() {
    let paint = ResolvedPaint::Linear {
        start: Point::new(0.0, 0.0),
        end: Point::new(10.0, 0.0),
        stops: vec![
            crate::scene::model::GradientStop {
                offset: 0.0,
                color: Rgba8Premul::from_straight_rgba(0, 0, 0, 255),
            },
            crate::scene::model::GradientStop {
                offset: 1.0,
                color: white(),
            },
        ],
    };
    assert_eq!(paint.sample(-5.0, 0.0).r, 0);
    assert_eq!(paint.sample(15.0, 0.0).r, 255);
    assert_eq!(paint.sample(5.0, 0.0).r, 128);
}
