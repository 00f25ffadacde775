use super::*;

use crate::animation::ease::Ease;
use crate::scene::model::ProgressBinding;
use crate::shapes::ShapeKind;

fn canvas() -> Canvas {
    Canvas {
        width: 64,
        height: 64,
    }
}

#[test]
fn builders_create_expected_structure() {
    let node = NodeBuilder::new("dot", ShapeKind::Circle { inset: 0.0 })
        .placement(Placement::Centered {
            width: 10.0,
            height: 10.0,
        })
        .fill(Paint::Solid(Rgba8Premul::from_straight_rgba(
            255, 0, 0, 255,
        )))
        .stroke(2.0, Rgba8Premul::from_straight_rgba(0, 0, 0, 255))
        .progress(ProgressBinding::toggle(Ease::InOutCubic))
        .offset(Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0))
        .opacity(0.8)
        .z(3)
        .build()
        .unwrap();

    let scene = SceneBuilder::new(canvas())
        .background(Rgba8Premul::from_straight_rgba(255, 255, 255, 255))
        .node(node)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(scene.nodes.len(), 1);
    let node = &scene.nodes[0];
    assert_eq!(node.id, "dot");
    assert_eq!(node.z, 3);
    assert!(node.offset.is_some());
    assert!(scene.background.is_some());
}

#[test]
fn duplicate_node_id_is_rejected() {
    let builder = SceneBuilder::new(canvas())
        .node(
            NodeBuilder::new("a", ShapeKind::Circle { inset: 0.0 })
                .build()
                .unwrap(),
        )
        .unwrap();
    assert!(
        builder
            .node(
                NodeBuilder::new("a", ShapeKind::Heart { debug: false })
                    .build()
                    .unwrap()
            )
            .is_err()
    );
}

#[test]
fn empty_node_id_is_rejected() {
    assert!(
        NodeBuilder::new("  ", ShapeKind::Circle { inset: 0.0 })
            .build()
            .is_err()
    );
}
