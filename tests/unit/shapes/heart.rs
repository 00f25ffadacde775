use super::*;
use kurbo::{PathEl, Shape};

use crate::foundation::core::Point;

#[test]
fn heart_outline_is_closed() {
    let outline = Heart::new(false).outline(Rect::new(0.0, 0.0, 80.0, 100.0), 0.0);
    assert!(outline.is_closed());
    assert_eq!(outline.path.elements().len(), 6); // move + 4 curves + close
}

#[test]
fn heart_anchors_sit_on_the_grid() {
    let rect = Rect::new(0.0, 0.0, 80.0, 100.0);
    let outline = Heart::new(false).outline(rect, 0.0);
    let els = outline.path.elements();

    let PathEl::MoveTo(dip) = els[0] else {
        panic!("expected MoveTo, got {:?}", els[0]);
    };
    assert!((dip.x - 40.0).abs() < 1e-9);
    assert!((dip.y - 20.0).abs() < 1e-9);

    let PathEl::CurveTo(_, _, tip) = els[2] else {
        panic!("expected CurveTo, got {:?}", els[2]);
    };
    assert!((tip.x - 40.0).abs() < 1e-9);
    assert!((tip.y - 100.0).abs() < 1e-9);
}

#[test]
fn heart_is_left_right_symmetric() {
    let rect = Rect::new(0.0, 0.0, 80.0, 100.0);
    let outline = Heart::new(false).outline(rect, 0.0);
    let mid_x = 40.0;

    let mut points = Vec::<Point>::new();
    for el in outline.path.elements() {
        match *el {
            PathEl::MoveTo(p) => points.push(p),
            PathEl::CurveTo(p1, p2, p3) => points.extend([p1, p2, p3]),
            _ => {}
        }
    }
    // Every construction point has a mirror partner.
    for p in &points {
        let mirrored = Point::new(2.0 * mid_x - p.x, p.y);
        assert!(
            points
                .iter()
                .any(|q| (q.x - mirrored.x).abs() < 1e-6 && (q.y - mirrored.y).abs() < 1e-6),
            "no mirror for {p:?}"
        );
    }
}

#[test]
fn heart_ignores_progress() {
    let rect = Rect::new(0.0, 0.0, 80.0, 100.0);
    let a = Heart::new(false).outline(rect, 0.0);
    let b = Heart::new(false).outline(rect, 0.7);
    assert_eq!(a.path.elements(), b.path.elements());
}

#[test]
fn heart_debug_markers_do_not_change_geometry() {
    let rect = Rect::new(0.0, 0.0, 80.0, 100.0);
    let plain = Heart::new(false).outline(rect, 0.0);
    let debug = Heart::new(true).outline(rect, 0.0);
    assert_eq!(plain.path.elements(), debug.path.elements());
    assert!(plain.markers.is_empty());
    assert!(!debug.markers.is_empty());
}

#[test]
fn sash_is_closed_and_spans_the_rect_diagonal() {
    let rect = Rect::new(0.0, 0.0, 60.0, 60.0);
    let outline = Sash::new(false).outline(rect, 0.0);
    assert!(outline.is_closed());

    let bbox = outline.path.bounding_box();
    assert!(bbox.x1 - bbox.x0 > 30.0);
    assert!(bbox.y1 - bbox.y0 > 30.0);
}
