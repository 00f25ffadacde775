use super::*;
use kurbo::{PathEl, Shape};

use crate::animation::lerp::Lerp;

fn square_curves() -> Vec<CurveTo> {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    let c = Point::new(10.0, 10.0);
    vec![
        CurveTo::new(a, a, a),
        CurveTo::new(b, Point::new(3.0, -2.0), Point::new(7.0, -2.0)),
        CurveTo::new(c, Point::new(12.0, 3.0), Point::new(12.0, 7.0)),
    ]
}

#[test]
fn closed_outline_moves_curves_and_closes() {
    let outline = Outline::closed(&square_curves(), false);
    let els = outline.path.elements();
    assert_eq!(els.len(), 4);
    assert!(matches!(els[0], PathEl::MoveTo(p) if p == Point::new(0.0, 0.0)));
    assert!(matches!(els[1], PathEl::CurveTo(..)));
    assert!(matches!(els[2], PathEl::CurveTo(..)));
    assert!(matches!(els[3], PathEl::ClosePath));
    assert!(outline.is_closed());
}

#[test]
fn empty_descriptor_list_yields_empty_outline() {
    let outline = Outline::closed(&[], false);
    assert!(outline.path.elements().is_empty());
    assert!(!outline.is_closed());
    assert!(outline.markers.is_empty());
}

#[test]
fn debug_mode_records_anchor_and_control_markers() {
    let outline = Outline::closed(&square_curves(), true);
    let anchors = outline
        .markers
        .iter()
        .filter(|m| m.kind == MarkerKind::Anchor)
        .count();
    let controls = outline
        .markers
        .iter()
        .filter(|m| m.kind == MarkerKind::Control)
        .count();
    // Start anchor + one anchor per segment; two controls per descriptor.
    assert_eq!(anchors, 3);
    assert_eq!(controls, 6);

    let quiet = Outline::closed(&square_curves(), false);
    assert!(quiet.markers.is_empty());
    // Markers never change the geometry.
    assert_eq!(quiet.path.elements(), outline.path.elements());
}

#[test]
fn compass_angles() {
    use std::f64::consts::{FRAC_PI_2, PI};
    assert_eq!(CompassPoint::Trailing.angle(), 0.0);
    assert_eq!(CompassPoint::Bottom.angle(), FRAC_PI_2);
    assert_eq!(CompassPoint::Leading.angle(), PI);
    assert_eq!(CompassPoint::Top.angle(), -FRAC_PI_2);
}

#[test]
fn right_cap_arc_sweeps_clockwise_through_trailing() {
    let mut builder = OutlineBuilder::new(false);
    builder.move_to(Point::new(0.0, -5.0));
    builder.arc(Point::new(0.0, 0.0), 5.0, CompassPoint::Top, CompassPoint::Bottom);
    builder.close();
    let outline = builder.finish();

    let bbox = outline.path.bounding_box();
    assert!((bbox.x1 - 5.0).abs() < 0.1, "x1 = {}", bbox.x1);
    assert!(bbox.x0 >= -0.1, "x0 = {}", bbox.x0);
    assert!((bbox.y0 - -5.0).abs() < 0.1);
    assert!((bbox.y1 - 5.0).abs() < 0.1);
}

#[test]
fn left_cap_arc_sweeps_clockwise_through_leading() {
    let mut builder = OutlineBuilder::new(false);
    builder.move_to(Point::new(0.0, 5.0));
    builder.arc(Point::new(0.0, 0.0), 5.0, CompassPoint::Bottom, CompassPoint::Top);
    builder.close();
    let outline = builder.finish();

    let bbox = outline.path.bounding_box();
    assert!((bbox.x0 - -5.0).abs() < 0.1, "x0 = {}", bbox.x0);
    assert!(bbox.x1 <= 0.1, "x1 = {}", bbox.x1);
}

#[test]
fn arc_connects_from_the_current_point() {
    let mut builder = OutlineBuilder::new(false);
    builder.move_to(Point::new(-10.0, -5.0));
    builder.arc(Point::new(0.0, 0.0), 5.0, CompassPoint::Top, CompassPoint::Bottom);
    let outline = builder.finish();

    // A connecting line precedes the arc cubics.
    let PathEl::LineTo(p) = outline.path.elements()[1] else {
        panic!("expected a connecting line, got {:?}", outline.path.elements()[1]);
    };
    assert!(p.x.abs() < 1e-9 && (p.y + 5.0).abs() < 1e-9);
}

#[test]
fn curve_descriptor_lerp_is_pointwise_and_endpoint_exact() {
    let a = CurveTo::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
    );
    let b = CurveTo::new(
        Point::new(10.0, 0.0),
        Point::new(11.0, 1.0),
        Point::new(12.0, 2.0),
    );
    assert_eq!(<CurveTo as Lerp>::lerp(&a, &b, 0.0), a);
    assert_eq!(<CurveTo as Lerp>::lerp(&a, &b, 1.0), b);
    let mid = <CurveTo as Lerp>::lerp(&a, &b, 0.5);
    assert_eq!(mid.to, Point::new(5.0, 0.0));
    assert_eq!(mid.cp1, Point::new(6.0, 1.0));
}
