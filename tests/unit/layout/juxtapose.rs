use super::*;

const ALL: [Alignment; 9] = [
    Alignment::Top,
    Alignment::Bottom,
    Alignment::Leading,
    Alignment::Trailing,
    Alignment::TopLeading,
    Alignment::TopTrailing,
    Alignment::BottomLeading,
    Alignment::BottomTrailing,
    Alignment::Center,
];

#[test]
fn mirrored_is_an_involution() {
    for alignment in ALL {
        assert_eq!(alignment.mirrored().mirrored(), alignment);
    }
}

#[test]
fn mirrored_swaps_sides() {
    assert_eq!(Alignment::Leading.mirrored(), Alignment::Trailing);
    assert_eq!(Alignment::Top.mirrored(), Alignment::Bottom);
    assert_eq!(Alignment::TopLeading.mirrored(), Alignment::BottomTrailing);
    assert_eq!(Alignment::BottomLeading.mirrored(), Alignment::TopTrailing);
    assert_eq!(Alignment::Center.mirrored(), Alignment::Center);
}

#[test]
fn signed_spacing_signs() {
    let s = Vec2::new(8.0, 8.0);
    assert_eq!(signed_spacing(Alignment::Leading, s), Vec2::new(8.0, 0.0));
    assert_eq!(signed_spacing(Alignment::Trailing, s), Vec2::new(-8.0, 0.0));
    assert_eq!(signed_spacing(Alignment::Top, s), Vec2::new(0.0, 8.0));
    assert_eq!(signed_spacing(Alignment::Bottom, s), Vec2::new(0.0, -8.0));
    assert_eq!(
        signed_spacing(Alignment::TopTrailing, s),
        Vec2::new(-8.0, 8.0)
    );
    assert_eq!(signed_spacing(Alignment::Center, s), Vec2::new(0.0, 0.0));
}

#[test]
fn trailing_box_touches_then_clears_the_edge() {
    let primary = Rect::new(10.0, 10.0, 20.0, 20.0);
    let size = Size::new(4.0, 4.0);
    let r = juxtaposed_rect(primary, size, Alignment::Trailing, Vec2::new(3.0, 3.0));
    assert_eq!(r, Rect::new(23.0, 13.0, 27.0, 17.0));
}

#[test]
fn top_box_sits_fully_above_the_primary() {
    let primary = Rect::new(10.0, 10.0, 20.0, 20.0);
    let size = Size::new(4.0, 4.0);
    let r = juxtaposed_rect(primary, size, Alignment::Top, Vec2::new(3.0, 3.0));
    assert_eq!(r, Rect::new(13.0, 3.0, 17.0, 7.0));
}

#[test]
fn corner_alignment_offsets_both_axes() {
    let primary = Rect::new(0.0, 0.0, 10.0, 10.0);
    let size = Size::new(2.0, 2.0);
    let r = juxtaposed_rect(primary, size, Alignment::BottomTrailing, Vec2::new(1.0, 2.0));
    assert_eq!(r, Rect::new(11.0, 12.0, 13.0, 14.0));
}

#[test]
fn center_alignment_is_concentric() {
    let primary = Rect::new(0.0, 0.0, 10.0, 10.0);
    let size = Size::new(4.0, 2.0);
    let r = juxtaposed_rect(primary, size, Alignment::Center, Vec2::new(9.0, 9.0));
    assert_eq!(r, Rect::new(3.0, 4.0, 7.0, 6.0));
}

#[test]
fn negative_spacing_overlaps_the_primary() {
    let primary = Rect::new(0.0, 0.0, 10.0, 10.0);
    let size = Size::new(4.0, 4.0);
    let r = juxtaposed_rect(primary, size, Alignment::Trailing, Vec2::new(-2.0, 0.0));
    assert_eq!(r.x0, 8.0);
}

#[test]
fn edge_form_uses_uniform_spacing() {
    let primary = Rect::new(10.0, 10.0, 20.0, 20.0);
    let size = Size::new(4.0, 4.0);
    let r = juxtaposed_rect_edge(primary, size, Edge::Leading, 2.0);
    assert_eq!(r, Rect::new(4.0, 13.0, 8.0, 17.0));
    assert_eq!(Edge::Leading.alignment(), Alignment::Leading);
}
