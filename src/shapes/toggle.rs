use std::f64::consts::TAU;

use crate::animation::lerp::Lerp;
use crate::foundation::core::{Point, Rect, RectAnchors, Vec2};
use crate::layout::guide::{GuideAxis, GuideConfig, LayoutGuide};
use crate::path::outline::{CompassPoint, CurveTo, Outline, OutlineBuilder};
use crate::shapes::PathShape;

/// Vertical displacement of the capsule's top/bottom midpoints, as a fraction
/// of the frame height.
const MAX_CURVE_OFFSET_FRAC: f64 = 0.18;

/// Circle-from-cubics constant.
const KAPPA: f64 = 0.552_284_749_830_793_6;

fn frame_grid(rect: Rect) -> LayoutGuide {
    GuideConfig::Grid {
        columns: GuideAxis::Fractions(vec![0.25, 0.4, 0.6, 0.75]),
        rows: GuideAxis::Count(2),
    }
    .layout(rect)
}

/// The squishy toggle capsule.
///
/// At rest the top and bottom edges are pinched inward by the maximum curve
/// offset; during a transition the offset follows the bottom anchor of a polar
/// guide rotated through a full turn scaled by progress, so the pinch relaxes
/// to a plain capsule at mid-transition and returns at both resting states.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToggleFrame {
    debug: bool,
}

impl ToggleFrame {
    /// Toggle frame, optionally recording control-point markers.
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    fn curve_y_offset(rect: Rect, progress: f64) -> f64 {
        let side = rect.height() * MAX_CURVE_OFFSET_FRAC;
        let offset_guide = GuideConfig::Polar {
            rings: GuideAxis::Count(1),
            segments: GuideAxis::Count(1),
        }
        .layout(Rect::new(0.0, 0.0, side, side))
        .rotated_by(TAU, progress);
        offset_guide.bottom().y
    }
}

impl PathShape for ToggleFrame {
    fn outline(&self, rect: Rect, progress: f64) -> Outline {
        let yoff = Vec2::new(0.0, Self::curve_y_offset(rect, progress));
        let g = frame_grid(rect);
        let arc_radius = rect.height() * 0.5;

        let mut builder = OutlineBuilder::new(self.debug);
        builder.move_to(g.point(0, 0));
        builder.curve(CurveTo::new(rect.top() + yoff, g.point(1, 0), g.point(1, 0) + yoff));
        builder.curve(CurveTo::new(g.point(3, 0), g.point(2, 0) + yoff, g.point(2, 0)));
        builder.arc(g.point(3, 1), arc_radius, CompassPoint::Top, CompassPoint::Bottom);
        builder.curve(CurveTo::new(
            rect.bottom() - yoff,
            g.point(2, 2),
            g.point(2, 2) - yoff,
        ));
        builder.curve(CurveTo::new(g.point(0, 2), g.point(1, 2) - yoff, g.point(1, 2)));
        builder.arc(g.point(0, 1), arc_radius, CompassPoint::Bottom, CompassPoint::Top);
        builder.close();
        builder.finish()
    }
}

/// On/off state icon morphing between a disc ("0") and a narrow upright bar
/// ("1").
///
/// Both resting states are the same four-segment ellipse topology, so every
/// control point interpolates pointwise with the progress scalar and the
/// resting outlines are reproduced exactly at 0 and 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToggleStateIcon {
    debug: bool,
}

impl ToggleStateIcon {
    /// State icon, optionally recording control-point markers.
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl PathShape for ToggleStateIcon {
    fn outline(&self, rect: Rect, progress: f64) -> Outline {
        let m = rect.width().min(rect.height());
        let center = rect.center_point();

        let off = ellipse_curves(center, m * 0.35, m * 0.35);
        let on = ellipse_curves(center, m * 0.08, m * 0.38);

        let mut curves = [off[0]; 5];
        for (i, slot) in curves.iter_mut().enumerate() {
            *slot = <CurveTo as Lerp>::lerp(&off[i], &on[i], progress);
        }
        Outline::closed(&curves, self.debug)
    }
}

/// Ellipse as four clockwise cubic segments starting at the top anchor.
///
/// The first descriptor only carries the start anchor.
pub(crate) fn ellipse_curves(center: Point, rx: f64, ry: f64) -> [CurveTo; 5] {
    let top = center + Vec2::new(0.0, -ry);
    let trailing = center + Vec2::new(rx, 0.0);
    let bottom = center + Vec2::new(0.0, ry);
    let leading = center + Vec2::new(-rx, 0.0);
    let kx = KAPPA * rx;
    let ky = KAPPA * ry;

    [
        CurveTo::new(top, top, top),
        CurveTo::new(trailing, top + Vec2::new(kx, 0.0), trailing + Vec2::new(0.0, -ky)),
        CurveTo::new(bottom, trailing + Vec2::new(0.0, ky), bottom + Vec2::new(kx, 0.0)),
        CurveTo::new(leading, bottom + Vec2::new(-kx, 0.0), leading + Vec2::new(0.0, ky)),
        CurveTo::new(top, leading + Vec2::new(0.0, -ky), top + Vec2::new(-kx, 0.0)),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/toggle.rs"]
mod tests;
