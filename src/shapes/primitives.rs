use crate::foundation::core::{Point, Rect};
use crate::path::outline::{CompassPoint, Outline, OutlineBuilder};
use crate::shapes::PathShape;
use crate::shapes::toggle::ellipse_curves;

/// Circle inscribed in the rect, optionally inset by a fraction of the rect
/// width.
#[derive(Clone, Copy, Debug, Default)]
pub struct Circle {
    inset: f64,
}

impl Circle {
    /// Circle with an inset fraction (0 = touching the rect edges).
    pub fn new(inset: f64) -> Self {
        Self { inset }
    }
}

impl PathShape for Circle {
    fn outline(&self, rect: Rect, _progress: f64) -> Outline {
        let inset_px = rect.width() * self.inset;
        let r = ((rect.width().min(rect.height()) * 0.5) - inset_px).max(0.0);
        Outline::closed(&ellipse_curves(rect.center(), r, r), false)
    }
}

/// Rounded rectangle built from four edges and four quarter arcs.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundedRect {
    corner_radius: f64,
}

impl RoundedRect {
    /// Rounded rect with the corner radius in pixels.
    pub fn new(corner_radius: f64) -> Self {
        Self { corner_radius }
    }
}

impl PathShape for RoundedRect {
    fn outline(&self, rect: Rect, _progress: f64) -> Outline {
        let r = self
            .corner_radius
            .clamp(0.0, rect.width().min(rect.height()) * 0.5);

        let mut builder = OutlineBuilder::new(false);
        builder.move_to(Point::new(rect.x0 + r, rect.y0));
        builder.line_to(Point::new(rect.x1 - r, rect.y0));
        builder.arc(
            Point::new(rect.x1 - r, rect.y0 + r),
            r,
            CompassPoint::Top,
            CompassPoint::Trailing,
        );
        builder.line_to(Point::new(rect.x1, rect.y1 - r));
        builder.arc(
            Point::new(rect.x1 - r, rect.y1 - r),
            r,
            CompassPoint::Trailing,
            CompassPoint::Bottom,
        );
        builder.line_to(Point::new(rect.x0 + r, rect.y1));
        builder.arc(
            Point::new(rect.x0 + r, rect.y1 - r),
            r,
            CompassPoint::Bottom,
            CompassPoint::Leading,
        );
        builder.line_to(Point::new(rect.x0, rect.y0 + r));
        builder.arc(
            Point::new(rect.x0 + r, rect.y0 + r),
            r,
            CompassPoint::Leading,
            CompassPoint::Top,
        );
        builder.close();
        builder.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/primitives.rs"]
mod tests;
