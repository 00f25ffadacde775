use kurbo::Arc;

use crate::animation::lerp::Lerp;
use crate::foundation::core::{BezPath, Point, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One cubic Bezier segment descriptor: an anchor plus two control points.
pub struct CurveTo {
    /// Segment end anchor.
    pub to: Point,
    /// First control point.
    pub cp1: Point,
    /// Second control point.
    pub cp2: Point,
}

impl CurveTo {
    /// Build a descriptor.
    pub fn new(to: Point, cp1: Point, cp2: Point) -> Self {
        Self { to, cp1, cp2 }
    }
}

impl Lerp for CurveTo {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            to: <Point as Lerp>::lerp(&a.to, &b.to, t),
            cp1: <Point as Lerp>::lerp(&a.cp1, &b.cp1, t),
            cp2: <Point as Lerp>::lerp(&a.cp2, &b.cp2, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a debug marker points at.
pub enum MarkerKind {
    /// A segment anchor point.
    Anchor,
    /// A Bezier control point.
    Control,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A debug inspection dot recorded during path construction.
pub struct Marker {
    /// Marker position.
    pub at: Point,
    /// Marker role.
    pub kind: MarkerKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Compass positions on a circle, used to express arc endpoints.
pub enum CompassPoint {
    /// Topmost point.
    Top,
    /// Bottommost point.
    Bottom,
    /// Leftmost point in a left-to-right context.
    Leading,
    /// Rightmost point.
    Trailing,
}

impl CompassPoint {
    /// Angle from the positive x axis, y-down screen coordinates.
    pub fn angle(self) -> f64 {
        use std::f64::consts::{FRAC_PI_2, PI};
        match self {
            Self::Trailing => 0.0,
            Self::Bottom => FRAC_PI_2,
            Self::Leading => PI,
            Self::Top => -FRAC_PI_2,
        }
    }
}

#[derive(Clone, Debug, Default)]
/// A finished closed outline plus any debug markers recorded while building it.
pub struct Outline {
    /// The vector outline.
    pub path: BezPath,
    /// Debug markers (empty unless built in debug mode).
    pub markers: Vec<Marker>,
}

impl Outline {
    /// Build a closed outline from an ordered descriptor sequence.
    ///
    /// Moves to the first descriptor's anchor, appends one cubic segment per
    /// subsequent descriptor, then closes the path. The first descriptor's
    /// control points only contribute debug markers.
    pub fn closed(curves: &[CurveTo], debug: bool) -> Self {
        let mut builder = OutlineBuilder::new(debug);
        if let Some((first, rest)) = curves.split_first() {
            builder.move_to(first.to);
            if debug {
                builder.mark_controls(first);
            }
            for curve in rest {
                builder.curve(*curve);
            }
            builder.close();
        }
        builder.finish()
    }

    /// Whether the outline ends with an explicit close element.
    pub fn is_closed(&self) -> bool {
        matches!(self.path.elements().last(), Some(kurbo::PathEl::ClosePath))
    }
}

/// Incremental outline construction with move / curve / arc / close operations.
///
/// In debug mode every anchor and control point is additionally recorded as a
/// [`Marker`]; markers are a rendering aid and never change the geometry.
#[derive(Clone, Debug)]
pub struct OutlineBuilder {
    path: BezPath,
    markers: Vec<Marker>,
    debug: bool,
    last: Option<Point>,
}

impl OutlineBuilder {
    /// Start an empty builder.
    pub fn new(debug: bool) -> Self {
        Self {
            path: BezPath::new(),
            markers: Vec::new(),
            debug,
            last: None,
        }
    }

    /// Start a new subpath at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.path.move_to(p);
        self.last = Some(p);
        self.mark(p, MarkerKind::Anchor);
    }

    /// Straight segment to `p`.
    pub fn line_to(&mut self, p: Point) {
        self.path.line_to(p);
        self.last = Some(p);
        self.mark(p, MarkerKind::Anchor);
    }

    /// Cubic segment from a descriptor.
    pub fn curve(&mut self, curve: CurveTo) {
        self.path.curve_to(curve.cp1, curve.cp2, curve.to);
        self.last = Some(curve.to);
        self.mark(curve.to, MarkerKind::Anchor);
        self.mark_controls(&curve);
    }

    /// Clockwise circular arc from one compass point to another.
    ///
    /// A straight segment connects the current point to the arc start when the
    /// two do not already coincide.
    pub fn arc(&mut self, center: Point, radius: f64, from: CompassPoint, to: CompassPoint) {
        use std::f64::consts::TAU;

        let start = from.angle();
        let mut sweep = (to.angle() - start).rem_euclid(TAU);
        if sweep == 0.0 {
            sweep = TAU;
        }

        let start_pt = center + radius * Vec2::new(start.cos(), start.sin());
        match self.last {
            Some(last) if (last - start_pt).hypot() < 1e-9 => {}
            Some(_) => self.path.line_to(start_pt),
            None => self.path.move_to(start_pt),
        }

        let arc = Arc::new(center, (radius, radius), start, sweep, 0.0);
        arc.to_cubic_beziers(0.1, |p1, p2, p| {
            self.path.curve_to(p1, p2, p);
        });
        self.last = Some(center + radius * Vec2::new(to.angle().cos(), to.angle().sin()));
    }

    /// Close the current subpath.
    pub fn close(&mut self) {
        self.path.close_path();
    }

    /// Finish, yielding the outline and collected markers.
    pub fn finish(self) -> Outline {
        Outline {
            path: self.path,
            markers: self.markers,
        }
    }

    fn mark(&mut self, at: Point, kind: MarkerKind) {
        if self.debug {
            self.markers.push(Marker { at, kind });
        }
    }

    fn mark_controls(&mut self, curve: &CurveTo) {
        if self.debug {
            self.markers.push(Marker {
                at: curve.cp1,
                kind: MarkerKind::Control,
            });
            self.markers.push(Marker {
                at: curve.cp2,
                kind: MarkerKind::Control,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/outline.rs"]
mod tests;
