use crate::foundation::core::Rect;
use crate::layout::guide::{GuideAxis, GuideConfig, LayoutGuide};
use crate::path::outline::{CurveTo, Outline, OutlineBuilder};
use crate::shapes::PathShape;

fn heart_grid(rect: Rect) -> LayoutGuide {
    GuideConfig::Grid {
        columns: GuideAxis::Count(8),
        rows: GuideAxis::Count(10),
    }
    .layout(rect)
}

/// Four-lobe heart built on an 8x10 grid guide.
///
/// The anchors are the leading/trailing notch points, the top dip, and the
/// bottom tip; the lobes pull their control points up past the rect's top edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heart {
    debug: bool,
}

impl Heart {
    /// Heart shape, optionally recording control-point markers.
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl PathShape for Heart {
    fn outline(&self, rect: Rect, _progress: f64) -> Outline {
        let g = heart_grid(rect);

        let dip = g.point(4, 2);
        let leading = g.point(0, 3);
        let trailing = g.point(8, 3);
        let tip = g.point(4, 10);

        let mut builder = OutlineBuilder::new(self.debug);
        builder.move_to(dip);
        // Left lobe, then down to the tip; mirrored on the way back up.
        builder.curve(CurveTo::new(leading, g.point(3, 0), g.point(0, 0)));
        builder.curve(CurveTo::new(tip, g.point(0, 6), g.point(2, 8)));
        builder.curve(CurveTo::new(trailing, g.point(6, 8), g.point(8, 6)));
        builder.curve(CurveTo::new(dip, g.point(8, 0), g.point(5, 0)));
        builder.close();
        builder.finish()
    }
}

/// Diagonal ribbon: two cubic curves between opposite corners, each pulled by
/// the remaining two corners.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sash {
    debug: bool,
}

impl Sash {
    /// Sash shape, optionally recording control-point markers.
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl PathShape for Sash {
    fn outline(&self, rect: Rect, _progress: f64) -> Outline {
        let g = heart_grid(rect);

        let mut builder = OutlineBuilder::new(self.debug);
        builder.move_to(g.top_leading());
        builder.curve(CurveTo::new(
            g.bottom_trailing(),
            g.bottom_leading(),
            g.top_trailing(),
        ));
        builder.curve(CurveTo::new(
            g.top_leading(),
            g.bottom_leading(),
            g.top_trailing(),
        ));
        builder.close();
        builder.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/heart.rs"]
mod tests;
