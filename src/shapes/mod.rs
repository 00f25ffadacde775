pub(crate) mod heart;
pub(crate) mod primitives;
pub(crate) mod toggle;

use crate::foundation::core::Rect;
use crate::path::outline::Outline;

pub use heart::{Heart, Sash};
pub use primitives::{Circle, RoundedRect};
pub use toggle::{ToggleFrame, ToggleStateIcon};

/// A decorative shape as a pure function of its rectangle and an animation
/// progress scalar.
///
/// Implementations hold no mutable state and recompute the full outline on
/// every call. Progress 0 and 1 must reproduce the two resting outlines
/// exactly; static shapes ignore the scalar.
pub trait PathShape {
    /// Build the closed outline for `rect` at `progress`.
    fn outline(&self, rect: Rect, progress: f64) -> Outline;
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Tagged shape variant stored in scene nodes.
pub enum ShapeKind {
    /// Four-lobe heart on an 8x10 grid guide.
    Heart {
        /// Record control-point markers.
        debug: bool,
    },
    /// Diagonal two-curve ribbon between opposite corners.
    Sash {
        /// Record control-point markers.
        debug: bool,
    },
    /// Squishy toggle capsule frame.
    ToggleFrame {
        /// Record control-point markers.
        debug: bool,
    },
    /// Morphing on/off state icon (disc to bar).
    ToggleStateIcon {
        /// Record control-point markers.
        debug: bool,
    },
    /// Circle inscribed in the rect, optionally inset.
    Circle {
        /// Inset as a fraction of the rect width.
        inset: f64,
    },
    /// Rounded rectangle with an absolute corner radius.
    RoundedRect {
        /// Corner radius in pixels, clamped to the half-min-dimension.
        corner_radius: f64,
    },
}

impl PathShape for ShapeKind {
    fn outline(&self, rect: Rect, progress: f64) -> Outline {
        match *self {
            Self::Heart { debug } => Heart::new(debug).outline(rect, progress),
            Self::Sash { debug } => Sash::new(debug).outline(rect, progress),
            Self::ToggleFrame { debug } => ToggleFrame::new(debug).outline(rect, progress),
            Self::ToggleStateIcon { debug } => ToggleStateIcon::new(debug).outline(rect, progress),
            Self::Circle { inset } => Circle::new(inset).outline(rect, progress),
            Self::RoundedRect { corner_radius } => {
                RoundedRect::new(corner_radius).outline(rect, progress)
            }
        }
    }
}
