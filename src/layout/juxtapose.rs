use crate::foundation::core::{Rect, Size, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One of the four cardinal edges of a rectangle.
pub enum Edge {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge in a left-to-right context.
    Leading,
    /// Right edge in a left-to-right context.
    Trailing,
}

impl Edge {
    /// The alignment a plain edge juxtaposition resolves to.
    pub fn alignment(self) -> Alignment {
        match self {
            Self::Top => Alignment::Top,
            Self::Bottom => Alignment::Bottom,
            Self::Leading => Alignment::Leading,
            Self::Trailing => Alignment::Trailing,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Compass alignment of a secondary box against a primary box.
pub enum Alignment {
    /// Above, horizontally centered.
    Top,
    /// Below, horizontally centered.
    Bottom,
    /// To the left, vertically centered.
    Leading,
    /// To the right, vertically centered.
    Trailing,
    /// Outside the top-left corner.
    TopLeading,
    /// Outside the top-right corner.
    TopTrailing,
    /// Outside the bottom-left corner.
    BottomLeading,
    /// Outside the bottom-right corner.
    BottomTrailing,
    /// Concentric with the primary box.
    Center,
}

impl Alignment {
    /// The mirrored alignment, used to anchor the secondary box's own edge.
    ///
    /// Juxtaposing at `Leading` anchors the secondary box by its `Trailing`
    /// edge, and so on; `Center` is its own mirror.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Leading => Self::Trailing,
            Self::Trailing => Self::Leading,
            Self::TopLeading => Self::BottomTrailing,
            Self::TopTrailing => Self::BottomLeading,
            Self::BottomLeading => Self::TopTrailing,
            Self::BottomTrailing => Self::TopLeading,
            Self::Center => Self::Center,
        }
    }
}

/// Signed spacing applied along each axis for an alignment.
///
/// Leading-side alignments push by `+spacing`, trailing-side by `-spacing`;
/// a centered axis contributes no offset. The sign convention matches the
/// alignment-guide arithmetic of the original overlay formulation: a positive
/// value moves the secondary box's anchored edge toward the leading/top side.
pub fn signed_spacing(alignment: Alignment, spacing: Vec2) -> Vec2 {
    let x = match alignment {
        Alignment::TopLeading | Alignment::BottomLeading | Alignment::Leading => spacing.x,
        Alignment::TopTrailing | Alignment::BottomTrailing | Alignment::Trailing => -spacing.x,
        _ => 0.0,
    };
    let y = match alignment {
        Alignment::TopLeading | Alignment::TopTrailing | Alignment::Top => spacing.y,
        Alignment::BottomLeading | Alignment::BottomTrailing | Alignment::Bottom => -spacing.y,
        _ => 0.0,
    };
    Vec2::new(x, y)
}

/// Place a secondary box of `size` against `primary` at `alignment`, spaced
/// outward by `spacing`.
///
/// The secondary box's mirrored edge touches the chosen primary edge and is
/// then pushed away from the primary by the spacing magnitude. Centered axes
/// stay centered on the primary box.
pub fn juxtaposed_rect(primary: Rect, size: Size, alignment: Alignment, spacing: Vec2) -> Rect {
    let x = match alignment {
        Alignment::Leading | Alignment::TopLeading | Alignment::BottomLeading => {
            primary.x0 - spacing.x - size.width
        }
        Alignment::Trailing | Alignment::TopTrailing | Alignment::BottomTrailing => {
            primary.x1 + spacing.x
        }
        _ => primary.x0 + (primary.width() - size.width) * 0.5,
    };
    let y = match alignment {
        Alignment::Top | Alignment::TopLeading | Alignment::TopTrailing => {
            primary.y0 - spacing.y - size.height
        }
        Alignment::Bottom | Alignment::BottomLeading | Alignment::BottomTrailing => {
            primary.y1 + spacing.y
        }
        _ => primary.y0 + (primary.height() - size.height) * 0.5,
    };
    Rect::new(x, y, x + size.width, y + size.height)
}

/// Edge form: uniform scalar spacing on the chosen cardinal edge.
pub fn juxtaposed_rect_edge(primary: Rect, size: Size, edge: Edge, spacing: f64) -> Rect {
    juxtaposed_rect(primary, size, edge.alignment(), Vec2::new(spacing, spacing))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/juxtapose.rs"]
mod tests;
