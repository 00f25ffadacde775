use crate::foundation::core::{Point, Rect, RectAnchors, Vec2};
use crate::foundation::error::{CurlicueError, CurlicueResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One axis of a layout guide.
pub enum GuideAxis {
    /// `n` evenly spaced steps, i.e. `n + 1` grid lines at fractions `i / n`.
    Count(u32),
    /// Explicit fraction list, indexed directly. Fractions outside `[0, 1]`
    /// are permitted.
    Fractions(Vec<f64>),
}

impl GuideAxis {
    fn validate(&self) -> CurlicueResult<()> {
        match self {
            Self::Count(n) => {
                if *n == 0 {
                    return Err(CurlicueError::validation("guide axis count must be > 0"));
                }
            }
            Self::Fractions(fractions) => {
                if fractions.is_empty() {
                    return Err(CurlicueError::validation(
                        "guide axis fraction list must be non-empty",
                    ));
                }
                if fractions.iter().any(|f| !f.is_finite()) {
                    return Err(CurlicueError::validation(
                        "guide axis fractions must be finite",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Fraction for a signed index.
    ///
    /// Count axes extrapolate linearly outside `0..=n`; explicit fraction axes
    /// clamp to their first/last entry.
    pub fn fraction_at(&self, index: i32) -> f64 {
        match self {
            Self::Count(n) => f64::from(index) / f64::from(*n),
            Self::Fractions(fractions) => {
                let last = fractions.len() - 1;
                let i = index.clamp(0, last as i32) as usize;
                fractions[i]
            }
        }
    }

    /// Largest in-range index.
    pub fn max_index(&self) -> i32 {
        match self {
            Self::Count(n) => *n as i32,
            Self::Fractions(fractions) => (fractions.len() - 1) as i32,
        }
    }
}

impl From<u32> for GuideAxis {
    fn from(value: u32) -> Self {
        Self::Count(value)
    }
}

impl From<Vec<f64>> for GuideAxis {
    fn from(value: Vec<f64>) -> Self {
        Self::Fractions(value)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Layout guide configuration, independent of any rectangle.
pub enum GuideConfig {
    /// Cartesian grid: `(column, row)` indices map to fractions of the rect's
    /// width and height.
    Grid {
        /// Horizontal axis.
        columns: GuideAxis,
        /// Vertical axis.
        rows: GuideAxis,
    },
    /// Polar grid: `(ring, segment)` indices map to a radius fraction of the
    /// half-min-dimension and an angle fraction of a full turn starting at the
    /// top, clockwise.
    Polar {
        /// Radial axis.
        rings: GuideAxis,
        /// Angular axis.
        segments: GuideAxis,
    },
}

impl GuideConfig {
    /// Evenly spaced grid with `columns x rows` steps.
    pub fn grid(columns: u32, rows: u32) -> CurlicueResult<Self> {
        Self::grid_axes(GuideAxis::Count(columns), GuideAxis::Count(rows))
    }

    /// Grid from explicit fraction lists.
    pub fn grid_fractions(columns: Vec<f64>, rows: Vec<f64>) -> CurlicueResult<Self> {
        Self::grid_axes(GuideAxis::Fractions(columns), GuideAxis::Fractions(rows))
    }

    /// Grid from arbitrary axes (counts and fraction lists can be mixed).
    pub fn grid_axes(
        columns: impl Into<GuideAxis>,
        rows: impl Into<GuideAxis>,
    ) -> CurlicueResult<Self> {
        let columns = columns.into();
        let rows = rows.into();
        columns.validate()?;
        rows.validate()?;
        Ok(Self::Grid { columns, rows })
    }

    /// Evenly spaced polar guide with `rings x segments` steps.
    pub fn polar(rings: u32, segments: u32) -> CurlicueResult<Self> {
        let rings = GuideAxis::Count(rings);
        let segments = GuideAxis::Count(segments);
        rings.validate()?;
        segments.validate()?;
        Ok(Self::Polar { rings, segments })
    }

    /// Bind the configuration to a rectangle for one layout pass.
    pub fn layout(&self, rect: Rect) -> LayoutGuide {
        LayoutGuide {
            config: self.clone(),
            rect,
            rotation: 0.0,
        }
    }
}

#[derive(Clone, Debug)]
/// A guide configuration bound to a rectangle.
///
/// Guides are cheap values recomputed fresh on every layout pass; nothing is
/// cached between passes. An optional rotation about the rect center is applied
/// to every produced point, including anchors.
pub struct LayoutGuide {
    config: GuideConfig,
    rect: Rect,
    rotation: f64,
}

impl LayoutGuide {
    /// The rectangle this guide is bound to.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Largest in-range `(column, row)` (or `(ring, segment)`) indices.
    pub fn max_indices(&self) -> (i32, i32) {
        match &self.config {
            GuideConfig::Grid { columns, rows } => (columns.max_index(), rows.max_index()),
            GuideConfig::Polar { rings, segments } => (rings.max_index(), segments.max_index()),
        }
    }

    /// Derived guide rotated by `radians` about the rect center.
    pub fn rotated(self, radians: f64) -> Self {
        Self {
            rotation: self.rotation + radians,
            ..self
        }
    }

    /// Derived guide rotated by `radians * factor`.
    ///
    /// A factor of exactly `0.0` leaves the guide untouched, so a resting
    /// animation state reproduces unrotated points bit for bit.
    pub fn rotated_by(self, radians: f64, factor: f64) -> Self {
        if factor == 0.0 {
            return self;
        }
        self.rotated(radians * factor)
    }

    /// Map `(column, row)` grid indices (or `(ring, segment)` polar indices)
    /// to an absolute point.
    pub fn point(&self, a: i32, b: i32) -> Point {
        let p = match &self.config {
            GuideConfig::Grid { columns, rows } => {
                let fx = columns.fraction_at(a);
                let fy = rows.fraction_at(b);
                Point::new(
                    self.rect.x0 + fx * self.rect.width(),
                    self.rect.y0 + fy * self.rect.height(),
                )
            }
            GuideConfig::Polar { rings, segments } => {
                let radius =
                    rings.fraction_at(a) * self.rect.width().min(self.rect.height()) * 0.5;
                let angle = segments.fraction_at(b) * std::f64::consts::TAU;
                self.rect.center() + Vec2::new(radius * angle.sin(), -radius * angle.cos())
            }
        };
        self.transform(p)
    }

    /// Top-left corner anchor.
    pub fn top_leading(&self) -> Point {
        self.transform(self.rect.top_leading())
    }

    /// Top edge midpoint anchor.
    pub fn top(&self) -> Point {
        self.transform(self.rect.top())
    }

    /// Top-right corner anchor.
    pub fn top_trailing(&self) -> Point {
        self.transform(self.rect.top_trailing())
    }

    /// Left edge midpoint anchor.
    pub fn leading(&self) -> Point {
        self.transform(self.rect.leading())
    }

    /// Center anchor (rotation-invariant).
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Right edge midpoint anchor.
    pub fn trailing(&self) -> Point {
        self.transform(self.rect.trailing())
    }

    /// Bottom-left corner anchor.
    pub fn bottom_leading(&self) -> Point {
        self.transform(self.rect.bottom_leading())
    }

    /// Bottom edge midpoint anchor.
    pub fn bottom(&self) -> Point {
        self.transform(self.rect.bottom())
    }

    /// Bottom-right corner anchor.
    pub fn bottom_trailing(&self) -> Point {
        self.transform(self.rect.bottom_trailing())
    }

    fn transform(&self, p: Point) -> Point {
        if self.rotation == 0.0 {
            return p;
        }
        let c = self.rect.center();
        let v = p - c;
        let (sin, cos) = self.rotation.sin_cos();
        c + Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/guide.rs"]
mod tests;
