use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::foundation::error::{CurlicueError, CurlicueResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A timed transition between two scalar resting values.
///
/// Time is supplied explicitly in seconds by the caller on every sample; the
/// tween itself holds no clock and never mutates.
pub struct Tween {
    /// Value at `start_s`.
    pub from: f64,
    /// Value at `start_s + duration_s`.
    pub to: f64,
    /// Start timestamp in seconds.
    pub start_s: f64,
    /// Duration in seconds; zero snaps to `to` immediately.
    pub duration_s: f64,
    /// Easing applied to the normalized elapsed time.
    pub ease: Ease,
}

impl Tween {
    /// Validating constructor.
    pub fn new(from: f64, to: f64, start_s: f64, duration_s: f64, ease: Ease) -> CurlicueResult<Self> {
        if !from.is_finite() || !to.is_finite() || !start_s.is_finite() {
            return Err(CurlicueError::animation("tween endpoints must be finite"));
        }
        if !duration_s.is_finite() || duration_s < 0.0 {
            return Err(CurlicueError::animation("tween duration must be >= 0"));
        }
        Ok(Self {
            from,
            to,
            start_s,
            duration_s,
            ease,
        })
    }

    /// Sample the tween at `now_s`.
    ///
    /// Before the start this is exactly `from`; at or after completion it is
    /// exactly `to`.
    pub fn sample(&self, now_s: f64) -> f64 {
        if now_s <= self.start_s {
            return self.from;
        }
        if self.duration_s <= 0.0 || now_s >= self.start_s + self.duration_s {
            return self.to;
        }
        let t = (now_s - self.start_s) / self.duration_s;
        <f64 as Lerp>::lerp(&self.from, &self.to, self.ease.apply(t))
    }

    /// Whether the tween has reached its resting value at `now_s`.
    pub fn finished(&self, now_s: f64) -> bool {
        now_s >= self.start_s + self.duration_s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
