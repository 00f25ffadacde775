use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::foundation::error::CurlicueResult;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An input event delivered to scene state.
pub enum Event {
    /// A tap at an absolute timestamp in seconds.
    Tap {
        /// Event timestamp in seconds.
        now_s: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The explicit on/off state driving animated scenes.
///
/// The state owns the only mutable data in the system: the boolean and its
/// in-flight transition. Rendering never mutates it; callers apply events and
/// then re-render with the progress scalar sampled at the frame timestamp.
pub struct ToggleState {
    /// Current logical state.
    pub on: bool,
    /// Transition duration used for taps, in seconds.
    pub transition_s: f64,
    tween: Tween,
}

impl ToggleState {
    /// A settled state with a 1 second tap transition.
    pub fn new(on: bool) -> Self {
        Self::with_transition(on, 1.0)
    }

    /// A settled state with an explicit tap transition duration.
    pub fn with_transition(on: bool, transition_s: f64) -> Self {
        let resting = if on { 1.0 } else { 0.0 };
        Self {
            on,
            transition_s,
            tween: Tween {
                from: resting,
                to: resting,
                start_s: 0.0,
                duration_s: 0.0,
                ease: Ease::Linear,
            },
        }
    }

    /// Apply an event, flipping the boolean and retargeting the transition
    /// from the current progress value.
    pub fn apply(&mut self, event: Event) -> CurlicueResult<()> {
        match event {
            Event::Tap { now_s } => {
                let from = self.progress(now_s);
                self.on = !self.on;
                let to = if self.on { 1.0 } else { 0.0 };
                self.tween = Tween::new(from, to, now_s, self.transition_s, Ease::Linear)?;
            }
        }
        Ok(())
    }

    /// Raw progress scalar at `now_s`.
    ///
    /// Exactly 0 or 1 once the transition has settled; per-node easing is
    /// applied on top of this value during evaluation.
    pub fn progress(&self, now_s: f64) -> f64 {
        self.tween.sample(now_s)
    }

    /// Whether a transition is still running at `now_s`.
    pub fn animating(&self, now_s: f64) -> bool {
        !self.tween.finished(now_s)
    }
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
