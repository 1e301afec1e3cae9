use crate::{
    animation::ease::Ease,
    foundation::math::{clamp01, lerp},
};

/// One eased segment: moves from `from` to `to` over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EasingProfile {
    /// Curve applied to segment progress.
    pub ease: Ease,
    /// Value at the start of the segment.
    pub from: f64,
    /// Value at the end of the segment.
    pub to: f64,
    /// Segment length in seconds.
    pub duration: f64,
}

impl EasingProfile {
    /// Build a profile.
    pub fn new(ease: Ease, from: f64, to: f64, duration: f64) -> Self {
        Self {
            ease,
            from,
            to,
            duration,
        }
    }

    /// Clamped curve progress after `elapsed` seconds into the segment.
    pub fn progress(&self, elapsed: f64) -> f64 {
        clamp01(self.ease.evaluate(elapsed, self.duration))
    }

    /// Value after `elapsed` seconds into the segment.
    pub fn sample(&self, elapsed: f64) -> f64 {
        lerp(self.from, self.to, self.progress(elapsed))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/profile.rs"]
mod tests;
