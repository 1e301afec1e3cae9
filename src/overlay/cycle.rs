use crate::foundation::{
    error::{ScanError, ScanResult},
    math::clamp01,
};

/// Stage of one fade-in / hold / fade-out / hold cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CyclePhase {
    /// Alpha ramps 0 to 1.
    FadeIn,
    /// Alpha held at 1.
    Visible,
    /// Alpha ramps 1 to 0.
    FadeOut,
    /// Alpha held at 0.
    Hidden,
}

impl CyclePhase {
    /// Following phase; `Hidden` wraps to `FadeIn` of the next cycle.
    pub fn next(self) -> Self {
        match self {
            Self::FadeIn => Self::Visible,
            Self::Visible => Self::FadeOut,
            Self::FadeOut => Self::Hidden,
            Self::Hidden => Self::FadeIn,
        }
    }
}

/// Timing of a repeated visibility cycle (outline flicker, icon pulses).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CycleSettings {
    /// Number of visible cycles.
    pub cycles: u32,
    /// Seconds spent in [`CyclePhase::FadeIn`].
    pub fade_in: f64,
    /// Seconds spent in [`CyclePhase::Visible`].
    pub visible: f64,
    /// Seconds spent in [`CyclePhase::FadeOut`].
    pub fade_out: f64,
    /// Seconds spent in [`CyclePhase::Hidden`].
    pub hidden: f64,
}

impl CycleSettings {
    /// Outline flicker used for highlighted special objects.
    pub fn outline_flicker() -> Self {
        Self {
            cycles: 9,
            fade_in: 0.1,
            visible: 0.3,
            fade_out: 0.2,
            hidden: 0.1,
        }
    }

    /// Slow pulse used by terrain scan icons.
    pub fn icon_pulse() -> Self {
        Self {
            cycles: 6,
            fade_in: 0.15,
            visible: 1.5,
            fade_out: 2.0,
            hidden: 0.5,
        }
    }

    /// Reject negative or non-finite phase lengths.
    pub fn validate(&self) -> ScanResult<()> {
        for (name, v) in [
            ("fade_in", self.fade_in),
            ("visible", self.visible),
            ("fade_out", self.fade_out),
            ("hidden", self.hidden),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ScanError::config(format!(
                    "cycle {name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        Ok(())
    }

    /// Length of `phase`.
    pub fn phase_duration(&self, phase: CyclePhase) -> f64 {
        match phase {
            CyclePhase::FadeIn => self.fade_in,
            CyclePhase::Visible => self.visible,
            CyclePhase::FadeOut => self.fade_out,
            CyclePhase::Hidden => self.hidden,
        }
    }

    /// Length of one full cycle.
    pub fn cycle_duration(&self) -> f64 {
        self.fade_in + self.visible + self.fade_out + self.hidden
    }

    /// Alpha after `elapsed` seconds in `phase`.
    pub fn alpha(&self, phase: CyclePhase, elapsed: f64) -> f64 {
        let ramp = |len: f64| if len > 0.0 { clamp01(elapsed / len) } else { 1.0 };
        match phase {
            CyclePhase::FadeIn => ramp(self.fade_in),
            CyclePhase::Visible => 1.0,
            CyclePhase::FadeOut => 1.0 - ramp(self.fade_out),
            CyclePhase::Hidden => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/cycle.rs"]
mod tests;
