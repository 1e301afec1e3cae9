use crate::{
    foundation::error::ScanResult,
    overlay::cycle::{CyclePhase, CycleSettings},
};

/// Outline flicker as an explicit phase-indexed timer.
///
/// Runs `cycles` times through FadeIn, Visible, FadeOut and Hidden, then stops at alpha 0.
/// Overshoot past a phase boundary carries into the following phase, so a long frame may cross
/// several phases in one step.
#[derive(Clone, Debug)]
pub struct FlickerTimer {
    settings: CycleSettings,
    cycle: u32,
    phase: CyclePhase,
    elapsed: f64,
    running: bool,
    alpha: f64,
}

impl FlickerTimer {
    /// Stopped timer; fails if `settings` are invalid.
    pub fn new(settings: CycleSettings) -> ScanResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            cycle: 0,
            phase: CyclePhase::FadeIn,
            elapsed: 0.0,
            running: false,
            alpha: 0.0,
        })
    }

    /// Restart from the first fade-in. A running flicker is restarted, not queued.
    pub fn start(&mut self) {
        self.cycle = 0;
        self.phase = CyclePhase::FadeIn;
        self.elapsed = 0.0;
        self.running = self.settings.cycles > 0;
        self.alpha = 0.0;
    }

    /// Stop immediately at alpha 0.
    pub fn stop(&mut self) {
        self.running = false;
        self.alpha = 0.0;
    }

    /// Advance by `dt` seconds and return the new alpha.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if !self.running || dt.is_nan() || dt <= 0.0 {
            return self.alpha;
        }

        self.elapsed += dt;
        loop {
            let len = self.settings.phase_duration(self.phase);
            if self.elapsed < len {
                break;
            }
            self.elapsed -= len;
            if self.phase == CyclePhase::Hidden {
                self.cycle += 1;
                if self.cycle >= self.settings.cycles {
                    self.stop();
                    return self.alpha;
                }
            }
            self.phase = self.phase.next();
        }

        self.alpha = self.settings.alpha(self.phase, self.elapsed);
        self.alpha
    }

    /// Current alpha in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Whether the flicker is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current phase while running.
    pub fn phase(&self) -> Option<CyclePhase> {
        self.running.then_some(self.phase)
    }

    /// Index of the current cycle.
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Total running time of a full flicker.
    pub fn total_duration(&self) -> f64 {
        f64::from(self.settings.cycles) * self.settings.cycle_duration()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/flicker.rs"]
mod tests;
