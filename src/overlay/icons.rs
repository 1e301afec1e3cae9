use crate::{foundation::error::ScanResult, overlay::cycle::CycleSettings};

/// Animation clock of the terrain scan icons.
///
/// Icons pulse on the GPU using this clock; the CPU side only tracks time and decides when
/// rendering can stop. One extra hidden cycle runs after the visible ones so every icon has
/// faded out completely before rendering stops.
#[derive(Clone, Debug)]
pub struct IconCycleClock {
    settings: CycleSettings,
    time: f64,
    running: bool,
}

impl IconCycleClock {
    /// Stopped clock; fails if `settings` are invalid.
    pub fn new(settings: CycleSettings) -> ScanResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            time: 0.0,
            running: false,
        })
    }

    /// Restart the clock at zero.
    pub fn start(&mut self) {
        self.time = 0.0;
        self.running = true;
    }

    /// Advance by `dt`; returns true on the step that completes the animation.
    pub fn advance(&mut self, dt: f64) -> bool {
        if !self.running || dt.is_nan() || dt <= 0.0 {
            return false;
        }
        self.time += dt;
        if self.time >= self.active_duration() {
            self.running = false;
            return true;
        }
        false
    }

    /// Seconds since start.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Whether icons should still be rendered.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total time icons stay active: every visible cycle plus one hidden safety cycle.
    pub fn active_duration(&self) -> f64 {
        f64::from(self.settings.cycles + 1) * self.settings.cycle_duration()
    }

    /// Cycle timing.
    pub fn settings(&self) -> &CycleSettings {
        &self.settings
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/icons.rs"]
mod tests;
