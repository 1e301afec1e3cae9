use crate::{
    foundation::error::ScanResult,
    sim::{
        config::{ScanConfig, ScanProfiles},
        phase::{PhaseClock, ScanPhase},
    },
};

/// Instantaneous values of a running (or finished) scan timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct SimulationState {
    /// Current phase.
    pub phase: ScanPhase,
    /// Seconds spent in the current phase, including carried remainders.
    pub phase_elapsed: f64,
    /// Ring spread velocity, clamped to `[0, expansion_max_velocity]`.
    pub velocity: f64,
    /// Ring spread radius; never decreases while active.
    pub radius: f64,
    /// Primary effect opacity in `[0, 1]`.
    pub opacity: f64,
    /// Backdrop overlay opacity in `[0, 1]`.
    pub overlay_opacity: f64,
}

/// Three-phase scan simulation shared by live stepping and offline baking.
///
/// Phase exits are checked once per [`advance`](Self::advance), with the overshoot carried
/// into the next phase. A step larger than a whole phase therefore lands in that phase with
/// its remainder already past the phase length, and leaves it on the following step.
#[derive(Clone, Debug)]
pub struct PhaseSimulator {
    config: ScanConfig,
    profiles: ScanProfiles,
    state: SimulationState,
    clock: PhaseClock,
}

impl PhaseSimulator {
    /// Build an inactive simulator; fails if `config` is invalid.
    pub fn new(config: ScanConfig) -> ScanResult<Self> {
        config.validate()?;
        let profiles = config.profiles();
        Ok(Self {
            config,
            profiles,
            state: SimulationState::default(),
            clock: PhaseClock::default(),
        })
    }

    /// Config this simulator runs.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> ScanPhase {
        self.state.phase
    }

    /// Whether the timeline is still running.
    pub fn is_active(&self) -> bool {
        self.state.phase.is_active()
    }

    /// Time stepped in each phase since the last [`start`](Self::start).
    pub fn clock(&self) -> &PhaseClock {
        &self.clock
    }

    /// (Re)enter Spawning with the configured entry values.
    pub fn start(&mut self) {
        self.state = SimulationState {
            phase: ScanPhase::Spawning,
            phase_elapsed: 0.0,
            velocity: self.config.spawn_initial_velocity,
            radius: self.config.spawn_initial_radius,
            opacity: 0.0,
            overlay_opacity: 0.0,
        };
        self.clock = PhaseClock::default();
        self.update_opacity();
    }

    /// Reset to the inactive defaults without running the timeline.
    pub fn reset(&mut self) {
        self.state = SimulationState::default();
        self.clock = PhaseClock::default();
    }

    /// Advance the timeline by `dt` seconds. No-op while inactive or for non-positive `dt`.
    pub fn advance(&mut self, dt: f64) {
        if !self.state.phase.is_active() || dt.is_nan() || dt <= 0.0 {
            return;
        }

        let phase = self.state.phase;
        self.clock.record(phase, dt);
        self.state.phase_elapsed += dt;

        let d = self.config.durations;
        match phase {
            ScanPhase::Spawning if self.state.phase_elapsed >= d.spawn => {
                self.carry_into_next(d.spawn, d.prewarm);
            }
            ScanPhase::Prewarm if self.state.phase_elapsed >= d.prewarm => {
                self.carry_into_next(d.prewarm, d.expand);
            }
            ScanPhase::Expanding if self.state.phase_elapsed >= d.expand => {
                self.complete();
                return;
            }
            _ => {}
        }

        self.update_velocity(dt);
        self.update_opacity();
    }

    fn carry_into_next(&mut self, finished_len: f64, next_len: f64) {
        let from = self.state.phase;
        let to = from.next();
        self.state.phase_elapsed -= finished_len;
        self.state.phase = to;
        tracing::debug!(%from, %to, carried = self.state.phase_elapsed, "scan phase transition");
        if self.state.phase_elapsed >= next_len {
            tracing::trace!(phase = %to, "step carried past the whole phase");
        }
    }

    fn complete(&mut self) {
        tracing::debug!(radius = self.state.radius, "scan timeline complete");
        self.state.phase = ScanPhase::Inactive;
        self.state.phase_elapsed = 0.0;
        self.state.velocity = 0.0;
        self.state.opacity = 0.0;
        self.state.overlay_opacity = 0.0;
    }

    fn update_velocity(&mut self, dt: f64) {
        let p = &self.profiles;
        let elapsed = self.state.phase_elapsed;
        let max_velocity_time = self.config.expansion_max_velocity_time;

        let velocity = match self.state.phase {
            ScanPhase::Spawning => p.spawn_velocity.sample(elapsed),
            ScanPhase::Prewarm => self.state.velocity,
            ScanPhase::Expanding => {
                if elapsed <= max_velocity_time {
                    p.expand_accelerate.sample(elapsed)
                } else {
                    p.expand_decelerate.sample(elapsed - max_velocity_time)
                }
            }
            ScanPhase::Inactive => 0.0,
        };

        self.state.velocity = velocity.min(self.config.expansion_max_velocity).max(0.0);
        self.state.radius += dt * self.state.velocity;
    }

    fn update_opacity(&mut self) {
        let p = &self.profiles;
        let elapsed = self.state.phase_elapsed;

        let (opacity, overlay) = match self.state.phase {
            ScanPhase::Spawning => (p.spawn_opacity.sample(elapsed), 1.0),
            ScanPhase::Prewarm => (self.config.spawn_final_opacity, 1.0),
            ScanPhase::Expanding => {
                let opacity = if elapsed >= p.fade_out_start {
                    p.expand_fade_out.sample(elapsed - p.fade_out_start)
                } else {
                    self.config.spawn_final_opacity
                };
                let overlay = if elapsed <= p.overlay_fade_out.duration {
                    p.overlay_fade_out.sample(elapsed)
                } else {
                    0.0
                };
                (opacity, overlay)
            }
            ScanPhase::Inactive => (0.0, 0.0),
        };

        self.state.opacity = opacity;
        self.state.overlay_opacity = overlay;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/simulator.rs"]
mod tests;
