/// Simulation stage of a scan timeline.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ScanPhase {
    /// Not running; initial and terminal state.
    #[default]
    Inactive,
    /// Ring appears and its velocity eases down to the prewarm velocity.
    Spawning,
    /// Velocity held while the ring settles.
    Prewarm,
    /// Ring accelerates outward, decelerates and fades.
    Expanding,
}

impl ScanPhase {
    /// True for every phase except [`ScanPhase::Inactive`].
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Inactive)
    }

    /// Phase entered when this one completes.
    pub fn next(self) -> Self {
        match self {
            Self::Spawning => Self::Prewarm,
            Self::Prewarm => Self::Expanding,
            Self::Expanding | Self::Inactive => Self::Inactive,
        }
    }
}

impl std::fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Inactive => "inactive",
            Self::Spawning => "spawning",
            Self::Prewarm => "prewarm",
            Self::Expanding => "expanding",
        };
        f.write_str(s)
    }
}

/// Simulated time attributed to each active phase since the last start.
///
/// A step is attributed to the phase that was current when the step began.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct PhaseClock {
    /// Seconds stepped while Spawning.
    pub spawning: f64,
    /// Seconds stepped while in Prewarm.
    pub prewarm: f64,
    /// Seconds stepped while Expanding.
    pub expanding: f64,
}

impl PhaseClock {
    pub(crate) fn record(&mut self, phase: ScanPhase, dt: f64) {
        match phase {
            ScanPhase::Spawning => self.spawning += dt,
            ScanPhase::Prewarm => self.prewarm += dt,
            ScanPhase::Expanding => self.expanding += dt,
            ScanPhase::Inactive => {}
        }
    }

    /// Total stepped time across the active phases.
    pub fn active_total(&self) -> f64 {
        self.spawning + self.prewarm + self.expanding
    }
}
