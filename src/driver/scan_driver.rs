use std::sync::Arc;

use crate::{
    driver::{params, sink::ParamSink},
    foundation::{core::SampleRate, error::ScanResult},
    scan::activation::ScanActivation,
    sim::{config::ScanConfig, simulator::PhaseSimulator},
    timeline::{
        buffer::{TimelineBuffer, TimelineSample},
        player::TimelinePlayback,
        recorder::TimelineRecorder,
    },
};

/// Per-frame outputs of a [`ScanDriver`] tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ScanFrame {
    /// Ring spread radius.
    pub radius: f64,
    /// Primary effect opacity.
    pub opacity: f64,
    /// Backdrop overlay opacity.
    pub overlay_opacity: f64,
}

impl From<&TimelineSample> for ScanFrame {
    fn from(s: &TimelineSample) -> Self {
        Self {
            radius: s.radius,
            opacity: s.opacity,
            overlay_opacity: s.overlay_opacity,
        }
    }
}

#[derive(Clone, Debug)]
enum Source {
    Live(PhaseSimulator),
    Baked {
        playback: TimelinePlayback,
        running: bool,
        last: ScanFrame,
    },
}

/// Drives one scan timeline per frame and publishes its outputs to a [`ParamSink`].
///
/// The timeline comes either from a live [`PhaseSimulator`] or from a baked buffer replayed
/// with a time-scale multiplier. The cone angle is written once per
/// [`restart`](Self::restart). Every [`tick`](Self::tick) writes radius, opacities, and the
/// current activation's origin and planar direction.
#[derive(Clone, Debug)]
pub struct ScanDriver {
    source: Source,
    activation: Option<Arc<ScanActivation>>,
}

impl ScanDriver {
    /// Driver stepping a live simulation of `config`.
    pub fn live(config: ScanConfig) -> ScanResult<Self> {
        Ok(Self {
            source: Source::Live(PhaseSimulator::new(config)?),
            activation: None,
        })
    }

    /// Driver replaying a shared baked timeline at `time_scale`.
    pub fn baked(buffer: Arc<TimelineBuffer>, time_scale: f64) -> ScanResult<Self> {
        let playback = TimelinePlayback::with_time_scale(buffer, time_scale)?;
        Ok(Self {
            source: Source::Baked {
                playback,
                running: false,
                last: ScanFrame::default(),
            },
            activation: None,
        })
    }

    /// Bake `config` at `rate` and replay the result at `time_scale`.
    pub fn bake(config: &ScanConfig, rate: SampleRate, time_scale: f64) -> ScanResult<Self> {
        let buffer = TimelineRecorder::bake(config, rate)?;
        Self::baked(Arc::new(buffer), time_scale)
    }

    /// Start the timeline over for a new activation.
    ///
    /// Writes the cone angle to `sink`, then resets the source to the start of spawning. A scan
    /// already in progress is superseded.
    pub fn restart(&mut self, activation: Arc<ScanActivation>, sink: &mut impl ParamSink) {
        sink.set_float(params::SCAN_MAX_ANGLE, activation.max_angle());

        match &mut self.source {
            Source::Live(sim) => sim.start(),
            Source::Baked {
                playback,
                running,
                last,
            } => {
                playback.restart();
                *running = true;
                *last = ScanFrame::from(playback.current());
            }
        }
        self.activation = Some(activation);
    }

    /// Advance by `dt` and write the per-frame outputs to `sink`.
    ///
    /// An idle driver still writes; its opacities are zero. Origin and direction are written
    /// once an activation exists.
    pub fn tick(&mut self, dt: f64, sink: &mut impl ParamSink) -> ScanFrame {
        let frame = match &mut self.source {
            Source::Live(sim) => {
                sim.advance(dt);
                let s = sim.state();
                ScanFrame {
                    radius: s.radius,
                    opacity: s.opacity,
                    overlay_opacity: s.overlay_opacity,
                }
            }
            Source::Baked {
                playback,
                running,
                last,
            } => {
                if *running {
                    *last = ScanFrame::from(&playback.advance(dt));
                    if playback.is_finished() {
                        *running = false;
                    }
                }
                *last
            }
        };

        sink.set_float(params::SCAN_RADIUS, frame.radius);
        sink.set_float(params::SCAN_OPACITY, frame.opacity);
        sink.set_float(params::SCAN_OVERLAY_OPACITY, frame.overlay_opacity);
        if let Some(activation) = &self.activation {
            sink.set_vector(params::SCAN_ORIGIN, activation.origin());
            sink.set_vector(params::SCAN_DIRECTION_XZ, activation.direction());
        }
        frame
    }

    /// Whether the timeline is still running.
    pub fn is_active(&self) -> bool {
        match &self.source {
            Source::Live(sim) => sim.is_active(),
            Source::Baked { running, .. } => *running,
        }
    }

    /// Whether this driver replays a baked buffer.
    pub fn is_baked(&self) -> bool {
        matches!(self.source, Source::Baked { .. })
    }

    /// Activation the current timeline belongs to.
    pub fn activation(&self) -> Option<&Arc<ScanActivation>> {
        self.activation.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/scan_driver.rs"]
mod tests;
