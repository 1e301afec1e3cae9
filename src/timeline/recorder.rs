use rayon::prelude::*;

use crate::{
    foundation::{
        core::SampleRate,
        error::{ScanError, ScanResult},
    },
    sim::{config::ScanConfig, simulator::PhaseSimulator},
    timeline::buffer::{TimelineBuffer, TimelineSample},
};

/// Largest number of natural samples a single bake may record (about 4.8 hours at 240 Hz).
pub const MAX_BAKE_SAMPLES: usize = 1 << 22;

/// Bakes scan timelines into fixed-rate sample buffers.
pub struct TimelineRecorder;

impl TimelineRecorder {
    /// Run a fresh simulation of `config` at `rate` and record one sample per step.
    ///
    /// Sample `i` holds the state at `i / rate` seconds, recorded before that step advances.
    /// A zero-opacity sample at exactly the total duration always closes the buffer.
    ///
    /// Playback matches a live simulation only when the live step equals `1 / rate`; the
    /// radius is integrated per step, so other step sizes drift by an amount proportional to
    /// the step. Fails when the bake would need more than [`MAX_BAKE_SAMPLES`] samples.
    #[tracing::instrument(skip(config))]
    pub fn bake(config: &ScanConfig, rate: SampleRate) -> ScanResult<TimelineBuffer> {
        let mut sim = PhaseSimulator::new(config.clone())?;
        let total = config.total_duration();
        let expected = natural_sample_count(total, rate)?
            .checked_add(1)
            .ok_or_else(|| ScanError::config("bake sample count overflows"))?;

        sim.start();
        let dt = rate.step_secs();
        let mut samples = Vec::with_capacity(expected);

        let mut index = 0u64;
        loop {
            let time = rate.sample_time(index);
            if time >= total {
                break;
            }
            let s = sim.state();
            samples.push(TimelineSample {
                time,
                radius: s.radius,
                opacity: s.opacity,
                overlay_opacity: s.overlay_opacity,
            });
            sim.advance(dt);
            index += 1;
        }

        samples.push(TimelineSample {
            time: total,
            radius: sim.state().radius,
            opacity: 0.0,
            overlay_opacity: 0.0,
        });

        tracing::debug!(samples = samples.len(), total, "baked scan timeline");
        Ok(TimelineBuffer::from_recorded(samples))
    }

    /// Bake several independent configs in parallel; results keep the input order.
    #[tracing::instrument(skip(configs), fields(count = configs.len()))]
    pub fn bake_all(configs: &[ScanConfig], rate: SampleRate) -> Vec<ScanResult<TimelineBuffer>> {
        configs
            .par_iter()
            .map(|config| Self::bake(config, rate))
            .collect()
    }
}

fn natural_sample_count(total: f64, rate: SampleRate) -> ScanResult<usize> {
    let count = (total * f64::from(rate.hz())).ceil();
    if !count.is_finite() || count > MAX_BAKE_SAMPLES as f64 {
        return Err(ScanError::config(format!(
            "bake of {total}s at {} Hz exceeds {MAX_BAKE_SAMPLES} samples",
            rate.hz()
        )));
    }
    Ok(count as usize)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/recorder.rs"]
mod tests;
