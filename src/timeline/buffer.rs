use crate::foundation::{
    error::{ScanError, ScanResult},
    math::lerp,
};

/// One recorded instant of a scan timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineSample {
    /// Seconds since the timeline started.
    pub time: f64,
    /// Ring spread radius.
    pub radius: f64,
    /// Primary effect opacity.
    pub opacity: f64,
    /// Backdrop overlay opacity.
    pub overlay_opacity: f64,
}

impl TimelineSample {
    /// Field-wise interpolation between `a` and `b`; `t` is not clamped.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            time: lerp(a.time, b.time, t),
            radius: lerp(a.radius, b.radius, t),
            opacity: lerp(a.opacity, b.opacity, t),
            overlay_opacity: lerp(a.overlay_opacity, b.overlay_opacity, t),
        }
    }

    fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.radius.is_finite()
            && self.opacity.is_finite()
            && self.overlay_opacity.is_finite()
    }
}

/// Immutable, time-ordered sequence of timeline samples.
///
/// Always holds at least one sample and sample times strictly increase. Buffers produced by
/// [`crate::TimelineRecorder`] additionally end on a zero-opacity sample at the full timeline
/// duration.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimelineBuffer {
    samples: Vec<TimelineSample>,
}

impl TimelineBuffer {
    /// Validate and wrap a sample sequence.
    pub fn from_samples(samples: Vec<TimelineSample>) -> ScanResult<Self> {
        validate_samples(&samples)?;
        Ok(Self { samples })
    }

    pub(crate) fn from_recorded(samples: Vec<TimelineSample>) -> Self {
        debug_assert!(validate_samples(&samples).is_ok());
        Self { samples }
    }

    /// Samples in time order.
    pub fn samples(&self) -> &[TimelineSample] {
        &self.samples
    }

    /// Number of samples (always >= 1).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First sample.
    pub fn first(&self) -> &TimelineSample {
        &self.samples[0]
    }

    /// Last sample.
    pub fn last(&self) -> &TimelineSample {
        &self.samples[self.samples.len() - 1]
    }

    /// Time of the last sample.
    pub fn duration(&self) -> f64 {
        self.last().time
    }
}

pub(crate) fn validate_samples(samples: &[TimelineSample]) -> ScanResult<()> {
    if samples.is_empty() {
        return Err(ScanError::timeline("timeline must contain at least one sample"));
    }
    if let Some(i) = samples.iter().position(|s| !s.is_finite()) {
        return Err(ScanError::timeline(format!(
            "timeline sample {i} has a non-finite field"
        )));
    }
    if let Some(i) = samples.windows(2).position(|w| w[0].time >= w[1].time) {
        return Err(ScanError::timeline(format!(
            "timeline sample times must strictly increase (samples {i} and {})",
            i + 1
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/buffer.rs"]
mod tests;
