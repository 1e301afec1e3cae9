use std::sync::Arc;

use crate::{
    foundation::{
        error::{ScanError, ScanResult},
        math::{clamp01, inverse_lerp},
    },
    timeline::buffer::{TimelineBuffer, TimelineSample},
};

/// Forward steps tried from the cached bracket before falling back to a binary search.
const LINEAR_PROBE: usize = 8;

/// Interpolated lookup into a recorded timeline.
///
/// Keeps the index of the last bracket it landed on. Monotonically increasing query times
/// (per-frame playback) resolve in O(1) amortized from that hint. Backward seeks and long
/// forward jumps fall back to an O(log n) binary search.
#[derive(Clone, Debug, Default)]
pub struct TimelinePlayer {
    last_index: usize,
}

impl TimelinePlayer {
    /// Player with a cold (zero) hint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower index of the bracket used by the previous query.
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Drop the cached bracket.
    pub fn reset(&mut self) {
        self.last_index = 0;
    }

    /// Sample `buffer` at `query_time`.
    ///
    /// Queries at or before the first sample return it unmodified, as do queries at or past
    /// the last sample. In between, every field is linearly interpolated and `time` is set to
    /// `query_time`.
    pub fn seek(&mut self, buffer: &TimelineBuffer, query_time: f64) -> TimelineSample {
        self.sample_non_empty(buffer.samples(), query_time)
    }

    /// Slice form of [`seek`](Self::seek); fails fast on an empty slice.
    pub fn seek_samples(
        &mut self,
        samples: &[TimelineSample],
        query_time: f64,
    ) -> ScanResult<TimelineSample> {
        if samples.is_empty() {
            return Err(ScanError::timeline("cannot seek an empty timeline"));
        }
        Ok(self.sample_non_empty(samples, query_time))
    }

    fn sample_non_empty(&mut self, samples: &[TimelineSample], t: f64) -> TimelineSample {
        let last = samples.len() - 1;
        if last == 0 || t.is_nan() || t <= samples[0].time {
            self.last_index = 0;
            return samples[0];
        }
        if t >= samples[last].time {
            self.last_index = last - 1;
            return samples[last];
        }

        let i = self.locate(samples, t);
        self.last_index = i;

        let a = &samples[i];
        let b = &samples[i + 1];
        let u = clamp01(inverse_lerp(a.time, b.time, t));
        TimelineSample {
            time: t,
            ..TimelineSample::lerp(a, b, u)
        }
    }

    /// Index `i` with `samples[i].time <= t < samples[i + 1].time`.
    ///
    /// Requires `samples[0].time < t < samples[last].time`.
    fn locate(&self, samples: &[TimelineSample], t: f64) -> usize {
        let last = samples.len() - 1;
        let mut i = self.last_index.min(last - 1);
        if samples[i].time > t {
            return bracket_search(samples, t);
        }
        for _ in 0..LINEAR_PROBE {
            if t < samples[i + 1].time {
                return i;
            }
            i += 1;
        }
        i + bracket_search(&samples[i..], t)
    }
}

fn bracket_search(samples: &[TimelineSample], t: f64) -> usize {
    let above = samples.partition_point(|s| s.time <= t);
    above.saturating_sub(1).min(samples.len() - 2)
}

/// Time-scaled playback clock over a shared baked timeline.
#[derive(Clone, Debug)]
pub struct TimelinePlayback {
    buffer: Arc<TimelineBuffer>,
    player: TimelinePlayer,
    time: f64,
    time_scale: f64,
    current: TimelineSample,
}

impl TimelinePlayback {
    /// Playback at real-time speed, positioned on the first sample.
    pub fn new(buffer: Arc<TimelineBuffer>) -> Self {
        let current = *buffer.first();
        Self {
            buffer,
            player: TimelinePlayer::new(),
            time: 0.0,
            time_scale: 1.0,
            current,
        }
    }

    /// Playback with a time-scale multiplier; `time_scale` must be finite and > 0.
    pub fn with_time_scale(buffer: Arc<TimelineBuffer>, time_scale: f64) -> ScanResult<Self> {
        if !time_scale.is_finite() || time_scale <= 0.0 {
            return Err(ScanError::config(format!(
                "time_scale must be finite and > 0 (got {time_scale})"
            )));
        }
        Ok(Self {
            time_scale,
            ..Self::new(buffer)
        })
    }

    /// Rewind to the first sample.
    pub fn restart(&mut self) {
        self.time = 0.0;
        self.player.reset();
        self.current = *self.buffer.first();
    }

    /// Move the clock by `dt * time_scale` and return the sample there.
    pub fn advance(&mut self, dt: f64) -> TimelineSample {
        if dt.is_finite() && dt > 0.0 {
            self.time += dt * self.time_scale;
            self.current = self.player.seek(&self.buffer, self.time);
        }
        self.current
    }

    /// Sample at the current clock position.
    pub fn current(&self) -> &TimelineSample {
        &self.current
    }

    /// Playback clock, in timeline seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Time-scale multiplier.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Whether the clock has reached the end of the buffer.
    pub fn is_finished(&self) -> bool {
        self.time >= self.buffer.duration()
    }

    /// Timeline being played.
    pub fn buffer(&self) -> &Arc<TimelineBuffer> {
        &self.buffer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/player.rs"]
mod tests;
