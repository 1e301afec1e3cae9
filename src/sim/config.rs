use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::{ease::Ease, profile::EasingProfile},
    foundation::error::{ScanError, ScanResult},
};

/// Lengths of the three active phases, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhaseDurations {
    /// Spawning phase length.
    pub spawn: f64,
    /// Prewarm phase length.
    pub prewarm: f64,
    /// Expanding phase length.
    pub expand: f64,
}

impl PhaseDurations {
    /// Full timeline length `spawn + prewarm + expand`.
    pub fn total(&self) -> f64 {
        self.spawn + self.prewarm + self.expand
    }

    fn validate(&self) -> ScanResult<()> {
        for (name, v) in [
            ("spawn", self.spawn),
            ("prewarm", self.prewarm),
            ("expand", self.expand),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ScanError::config(format!(
                    "{name} duration must be finite and > 0 (got {v})"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            spawn: 0.2,
            prewarm: 0.3,
            expand: 2.5,
        }
    }
}

/// Kinematic and opacity parameters of one scan timeline.
///
/// Every field has a tuned default, so JSON documents only need to name the values they
/// override.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Phase lengths.
    pub durations: PhaseDurations,

    /// Ring velocity on entering Spawning.
    pub spawn_initial_velocity: f64,
    /// Velocity reached at the end of Spawning and held through Prewarm.
    pub prewarm_velocity: f64,
    /// Ring radius on entering Spawning.
    pub spawn_initial_radius: f64,
    /// Primary opacity reached at the end of Spawning.
    pub spawn_final_opacity: f64,
    /// Curve easing velocity during Spawning.
    pub spawn_velocity_ease: Ease,
    /// Curve easing opacity during Spawning.
    pub spawn_opacity_ease: Ease,

    /// Curve accelerating toward `expansion_max_velocity`.
    pub expansion_acceleration_ease: Ease,
    /// Upper velocity bound; also the clamp applied every step.
    pub expansion_max_velocity: f64,
    /// Time into Expanding at which the max velocity is reached.
    pub expansion_max_velocity_time: f64,
    /// Curve decelerating toward `expansion_final_velocity`.
    pub expansion_deceleration_ease: Ease,
    /// Velocity at the end of Expanding.
    pub expansion_final_velocity: f64,

    /// Curve fading the primary opacity out at the end of Expanding.
    pub fade_out_ease: Ease,
    /// Length of the trailing fade-out window.
    pub fade_out_duration: f64,

    /// Curve fading the overlay opacity out at the start of Expanding.
    pub overlay_fade_ease: Ease,
    /// Length of the leading overlay fade window.
    pub overlay_fade_duration: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            durations: PhaseDurations::default(),
            spawn_initial_velocity: 15.0,
            prewarm_velocity: 2.0,
            spawn_initial_radius: 0.5,
            spawn_final_opacity: 0.55,
            spawn_velocity_ease: Ease::InCubic,
            spawn_opacity_ease: Ease::InQuart,
            expansion_acceleration_ease: Ease::InOutQuad,
            expansion_max_velocity: 300.0,
            expansion_max_velocity_time: 0.3,
            expansion_deceleration_ease: Ease::OutCubic,
            expansion_final_velocity: 5.0,
            fade_out_ease: Ease::OutQuad,
            fade_out_duration: 1.7,
            overlay_fade_ease: Ease::OutCubic,
            overlay_fade_duration: 0.2,
        }
    }
}

/// The six eased segments the simulator evaluates, derived from a [`ScanConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanProfiles {
    /// Spawning velocity, initial to prewarm.
    pub spawn_velocity: EasingProfile,
    /// Spawning opacity, 0 to the spawn final opacity.
    pub spawn_opacity: EasingProfile,
    /// Expanding acceleration, prewarm to max velocity.
    pub expand_accelerate: EasingProfile,
    /// Expanding deceleration, max to final velocity.
    pub expand_decelerate: EasingProfile,
    /// Trailing primary fade-out.
    pub expand_fade_out: EasingProfile,
    /// Leading overlay fade-out.
    pub overlay_fade_out: EasingProfile,
    /// Time into Expanding at which the primary fade-out starts.
    pub fade_out_start: f64,
}

impl ScanConfig {
    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScanResult<Self> {
        let cfg: ScanConfig = serde_json::from_reader(r)
            .map_err(|e| ScanError::serde(format!("parse scan config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON string and validate it.
    pub fn from_json_str(s: &str) -> ScanResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a config from a JSON file on disk and validate it.
    #[tracing::instrument(skip_all)]
    pub fn from_path(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading scan config");
        let f = File::open(path)
            .with_context(|| format!("open scan config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Full timeline length.
    pub fn total_duration(&self) -> f64 {
        self.durations.total()
    }

    /// Reject configurations the simulator cannot run.
    pub fn validate(&self) -> ScanResult<()> {
        self.durations.validate()?;

        for (name, v) in [
            ("spawn_initial_velocity", self.spawn_initial_velocity),
            ("prewarm_velocity", self.prewarm_velocity),
            ("spawn_initial_radius", self.spawn_initial_radius),
            ("expansion_max_velocity", self.expansion_max_velocity),
            ("expansion_final_velocity", self.expansion_final_velocity),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ScanError::config(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if self.expansion_max_velocity < self.expansion_final_velocity {
            return Err(ScanError::config(format!(
                "expansion_max_velocity ({}) must be >= expansion_final_velocity ({})",
                self.expansion_max_velocity, self.expansion_final_velocity
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_final_opacity) {
            return Err(ScanError::config(format!(
                "spawn_final_opacity must be in [0, 1] (got {})",
                self.spawn_final_opacity
            )));
        }

        let expand = self.durations.expand;
        for (name, v) in [
            ("expansion_max_velocity_time", self.expansion_max_velocity_time),
            ("fade_out_duration", self.fade_out_duration),
            ("overlay_fade_duration", self.overlay_fade_duration),
        ] {
            if !v.is_finite() || v < 0.0 || v > expand {
                return Err(ScanError::config(format!(
                    "{name} must be in [0, expand duration {expand}] (got {v})"
                )));
            }
        }
        Ok(())
    }

    /// Eased segments for this config. Assumes the config is valid.
    pub fn profiles(&self) -> ScanProfiles {
        let d = &self.durations;
        ScanProfiles {
            spawn_velocity: EasingProfile::new(
                self.spawn_velocity_ease,
                self.spawn_initial_velocity,
                self.prewarm_velocity,
                d.spawn,
            ),
            spawn_opacity: EasingProfile::new(
                self.spawn_opacity_ease,
                0.0,
                self.spawn_final_opacity,
                d.spawn,
            ),
            expand_accelerate: EasingProfile::new(
                self.expansion_acceleration_ease,
                self.prewarm_velocity,
                self.expansion_max_velocity,
                self.expansion_max_velocity_time,
            ),
            expand_decelerate: EasingProfile::new(
                self.expansion_deceleration_ease,
                self.expansion_max_velocity,
                self.expansion_final_velocity,
                d.expand - self.expansion_max_velocity_time,
            ),
            expand_fade_out: EasingProfile::new(
                self.fade_out_ease,
                self.spawn_final_opacity,
                0.0,
                self.fade_out_duration,
            ),
            overlay_fade_out: EasingProfile::new(
                self.overlay_fade_ease,
                1.0,
                0.0,
                self.overlay_fade_duration,
            ),
            fade_out_start: d.expand - self.fade_out_duration,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/config.rs"]
mod tests;
