//! scanfx is the timeline engine behind a radially expanding terrain scan effect.
//!
//! A scan is an origin-centred ring that spawns, holds briefly, then expands outward while
//! fading. Its radius and opacities follow a three-phase simulation driven by easing curves,
//! and that simulation can be consumed in two ways:
//!
//! 1. **Live**: a [`PhaseSimulator`] stepped once per frame.
//! 2. **Baked**: [`TimelineRecorder::bake`] records the same simulation at a fixed rate into a
//!    [`TimelineBuffer`], which a [`TimelinePlayer`] replays with interpolated, hinted lookups.
//!
//! Both produce the same series for the same [`ScanConfig`].
//!
//! Around the timeline:
//!
//! - [`ScanAuthority`] owns the current [`ScanActivation`] and broadcasts start/end events
//!   to explicit subscribers.
//! - [`ScanGeometryQuery`] answers the range and cone membership tests overlay consumers poll.
//! - [`ScanDriver`] wires a timeline to a renderer through a [`ParamSink`].
//! - [`FlickerTimer`], [`OutlineSwitch`] and [`IconCycleClock`] cover the small overlay
//!   animations that react to a scan.
//!
//! `unsafe` is forbidden in this crate. Library code reports every invalid input as a
//! [`ScanError`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod driver;
mod foundation;
mod overlay;
mod scan;
mod sim;
mod timeline;

pub use animation::ease::Ease;
pub use animation::profile::EasingProfile;
pub use driver::params;
pub use driver::scan_driver::{ScanDriver, ScanFrame};
pub use driver::sink::{ParamSink, ParamValue, RecordingSink};
pub use foundation::core::{SampleRate, Vec3, flatten_xz, planar_direction};
pub use foundation::error::{ScanError, ScanResult};
pub use overlay::cycle::{CyclePhase, CycleSettings};
pub use overlay::flicker::FlickerTimer;
pub use overlay::icons::IconCycleClock;
pub use overlay::outline::OutlineSwitch;
pub use scan::activation::{ScanActivation, ScanSettings};
pub use scan::authority::{ScanAuthority, ScanEvent, SubscriptionId};
pub use scan::geometry::ScanGeometryQuery;
pub use sim::config::{PhaseDurations, ScanConfig, ScanProfiles};
pub use sim::phase::{PhaseClock, ScanPhase};
pub use sim::simulator::{PhaseSimulator, SimulationState};
pub use timeline::buffer::{TimelineBuffer, TimelineSample};
pub use timeline::player::{TimelinePlayback, TimelinePlayer};
pub use timeline::recorder::{MAX_BAKE_SAMPLES, TimelineRecorder};
