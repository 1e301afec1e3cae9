//! Baked scan timelines: fixed-rate recording and interpolated playback.

pub(crate) mod buffer;
pub(crate) mod player;
pub(crate) mod recorder;
