//! Three-phase scan simulation and its configuration.

pub(crate) mod config;
pub(crate) mod phase;
pub(crate) mod simulator;
