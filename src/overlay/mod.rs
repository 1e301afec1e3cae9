//! Small consumers of scan events and geometry queries.

pub(crate) mod cycle;
pub(crate) mod flicker;
pub(crate) mod icons;
pub(crate) mod outline;
