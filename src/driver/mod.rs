/// Renderer parameter names.
pub mod params;
pub(crate) mod scan_driver;
pub(crate) mod sink;
