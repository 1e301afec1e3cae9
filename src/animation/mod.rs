pub(crate) mod ease;
pub(crate) mod profile;
