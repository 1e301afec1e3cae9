pub(crate) mod activation;
pub(crate) mod authority;
pub(crate) mod geometry;
