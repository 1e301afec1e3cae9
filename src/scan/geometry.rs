use crate::{foundation::core::Vec3, scan::activation::ScanActivation};

/// Membership predicates over the current scan activation.
///
/// Borrowed from [`crate::ScanAuthority::query`], so it always reflects the most recently
/// triggered activation. With no activation, both predicates are false.
#[derive(Clone, Copy, Debug)]
pub struct ScanGeometryQuery<'a> {
    activation: Option<&'a ScanActivation>,
}

impl<'a> ScanGeometryQuery<'a> {
    /// Query over an explicit activation, or none.
    pub fn new(activation: Option<&'a ScanActivation>) -> Self {
        Self { activation }
    }

    /// Activation being queried.
    pub fn activation(&self) -> Option<&'a ScanActivation> {
        self.activation
    }

    /// See [`ScanActivation::inside_angle`].
    pub fn inside_angle(&self, position: Vec3) -> bool {
        self.activation.is_some_and(|a| a.inside_angle(position))
    }

    /// See [`ScanActivation::inside_range`].
    pub fn inside_range(&self, position: Vec3) -> bool {
        self.activation.is_some_and(|a| a.inside_range(position))
    }

    /// Both predicates at once, as overlay consumers use them.
    pub fn contains(&self, position: Vec3) -> bool {
        self.inside_range(position) && self.inside_angle(position)
    }
}
