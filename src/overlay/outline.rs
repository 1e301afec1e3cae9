use crate::{
    foundation::core::Vec3,
    scan::authority::ScanEvent,
};

/// Highlight state of one special object driven by scan events.
///
/// On [`ScanEvent::Started`] the object is highlighted iff it is inside both the activation
/// range and the cone. [`ScanEvent::Ended`] reverts it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineSwitch {
    position: Vec3,
    highlighted: bool,
}

impl OutlineSwitch {
    /// Unhighlighted switch for an object at `position`.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            highlighted: false,
        }
    }

    /// Move the object; takes effect on the next scan event.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Object position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Whether the object is currently highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Apply a scan event and return the new highlight state.
    pub fn handle(&mut self, event: &ScanEvent) -> bool {
        self.highlighted = match event {
            ScanEvent::Started(activation) => {
                activation.inside_range(self.position) && activation.inside_angle(self.position)
            }
            ScanEvent::Ended => false,
        };
        self.highlighted
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/outline.rs"]
mod tests;
