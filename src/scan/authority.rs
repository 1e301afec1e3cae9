use std::sync::Arc;

use crate::{
    foundation::{core::Vec3, error::ScanResult},
    scan::{
        activation::{ScanActivation, ScanSettings},
        geometry::ScanGeometryQuery,
    },
};

/// Broadcast to subscribers of a [`ScanAuthority`].
#[derive(Clone, Debug, PartialEq)]
pub enum ScanEvent {
    /// A new activation became current.
    Started(Arc<ScanActivation>),
    /// The current activation's active duration elapsed.
    Ended,
}

/// Handle returned by [`ScanAuthority::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ScanEvent)>;

/// Owner of the current scan activation and its activation clock.
///
/// Consumers are wired explicitly: they either subscribe for start/end events or borrow a
/// [`ScanGeometryQuery`] through [`query`](Self::query).
pub struct ScanAuthority {
    settings: ScanSettings,
    current: Option<Arc<ScanActivation>>,
    activated_at: f64,
    active: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl std::fmt::Debug for ScanAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanAuthority")
            .field("settings", &self.settings)
            .field("current", &self.current)
            .field("activated_at", &self.activated_at)
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ScanAuthority {
    /// Build an authority with no activation; fails if `settings` are invalid.
    pub fn new(settings: ScanSettings) -> ScanResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            current: None,
            activated_at: 0.0,
            active: false,
            listeners: Vec::new(),
            next_id: 0,
        })
    }

    /// Settings stamped onto new activations.
    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Register a listener for start and end events.
    pub fn subscribe(&mut self, listener: impl FnMut(&ScanEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::trace!(?id, "scan listener subscribed");
        id
    }

    /// Remove a listener. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::trace!(?id, "scan listener unsubscribed");
        }
        removed
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Trigger a scan at `origin` spreading along `forward`, at time `now` (seconds).
    pub fn start_scan(
        &mut self,
        origin: Vec3,
        forward: Vec3,
        now: f64,
    ) -> ScanResult<Arc<ScanActivation>> {
        let activation = ScanActivation::new(origin, forward, &self.settings)?;
        Ok(self.start_scan_with(activation, now))
    }

    /// Make a prebuilt activation current, superseding any previous one.
    pub fn start_scan_with(&mut self, activation: ScanActivation, now: f64) -> Arc<ScanActivation> {
        let activation = Arc::new(activation);
        if self.active {
            tracing::debug!("scan superseded by a new activation");
        }
        self.current = Some(Arc::clone(&activation));
        self.activated_at = now;
        self.active = true;
        tracing::debug!(
            origin = ?activation.origin(),
            direction = ?activation.direction(),
            "scan started"
        );
        self.emit(&ScanEvent::Started(Arc::clone(&activation)));
        activation
    }

    /// Advance the activation clock to `now`, firing [`ScanEvent::Ended`] once when the active
    /// duration has elapsed. Returns true on the tick that ended the scan.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(activation) = self.current.as_ref() else {
            return false;
        };
        if !self.active || now - self.activated_at <= activation.active_duration() {
            return false;
        }
        self.active = false;
        tracing::debug!(elapsed = now - self.activated_at, "scan ended");
        self.emit(&ScanEvent::Ended);
        true
    }

    /// Whether the current activation has not yet ended.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Most recent activation, kept after it ends until the next trigger.
    pub fn current(&self) -> Option<&Arc<ScanActivation>> {
        self.current.as_ref()
    }

    /// Geometry predicates over the most recent activation.
    pub fn query(&self) -> ScanGeometryQuery<'_> {
        ScanGeometryQuery::new(self.current.as_deref())
    }

    fn emit(&mut self, event: &ScanEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scan/authority.rs"]
mod tests;
