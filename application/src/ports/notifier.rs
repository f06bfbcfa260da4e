//! Session notification port
//!
//! Defines the sink that is told about phase and round changes.

use idea_domain::SessionEvent;
use std::sync::Arc;

/// Receives session events after they are committed
///
/// Delivery is fire-and-forget: `notify` cannot fail and is never awaited,
/// so a slow or broken sink cannot affect session state. Implementations
/// live in the infrastructure and presentation layers (event log, console,
/// progress bars, push transports).
pub trait SessionNotifier: Send + Sync {
    fn notify(&self, event: &SessionEvent);
}

/// No-op notifier for when nobody is listening
pub struct NoNotifier;

impl SessionNotifier for NoNotifier {
    fn notify(&self, _event: &SessionEvent) {}
}

/// Fans every event out to several notifiers, in order
///
/// ```text
/// RunSessionUseCase ──▶ CompositeNotifier ─┬─▶ JsonlSessionEventLog
///                                          └─▶ ProgressReporter
/// ```
#[derive(Default)]
pub struct CompositeNotifier {
    delegates: Vec<Arc<dyn SessionNotifier>>,
}

impl CompositeNotifier {
    pub fn new(delegates: Vec<Arc<dyn SessionNotifier>>) -> Self {
        Self { delegates }
    }

    pub fn push(&mut self, notifier: Arc<dyn SessionNotifier>) {
        self.delegates.push(notifier);
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl SessionNotifier for CompositeNotifier {
    fn notify(&self, event: &SessionEvent) {
        for delegate in &self.delegates {
            delegate.notify(event);
        }
    }
}
