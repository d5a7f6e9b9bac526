use event_emitter_rs::EventEmitter;
use tracing::warn;

use super::{Notification, Notifier};

/// Re-emits notifications through an [`EventEmitter`] for in-process
/// listeners. The event name is [`Notification::kind`] and the payload is
/// the notification as a JSON string.
///
/// `EventEmitter` runs listeners on their own threads, so listeners should
/// not assume they run before `notify` returns.
pub struct EmitterNotifier {
    emitter: EventEmitter,
}

impl Default for EmitterNotifier {
    fn default() -> Self {
        Self::new(EventEmitter::new())
    }
}

impl EmitterNotifier {
    pub fn new(emitter: EventEmitter) -> Self {
        EmitterNotifier { emitter }
    }

    /// Register a listener for one notification kind.
    pub fn on<F>(&mut self, kind: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(kind, listener);
    }
}

impl Notifier for EmitterNotifier {
    fn notify(&mut self, notification: &Notification) {
        match serde_json::to_string(notification) {
            Ok(payload) => {
                self.emitter.emit(notification.kind(), payload);
            }
            Err(e) => warn!(kind = notification.kind(), error = %e, "Failed to encode notification"),
        }
    }
}
