use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use super::{Notification, Notifier};

/// Logs notifications through `tracing`, optionally mirroring them into a
/// shared buffer.
#[derive(Default)]
pub struct LogNotifier {
    buffer: Option<Arc<Mutex<Vec<Notification>>>>,
}

impl LogNotifier {
    pub fn new() -> Self {
        LogNotifier { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<Notification>>>) -> Self {
        LogNotifier {
            buffer: Some(buffer),
        }
    }
}

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: &Notification) {
        if notification.is_failure() {
            warn!(kind = notification.kind(), "{}", notification);
        } else {
            info!(kind = notification.kind(), "{}", notification);
        }

        if let Some(buffer) = &self.buffer {
            match buffer.lock() {
                Ok(mut buffer) => buffer.push(notification.clone()),
                Err(_) => warn!("notification buffer poisoned; dropping {}", notification.kind()),
            }
        }
    }
}
